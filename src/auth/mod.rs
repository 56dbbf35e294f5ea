pub mod error;
pub mod jwt;
pub mod password;

pub use jwt::{encode_jwt, validate_token};
pub use password::{compute_password_hash, verify_password_hash};
