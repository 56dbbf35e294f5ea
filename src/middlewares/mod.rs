mod admin;
mod jwt_auth;

pub use admin::admin_middleware;
pub use jwt_auth::{bearer_token, jwt_auth_middleware};
