pub mod bookmarks;
pub mod error;
pub mod history;
pub mod ratings;
pub mod stats;
pub mod statuses;
pub mod user;
