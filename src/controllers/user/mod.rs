pub mod bookmarks;
pub mod history;
pub mod ratings;
pub mod status;
