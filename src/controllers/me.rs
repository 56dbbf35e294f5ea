use std::sync::Arc;

use axum::{Extension, Json};

use crate::{
    error::Error,
    model::{User, UserResponse},
};

#[tracing::instrument(name = "[GET] auth/me", skip_all)]
pub async fn index(Extension(user): Extension<Arc<User>>) -> Result<Json<UserResponse>, Error> {
    Ok(Json(UserResponse::from(user.as_ref())))
}
