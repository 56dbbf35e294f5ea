use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    db::bookmarks::{create_user_bookmark, delete_user_bookmark, get_user_bookmarks},
    error::Error,
    model::{Bookmark, User},
    state::SharedAppState,
};

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct BookmarkRequest {
    #[validate(length(min = 1, max = 36))]
    pub manga_id: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

#[tracing::instrument(name = "[GET] user/bookmarks", skip_all)]
pub async fn index(
    Extension(user): Extension<Arc<User>>,
    State(app_state): State<SharedAppState>,
) -> Result<Json<Vec<Bookmark>>, Error> {
    let result = get_user_bookmarks(&app_state.pool, user.id).await?;

    Ok(Json(result))
}

#[tracing::instrument(name = "[POST] user/bookmarks", skip_all)]
pub async fn store(
    Extension(user): Extension<Arc<User>>,
    State(app_state): State<SharedAppState>,
    Json(request): Json<BookmarkRequest>,
) -> Result<Json<Bookmark>, Error> {
    request.validate().map_err(Error::Validation)?;

    let result = create_user_bookmark(&app_state.pool, user.id, &request.manga_id).await?;

    Ok(Json(result))
}

#[tracing::instrument(name = "[DELETE] user/bookmarks/{manga_id}", skip_all, fields(manga_id))]
pub async fn destroy(
    Extension(user): Extension<Arc<User>>,
    State(app_state): State<SharedAppState>,
    Path(manga_id): Path<String>,
) -> Result<Json<MessageResponse>, Error> {
    tracing::Span::current().record("manga_id", manga_id.as_str());

    let removed = delete_user_bookmark(&app_state.pool, user.id, &manga_id).await?;
    tracing::debug!(removed, "Bookmark delete finished");

    Ok(Json(MessageResponse {
        message: "Bookmark removed".to_string(),
    }))
}
