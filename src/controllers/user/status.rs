use std::sync::Arc;

use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    db::statuses::{get_user_statuses, upsert_user_status},
    error::Error,
    model::{MangaStatus, ReadingStatus, User},
    state::SharedAppState,
};

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct StatusRequest {
    #[validate(length(min = 1, max = 36))]
    pub manga_id: String,
    pub status: ReadingStatus,
}

#[tracing::instrument(name = "[GET] user/status", skip_all)]
pub async fn index(
    Extension(user): Extension<Arc<User>>,
    State(app_state): State<SharedAppState>,
) -> Result<Json<Vec<MangaStatus>>, Error> {
    let result = get_user_statuses(&app_state.pool, user.id).await?;

    Ok(Json(result))
}

#[tracing::instrument(name = "[POST] user/status", skip_all)]
pub async fn store(
    Extension(user): Extension<Arc<User>>,
    State(app_state): State<SharedAppState>,
    Json(request): Json<StatusRequest>,
) -> Result<Json<MangaStatus>, Error> {
    request.validate().map_err(Error::Validation)?;

    let result =
        upsert_user_status(&app_state.pool, user.id, &request.manga_id, request.status).await?;

    Ok(Json(result))
}
