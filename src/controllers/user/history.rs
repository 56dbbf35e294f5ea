use std::sync::Arc;

use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    db::history::{get_user_history, upsert_user_history},
    error::Error,
    model::{ReadingHistory, User},
    state::SharedAppState,
};

#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct HistoryRequest {
    #[validate(length(min = 1, max = 36))]
    pub manga_id: String,
    #[validate(length(min = 1, max = 36))]
    pub chapter_id: String,
    pub page: i32,
}

#[tracing::instrument(name = "[GET] user/history", skip_all)]
pub async fn index(
    Extension(user): Extension<Arc<User>>,
    State(app_state): State<SharedAppState>,
) -> Result<Json<Vec<ReadingHistory>>, Error> {
    let result = get_user_history(&app_state.pool, user.id).await?;

    Ok(Json(result))
}

#[tracing::instrument(name = "[POST] user/history", skip_all)]
pub async fn store(
    Extension(user): Extension<Arc<User>>,
    State(app_state): State<SharedAppState>,
    Json(request): Json<HistoryRequest>,
) -> Result<Json<ReadingHistory>, Error> {
    request.validate().map_err(Error::Validation)?;

    let result = upsert_user_history(
        &app_state.pool,
        user.id,
        &request.manga_id,
        &request.chapter_id,
        request.page,
    )
    .await?;

    Ok(Json(result))
}
