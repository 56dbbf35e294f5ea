use std::sync::Arc;

use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    db::ratings::{get_user_ratings, upsert_user_rating},
    error::Error,
    model::{Rating, User},
    state::SharedAppState,
};

/// `score` is nominally 1-10 but is stored as given.
#[derive(Deserialize, Serialize, Debug, Validate)]
pub struct RatingRequest {
    #[validate(length(min = 1, max = 36))]
    pub manga_id: String,
    pub score: i32,
}

#[tracing::instrument(name = "[GET] user/ratings", skip_all)]
pub async fn index(
    Extension(user): Extension<Arc<User>>,
    State(app_state): State<SharedAppState>,
) -> Result<Json<Vec<Rating>>, Error> {
    let result = get_user_ratings(&app_state.pool, user.id).await?;

    Ok(Json(result))
}

#[tracing::instrument(name = "[POST] user/ratings", skip_all)]
pub async fn store(
    Extension(user): Extension<Arc<User>>,
    State(app_state): State<SharedAppState>,
    Json(request): Json<RatingRequest>,
) -> Result<Json<Rating>, Error> {
    request.validate().map_err(Error::Validation)?;

    let result =
        upsert_user_rating(&app_state.pool, user.id, &request.manga_id, request.score).await?;

    Ok(Json(result))
}
