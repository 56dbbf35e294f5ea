use axum::{Json, extract::State};

use crate::{db::stats::get_stats, error::Error, model::Stats, state::SharedAppState};

#[tracing::instrument(name = "[GET] admin/stats", skip_all)]
pub async fn stats(State(app_state): State<SharedAppState>) -> Result<Json<Stats>, Error> {
    let result = get_stats(&app_state.pool).await?;

    Ok(Json(result))
}
