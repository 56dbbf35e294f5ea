use std::{sync::Arc, time::Duration};

use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
}

pub type SharedAppState = Arc<AppState>;

impl AppState {
    /// Builds the state around a lazily connected pool; no connection is
    /// opened until the first query unless migrations are enabled.
    pub async fn init(config: Config) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .min_connections(5)
            .max_connections(30)
            .acquire_timeout(Duration::from_secs(5))
            .connect_lazy_with(config.database.with_db());

        if config.application.run_migration {
            tracing::warn!(
                database = %config.database.database_name,
                "Running database migrations..."
            );
            sqlx::migrate!("./migrations").run(&pool).await?;
        }

        Ok(AppState { pool, config })
    }
}
