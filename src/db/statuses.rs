use sqlx::PgPool;

use crate::{
    error::Error,
    model::{MangaStatus, ReadingStatus},
};

use super::error::DatabaseError;

#[tracing::instrument(name = "get user statuses", skip_all, fields(user_id = user_id))]
pub async fn get_user_statuses(pool: &PgPool, user_id: i64) -> Result<Vec<MangaStatus>, Error> {
    let statuses = sqlx::query_as::<_, MangaStatus>(
        r#"
        SELECT
            id, manga_id, status, updated_at
        FROM
            manga_statuses
        WHERE
            user_id = $1
        ORDER BY id
    "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::DatabaseError)?;

    Ok(statuses)
}

#[tracing::instrument(name = "upsert user status", skip_all, fields(user_id = user_id, manga_id = %manga_id, status = %status))]
pub async fn upsert_user_status(
    pool: &PgPool,
    user_id: i64,
    manga_id: &str,
    status: ReadingStatus,
) -> Result<MangaStatus, Error> {
    let manga_status = sqlx::query_as::<_, MangaStatus>(
        r#"
        INSERT INTO manga_statuses
            (user_id, manga_id, status)
        VALUES
            ($1, $2, $3)
        ON CONFLICT (user_id, manga_id)
        DO UPDATE SET
            status = EXCLUDED.status,
            updated_at = now()
        RETURNING
            id, manga_id, status, updated_at;
    "#,
    )
    .bind(user_id)
    .bind(manga_id)
    .bind(status.as_str())
    .fetch_one(pool)
    .await
    .map_err(DatabaseError::DatabaseError)?;

    Ok(manga_status)
}
