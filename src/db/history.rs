use sqlx::PgPool;

use crate::{error::Error, model::ReadingHistory};

use super::error::DatabaseError;

#[tracing::instrument(name = "get user history", skip_all, fields(user_id = user_id))]
pub async fn get_user_history(pool: &PgPool, user_id: i64) -> Result<Vec<ReadingHistory>, Error> {
    let history = sqlx::query_as::<_, ReadingHistory>(
        r#"
        SELECT
            id, manga_id, chapter_id, page, updated_at
        FROM
            reading_history
        WHERE
            user_id = $1
        ORDER BY updated_at DESC
    "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::DatabaseError)?;

    Ok(history)
}

#[tracing::instrument(name = "upsert user history", skip_all, fields(user_id = user_id, manga_id = %manga_id))]
pub async fn upsert_user_history(
    pool: &PgPool,
    user_id: i64,
    manga_id: &str,
    chapter_id: &str,
    page: i32,
) -> Result<ReadingHistory, Error> {
    let history = sqlx::query_as::<_, ReadingHistory>(
        r#"
        INSERT INTO reading_history
            (user_id, manga_id, chapter_id, page)
        VALUES
            ($1, $2, $3, $4)
        ON CONFLICT (user_id, manga_id)
        DO UPDATE SET
            chapter_id = EXCLUDED.chapter_id,
            page = EXCLUDED.page,
            updated_at = now()
        RETURNING
            id, manga_id, chapter_id, page, updated_at;
    "#,
    )
    .bind(user_id)
    .bind(manga_id)
    .bind(chapter_id)
    .bind(page)
    .fetch_one(pool)
    .await
    .map_err(DatabaseError::DatabaseError)?;

    Ok(history)
}
