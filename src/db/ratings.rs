use sqlx::PgPool;

use crate::{error::Error, model::Rating};

use super::error::DatabaseError;

#[tracing::instrument(name = "get user ratings", skip_all, fields(user_id = user_id))]
pub async fn get_user_ratings(pool: &PgPool, user_id: i64) -> Result<Vec<Rating>, Error> {
    let ratings = sqlx::query_as::<_, Rating>(
        r#"
        SELECT
            id, manga_id, score, created_at
        FROM
            ratings
        WHERE
            user_id = $1
        ORDER BY id
    "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::DatabaseError)?;

    Ok(ratings)
}

/// Score is stored as given; `created_at` keeps the time of the first rating.
#[tracing::instrument(name = "upsert user rating", skip_all, fields(user_id = user_id, manga_id = %manga_id, score = score))]
pub async fn upsert_user_rating(
    pool: &PgPool,
    user_id: i64,
    manga_id: &str,
    score: i32,
) -> Result<Rating, Error> {
    let rating = sqlx::query_as::<_, Rating>(
        r#"
        INSERT INTO ratings
            (user_id, manga_id, score)
        VALUES
            ($1, $2, $3)
        ON CONFLICT (user_id, manga_id)
        DO UPDATE SET
            score = EXCLUDED.score
        RETURNING
            id, manga_id, score, created_at;
    "#,
    )
    .bind(user_id)
    .bind(manga_id)
    .bind(score)
    .fetch_one(pool)
    .await
    .map_err(DatabaseError::DatabaseError)?;

    Ok(rating)
}
