use sqlx::PgPool;

use crate::{error::Error, model::Bookmark};

use super::error::{DatabaseError, is_unique_violation};

const DUPLICATE_BOOKMARK: &str = "Bookmark already exists";

#[tracing::instrument(name = "get user bookmarks", skip_all, fields(user_id = user_id))]
pub async fn get_user_bookmarks(pool: &PgPool, user_id: i64) -> Result<Vec<Bookmark>, Error> {
    let bookmarks = sqlx::query_as::<_, Bookmark>(
        r#"
        SELECT
            id, manga_id, created_at
        FROM
            bookmarks
        WHERE
            user_id = $1
        ORDER BY id
    "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::DatabaseError)?;

    Ok(bookmarks)
}

/// Bookmarks are never upserted: a second bookmark for the same manga is a conflict.
#[tracing::instrument(name = "create user bookmark", skip_all, fields(user_id = user_id, manga_id = %manga_id))]
pub async fn create_user_bookmark(
    pool: &PgPool,
    user_id: i64,
    manga_id: &str,
) -> Result<Bookmark, Error> {
    let exists = sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM bookmarks WHERE user_id = $1 AND manga_id = $2
        )
    "#,
    )
    .bind(user_id)
    .bind(manga_id)
    .fetch_one(pool)
    .await
    .map_err(DatabaseError::DatabaseError)?;

    if exists {
        return Err(Error::Conflict(DUPLICATE_BOOKMARK.to_string()));
    }

    sqlx::query_as::<_, Bookmark>(
        r#"
        INSERT INTO bookmarks
            (user_id, manga_id)
        VALUES
            ($1, $2)
        RETURNING
            id, manga_id, created_at;
    "#,
    )
    .bind(user_id)
    .bind(manga_id)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            Error::Conflict(DUPLICATE_BOOKMARK.to_string())
        } else {
            Error::Database(DatabaseError::DatabaseError(e))
        }
    })
}

#[tracing::instrument(name = "delete user bookmark", skip_all, fields(user_id = user_id, manga_id = %manga_id))]
pub async fn delete_user_bookmark(
    pool: &PgPool,
    user_id: i64,
    manga_id: &str,
) -> Result<u64, Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM bookmarks
        WHERE
            user_id = $1 AND manga_id = $2;
    "#,
    )
    .bind(user_id)
    .bind(manga_id)
    .execute(pool)
    .await
    .map_err(DatabaseError::DatabaseError)?;

    Ok(result.rows_affected())
}
