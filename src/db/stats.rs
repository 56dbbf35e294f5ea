use std::collections::BTreeMap;

use sqlx::PgPool;

use crate::{
    error::Error,
    model::{BookmarkCount, ReadingStatus, Stats},
};

use super::error::DatabaseError;

pub const TOP_BOOKMARKED_LIMIT: i64 = 5;

#[derive(sqlx::FromRow)]
struct StatusCount {
    #[sqlx(try_from = "String")]
    status: ReadingStatus,
    count: i64,
}

/// System-wide figures for the admin dashboard.
///
/// The four aggregates are independent queries running on separate pool
/// connections, so they are not a single point-in-time snapshot.
#[tracing::instrument(name = "get stats", skip_all)]
pub async fn get_stats(pool: &PgPool) -> Result<Stats, Error> {
    let (users_total, manga_status_distribution, top_bookmarked_manga, total_reading_entries) =
        futures::try_join!(
            count_users(pool),
            status_distribution(pool),
            top_bookmarked_manga(pool, TOP_BOOKMARKED_LIMIT),
            count_reading_history(pool),
        )?;

    Ok(Stats {
        users_total,
        manga_status_distribution,
        top_bookmarked_manga,
        total_reading_entries,
    })
}

async fn count_users(pool: &PgPool) -> Result<i64, Error> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .map_err(DatabaseError::DatabaseError)?;

    Ok(count)
}

async fn status_distribution(pool: &PgPool) -> Result<BTreeMap<ReadingStatus, i64>, Error> {
    let rows = sqlx::query_as::<_, StatusCount>(
        r#"
        SELECT
            status, COUNT(*) AS count
        FROM
            manga_statuses
        GROUP BY status
    "#,
    )
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::DatabaseError)?;

    Ok(rows.into_iter().map(|row| (row.status, row.count)).collect())
}

async fn top_bookmarked_manga(pool: &PgPool, limit: i64) -> Result<Vec<BookmarkCount>, Error> {
    let rows = sqlx::query_as::<_, BookmarkCount>(
        r#"
        SELECT
            manga_id, COUNT(*) AS count
        FROM
            bookmarks
        GROUP BY manga_id
        ORDER BY count DESC, manga_id ASC
        LIMIT $1
    "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
    .map_err(DatabaseError::DatabaseError)?;

    Ok(rows)
}

async fn count_reading_history(pool: &PgPool) -> Result<i64, Error> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reading_history")
        .fetch_one(pool)
        .await
        .map_err(DatabaseError::DatabaseError)?;

    Ok(count)
}
