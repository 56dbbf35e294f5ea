use anyhow::Context;
use secrecy::SecretString;
use sqlx::PgPool;

use crate::{
    auth::compute_password_hash,
    error::Error,
    model::{Role, User, UserCredential},
    telemetry::spawn_blocking_with_tracing,
};

use super::error::{DatabaseError, is_unique_violation};

#[tracing::instrument(name = "check user exists", skip_all, fields(username = %username, email = %email))]
pub async fn user_exists(pool: &PgPool, username: &str, email: &str) -> Result<bool, Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM users WHERE email = $1 OR username = $2
        )
    "#,
    )
    .bind(email)
    .bind(username)
    .fetch_one(pool)
    .await
    .map_err(|e| Error::Database(DatabaseError::DatabaseError(e)))
}

#[tracing::instrument(name = "create user", skip_all, fields(username = %username, email = %email))]
pub async fn create_user(
    pool: &PgPool,
    username: String,
    email: String,
    password: SecretString,
) -> Result<User, Error> {
    let password_hashed = spawn_blocking_with_tracing(move || compute_password_hash(password))
        .await
        .context("compute password hash")
        .map_err(Error::Other)??;

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users
            (username, email, password_hash)
        VALUES
            ($1, $2, $3)
        RETURNING
            id, username, email, role, created_at;
    "#,
    )
    .bind(username)
    .bind(email)
    .bind(password_hashed)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            Error::Conflict("User already exists".to_string())
        } else {
            Error::Database(DatabaseError::DatabaseError(e))
        }
    })
}

#[tracing::instrument(name = "get user credential by email", skip_all, fields(email = %email))]
pub async fn get_user_credential_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<UserCredential>, Error> {
    sqlx::query_as::<_, UserCredential>(
        r#"
        SELECT
            id, username, email, role, created_at, password_hash
        FROM
            users
        WHERE
            email = $1;
    "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
    .map_err(|e| Error::Database(DatabaseError::DatabaseError(e)))
}

#[tracing::instrument(name = "get user by id", skip_all, fields(user_id = user_id))]
pub async fn get_user_by_id_optional(pool: &PgPool, user_id: i64) -> Result<Option<User>, Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT
            id, username, email, role, created_at
        FROM
            users
        WHERE
            id = $1;
    "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .map_err(|e| Error::Database(DatabaseError::DatabaseError(e)))
}

#[tracing::instrument(name = "update user role", skip_all, fields(user_id = user_id, role = role.as_str()))]
pub async fn update_user_role(pool: &PgPool, user_id: i64, role: Role) -> Result<(), Error> {
    sqlx::query(
        r#"
        UPDATE users
        SET
            role = $1
        WHERE
            id = $2;
    "#,
    )
    .bind(role.as_str())
    .bind(user_id)
    .execute(pool)
    .await
    .map_err(DatabaseError::DatabaseError)?;

    Ok(())
}

/// Removes the user; bookmarks, history, ratings and statuses go with it.
#[tracing::instrument(name = "delete user", skip_all, fields(user_id = user_id))]
pub async fn delete_user(pool: &PgPool, user_id: i64) -> Result<u64, Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1;")
        .bind(user_id)
        .execute(pool)
        .await
        .map_err(DatabaseError::DatabaseError)?;

    Ok(result.rows_affected())
}
