use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

use crate::{
    auth::{error::AuthError, validate_token},
    db::user::get_user_by_id_optional,
    error::Error,
    state::SharedAppState,
};

/// Extracts the token of an `Authorization: Bearer <token>` header.
/// The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let auth_header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    let mut parts = auth_header.split_whitespace();
    let (scheme, token) = (parts.next()?, parts.next()?);

    if !scheme.eq_ignore_ascii_case("bearer") || parts.next().is_some() {
        return None;
    }

    Some(token)
}

/// Resolves the bearer token into a `User` and exposes it to handlers as
/// `Extension<Arc<User>>`.
#[tracing::instrument(name = "[MIDDLEWARE] jwt auth", skip_all, fields(user_id))]
pub async fn jwt_auth_middleware(
    State(app_state): State<SharedAppState>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, Error> {
    let token = bearer_token(req.headers()).ok_or(Error::Auth(AuthError::Unauthenticated))?;

    let user_id = validate_token(token, &app_state.config.jwt)
        .ok_or(Error::Auth(AuthError::Unauthenticated))?;
    tracing::Span::current().record("user_id", user_id);

    let user = get_user_by_id_optional(&app_state.pool, user_id)
        .await?
        .ok_or(Error::Auth(AuthError::UserNotFound))?;

    req.extensions_mut().insert(Arc::new(user));

    Ok(next.run(req).await)
}
