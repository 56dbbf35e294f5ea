use std::sync::Arc;

use axum::{Extension, body::Body, extract::Request, middleware::Next, response::Response};

use crate::{auth::error::AuthError, error::Error, model::User};

/// Must be layered inside `jwt_auth_middleware`, which provides the user.
#[tracing::instrument(name = "[MIDDLEWARE] admin", skip_all)]
pub async fn admin_middleware(
    Extension(user): Extension<Arc<User>>,
    req: Request,
    next: Next,
) -> Result<Response<Body>, Error> {
    if !user.role.is_admin() {
        tracing::warn!(user_id = user.id, "Non-admin user rejected");
        return Err(Error::Auth(AuthError::Forbidden));
    }

    Ok(next.run(req).await)
}
