use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::MatchedPath,
    http::{HeaderName, Request, header},
    middleware,
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    controllers,
    middlewares::{admin_middleware, jwt_auth_middleware},
    state::AppState,
};

const REQUEST_ID_HEADER: &str = "x-request-id";

pub fn init_router(app_state: AppState) -> Router {
    let state = Arc::new(app_state);

    let app = Router::new().route("/health", get(controllers::health::index));

    let auth_route = Router::new()
        .route("/me", get(controllers::me::index))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_middleware,
        ))
        .route("/register", post(controllers::auth::register))
        .route("/login", post(controllers::auth::login));

    let user_route = Router::new()
        .route(
            "/bookmarks",
            get(controllers::user::bookmarks::index).post(controllers::user::bookmarks::store),
        )
        .route(
            "/bookmarks/{manga_id}",
            delete(controllers::user::bookmarks::destroy),
        )
        .route(
            "/history",
            get(controllers::user::history::index).post(controllers::user::history::store),
        )
        .route(
            "/ratings",
            get(controllers::user::ratings::index).post(controllers::user::ratings::store),
        )
        .route(
            "/status",
            get(controllers::user::status::index).post(controllers::user::status::store),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_middleware,
        ));

    // Layers run outside-in: the jwt middleware resolves the user before the role check.
    let admin_route = Router::new()
        .route("/stats", get(controllers::admin::stats))
        .layer(middleware::from_fn(admin_middleware))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            jwt_auth_middleware,
        ));

    let x_request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);
    let request_id_middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(
            x_request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|val| val.to_str().ok())
                    .unwrap_or_default();
                let user_agent = request
                    .headers()
                    .get(header::USER_AGENT)
                    .and_then(|val| val.to_str().ok())
                    .unwrap_or_default();

                let matched_path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str);

                tracing::info_span!(
                    "http_request",
                    request_id,
                    method = ?request.method(),
                    uri = ?request.uri(),
                    path = matched_path,
                    version = ?request.version(),
                    user_agent,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::new(x_request_id_header));

    app.nest("/auth", auth_route)
        .nest("/user", user_route)
        .nest("/admin", admin_route)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(request_id_middleware)
        .with_state(state)
}
