use axum::{
    Router,
    extract::{Request, State},
    http::{HeaderName, HeaderValue, Method, StatusCode, header},
    middleware::{Next, from_fn_with_state},
    response::Response,
    routing::post,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::CorsSettings;
use crate::handlers::send_handler;
use crate::state::AppState;

pub fn build_router(state: Arc<AppState>, cors: &CorsSettings) -> Router {
    let allowed_origins = Arc::new(cors.allowed_origins.clone());

    Router::new()
        .route("/send", post(send_handler))
        .layer(cors_layer(cors))
        .layer(from_fn_with_state(allowed_origins, cors_guard))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

fn cors_layer(cors: &CorsSettings) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(cors.allowed_origins.clone()))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(cors.max_age)
}

// CorsLayer only withholds allow-origin from unknown origins and still sends
// allow-credentials, allow-methods and max-age; those are dropped here. It also
// answers every OPTIONS with an empty 200, the browser client expects 204.
async fn cors_guard(
    State(allowed_origins): State<Arc<Vec<HeaderValue>>>,
    request: Request,
    next: Next,
) -> Response {
    let is_options = request.method() == Method::OPTIONS;
    let origin_allowed = request
        .headers()
        .get(header::ORIGIN)
        .is_some_and(|origin| allowed_origins.contains(origin));

    let mut response = next.run(request).await;

    if !origin_allowed {
        let cors_headers: Vec<HeaderName> = response
            .headers()
            .keys()
            .filter(|name| name.as_str().starts_with("access-control-"))
            .cloned()
            .collect();
        for name in cors_headers {
            response.headers_mut().remove(name);
        }
    }

    if is_options && response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }
    response
}
