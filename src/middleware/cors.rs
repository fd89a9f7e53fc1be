use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Discovery endpoints are public and read-only.
pub fn public_read_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any)
}
