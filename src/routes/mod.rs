pub mod demos;
pub mod docs;
pub mod health;
pub mod profiles;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::{cors::public_read_cors, rate_limit};
use crate::AppState;

/// Builds the full HTTP surface. `/health` is exempt from rate limiting.
pub fn router(state: AppState, public_rps: u32) -> Router {
    // Static segments are matched before `:id`, so the discovery lists and
    // `demos/` never fall through to the profile detail route.
    let profiles_api = Router::new()
        .route("/profiles/", get(profiles::list_profiles))
        .route("/profiles/top-freelancers/", get(profiles::top_freelancers))
        .route("/profiles/newcomers/", get(profiles::newcomer_freelancers))
        .route("/profiles/featured/", get(profiles::featured_freelancers))
        .route("/profiles/demos/", get(demos::list_demos))
        .route("/profiles/demos/:id/", get(demos::get_demo))
        .route("/profiles/:id/", get(profiles::get_profile))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::RateLimiter::new(public_rps),
            rate_limit::rps_middleware,
        ));

    Router::new()
        .route("/health", get(health::health))
        .merge(profiles_api)
        .with_state(state)
        .layer(public_read_cors())
        .layer(TraceLayer::new_for_http())
}
