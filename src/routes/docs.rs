use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::dto::profile_dto::{ProfileListResponse, ProfileResponse, UserSummary, VideoDemoResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::profiles::list_profiles,
        crate::routes::profiles::get_profile,
        crate::routes::profiles::top_freelancers,
        crate::routes::profiles::newcomer_freelancers,
        crate::routes::profiles::featured_freelancers,
        crate::routes::demos::list_demos,
        crate::routes::demos::get_demo,
    ),
    components(schemas(ProfileResponse, ProfileListResponse, UserSummary, VideoDemoResponse)),
    tags((name = "profiles", description = "Freelancer profiles and discovery lists"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
