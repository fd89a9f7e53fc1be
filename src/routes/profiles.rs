use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::profile_dto::{ProfileListQuery, ProfileListResponse, ProfileResponse},
    error::Result,
    ranking::Leaderboard,
    utils::{time, validation::validate},
    AppState,
};

#[utoipa::path(
    get,
    path = "/profiles/",
    params(ProfileListQuery),
    responses(
        (status = 200, description = "Paginated profiles", body = ProfileListResponse),
        (status = 400, description = "Invalid paging parameters")
    )
)]
#[axum::debug_handler]
pub async fn list_profiles(
    State(state): State<AppState>,
    Query(query): Query<ProfileListQuery>,
) -> Result<impl IntoResponse> {
    validate(&query)?;
    let page = state.profile_service.list(&query).await?;
    Ok(Json(ProfileListResponse::from(page)))
}

#[utoipa::path(
    get,
    path = "/profiles/{id}/",
    params(
        ("id" = i64, Path, description = "Profile ID")
    ),
    responses(
        (status = 200, description = "Profile found", body = ProfileResponse),
        (status = 404, description = "Profile not found")
    )
)]
#[axum::debug_handler]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let profile = state.profile_service.get(id).await?;
    Ok(Json(ProfileResponse::from(profile)))
}

async fn ranked_profiles(state: &AppState, board: Leaderboard) -> Result<Vec<ProfileResponse>> {
    let ranked = state.ranking_service.leaderboard(board, time::now()).await?;
    Ok(ranked.into_iter().map(ProfileResponse::from).collect())
}

#[utoipa::path(
    get,
    path = "/profiles/top-freelancers/",
    responses(
        (status = 200, description = "Up to 10 top-rated freelancers, best first", body = [ProfileResponse])
    )
)]
#[axum::debug_handler]
pub async fn top_freelancers(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(ranked_profiles(&state, Leaderboard::TopRated).await?))
}

#[utoipa::path(
    get,
    path = "/profiles/newcomers/",
    responses(
        (status = 200, description = "Up to 10 promising freelancers who joined in the last 90 days", body = [ProfileResponse])
    )
)]
#[axum::debug_handler]
pub async fn newcomer_freelancers(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(ranked_profiles(&state, Leaderboard::Newcomers).await?))
}

#[utoipa::path(
    get,
    path = "/profiles/featured/",
    responses(
        (status = 200, description = "Up to 6 featured freelancers", body = [ProfileResponse])
    )
)]
#[axum::debug_handler]
pub async fn featured_freelancers(State(state): State<AppState>) -> Result<impl IntoResponse> {
    Ok(Json(ranked_profiles(&state, Leaderboard::Featured).await?))
}
