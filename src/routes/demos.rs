use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::profile_dto::{DemoListQuery, VideoDemoResponse},
    error::Result,
    utils::validation::validate,
    AppState,
};

#[utoipa::path(
    get,
    path = "/profiles/demos/",
    params(DemoListQuery),
    responses(
        (status = 200, description = "Public portfolio demos, newest first", body = [VideoDemoResponse]),
        (status = 400, description = "Invalid limit")
    )
)]
#[axum::debug_handler]
pub async fn list_demos(
    State(state): State<AppState>,
    Query(query): Query<DemoListQuery>,
) -> Result<impl IntoResponse> {
    validate(&query)?;
    let demos = state.profile_service.list_public_demos(&query).await?;
    let items: Vec<VideoDemoResponse> = demos.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/profiles/demos/{id}/",
    params(
        ("id" = i64, Path, description = "Demo ID")
    ),
    responses(
        (status = 200, description = "Demo found", body = VideoDemoResponse),
        (status = 404, description = "Demo not found or not public")
    )
)]
#[axum::debug_handler]
pub async fn get_demo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let demo = state.profile_service.get_public_demo(id).await?;
    Ok(Json(VideoDemoResponse::from(demo)))
}
