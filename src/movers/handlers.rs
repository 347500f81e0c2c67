// HTTP handlers for mover endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use crate::error::ApiError;
use crate::movers::models::{CreateMoverRequest, MessageResponse, MoverResponse, ReviewRequest};
use crate::AppState;

/// List all movers, best rated first
/// GET /movers
#[utoipa::path(
    get,
    path = "/movers",
    responses(
        (status = 200, description = "Movers ordered by rating, then id", body = Vec<MoverResponse>),
        (status = 404, description = "No movers stored", body = String, example = json!({"error_code": "EMPTY_COLLECTION", "message": "movers list is empty"}))
    ),
    tag = "movers"
)]
pub async fn list_movers(
    State(state): State<AppState>,
) -> Result<Json<Vec<MoverResponse>>, ApiError> {
    tracing::debug!("Fetching ranked movers");

    let movers = state.mover_service.list_ranked().await?;

    Ok(Json(movers.iter().map(MoverResponse::from).collect()))
}

/// Add a new mover
/// POST /movers
#[utoipa::path(
    post,
    path = "/movers",
    request_body = CreateMoverRequest,
    responses(
        (status = 201, description = "Mover created", body = MoverResponse),
        (status = 400, description = "Invalid JSON or rating out of range (strict mode)", body = String, example = json!({"error_code": "MALFORMED_INPUT", "message": "Invalid JSON"})),
        (status = 409, description = "Id, name or telephone number already in use", body = String, example = json!({"error_code": "CONFLICT", "message": "Mover already exists"}))
    ),
    tag = "movers"
)]
pub async fn create_mover(
    State(state): State<AppState>,
    payload: Result<Json<CreateMoverRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MoverResponse>), ApiError> {
    let Json(request) = payload?;
    tracing::debug!("Creating new mover: {}", request.name);

    let mover = state.mover_service.create(request).await?;

    Ok((StatusCode::CREATED, Json(MoverResponse::from(mover))))
}

/// Delete a mover by id
/// DELETE /movers/{id}
#[utoipa::path(
    delete,
    path = "/movers/{id}",
    params(
        ("id" = i64, Path, description = "Mover ID")
    ),
    responses(
        (status = 200, description = "Mover deleted", body = MessageResponse),
        (status = 400, description = "Id is not an integer", body = String, example = json!({"error_code": "MALFORMED_INPUT", "message": "Conversion error"})),
        (status = 404, description = "Mover not found", body = String, example = json!({"error_code": "NOT_FOUND", "message": "Mover with id 1 not found"}))
    ),
    tag = "movers"
)]
pub async fn delete_mover(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id?;
    tracing::debug!("Deleting mover with id: {}", id);

    state.mover_service.delete(id).await?;

    Ok(Json(MessageResponse::new("Mover deleted successfully")))
}

/// Submit a customer rating for a mover
/// POST /movers/{id}/review
///
/// Checks run in order: id format, mover existence, body, rating range.
#[utoipa::path(
    post,
    path = "/movers/{id}/review",
    params(
        ("id" = i64, Path, description = "Mover ID")
    ),
    request_body = ReviewRequest,
    responses(
        (status = 200, description = "Rating folded into the running average", body = MoverResponse),
        (status = 400, description = "Id is not an integer or body is not valid JSON", body = String, example = json!({"error_code": "MALFORMED_INPUT", "message": "Invalid JSON"})),
        (status = 404, description = "Mover not found", body = String, example = json!({"error_code": "NOT_FOUND", "message": "Mover with id 1 not found"})),
        (status = 417, description = "Rating outside 0..=5", body = String, example = json!({"error_code": "RATING_OUT_OF_RANGE", "message": "Provided rate should be in range between 0 and 5"}))
    ),
    tag = "movers"
)]
pub async fn review_mover(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ReviewRequest>, JsonRejection>,
) -> Result<Json<MoverResponse>, ApiError> {
    let Path(id) = id?;

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            // An unknown mover wins over a bad body
            state.mover_service.find(id).await?;
            return Err(rejection.into());
        }
    };
    tracing::debug!("Reviewing mover {} with rating {}", id, request.rating);

    let mover = state.mover_service.review(id, request.rating).await?;

    Ok(Json(MoverResponse::from(mover)))
}
