use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::movers::RatingCalculator;

/// Domain model representing a moving company held by the store
///
/// `rating` keeps full precision. It is never serialized directly; responses go
/// through [`MoverResponse`], which rounds for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Mover {
    pub id: i64,
    pub name: String,
    pub rating: f64,
    pub telephone_number: String,
    pub jobs_done: u64,
}

/// Request DTO for POST /movers
///
/// The caller supplies the full record, including the id.
/// The range rule is only checked when creation runs in strict mode.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMoverRequest {
    #[schema(example = 16)]
    pub id: i64,
    #[schema(example = "Harbor Movers")]
    pub name: String,
    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0.0 and 5.0"))]
    #[schema(example = 4.5, minimum = 0.0, maximum = 5.0)]
    pub rating: f64,
    #[schema(example = "+15615550000")]
    pub telephone_number: String,
    #[schema(example = 120)]
    pub jobs_done: u64,
}

impl From<CreateMoverRequest> for Mover {
    fn from(request: CreateMoverRequest) -> Self {
        Self {
            id: request.id,
            name: request.name,
            rating: request.rating,
            telephone_number: request.telephone_number,
            jobs_done: request.jobs_done,
        }
    }
}

/// Request DTO for POST /movers/{id}/review
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ReviewRequest {
    #[schema(example = 5.0, minimum = 0.0, maximum = 5.0)]
    pub rating: f64,
}

/// Response DTO for API responses, rating rounded to one decimal place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MoverResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "San Francisco MOV")]
    pub name: String,
    #[schema(example = 4.6)]
    pub rating: f64,
    #[schema(example = "+15615557689")]
    pub telephone_number: String,
    #[schema(example = 3780)]
    pub jobs_done: u64,
}

impl From<&Mover> for MoverResponse {
    fn from(mover: &Mover) -> Self {
        Self {
            id: mover.id,
            name: mover.name.clone(),
            rating: RatingCalculator::round_for_display(mover.rating),
            telephone_number: mover.telephone_number.clone(),
            jobs_done: mover.jobs_done,
        }
    }
}

impl From<Mover> for MoverResponse {
    fn from(mover: Mover) -> Self {
        Self::from(&mover)
    }
}

/// Confirmation body returned by DELETE /movers/{id}
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Mover deleted successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
