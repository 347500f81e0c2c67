/// Error types for mover operations
///
/// The core only signals what went wrong; `crate::error::ApiError` decides
/// the status code and response body.
#[derive(Debug, thiserror::Error)]
pub enum MoverError {
    #[error("Mover with id {0} not found")]
    NotFound(i64),

    #[error("Mover already exists")]
    AlreadyExists { id: i64, name: String },

    #[error("Tel. number is occupied")]
    TelephoneNumberOccupied(String),

    #[error("Provided rate should be in range between 0 and 5")]
    RatingOutOfRange(f64),

    #[error("Mover {0} cannot record any more jobs")]
    JobCounterExhausted(i64),

    #[error("movers list is empty")]
    EmptyCollection,

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}
