// Validation utilities module
// Shared rating rules for review-time and strict creation-time checks

use validator::ValidationError;

/// Lowest rating a mover can hold or receive
pub const MIN_RATING: f64 = 0.0;

/// Highest rating a mover can hold or receive
pub const MAX_RATING: f64 = 5.0;

/// Validates that rating is between 0.0 and 5.0 inclusive
///
/// NaN fails both comparisons and is rejected as well.
pub fn validate_rating_range(rating: f64) -> Result<(), ValidationError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(ValidationError::new("rating_out_of_range"))
    }
}
