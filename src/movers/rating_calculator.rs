use crate::movers::{Mover, MoverError};
use crate::validation::validate_rating_range;

/// Calculator for running-average mover ratings
///
/// No review history is kept. `jobs_done` is used as the sample count, so every
/// past job counts as one sample of the current average.
pub struct RatingCalculator;

impl RatingCalculator {
    /// Weighted running mean after one more rating
    ///
    /// Operation order is fixed: `(rating * jobs + new) / (jobs + 1)`.
    pub fn running_average(rating: f64, jobs_done: u64, new_rating: f64) -> f64 {
        let jobs = jobs_done as f64;
        (rating * jobs + new_rating) / (jobs + 1.0)
    }

    /// Fold one review into `mover` in place
    ///
    /// Out-of-range ratings and a saturated job counter are rejected and leave
    /// `mover` untouched.
    pub fn apply_review(mover: &mut Mover, new_rating: f64) -> Result<&Mover, MoverError> {
        validate_rating_range(new_rating).map_err(|_| MoverError::RatingOutOfRange(new_rating))?;

        let jobs_done = mover
            .jobs_done
            .checked_add(1)
            .ok_or(MoverError::JobCounterExhausted(mover.id))?;
        let updated = Self::running_average(mover.rating, mover.jobs_done, new_rating);
        mover.jobs_done = jobs_done;
        mover.rating = updated;

        Ok(&*mover)
    }

    /// Round to one decimal place for responses only
    pub fn round_for_display(rating: f64) -> f64 {
        (rating * 10.0).round() / 10.0
    }
}
