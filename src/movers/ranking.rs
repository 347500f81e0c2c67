use std::cmp::Ordering;

use crate::movers::Mover;

/// Display order for movers: highest rating first, lower id first on ties
///
/// Ratings compare by IEEE equality, so `0.0` and `-0.0` tie.
pub fn compare(a: &Mover, b: &Mover) -> Ordering {
    b.rating
        .partial_cmp(&a.rating)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.id.cmp(&b.id))
}

/// Sort a copy of `movers` for display, leaving the input untouched
pub fn rank(movers: &[Mover]) -> Vec<Mover> {
    let mut ranked = movers.to_vec();
    ranked.sort_by(compare);
    ranked
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn movers_strategy() -> impl Strategy<Value = Vec<Mover>> {
        prop::collection::vec((0i64..50, 0u8..=50), 0..40).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(id, tenths)| Mover {
                    id,
                    name: format!("Mover {}", id),
                    rating: f64::from(tenths) / 10.0,
                    telephone_number: format!("+1{}", id),
                    jobs_done: 0,
                })
                .collect()
        })
    }

    proptest! {
        /// Ranking an already ranked snapshot changes nothing
        #[test]
        fn prop_rank_is_idempotent(movers in movers_strategy()) {
            let once = rank(&movers);
            let twice = rank(&once);
            prop_assert_eq!(once, twice);
        }

        /// Every adjacent pair respects rating desc, id asc
        #[test]
        fn prop_rank_orders_pairs(movers in movers_strategy()) {
            let ranked = rank(&movers);
            for pair in ranked.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                prop_assert!(a.rating >= b.rating);
                if a.rating == b.rating {
                    prop_assert!(a.id <= b.id);
                }
            }
        }

        /// Ranking is a permutation of its input
        #[test]
        fn prop_rank_keeps_every_mover(movers in movers_strategy()) {
            let ranked = rank(&movers);
            prop_assert_eq!(ranked.len(), movers.len());
            for mover in &movers {
                prop_assert!(ranked.contains(mover));
            }
        }
    }
}
