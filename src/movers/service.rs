use std::sync::Arc;

use tokio::sync::RwLock;
use validator::Validate;

use crate::config::CreationPolicy;
use crate::movers::{
    ranking, CreateMoverRequest, Mover, MoverError, MoverStore, RatingCalculator,
};

/// Service layer for mover business logic
///
/// Owns the shared store. Every mutation holds the write lock from the first
/// check to the last write, so concurrent reviews cannot lose updates.
#[derive(Clone)]
pub struct MoverService {
    store: Arc<RwLock<MoverStore>>,
    creation_policy: CreationPolicy,
}

impl MoverService {
    /// Create a new MoverService around `store`
    pub fn new(store: MoverStore, creation_policy: CreationPolicy) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            creation_policy,
        }
    }

    /// All movers in display order
    ///
    /// An empty store is reported as `EmptyCollection` rather than an empty list.
    pub async fn list_ranked(&self) -> Result<Vec<Mover>, MoverError> {
        let store = self.store.read().await;
        if store.is_empty() {
            return Err(MoverError::EmptyCollection);
        }

        let ranked = ranking::rank(store.all());
        tracing::debug!("Ranked {} movers", ranked.len());
        Ok(ranked)
    }

    /// Snapshot of a single mover
    pub async fn find(&self, id: i64) -> Result<Mover, MoverError> {
        let store = self.store.read().await;
        store.find_by_id(id).cloned().ok_or(MoverError::NotFound(id))
    }

    /// Add a new mover
    ///
    /// This method:
    /// 1. Validates the rating range (strict policy only)
    /// 2. Rejects a duplicate id or name
    /// 3. Rejects an occupied telephone number
    /// 4. Appends the mover to the store
    pub async fn create(&self, request: CreateMoverRequest) -> Result<Mover, MoverError> {
        // 1. Validate request
        if self.creation_policy == CreationPolicy::Strict {
            request.validate()?;
        }

        let mut store = self.store.write().await;

        // 2. Check for duplicate mover
        if store.contains_id_or_name(request.id, &request.name) {
            tracing::warn!("Attempt to create duplicate mover: {} ({})", request.id, request.name);
            return Err(MoverError::AlreadyExists {
                id: request.id,
                name: request.name,
            });
        }

        // 3. Check telephone number
        if store.contains_telephone_number(&request.telephone_number) {
            tracing::warn!("Telephone number already in use: {}", request.telephone_number);
            return Err(MoverError::TelephoneNumberOccupied(request.telephone_number));
        }

        // 4. Store the mover
        let mover = Mover::from(request);
        store.add(mover.clone());

        tracing::info!("Created mover with id: {}", mover.id);
        Ok(mover)
    }

    /// Remove the first mover with `id`, returning it
    pub async fn delete(&self, id: i64) -> Result<Mover, MoverError> {
        let mut store = self.store.write().await;

        let removed = store
            .find_index_by_id(id)
            .and_then(|index| store.remove_at(index))
            .ok_or(MoverError::NotFound(id))?;

        tracing::info!("Deleted mover with id: {}", id);
        Ok(removed)
    }

    /// Fold one customer rating into the mover's running average
    pub async fn review(&self, id: i64, rating: f64) -> Result<Mover, MoverError> {
        let mut store = self.store.write().await;

        let mover = store.find_by_id_mut(id).ok_or(MoverError::NotFound(id))?;
        let updated = RatingCalculator::apply_review(mover, rating)?;

        tracing::info!(
            "Mover {} reviewed: rating now {} over {} jobs",
            id,
            updated.rating,
            updated.jobs_done
        );
        Ok(updated.clone())
    }

    /// Number of stored movers
    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movers::seed::default_movers;

    fn request(id: i64, name: &str, rating: f64, telephone_number: &str) -> CreateMoverRequest {
        CreateMoverRequest {
            id,
            name: name.to_string(),
            rating,
            telephone_number: telephone_number.to_string(),
            jobs_done: 0,
        }
    }

    fn seeded(policy: CreationPolicy) -> MoverService {
        MoverService::new(MoverStore::with_movers(default_movers()), policy)
    }

    #[tokio::test]
    async fn test_list_ranked_orders_seed() {
        let service = seeded(CreationPolicy::Lenient);

        let ranked = service.list_ranked().await.unwrap();
        let ids: Vec<i64> = ranked.iter().map(|m| m.id).collect();

        assert_eq!(ids, vec![5, 3, 10, 14, 1, 8, 12, 4, 9, 13, 6, 15, 7, 11, 2]);
    }

    #[tokio::test]
    async fn test_list_ranked_leaves_storage_order() {
        let service = seeded(CreationPolicy::Lenient);

        service.list_ranked().await.unwrap();
        let stored: Vec<i64> = service.store.read().await.all().iter().map(|m| m.id).collect();

        assert_eq!(stored, (1..=15).collect::<Vec<i64>>());
    }

    #[tokio::test]
    async fn test_list_ranked_empty_store() {
        let service = MoverService::new(MoverStore::new(), CreationPolicy::Lenient);

        assert!(matches!(
            service.list_ranked().await,
            Err(MoverError::EmptyCollection)
        ));
    }

    #[tokio::test]
    async fn test_create_appends() {
        let service = seeded(CreationPolicy::Lenient);

        let created = service
            .create(request(16, "Harbor Movers", 4.1, "+10000000016"))
            .await
            .unwrap();

        assert_eq!(created.id, 16);
        assert_eq!(service.count().await, 16);
        assert_eq!(service.find(16).await.unwrap().name, "Harbor Movers");
    }

    #[tokio::test]
    async fn test_create_duplicate_id_is_rejected() {
        let service = seeded(CreationPolicy::Lenient);

        let result = service.create(request(1, "Brand New", 4.0, "+10000000099")).await;

        assert!(matches!(result, Err(MoverError::AlreadyExists { id: 1, .. })));
        assert_eq!(service.count().await, 15);
    }

    #[tokio::test]
    async fn test_create_duplicate_name_is_rejected() {
        let service = seeded(CreationPolicy::Lenient);

        let result = service.create(request(99, "Urban Move", 4.0, "+10000000099")).await;

        assert!(matches!(result, Err(MoverError::AlreadyExists { .. })));
        assert_eq!(service.count().await, 15);
    }

    #[tokio::test]
    async fn test_create_occupied_phone_is_rejected() {
        let service = seeded(CreationPolicy::Lenient);

        let result = service.create(request(99, "Brand New", 4.0, "+15615557689")).await;

        assert!(matches!(result, Err(MoverError::TelephoneNumberOccupied(_))));
        assert_eq!(service.count().await, 15);
    }

    #[tokio::test]
    async fn test_lenient_create_accepts_out_of_range_rating() {
        let service = seeded(CreationPolicy::Lenient);

        let created = service.create(request(16, "Odd Rating", 9.5, "+10000000016")).await;

        assert_eq!(created.unwrap().rating, 9.5);
    }

    #[tokio::test]
    async fn test_strict_create_rejects_out_of_range_rating() {
        let service = seeded(CreationPolicy::Strict);

        let result = service.create(request(16, "Odd Rating", 9.5, "+10000000016")).await;

        assert!(matches!(result, Err(MoverError::Validation(_))));
        assert_eq!(service.count().await, 15);
    }

    #[tokio::test]
    async fn test_delete_removes_one_and_keeps_order() {
        let service = seeded(CreationPolicy::Lenient);

        let removed = service.delete(7).await.unwrap();
        let stored: Vec<i64> = service.store.read().await.all().iter().map(|m| m.id).collect();

        assert_eq!(removed.id, 7);
        assert_eq!(stored, vec![1, 2, 3, 4, 5, 6, 8, 9, 10, 11, 12, 13, 14, 15]);
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        let service = seeded(CreationPolicy::Lenient);

        assert!(matches!(service.delete(404).await, Err(MoverError::NotFound(404))));
        assert_eq!(service.count().await, 15);
    }

    #[tokio::test]
    async fn test_review_updates_stored_mover() {
        let service = seeded(CreationPolicy::Lenient);

        let updated = service.review(1, 5.0).await.unwrap();

        assert_eq!(updated.jobs_done, 3781);
        assert!((updated.rating - 4.6001).abs() < 1e-3);
        assert_eq!(service.find(1).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_review_unknown_id() {
        let service = seeded(CreationPolicy::Lenient);

        assert!(matches!(service.review(99, 4.0).await, Err(MoverError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_review_out_of_range_leaves_mover() {
        let service = seeded(CreationPolicy::Lenient);
        let before = service.find(2).await.unwrap();

        let result = service.review(2, 5.5).await;

        assert!(matches!(result, Err(MoverError::RatingOutOfRange(_))));
        assert_eq!(service.find(2).await.unwrap(), before);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_reviews_are_not_lost() {
        const REVIEWERS: usize = 50;

        let service = MoverService::new(
            MoverStore::with_movers(vec![Mover {
                id: 1,
                name: "Busy Movers".to_string(),
                rating: 0.0,
                telephone_number: "+1".to_string(),
                jobs_done: 0,
            }]),
            CreationPolicy::Lenient,
        );
        let barrier = Arc::new(tokio::sync::Barrier::new(REVIEWERS));

        let handles: Vec<_> = (0..REVIEWERS)
            .map(|i| {
                let service = service.clone();
                let barrier = Arc::clone(&barrier);
                let rating = if i % 2 == 0 { 4.0 } else { 5.0 };
                tokio::spawn(async move {
                    barrier.wait().await;
                    service.review(1, rating).await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        // Starting from zero jobs, the running average is the plain mean
        let mover = service.find(1).await.unwrap();
        assert_eq!(mover.jobs_done, REVIEWERS as u64);
        assert!((mover.rating - 4.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_review_at_job_counter_limit_is_rejected() {
        let service = MoverService::new(
            MoverStore::with_movers(vec![Mover {
                id: 1,
                name: "Veteran Movers".to_string(),
                rating: 4.2,
                telephone_number: "+1".to_string(),
                jobs_done: u64::MAX,
            }]),
            CreationPolicy::Lenient,
        );

        let result = service.review(1, 5.0).await;

        assert!(matches!(result, Err(MoverError::JobCounterExhausted(1))));
        let mover = service.find(1).await.unwrap();
        assert_eq!(mover.jobs_done, u64::MAX);
        assert_eq!(mover.rating, 4.2);
    }
}
