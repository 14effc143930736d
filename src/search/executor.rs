//! Search execution over the load store

use super::models::SearchRequest;
use crate::loads::ranking;
use crate::loads::RankedLoad;
use crate::store::{LoadStore, StoreError};
use std::sync::Arc;
use tracing::debug;

/// Executes load searches: filtered fetch, in-memory ranking, pagination
pub struct LoadSearch {
    store: Arc<dyn LoadStore>,
    oversample_factor: u64,
}

impl LoadSearch {
    /// Create an executor over the given store
    pub fn new(store: Arc<dyn LoadStore>) -> Self {
        Self {
            store,
            oversample_factor: crate::OVERSAMPLE_FACTOR,
        }
    }

    /// Set the candidate window multiplier
    pub fn with_oversample_factor(mut self, factor: u64) -> Self {
        self.oversample_factor = factor;
        self
    }

    /// Run a search and return the requested page, ranked by descending
    /// rate per distance
    ///
    /// The store query does not rank, so ranking happens here over a bounded
    /// candidate window of `limit * oversample_factor` records offset by
    /// `skip`. Two long-standing quirks are kept for backward compatibility
    /// with existing callers: the globally best matches can fall outside the
    /// oversampled window, and `skip` offsets both the store query and the
    /// ranked slice.
    pub async fn execute(&self, request: &SearchRequest) -> Result<Vec<RankedLoad>, StoreError> {
        let window = request.limit.saturating_mul(self.oversample_factor);
        let candidates = self
            .store
            .find_loads(&request.filter, request.skip, window)
            .await?;

        debug!(
            "ranking {} candidates (skip={}, limit={})",
            candidates.len(),
            request.skip,
            request.limit
        );

        let ranked = ranking::rank(candidates);
        Ok(ranking::paginate(ranked, request.skip, request.limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::{LoadFilter, LoadRecord};
    use crate::store::MemoryStore;

    fn executor_over(records: Vec<LoadRecord>) -> LoadSearch {
        LoadSearch::new(Arc::new(MemoryStore::with_records(records)))
    }

    fn request(filter: LoadFilter, skip: u64, limit: u64) -> SearchRequest {
        SearchRequest { filter, skip, limit }
    }

    #[tokio::test]
    async fn test_results_ranked_descending() {
        let search = executor_over(vec![
            LoadRecord::new().with_miles(100.0).with_rate(150.0),
            LoadRecord::new().with_miles(100.0).with_rate(450.0),
            LoadRecord::new().with_miles(100.0).with_rate(300.0),
        ]);

        let results = search
            .execute(&request(LoadFilter::new(), 0, 3))
            .await
            .unwrap();

        let rates: Vec<f64> = results
            .iter()
            .map(|r| r.rate_per_distance.unwrap())
            .collect();
        assert_eq!(rates, vec![4.5, 3.0, 1.5]);
    }

    #[tokio::test]
    async fn test_limit_bounds_result_count() {
        let records: Vec<LoadRecord> = (0..20)
            .map(|i| LoadRecord::new().with_miles(100.0).with_rate(i as f64))
            .collect();
        let search = executor_over(records);

        let results = search
            .execute(&request(LoadFilter::new(), 0, 4))
            .await
            .unwrap();
        assert_eq!(results.len(), 4);

        let results = search
            .execute(&request(LoadFilter::new(), 0, 0))
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_skip_offsets_store_fetch_and_ranked_slice() {
        // Twelve records with rates 1..=12 in store order; skip=2, limit=3
        // fetches records 3..=12 as the candidate window, ranks them
        // descending (12, 11, ..., 3), and slices [2..5] of that ranking.
        let records: Vec<LoadRecord> = (1..=12)
            .map(|i| LoadRecord::new().with_miles(100.0).with_rate(i as f64 * 100.0))
            .collect();
        let search = executor_over(records);

        let results = search
            .execute(&request(LoadFilter::new(), 2, 3))
            .await
            .unwrap();

        let rates: Vec<f64> = results
            .iter()
            .map(|r| r.rate_per_distance.unwrap())
            .collect();
        assert_eq!(rates, vec![10.0, 9.0, 8.0]);
    }

    #[tokio::test]
    async fn test_skip_past_window_is_empty_not_an_error() {
        let search = executor_over(vec![
            LoadRecord::new().with_miles(100.0).with_rate(100.0),
        ]);

        let results = search
            .execute(&request(LoadFilter::new(), 50, 3))
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_every_result_satisfies_the_filter() {
        let search = executor_over(vec![
            LoadRecord::new()
                .with_equipment("reefer")
                .with_weight(30000.0)
                .with_miles(100.0)
                .with_rate(200.0),
            LoadRecord::new()
                .with_equipment("flatbed")
                .with_weight(30000.0)
                .with_miles(100.0)
                .with_rate(900.0),
            LoadRecord::new()
                .with_equipment("reefer")
                .with_weight(45000.0)
                .with_miles(100.0)
                .with_rate(500.0),
        ]);

        let filter = LoadFilter {
            equipment_type: Some("reefer".to_string()),
            max_weight: Some(40000),
            ..Default::default()
        };
        let results = search.execute(&request(filter, 0, 10)).await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].equipment_type.as_deref(), Some("reefer"));
        assert_eq!(results[0].weight, Some(30000.0));
    }

    #[tokio::test]
    async fn test_record_without_miles_sorts_after_rated_records() {
        let search = executor_over(vec![
            LoadRecord::new().with_rate(5000.0),
            LoadRecord::new().with_miles(500.0).with_rate(1000.0),
        ]);

        let results = search
            .execute(&request(LoadFilter::new(), 0, 3))
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].rate_per_distance, Some(2.0));
        assert_eq!(results[1].rate_per_distance, None);
    }

    #[tokio::test]
    async fn test_identical_requests_give_identical_results() {
        let records: Vec<LoadRecord> = (0..8)
            .map(|i| {
                LoadRecord::new()
                    .with_miles(100.0)
                    .with_rate(((i % 3) + 1) as f64 * 100.0)
            })
            .collect();
        let search = executor_over(records);

        let first = search
            .execute(&request(LoadFilter::new(), 1, 5))
            .await
            .unwrap();
        let second = search
            .execute(&request(LoadFilter::new(), 1, 5))
            .await
            .unwrap();

        let ids = |results: &[RankedLoad]| -> Vec<String> {
            results.iter().map(|r| r.id.clone()).collect()
        };
        assert_eq!(ids(&first), ids(&second));
    }
}
