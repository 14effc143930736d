//! Rate derivation and ranking of load candidates

use super::model::{LoadRecord, RankedLoad};
use thiserror::Error;

/// Failure to derive the price-efficiency metric for a single record
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateError {
    /// Division produced a non-finite value (bad stored numerics)
    #[error("derived rate is not finite")]
    NotFinite,
}

/// Derive price divided by distance, rounded to two decimal places
///
/// Returns `Ok(None)` when the metric is undefined for the record: either
/// input missing, or a zero distance. An error means the record itself is
/// unusable and should be dropped from results.
pub fn rate_per_distance(record: &LoadRecord) -> Result<Option<f64>, RateError> {
    let (Some(miles), Some(rate)) = (record.miles, record.loadboard_rate) else {
        return Ok(None);
    };
    if miles == 0.0 {
        return Ok(None);
    }
    let value = (rate / miles * 100.0).round() / 100.0;
    if !value.is_finite() {
        return Err(RateError::NotFinite);
    }
    Ok(Some(value))
}

/// Rank candidates by derived rate, highest first
///
/// Records whose derivation fails are dropped rather than failing the whole
/// set; records with no derivable rate are kept and sort as rate 0. The sort
/// is stable, so identical input yields identical ordering.
pub fn rank(candidates: Vec<LoadRecord>) -> Vec<RankedLoad> {
    let mut ranked: Vec<RankedLoad> = candidates
        .into_iter()
        .filter_map(|record| match rate_per_distance(&record) {
            Ok(rate) => Some(RankedLoad::from_record(record, rate)),
            Err(_) => None,
        })
        .collect();

    ranked.sort_by(|a, b| {
        let a_rate = a.rate_per_distance.unwrap_or(0.0);
        let b_rate = b.rate_per_distance.unwrap_or(0.0);
        b_rate
            .partial_cmp(&a_rate)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
}

/// Slice a ranked sequence to the requested page
pub fn paginate(ranked: Vec<RankedLoad>, skip: u64, limit: u64) -> Vec<RankedLoad> {
    ranked
        .into_iter()
        .skip(skip as usize)
        .take(limit as usize)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_derivation() {
        let record = LoadRecord::new().with_miles(500.0).with_rate(1000.0);
        assert_eq!(rate_per_distance(&record), Ok(Some(2.0)));
    }

    #[test]
    fn test_rate_rounds_to_two_places() {
        let record = LoadRecord::new().with_miles(3.0).with_rate(10.0);
        assert_eq!(rate_per_distance(&record), Ok(Some(3.33)));
    }

    #[test]
    fn test_rate_undefined_without_inputs() {
        assert_eq!(rate_per_distance(&LoadRecord::new()), Ok(None));
        assert_eq!(
            rate_per_distance(&LoadRecord::new().with_miles(500.0)),
            Ok(None)
        );
        assert_eq!(
            rate_per_distance(&LoadRecord::new().with_rate(1000.0)),
            Ok(None)
        );
    }

    #[test]
    fn test_rate_undefined_for_zero_distance() {
        let record = LoadRecord::new().with_miles(0.0).with_rate(1000.0);
        assert_eq!(rate_per_distance(&record), Ok(None));
    }

    #[test]
    fn test_rate_rejects_non_finite() {
        let record = LoadRecord::new().with_miles(f64::NAN).with_rate(1000.0);
        assert_eq!(rate_per_distance(&record), Err(RateError::NotFinite));
    }

    #[test]
    fn test_rank_orders_descending() {
        let candidates = vec![
            LoadRecord::new().with_miles(500.0).with_rate(500.0),
            LoadRecord::new().with_miles(500.0).with_rate(1500.0),
            LoadRecord::new().with_miles(500.0).with_rate(1000.0),
        ];
        let ranked = rank(candidates);
        let rates: Vec<f64> = ranked
            .iter()
            .map(|r| r.rate_per_distance.unwrap())
            .collect();
        assert_eq!(rates, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_underivable_sorts_last() {
        let candidates = vec![
            LoadRecord::new(),
            LoadRecord::new().with_miles(500.0).with_rate(1000.0),
        ];
        let ranked = rank(candidates);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].rate_per_distance, Some(2.0));
        assert_eq!(ranked[1].rate_per_distance, None);
    }

    #[test]
    fn test_failed_derivation_drops_record() {
        let candidates = vec![
            LoadRecord::new().with_miles(f64::NAN).with_rate(1000.0),
            LoadRecord::new().with_miles(500.0).with_rate(1000.0),
        ];
        let ranked = rank(candidates);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].rate_per_distance, Some(2.0));
    }

    #[test]
    fn test_paginate_slices_ranked_window() {
        let candidates: Vec<LoadRecord> = (1..=10)
            .map(|i| LoadRecord::new().with_miles(100.0).with_rate(i as f64 * 100.0))
            .collect();
        let page = paginate(rank(candidates), 2, 3);
        let rates: Vec<f64> = page.iter().map(|r| r.rate_per_distance.unwrap()).collect();
        assert_eq!(rates, vec![8.0, 7.0, 6.0]);
    }

    #[test]
    fn test_paginate_boundaries() {
        let ranked = rank(vec![LoadRecord::new().with_miles(100.0).with_rate(200.0)]);
        assert!(paginate(ranked.clone(), 0, 0).is_empty());
        assert!(paginate(ranked, 5, 3).is_empty());
    }
}
