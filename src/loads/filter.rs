//! Filter criteria for load queries

use super::model::LoadRecord;
use serde::{Deserialize, Serialize};

/// Optional criteria a load record must satisfy
///
/// Criteria left unset do not constrain the query. Equality criteria match
/// ignoring ASCII case; datetime bounds compare ISO 8601 text lexically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadFilter {
    /// Equipment category equality
    pub equipment_type: Option<String>,
    /// Upper bound on weight
    pub max_weight: Option<i64>,
    /// Origin equality
    pub origin: Option<String>,
    /// Destination equality
    pub destination: Option<String>,
    /// Commodity category equality
    pub commodity_type: Option<String>,
    /// Lower bound on pickup time
    pub pickup_after: Option<String>,
    /// Upper bound on delivery time
    pub delivery_before: Option<String>,
}

impl LoadFilter {
    /// Filter with no criteria, matching every record
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any criterion is set
    pub fn is_empty(&self) -> bool {
        self.equipment_type.is_none()
            && self.max_weight.is_none()
            && self.origin.is_none()
            && self.destination.is_none()
            && self.commodity_type.is_none()
            && self.pickup_after.is_none()
            && self.delivery_before.is_none()
    }

    /// Evaluate the filter against a record
    ///
    /// A criterion on a field the record lacks does not match, mirroring
    /// equality and range semantics over missing document fields.
    pub fn matches(&self, record: &LoadRecord) -> bool {
        if let Some(ref want) = self.equipment_type {
            match record.equipment_type {
                Some(ref have) if have.eq_ignore_ascii_case(want) => {}
                _ => return false,
            }
        }
        if let Some(max) = self.max_weight {
            match record.weight {
                Some(weight) if weight <= max as f64 => {}
                _ => return false,
            }
        }
        if let Some(ref want) = self.origin {
            match record.origin {
                Some(ref have) if have.eq_ignore_ascii_case(want) => {}
                _ => return false,
            }
        }
        if let Some(ref want) = self.destination {
            match record.destination {
                Some(ref have) if have.eq_ignore_ascii_case(want) => {}
                _ => return false,
            }
        }
        if let Some(ref want) = self.commodity_type {
            match record.commodity_type {
                Some(ref have) if have.eq_ignore_ascii_case(want) => {}
                _ => return false,
            }
        }
        if let Some(ref after) = self.pickup_after {
            match record.pickup_datetime {
                Some(ref pickup) if pickup.as_str() >= after.as_str() => {}
                _ => return false,
            }
        }
        if let Some(ref before) = self.delivery_before {
            match record.delivery_datetime {
                Some(ref delivery) if delivery.as_str() <= before.as_str() => {}
                _ => return false,
            }
        }
        true
    }
}
