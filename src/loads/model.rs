//! Load record types

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A shipment listing as held in the document store
///
/// The store is schemaless and externally owned; every field beyond the
/// identifier may be absent from a given document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadRecord {
    /// Store identifier
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Equipment category (stored lowercase)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_type: Option<String>,
    /// Shipment weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Origin location (stored lowercase)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Destination location (stored lowercase)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Commodity category (stored lowercase)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commodity_type: Option<String>,
    /// Pickup time, ISO 8601 text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_datetime: Option<String>,
    /// Delivery time, ISO 8601 text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_datetime: Option<String>,
    /// Trip distance in miles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miles: Option<f64>,
    /// Posted price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loadboard_rate: Option<f64>,
}

impl LoadRecord {
    /// Create an empty record with a fresh identifier
    pub fn new() -> Self {
        Self {
            id: ObjectId::new(),
            equipment_type: None,
            weight: None,
            origin: None,
            destination: None,
            commodity_type: None,
            pickup_datetime: None,
            delivery_datetime: None,
            miles: None,
            loadboard_rate: None,
        }
    }

    pub fn with_equipment(mut self, equipment: impl Into<String>) -> Self {
        self.equipment_type = Some(equipment.into());
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_commodity(mut self, commodity: impl Into<String>) -> Self {
        self.commodity_type = Some(commodity.into());
        self
    }

    pub fn with_pickup(mut self, datetime: impl Into<String>) -> Self {
        self.pickup_datetime = Some(datetime.into());
        self
    }

    pub fn with_delivery(mut self, datetime: impl Into<String>) -> Self {
        self.delivery_datetime = Some(datetime.into());
        self
    }

    pub fn with_miles(mut self, miles: f64) -> Self {
        self.miles = Some(miles);
        self
    }

    pub fn with_rate(mut self, rate: f64) -> Self {
        self.loadboard_rate = Some(rate);
        self
    }
}

impl Default for LoadRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// A load record as returned to callers, annotated with the derived
/// price-efficiency metric where one could be computed
///
/// Fields absent from the stored record are absent from the JSON.
#[derive(Debug, Clone, Serialize)]
pub struct RankedLoad {
    /// Store identifier rendered as a hex string
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commodity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miles: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loadboard_rate: Option<f64>,
    /// Price divided by distance, rounded to two decimal places
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_per_distance: Option<f64>,
}

impl RankedLoad {
    /// Build the response shape from a stored record and its derived metric
    pub fn from_record(record: LoadRecord, rate_per_distance: Option<f64>) -> Self {
        Self {
            id: record.id.to_hex(),
            equipment_type: record.equipment_type,
            weight: record.weight,
            origin: record.origin,
            destination: record.destination,
            commodity_type: record.commodity_type,
            pickup_datetime: record.pickup_datetime,
            delivery_datetime: record.delivery_datetime,
            miles: record.miles,
            loadboard_rate: record.loadboard_rate,
            rate_per_distance,
        }
    }
}
