//! MongoDB-backed load store

use super::{LoadStore, StoreError};
use crate::config::StoreSettings;
use crate::loads::{LoadFilter, LoadRecord};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::FindOptions;
use mongodb::{Client, Collection};

/// Production store over the MongoDB driver
///
/// Constructed once at startup and shared behind `Arc`; the driver client
/// carries its own connection pool and is safe to use from concurrent
/// requests.
pub struct MongoStore {
    collection: Collection<LoadRecord>,
}

impl MongoStore {
    /// Connect to the configured database and collection
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the
    /// first query rather than here.
    pub async fn connect(settings: &StoreSettings) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&settings.uri).await?;
        let collection = client
            .database(&settings.database)
            .collection(&settings.collection);
        Ok(Self { collection })
    }
}

#[async_trait]
impl LoadStore for MongoStore {
    async fn find_loads(
        &self,
        filter: &LoadFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<LoadRecord>, StoreError> {
        let options = FindOptions::builder().skip(skip).limit(limit as i64).build();
        let cursor = self.collection.find(query_document(filter), options).await?;
        Ok(cursor.try_collect().await?)
    }
}

/// Translate filter criteria into a query document, omitting unset criteria
fn query_document(filter: &LoadFilter) -> Document {
    let mut query = Document::new();
    if let Some(ref equipment) = filter.equipment_type {
        query.insert("equipment_type", equipment.as_str());
    }
    if let Some(max) = filter.max_weight {
        query.insert("weight", doc! { "$lte": max });
    }
    if let Some(ref origin) = filter.origin {
        query.insert("origin", origin.as_str());
    }
    if let Some(ref destination) = filter.destination {
        query.insert("destination", destination.as_str());
    }
    if let Some(ref commodity) = filter.commodity_type {
        query.insert("commodity_type", commodity.as_str());
    }
    if let Some(ref after) = filter.pickup_after {
        query.insert("pickup_datetime", doc! { "$gte": after.as_str() });
    }
    if let Some(ref before) = filter.delivery_before {
        query.insert("delivery_datetime", doc! { "$lte": before.as_str() });
    }
    query
}
