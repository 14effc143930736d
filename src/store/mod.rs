//! Document store boundary
//!
//! The store owns the load records; this crate only reads them. The trait
//! covers exactly what the search path needs: a filtered fetch with
//! skip/limit windowing, returned in store order (ranking happens in the
//! application layer).

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::loads::{LoadFilter, LoadRecord};
use async_trait::async_trait;
use thiserror::Error;

/// Store access failure
#[derive(Debug, Error)]
pub enum StoreError {
    /// Driver-level failure (connectivity, server error, decode)
    #[error("store query failed: {0}")]
    Query(#[from] mongodb::error::Error),
}

/// Read-only access to the load collection
#[async_trait]
pub trait LoadStore: Send + Sync {
    /// Fetch records matching `filter`, skipping `skip` and returning at
    /// most `limit`, in store order
    async fn find_loads(
        &self,
        filter: &LoadFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<LoadRecord>, StoreError>;
}
