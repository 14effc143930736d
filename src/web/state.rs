//! Application state shared across handlers

use crate::config::Settings;
use crate::eligibility::EligibilityClient;
use crate::search::LoadSearch;
use crate::store::LoadStore;
use std::sync::Arc;

/// Shared application state
///
/// The store client is constructed once at process start and injected here;
/// handlers never build their own connections.
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Load search executor
    pub search: Arc<LoadSearch>,
    /// Carrier registry client
    pub eligibility: Arc<EligibilityClient>,
}

impl AppState {
    /// Create new application state over an injected store
    pub fn new(settings: Settings, store: Arc<dyn LoadStore>) -> anyhow::Result<Self> {
        let search =
            LoadSearch::new(store).with_oversample_factor(settings.search.oversample_factor);
        let eligibility = EligibilityClient::new(&settings.eligibility)?;

        Ok(Self {
            settings: Arc::new(settings),
            search: Arc::new(search),
            eligibility: Arc::new(eligibility),
        })
    }
}
