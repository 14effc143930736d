//! Client for the carrier safety registry

use crate::config::EligibilitySettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Affirmative operating-authority flag value in registry responses
const ALLOWED_TO_OPERATE: &str = "Y";

/// Registry lookup failure
#[derive(Debug, Error)]
pub enum EligibilityError {
    /// Request construction, transport, HTTP status, or body decoding
    #[error("registry request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Queries the external safety registry by carrier docket number
pub struct EligibilityClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl EligibilityClient {
    /// Build a client from settings
    pub fn new(settings: &EligibilitySettings) -> Result<Self, EligibilityError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .build()?;
        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        })
    }

    /// Look up a carrier; `Ok(None)` means the registry has no entry
    pub async fn check(&self, docket: &str) -> Result<Option<CarrierStatus>, EligibilityError> {
        let url = format!("{}/carriers/docket-number/{}", self.base_url, docket);
        let response = self
            .http
            .get(&url)
            .query(&[("webKey", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let registry: RegistryResponse = response.json().await?;
        let Some(info) = registry.content.into_iter().flatten().next() else {
            return Ok(None);
        };
        Ok(Some(CarrierStatus::from(info)))
    }
}

/// Registry response envelope
#[derive(Debug, Deserialize)]
struct RegistryResponse {
    #[serde(default)]
    content: Option<Vec<CarrierInfo>>,
}

/// Carrier entry as returned by the registry
///
/// Docket identifiers come back as numbers or strings depending on the
/// record, so they are kept as raw JSON values and passed through.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CarrierInfo {
    #[serde(default)]
    mc_number: Option<serde_json::Value>,
    #[serde(default)]
    dot_number: Option<serde_json::Value>,
    #[serde(default)]
    legal_name: Option<String>,
    #[serde(default)]
    dba_name: Option<String>,
    #[serde(default)]
    telephone: Option<String>,
    #[serde(default)]
    allowed_to_operate: Option<String>,
}

/// Carrier eligibility as reported to callers
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarrierStatus {
    pub mc_number: Option<serde_json::Value>,
    pub dot_number: Option<serde_json::Value>,
    pub legal_name: Option<String>,
    pub dba_name: Option<String>,
    pub telephone: Option<String>,
    pub eligible: bool,
}

impl From<CarrierInfo> for CarrierStatus {
    fn from(info: CarrierInfo) -> Self {
        let eligible = info.allowed_to_operate.as_deref() == Some(ALLOWED_TO_OPERATE);
        Self {
            mc_number: info.mc_number,
            dot_number: info.dot_number,
            legal_name: info.legal_name,
            dba_name: info.dba_name,
            telephone: info.telephone,
            eligible,
        }
    }
}
