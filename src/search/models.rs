//! Search request models and parameter parsing

use crate::loads::LoadFilter;
use serde::Deserialize;
use thiserror::Error;

/// Parameter parsing failure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("invalid value {value:?} for parameter '{name}'")]
    InvalidInteger { name: &'static str, value: String },
}

/// Raw query-string parameters for load search
///
/// Everything arrives as optional text; the parsing policy differs per
/// field, so numeric parameters are kept as strings here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub equipment_type: Option<String>,
    /// Integer string, upper bound on weight; parse failure fails the request
    pub weight: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub commodity_type: Option<String>,
    /// Lower bound on pickup time, ISO 8601 text
    pub pickup_after: Option<String>,
    /// Upper bound on delivery time, ISO 8601 text
    pub delivery_before: Option<String>,
    /// Legacy name for `delivery_before`; wins when both are supplied
    pub deadline_datetime: Option<String>,
    pub skip: Option<String>,
    pub limit: Option<String>,
}

/// Behavior knobs distinguishing the search endpoint variants
#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    /// Lowercase equality criteria before filtering
    pub case_fold: bool,
    /// Fall back to defaults on malformed `skip`/`limit` instead of erroring
    pub lenient_paging: bool,
    /// Log request parameters and returned identifiers
    pub log_diagnostics: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_fold: true,
            lenient_paging: true,
            log_diagnostics: true,
        }
    }
}

impl SearchOptions {
    /// Options for the backward-compatible endpoint: strict paging
    /// parameters and no diagnostic output
    pub fn legacy() -> Self {
        Self {
            case_fold: true,
            lenient_paging: false,
            log_diagnostics: false,
        }
    }
}

/// A parsed, ready-to-execute search
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub filter: LoadFilter,
    pub skip: u64,
    pub limit: u64,
}

impl SearchRequest {
    /// Parse raw parameters under the given options
    ///
    /// `weight` parses strictly regardless of options; `skip` and `limit`
    /// follow the `lenient_paging` policy. Datetime values are stripped of
    /// surrounding quotes but otherwise not validated. Empty values count
    /// as unset.
    pub fn from_params(params: &SearchParams, options: &SearchOptions) -> Result<Self, ParamError> {
        let fold = |value: &str| {
            if options.case_fold {
                value.to_lowercase()
            } else {
                value.to_string()
            }
        };

        let max_weight = match non_empty(&params.weight) {
            Some(raw) => Some(parse_required_int("weight", raw)?),
            None => None,
        };

        // The legacy alias is applied after the primary name, so it wins.
        let delivery_before = non_empty(&params.delivery_before).map(strip_quotes);
        let delivery_before = non_empty(&params.deadline_datetime)
            .map(strip_quotes)
            .or(delivery_before);

        let filter = LoadFilter {
            equipment_type: non_empty(&params.equipment_type).map(fold),
            max_weight,
            origin: non_empty(&params.origin).map(fold),
            destination: non_empty(&params.destination).map(fold),
            commodity_type: non_empty(&params.commodity_type).map(fold),
            pickup_after: non_empty(&params.pickup_after).map(strip_quotes),
            delivery_before,
        };

        let skip = parse_paging("skip", &params.skip, 0, options.lenient_paging)?;
        let limit = parse_paging(
            "limit",
            &params.limit,
            crate::DEFAULT_PAGE_LIMIT,
            options.lenient_paging,
        )?;

        Ok(Self { filter, skip, limit })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn strip_quotes(value: &str) -> String {
    value
        .trim_matches(|c| c == '"' || c == '\'')
        .to_string()
}

/// Strict integer parse: any failure is the caller's problem
fn parse_required_int(name: &'static str, raw: &str) -> Result<i64, ParamError> {
    raw.parse().map_err(|_| ParamError::InvalidInteger {
        name,
        value: raw.to_string(),
    })
}

/// Paging parse: missing values take the default; malformed values take the
/// default under lenient policy and fail otherwise
fn parse_paging(
    name: &'static str,
    value: &Option<String>,
    default: u64,
    lenient: bool,
) -> Result<u64, ParamError> {
    let Some(raw) = non_empty(value) else {
        return Ok(default);
    };
    match raw.parse() {
        Ok(parsed) => Ok(parsed),
        Err(_) if lenient => Ok(default),
        Err(_) => Err(ParamError::InvalidInteger {
            name,
            value: raw.to_string(),
        }),
    }
}
