//! Carrier eligibility lookup
//!
//! A thin passthrough to the external safety registry: one GET by docket
//! number, reshaped into an `eligible` flag.

mod client;

pub use client::{CarrierStatus, EligibilityClient, EligibilityError};
