// src/models/case.rs

//! Case-detail records produced by CNR lookups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Message returned when the portal blocks automated access.
pub const CAPTCHA_MESSAGE: &str = "Unable to fetch details - CAPTCHA verification required.";

/// Message returned when the detail table parsed to nothing.
pub const NO_DETAILS_MESSAGE: &str = "No case details found";

/// Default status when no usable hearing date is present.
pub const NOT_LISTED_MESSAGE: &str = "Not listed today or tomorrow.";

/// Parsed case details before artifacts are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseDetails {
    /// CNR the lookup was made for
    pub cnr: String,

    /// Human-readable next-hearing status
    pub status_text: String,

    /// Field name to value, one entry per two-cell table row
    pub details: BTreeMap<String, String>,
}

/// Error record for a failed CNR lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CnrError {
    pub error: String,
    pub url: String,
}

impl CnrError {
    /// Lookup blocked by CAPTCHA or a request failure; points at the portal home.
    pub fn captcha(fallback_url: &str) -> Self {
        Self {
            error: CAPTCHA_MESSAGE.to_string(),
            url: fallback_url.to_string(),
        }
    }

    /// No two-cell table rows found; points at the raw lookup URL.
    pub fn no_details(lookup_url: &str) -> Self {
        Self {
            error: NO_DETAILS_MESSAGE.to_string(),
            url: lookup_url.to_string(),
        }
    }
}

/// Success record for a CNR lookup, including paths to the written artifacts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CnrRecord {
    pub cnr: String,
    pub status_text: String,
    pub details: BTreeMap<String, String>,
    pub json_path: String,
    pub pdf_path: String,
    pub url: String,
}

/// Outcome of a CNR lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CnrLookup {
    Found(CnrRecord),
    Failed(CnrError),
}

impl CnrLookup {
    pub fn is_error(&self) -> bool {
        matches!(self, CnrLookup::Failed(_))
    }
}
