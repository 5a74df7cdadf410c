// src/models/mod.rs

//! Data structures shared across the application.

mod case;
mod config;
mod request;

pub use case::{
    CaseDetails, CnrError, CnrLookup, CnrRecord, CAPTCHA_MESSAGE, NOT_LISTED_MESSAGE,
    NO_DETAILS_MESSAGE,
};
pub use config::{Config, OutputConfig, PortalConfig, ServerConfig};
pub use request::{parse_request_date, CaseType, CauseListRequest, CauseListSummary};
