// src/services/mod.rs

//! Portal-facing services.

mod case_status;
mod cause_list;

pub use case_status::{hearing_status, parse_case_table, CaseStatusFetcher};
pub use cause_list::{CauseListFetcher, CauseListHeuristic, LinkFilter};
