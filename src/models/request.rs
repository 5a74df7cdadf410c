// src/models/request.rs

//! Cause-list request parameters and result summary.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Date format used throughout the eCourts portal.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a DD-MM-YYYY date string.
pub fn parse_request_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok()
}

/// Case category filter accepted by the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseType {
    Civil,
    Criminal,
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseType::Civil => write!(f, "Civil"),
            CaseType::Criminal => write!(f, "Criminal"),
        }
    }
}

impl FromStr for CaseType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "civil" => Ok(CaseType::Civil),
            "criminal" => Ok(CaseType::Criminal),
            other => Err(AppError::validation(format!(
                "Invalid case type '{other}'. Use Civil or Criminal."
            ))),
        }
    }
}

/// Parameters for one cause-list fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CauseListRequest {
    /// State name
    pub state: String,

    /// District name
    pub district: String,

    /// Court complex name
    pub complex_name: String,

    /// Specific court, or None to cover all courts in the complex
    pub court_name: Option<String>,

    /// Civil or Criminal
    pub case_type: CaseType,

    /// Date in DD-MM-YYYY format
    pub date: String,
}

impl CauseListRequest {
    /// Court name for display and filenames; "ALL" when no court was given.
    pub fn court_label(&self) -> &str {
        self.court_name.as_deref().unwrap_or("ALL")
    }
}

/// Summary record written to disk after each cause-list request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CauseListSummary {
    pub state: String,
    pub district: String,
    pub court_complex: String,
    pub court_name: String,
    pub case_type: CaseType,
    pub date: String,
    pub downloaded_pdfs: Vec<String>,
    pub status: String,
}

impl CauseListSummary {
    /// Build a summary from the request and the downloaded file paths.
    pub fn new(request: &CauseListRequest, downloaded_pdfs: Vec<String>) -> Self {
        let status = if downloaded_pdfs.is_empty() {
            "No PDFs found"
        } else {
            "Success"
        };

        Self {
            state: request.state.clone(),
            district: request.district.clone(),
            court_complex: request.complex_name.clone(),
            court_name: request.court_label().to_string(),
            case_type: request.case_type,
            date: request.date.clone(),
            downloaded_pdfs,
            status: status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> CauseListRequest {
        CauseListRequest {
            state: "Delhi".to_string(),
            district: "New Delhi".to_string(),
            complex_name: "Patiala House Court Complex".to_string(),
            court_name: None,
            case_type: CaseType::Civil,
            date: "01-02-2026".to_string(),
        }
    }

    #[test]
    fn test_case_type_parse() {
        assert_eq!("Civil".parse::<CaseType>().unwrap(), CaseType::Civil);
        assert_eq!("criminal".parse::<CaseType>().unwrap(), CaseType::Criminal);
        assert!("Family".parse::<CaseType>().is_err());
    }

    #[test]
    fn test_case_type_display() {
        assert_eq!(CaseType::Civil.to_string(), "Civil");
        assert_eq!(CaseType::Criminal.to_string(), "Criminal");
    }

    #[test]
    fn test_parse_request_date() {
        assert!(parse_request_date("01-02-2026").is_some());
        assert!(parse_request_date(" 28-02-2026 ").is_some());
        assert!(parse_request_date("2026-02-01").is_none());
        assert!(parse_request_date("31-02-2026").is_none());
    }

    #[test]
    fn test_court_label() {
        let mut request = sample_request();
        assert_eq!(request.court_label(), "ALL");
        request.court_name = Some("Court No. 3".to_string());
        assert_eq!(request.court_label(), "Court No. 3");
    }

    #[test]
    fn test_summary_status_empty() {
        let summary = CauseListSummary::new(&sample_request(), Vec::new());
        assert_eq!(summary.status, "No PDFs found");
        assert_eq!(summary.court_name, "ALL");
    }

    #[test]
    fn test_summary_status_success() {
        let summary =
            CauseListSummary::new(&sample_request(), vec!["data/list_1.pdf".to_string()]);
        assert_eq!(summary.status, "Success");
        assert_eq!(summary.downloaded_pdfs.len(), 1);
    }

    #[test]
    fn test_summary_json_fields() {
        let summary = CauseListSummary::new(&sample_request(), Vec::new());
        let json = serde_json::to_string_pretty(&summary).unwrap();
        assert!(json.contains("\"status\": \"No PDFs found\""));
        assert!(json.contains("\"case_type\": \"Civil\""));
    }
}
