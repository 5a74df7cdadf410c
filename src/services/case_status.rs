// src/services/case_status.rs

//! CNR case-status fetcher service.
//!
//! Fetches the portal's case-status page for a CNR and parses its two-column
//! tables into a field mapping. A 400 response means the portal demanded a
//! CAPTCHA; that and any transport failure become an error record rather than
//! a propagated error.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use reqwest::{Client, StatusCode};
use scraper::{Html, Selector};

use crate::models::{CaseDetails, CnrError, Config, NOT_LISTED_MESSAGE};

/// Service for fetching case details by CNR.
pub struct CaseStatusFetcher {
    config: Arc<Config>,
    client: Client,
}

impl CaseStatusFetcher {
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self { config, client }
    }

    /// Lookup URL for a CNR.
    pub fn lookup_url(&self, cnr: &str) -> String {
        self.config.portal.case_status_url.replace("{cnr}", cnr)
    }

    /// Fetch and parse case details for the given CNR.
    pub async fn fetch(&self, cnr: &str) -> Result<CaseDetails, CnrError> {
        let url = self.lookup_url(cnr);
        log::info!("Fetching case details for CNR {}", cnr);

        let fallback = &self.config.portal.fallback_url;
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Error fetching details for {}: {}", cnr, e);
                return Err(CnrError::captcha(fallback));
            }
        };

        if response.status() == StatusCode::BAD_REQUEST {
            log::warn!("CAPTCHA or invalid request - eCourts blocked automated access");
            return Err(CnrError::captcha(fallback));
        }

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Error fetching details for {}: {}", cnr, e);
                return Err(CnrError::captcha(fallback));
            }
        };
        let html = match response.text().await {
            Ok(html) => html,
            Err(e) => {
                log::warn!("Error reading details page for {}: {}", cnr, e);
                return Err(CnrError::captcha(fallback));
            }
        };

        let details = parse_case_table(&html);
        if details.is_empty() {
            log::warn!("No details found for {} (possibly invalid CNR)", cnr);
            return Err(CnrError::no_details(&url));
        }

        let status_text = hearing_status(
            details.get("Next Hearing Date").map(String::as_str),
            Local::now().date_naive(),
        );

        Ok(CaseDetails {
            cnr: cnr.to_string(),
            status_text,
            details,
        })
    }
}

/// Parse every table row with exactly two cells into a key/value pair.
///
/// Keys lose a trailing colon; values are taken verbatim. Any two-cell row
/// qualifies, including unrelated ones if the page layout changes.
pub fn parse_case_table(html: &str) -> BTreeMap<String, String> {
    let document = Html::parse_document(html);
    let row_sel = Selector::parse("tr").expect("static selector");
    let cell_sel = Selector::parse("td").expect("static selector");

    let mut details = BTreeMap::new();
    for row in document.select(&row_sel) {
        let cells: Vec<_> = row.select(&cell_sel).collect();
        if cells.len() != 2 {
            continue;
        }

        let key: String = cells[0].text().collect();
        let value: String = cells[1].text().collect();
        let key = key.trim().trim_end_matches(':').trim_end().to_string();
        if key.is_empty() {
            continue;
        }
        details.insert(key, value.trim().to_string());
    }
    details
}

/// Derive the human-readable hearing status from a "Next Hearing Date" value.
///
/// Dates are compared by calendar day against `today`. Missing, empty, and
/// unparsable values all fall back to the "not listed" message.
pub fn hearing_status(next_hearing: Option<&str>, today: NaiveDate) -> String {
    let Some(value) = next_hearing else {
        return NOT_LISTED_MESSAGE.to_string();
    };
    let value = value.trim();
    if value.is_empty() || value == "Not available" {
        return NOT_LISTED_MESSAGE.to_string();
    }

    match NaiveDate::parse_from_str(value, "%d-%m-%Y") {
        Ok(date) if date == today => "Case listed for today.".to_string(),
        Ok(date) if Some(date) == today.succ_opt() => "Case listed for tomorrow.".to_string(),
        Ok(_) => format!("Next hearing on {value}."),
        Err(_) => NOT_LISTED_MESSAGE.to_string(),
    }
}
