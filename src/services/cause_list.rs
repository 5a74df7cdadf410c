// src/services/cause_list.rs

//! Cause-list fetcher service.
//!
//! Fetches the portal's cause-list page, picks out PDF links with a
//! replaceable heuristic, and downloads each one sequentially. Failures are
//! logged and swallowed; the caller always gets the list of files that made
//! it to disk, possibly empty.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header;
use reqwest::{Client, StatusCode};
use scraper::{Html, Selector};

use crate::error::Result;
use crate::models::{CauseListRequest, Config};
use crate::storage::OutputStore;
use crate::utils::url::resolve_pdf_href;

/// Decides whether an anchor looks like a cause-list PDF link.
///
/// Kept behind a trait so the matching rule can be swapped out when the
/// portal changes its markup.
pub trait LinkFilter: Send + Sync {
    fn matches(&self, text: &str, href: &str) -> bool;
}

/// Default heuristic: anchor text mentions "cause" and the href is a PDF.
///
/// This will miss valid links that avoid the word and keep unrelated PDFs
/// that happen to mention it. The portal exposes nothing more reliable
/// without a CAPTCHA'd session.
pub struct CauseListHeuristic;

impl LinkFilter for CauseListHeuristic {
    fn matches(&self, text: &str, href: &str) -> bool {
        text.to_lowercase().contains("cause") && href.to_lowercase().ends_with(".pdf")
    }
}

/// Service for fetching cause-list PDFs from the portal.
pub struct CauseListFetcher {
    config: Arc<Config>,
    client: Client,
    filter: Box<dyn LinkFilter>,
}

impl CauseListFetcher {
    /// Create a fetcher with the default link heuristic.
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self::with_filter(config, client, Box::new(CauseListHeuristic))
    }

    /// Create a fetcher with a custom link filter.
    pub fn with_filter(config: Arc<Config>, client: Client, filter: Box<dyn LinkFilter>) -> Self {
        Self {
            config,
            client,
            filter,
        }
    }

    /// Fetch and download all cause-list PDFs for the given request.
    ///
    /// Returns the paths written to disk, in discovery order. Network and
    /// per-link failures are logged and never propagated.
    pub async fn fetch(&self, store: &OutputStore, request: &CauseListRequest) -> Vec<String> {
        log::info!(
            "Fetching {} cause list for {} ({}) on {}",
            request.case_type,
            request.complex_name,
            request.court_label(),
            request.date
        );

        let response = match self.client.get(&self.config.portal.base_url).send().await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Could not access eCourts site: {}", e);
                return Vec::new();
            }
        };
        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Could not access eCourts site: {}", e);
                return Vec::new();
            }
        };
        let html = match response.text().await {
            Ok(html) => html,
            Err(e) => {
                log::warn!("Could not read cause-list page: {}", e);
                return Vec::new();
            }
        };

        let links = self.extract_pdf_links(&html);
        if links.is_empty() {
            log::warn!("No cause list found for the given inputs (or site blocked access)");
            return Vec::new();
        }

        let mut downloaded = Vec::new();
        for (i, url) in links.iter().enumerate() {
            let name = OutputStore::cause_list_pdf_name(request, i + 1);
            match self.download_pdf(store, url, &name).await {
                Ok(Some(path)) => {
                    log::info!("Downloaded: {}", path.display());
                    downloaded.push(path.to_string_lossy().into_owned());
                }
                Ok(None) => {} // skipped; reason already logged
                Err(e) => log::warn!("Error downloading {}: {}", url, e),
            }
        }

        downloaded
    }

    /// Extract candidate PDF URLs from the cause-list page, resolved to
    /// absolute form.
    fn extract_pdf_links(&self, html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let anchor_sel = Selector::parse("a[href]").expect("static selector");

        let mut links = Vec::new();
        for anchor in document.select(&anchor_sel) {
            let text: String = anchor.text().collect();
            let href = anchor.value().attr("href").unwrap_or_default();

            if self.filter.matches(text.trim(), href) {
                links.push(resolve_pdf_href(&self.config.portal.host, href));
            }
        }
        links
    }

    /// Download one PDF. Returns the written path, or None when the link did
    /// not yield a valid PDF (non-200 status or wrong content type).
    async fn download_pdf(
        &self,
        store: &OutputStore,
        url: &str,
        name: &str,
    ) -> Result<Option<std::path::PathBuf>> {
        let timeout = Duration::from_secs(self.config.portal.download_timeout_secs);
        let response = self.client.get(url).timeout(timeout).send().await?;

        if response.status() != StatusCode::OK || !is_pdf_response(&response) {
            log::warn!("No valid PDF at {} (status: {})", url, response.status());
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        let path = store.write_bytes(name, &bytes).await?;
        Ok(Some(path))
    }
}

fn is_pdf_response(response: &reqwest::Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/pdf"))
        .unwrap_or(false)
}
