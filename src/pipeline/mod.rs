// src/pipeline/mod.rs

//! End-to-end flows shared by the CLI and the web interface.

use std::sync::Arc;

use reqwest::Client;

use crate::error::Result;
use crate::models::{CauseListRequest, CauseListSummary, CnrLookup, CnrRecord, Config};
use crate::report::render_case_pdf;
use crate::services::{CaseStatusFetcher, CauseListFetcher};
use crate::storage::OutputStore;

/// Result of one cause-list run.
#[derive(Debug, Clone)]
pub struct CauseListOutcome {
    /// Paths of the PDFs that made it to disk, in discovery order
    pub pdfs: Vec<String>,

    /// Path of the written summary JSON
    pub result_path: String,
}

/// Fetch cause-list PDFs and write the summary result file.
///
/// Scraping failures surface as an empty `pdfs` list; only filesystem
/// failures propagate as errors.
pub async fn run_cause_list(
    config: &Arc<Config>,
    client: &Client,
    store: &OutputStore,
    request: &CauseListRequest,
) -> Result<CauseListOutcome> {
    let fetcher = CauseListFetcher::new(Arc::clone(config), client.clone());
    let pdfs = fetcher.fetch(store, request).await;

    let summary = CauseListSummary::new(request, pdfs.clone());
    let name = store.result_name(request);
    let result_path = store.write_json_pretty(&name, &summary).await?;
    log::info!("Results saved to {}", result_path.display());

    Ok(CauseListOutcome {
        pdfs,
        result_path: result_path.to_string_lossy().into_owned(),
    })
}

/// Look up case details by CNR and, on success, write the JSON and PDF
/// artifacts.
///
/// Lookup failures become a `CnrLookup::Failed` record; only filesystem and
/// PDF-rendering failures propagate as errors.
pub async fn run_cnr_lookup(
    config: &Arc<Config>,
    client: &Client,
    store: &OutputStore,
    cnr: &str,
) -> Result<CnrLookup> {
    let fetcher = CaseStatusFetcher::new(Arc::clone(config), client.clone());
    let details = match fetcher.fetch(cnr).await {
        Ok(details) => details,
        Err(error) => return Ok(CnrLookup::Failed(error)),
    };

    let (json_name, pdf_name) = store.cnr_names(&details.cnr);
    let json_path = store.write_json_pretty(&json_name, &details.details).await?;
    let pdf_bytes = render_case_pdf(&details.cnr, &details.details)?;
    let pdf_path = store.write_bytes(&pdf_name, &pdf_bytes).await?;
    log::info!(
        "Case details saved: {}, {}",
        json_path.display(),
        pdf_path.display()
    );

    Ok(CnrLookup::Found(CnrRecord {
        cnr: details.cnr,
        status_text: details.status_text,
        details: details.details,
        json_path: json_path.to_string_lossy().into_owned(),
        pdf_path: pdf_path.to_string_lossy().into_owned(),
        url: config.portal.fallback_url.clone(),
    }))
}
