// src/storage/mod.rs

//! Output directory management.
//!
//! All artifacts land in a single flat directory: downloaded cause-list PDFs,
//! result summary JSON files, and CNR JSON/PDF dumps. Files are never updated
//! or deleted here; cleanup is a deployment concern.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Local;
use serde::Serialize;
use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::models::CauseListRequest;
use crate::utils::{sanitize_component, truncate_chars};

/// Filesystem store for generated artifacts.
///
/// Unique stamps combine a second-resolution timestamp with a process-wide
/// counter, so rapid repeated requests cannot collide on the same name.
pub struct OutputStore {
    root: PathBuf,
    counter: AtomicU64,
}

impl OutputStore {
    /// Create a store rooted at the given directory. The directory itself is
    /// created lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            counter: AtomicU64::new(0),
        }
    }

    /// Root output directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Produce a filename stamp unique within this process.
    pub fn unique_stamp(&self) -> String {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}_{:04}", Local::now().format("%Y%m%d_%H%M%S"), seq)
    }

    /// Write bytes atomically (write to temp, then rename). Returns the final path.
    pub async fn write_bytes(&self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = self.path(&format!("{name}.tmp"));
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &path).await?;
        Ok(path)
    }

    /// Write a value as indented JSON. Non-ASCII characters are preserved verbatim.
    pub async fn write_json_pretty<T: Serialize + ?Sized>(
        &self,
        name: &str,
        value: &T,
    ) -> Result<PathBuf> {
        let bytes = serde_json::to_vec_pretty(value)?;
        self.write_bytes(name, &bytes).await
    }

    /// Filename for the n-th downloaded cause-list PDF (1-based index).
    pub fn cause_list_pdf_name(request: &CauseListRequest, index: usize) -> String {
        let district = truncate_chars(&sanitize_component(&request.district), 30);
        let complex_name = truncate_chars(&sanitize_component(&request.complex_name), 40);
        let court = sanitize_component(request.court_label());

        format!(
            "{}_{}_{}_{}_{}_{}.pdf",
            district, complex_name, court, request.case_type, index, request.date
        )
    }

    /// Filename for a cause-list result summary. Consumes one unique stamp.
    pub fn result_name(&self, request: &CauseListRequest) -> String {
        let district = if request.district.trim().is_empty() {
            "DIST".to_string()
        } else {
            sanitize_component(&request.district)
        };
        let complex_name = if request.complex_name.trim().is_empty() {
            "COMPLEX".to_string()
        } else {
            truncate_chars(&sanitize_component(&request.complex_name), 20)
        };
        let court = sanitize_component(request.court_label());

        format!(
            "result_{}_{}_{}_{}_{}.json",
            district,
            complex_name,
            court,
            request.date.replace('-', "_"),
            self.unique_stamp()
        )
    }

    /// Companion JSON/PDF filenames for a CNR lookup. Both share one stamp.
    pub fn cnr_names(&self, cnr: &str) -> (String, String) {
        let cnr = sanitize_component(cnr);
        let stamp = self.unique_stamp();
        (
            format!("cnr_{cnr}_{stamp}.json"),
            format!("cnr_{cnr}_{stamp}.pdf"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CaseType;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn sample_request() -> CauseListRequest {
        CauseListRequest {
            state: "Delhi".to_string(),
            district: "New Delhi".to_string(),
            complex_name: "Patiala House Court Complex".to_string(),
            court_name: None,
            case_type: CaseType::Criminal,
            date: "05-03-2026".to_string(),
        }
    }

    #[tokio::test]
    async fn test_write_and_read_bytes() {
        let tmp = TempDir::new().unwrap();
        let store = OutputStore::new(tmp.path());

        let path = store.write_bytes("test.pdf", b"%PDF-1.4 body").await.unwrap();
        let data = tokio::fs::read(&path).await.unwrap();
        assert_eq!(data, b"%PDF-1.4 body");
    }

    #[tokio::test]
    async fn test_write_creates_root_lazily() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("nested").join("data");
        let store = OutputStore::new(&root);
        assert!(!root.exists());

        store.write_bytes("a.json", b"{}").await.unwrap();
        assert!(root.join("a.json").exists());
    }

    #[tokio::test]
    async fn test_json_preserves_non_ascii() {
        let tmp = TempDir::new().unwrap();
        let store = OutputStore::new(tmp.path());

        let mut details = BTreeMap::new();
        details.insert("Court Name".to_string(), "जिला न्यायालय".to_string());

        let path = store.write_json_pretty("cnr.json", &details).await.unwrap();
        let text = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(text.contains("जिला न्यायालय"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn test_unique_stamps_differ() {
        let store = OutputStore::new("data");
        let a = store.unique_stamp();
        let b = store.unique_stamp();
        assert_ne!(a, b);
    }

    #[test]
    fn test_cause_list_pdf_name() {
        let name = OutputStore::cause_list_pdf_name(&sample_request(), 1);
        assert_eq!(
            name,
            "New_Delhi_Patiala_House_Court_Complex_ALL_Criminal_1_05-03-2026.pdf"
        );
    }

    #[test]
    fn test_cause_list_pdf_name_truncates() {
        let mut request = sample_request();
        request.district = "D".repeat(50);
        request.complex_name = "C".repeat(60);
        let name = OutputStore::cause_list_pdf_name(&request, 2);
        assert!(name.starts_with(&"D".repeat(30)));
        assert!(!name.contains(&"D".repeat(31)));
        assert!(name.contains(&"C".repeat(40)));
        assert!(!name.contains(&"C".repeat(41)));
    }

    #[test]
    fn test_result_name_shape() {
        let store = OutputStore::new("data");
        let name = store.result_name(&sample_request());
        assert!(name.starts_with("result_New_Delhi_Patiala_House_Court_"));
        assert!(name.contains("_05_03_2026_"));
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn test_cnr_names_share_stamp() {
        let store = OutputStore::new("data");
        let (json_name, pdf_name) = store.cnr_names("DLND010012342023");
        assert!(json_name.starts_with("cnr_DLND010012342023_"));
        assert_eq!(
            json_name.trim_end_matches(".json"),
            pdf_name.trim_end_matches(".pdf")
        );
    }
}
