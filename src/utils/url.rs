// src/utils/url.rs

//! URL resolution for discovered PDF links.

/// Resolve a cause-list href to an absolute URL.
///
/// Hrefs that already carry a scheme are kept as-is. Anything else is
/// prefixed with the portal host, after stripping a single leading slash.
///
/// # Examples
/// ```
/// use causelist::utils::url::resolve_pdf_href;
///
/// assert_eq!(
///     resolve_pdf_href("https://services.ecourts.gov.in", "list.pdf"),
///     "https://services.ecourts.gov.in/list.pdf"
/// );
/// ```
pub fn resolve_pdf_href(host: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }

    let trimmed = href.strip_prefix('/').unwrap_or(href);
    format!("{}/{}", host.trim_end_matches('/'), trimmed)
}
