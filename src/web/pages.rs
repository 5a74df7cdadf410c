// src/web/pages.rs

//! Inline HTML pages for the web interface.

use crate::models::CnrRecord;

const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; margin: 40px; max-width: 720px; }
        h1, h2 { color: #2c3e50; }
        form { margin: 20px 0; padding: 15px; background: #f8f9fa; border-radius: 5px; }
        label { display: block; margin-top: 10px; }
        input, select { padding: 5px; width: 320px; }
        button { margin-top: 15px; padding: 8px 16px; }
        .warning { color: #b03a2e; }
        table { border-collapse: collapse; margin: 20px 0; }
        td { border: 1px solid #ccc; padding: 6px 10px; }
"#;

/// Escape text for embedding in HTML.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
{body}
</body>
</html>"#,
        title = escape(title),
    )
}

/// Input form for cause-list requests and CNR lookups.
pub fn index_page() -> String {
    page(
        "eCourts Cause List Downloader",
        r#"    <h1>eCourts Cause List Downloader</h1>
    <form method="post" action="/">
        <h2>Cause List</h2>
        <label>State <input name="state" required></label>
        <label>District <input name="district" required></label>
        <label>Court Complex <input name="complex_name" required></label>
        <label>Court Name (leave empty for all courts) <input name="court_name"></label>
        <label>Case Type
            <select name="case_type">
                <option value="Civil">Civil</option>
                <option value="Criminal">Criminal</option>
            </select>
        </label>
        <label>Date (DD-MM-YYYY) <input name="date_input" required></label>
        <button type="submit">Fetch Cause List</button>
    </form>
    <form method="post" action="/cnr-details">
        <h2>Case Details by CNR</h2>
        <label>CNR Number <input name="cnr" required></label>
        <button type="submit">Fetch Case Details</button>
    </form>"#,
    )
}

/// Standalone warning page for rejected input or internal failures.
pub fn warning_page(message: &str) -> String {
    let body = format!(
        r#"    <h1>eCourts Cause List Downloader</h1>
    <p class="warning">{}</p>
    <p><a href="/">Back</a></p>"#,
        escape(message)
    );
    page("eCourts Cause List Downloader", &body)
}

/// Result page for a cause-list request.
pub fn cause_result_page(message: &str, result_file: &str) -> String {
    let body = format!(
        r#"    <h1>Cause List Result</h1>
    <p>{message}</p>
    <p><a href="/download/{file}">Download result file</a></p>
    <p><a href="/">Back</a></p>"#,
        message = escape(message),
        file = escape(result_file),
    );
    page("Cause List Result", &body)
}

/// Error page for a failed CNR lookup.
pub fn cnr_error_page(cnr: &str, message: &str, portal_url: &str) -> String {
    let body = format!(
        r#"    <h1>Case Details: {cnr}</h1>
    <p class="warning">{message}</p>
    <p><a href="{url}">Check manually on the eCourts portal</a></p>
    <p><a href="/">Back</a></p>"#,
        cnr = escape(cnr),
        message = escape(message),
        url = escape(portal_url),
    );
    page("Case Details", &body)
}

/// Success page for a CNR lookup.
pub fn cnr_success_page(record: &CnrRecord, json_file: &str, pdf_file: &str) -> String {
    let mut rows = String::new();
    for (key, value) in &record.details {
        rows.push_str(&format!(
            "        <tr><td>{}</td><td>{}</td></tr>\n",
            escape(key),
            escape(value)
        ));
    }

    let body = format!(
        r#"    <h1>Case Details: {cnr}</h1>
    <p>{status}</p>
    <table>
{rows}    </table>
    <p>
        <a href="/download/{json}">Download JSON</a> |
        <a href="/download/{pdf}">Download PDF</a> |
        <a href="{url}">eCourts portal</a>
    </p>
    <p><a href="/">Back</a></p>"#,
        cnr = escape(&record.cnr),
        status = escape(&record.status_text),
        json = escape(json_file),
        pdf = escape(pdf_file),
        url = escape(&record.url),
    );
    page("Case Details", &body)
}
