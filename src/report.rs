// src/report.rs

//! Text-only PDF rendering of case details.

use std::collections::BTreeMap;

use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::error::{AppError, Result};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const HEADER_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 10.0;
const LINE_STEP_MM: f32 = 6.0;

/// Render case details as a single-page PDF: a CNR header line followed by
/// one line per field.
pub fn render_case_pdf(cnr: &str, details: &BTreeMap<String, String>) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        format!("Case details {cnr}"),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(AppError::pdf)?;
    let layer = doc.get_page(page).get_layer(layer);

    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;
    layer.use_text(
        format!("CNR Number: {cnr}"),
        HEADER_SIZE,
        Mm(MARGIN_MM),
        Mm(y),
        &font,
    );
    y -= 2.0 * LINE_STEP_MM;

    for (key, value) in details {
        layer.use_text(
            format!("{key}: {value}"),
            BODY_SIZE,
            Mm(MARGIN_MM),
            Mm(y),
            &font,
        );
        y -= LINE_STEP_MM;
    }

    doc.save_to_bytes().map_err(AppError::pdf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_pdf_bytes() {
        let mut details = BTreeMap::new();
        details.insert("Court Name".to_string(), "District Court".to_string());
        details.insert("Next Hearing Date".to_string(), "05-03-2026".to_string());

        let bytes = render_case_pdf("DLND010012342023", &details).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_renders_with_empty_details() {
        let bytes = render_case_pdf("X", &BTreeMap::new()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
