//! PDF export for summaries
//!
//! Renders the summary onto a single A4 page with a built-in font and packs
//! the bytes into a `data:` URI so the browser can download the file without
//! any server-side storage.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use printpdf::{
    BuiltinFont, CustomPdfConformance, Mm, PdfConformance, PdfDocument,
};
use time::OffsetDateTime;

use crate::core::models::SummaryText;
use crate::errors::RecapError;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const LINE_HEIGHT_MM: f32 = 10.0;
const FONT_SIZE_PT: f32 = 12.0;

/// Approximate character budget per line for Helvetica at 12pt on an A4
/// page with 10mm margins. Summaries are bounded by the model parameters,
/// so a coarse fixed-width wrap is enough here.
const MAX_CHARS_PER_LINE: usize = 90;

/// Render the summary as a single-page PDF and return the raw bytes.
///
/// Document dates and the trailer ID are pinned and XMP/ICC emission is
/// disabled, so the output is byte-identical for a fixed input.
pub fn render_pdf(summary: &SummaryText) -> Result<Vec<u8>, RecapError> {
    let (doc, page, layer) = PdfDocument::new(
        "Summary",
        Mm(PAGE_WIDTH_MM.into()),
        Mm(PAGE_HEIGHT_MM.into()),
        "Layer 1",
    );

    let doc = doc
        .with_conformance(PdfConformance::Custom(CustomPdfConformance {
            requires_icc_profile: false,
            requires_xmp_metadata: false,
            ..Default::default()
        }))
        .with_creation_date(OffsetDateTime::UNIX_EPOCH)
        .with_mod_date(OffsetDateTime::UNIX_EPOCH);

    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let current_layer = doc.get_page(page).get_layer(layer);

    let mut y = PAGE_HEIGHT_MM - MARGIN_MM - LINE_HEIGHT_MM;
    for line in wrap_text(summary.as_str(), MAX_CHARS_PER_LINE) {
        current_layer.use_text(
            line,
            FONT_SIZE_PT.into(),
            Mm(MARGIN_MM.into()),
            Mm(y.into()),
            &font,
        );
        y -= LINE_HEIGHT_MM;
    }

    let mut bytes = doc.save_to_bytes()?;
    pin_document_id(&mut bytes);
    Ok(bytes)
}

/// Overwrite the trailer `/ID[(...)(...)]` strings in place.
///
/// printpdf generates a fresh random document ID on every save, which would
/// make two renders of the same text differ. The replacement keeps each
/// string's length, so the cross-reference offsets stay valid.
fn pin_document_id(bytes: &mut [u8]) {
    // The ID lives in the trailer at the end of the file
    let Some(pos) = bytes.windows(4).rposition(|w| w == b"/ID[") else {
        return;
    };

    let mut i = pos + 4;
    for _ in 0..2 {
        while i < bytes.len() && bytes[i] != b'(' {
            i += 1;
        }
        i += 1;
        while i < bytes.len() && bytes[i] != b')' {
            bytes[i] = b'0';
            i += 1;
        }
    }
}

/// Wrap the PDF bytes into a `data:application/pdf;base64,...` URI.
///
/// Pure transformation; decoding the payload yields the input bytes exactly.
#[must_use]
pub fn pdf_data_uri(pdf_bytes: &[u8]) -> String {
    format!("data:application/pdf;base64,{}", BASE64.encode(pdf_bytes))
}

/// Greedy word wrap at a fixed character budget.
///
/// Words longer than the budget are hard-split so a single unbroken token
/// cannot run off the page. Input line breaks are respected.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let mut word = word;

            // Hard-split oversized words
            while word.chars().count() > max_chars {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let split_at = word
                    .char_indices()
                    .nth(max_chars)
                    .map_or(word.len(), |(i, _)| i);
                lines.push(word[..split_at].to_string());
                word = &word[split_at..];
            }

            if current.is_empty() {
                current.push_str(word);
            } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}
