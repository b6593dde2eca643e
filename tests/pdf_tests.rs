use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use recap::core::models::SummaryText;
use recap::export::{pdf_data_uri, render_pdf};

#[test]
fn test_render_pdf_produces_a_pdf_header() {
    let summary = SummaryText::new("A short summary.".to_string());
    let bytes = render_pdf(&summary).expect("rendering should succeed");

    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_render_pdf_is_deterministic() {
    // Document dates and the trailer ID are pinned, so two renders of the
    // same text must be byte-identical
    let summary = SummaryText::new("The same text, rendered twice.".to_string());

    let first = render_pdf(&summary).expect("first render should succeed");
    let second = render_pdf(&summary).expect("second render should succeed");

    assert_eq!(first, second);
}

#[test]
fn test_render_pdf_trailer_id_is_pinned() {
    // The underlying library writes a random /ID pair into the trailer on
    // every save; the exporter must replace it with a fixed value
    let summary = SummaryText::new("A fox jumps repeatedly.".to_string());
    let bytes = render_pdf(&summary).expect("rendering should succeed");

    let id_pos = bytes
        .windows(4)
        .rposition(|w| w == b"/ID[")
        .expect("trailer should carry an /ID entry");
    let id_end = bytes[id_pos..]
        .iter()
        .position(|b| *b == b']')
        .expect("the /ID array should be closed");
    let id_strings = &bytes[id_pos + 4..id_pos + id_end];
    assert!(
        id_strings
            .iter()
            .all(|b| matches!(*b, b'(' | b')' | b'0' | b' ')),
        "trailer ID should contain no random characters: {:?}",
        String::from_utf8_lossy(id_strings)
    );
}

#[test]
fn test_render_pdf_contains_the_summary_text() {
    let summary = SummaryText::new("Determinism makes testing pleasant.".to_string());
    let bytes = render_pdf(&summary).expect("rendering should succeed");

    let extracted =
        pdf_extract::extract_text_from_mem(&bytes).expect("PDF should be readable back");
    assert!(
        extracted.contains("Determinism makes testing pleasant"),
        "PDF text was: {extracted:?}"
    );
}

#[test]
fn test_render_pdf_handles_multi_line_summaries() {
    let long_text = "word ".repeat(300);
    let summary = SummaryText::new(long_text);

    let bytes = render_pdf(&summary).expect("rendering should succeed");
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_pdf_data_uri_round_trips() {
    let summary = SummaryText::new("Round trip me.".to_string());
    let bytes = render_pdf(&summary).expect("rendering should succeed");

    let uri = pdf_data_uri(&bytes);
    let payload = uri
        .strip_prefix("data:application/pdf;base64,")
        .expect("URI should start with the PDF MIME prefix");

    // Decoding the payload yields exactly the original byte sequence
    let decoded = BASE64.decode(payload).expect("payload should be base64");
    assert_eq!(decoded, bytes);
}

#[test]
fn test_pdf_data_uri_of_arbitrary_bytes() {
    // The packaging is a pure transformation, independent of PDF validity
    let bytes: Vec<u8> = (0..=255).collect();
    let uri = pdf_data_uri(&bytes);

    let payload = uri.strip_prefix("data:application/pdf;base64,").unwrap();
    assert_eq!(BASE64.decode(payload).unwrap(), bytes);
}
