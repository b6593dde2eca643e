use recap::core::models::{SourceText, SummaryText};

#[test]
fn test_source_text_trims_surrounding_whitespace() {
    let source = SourceText::new("  some pasted text \n").expect("non-blank input is accepted");
    assert_eq!(source.as_str(), "some pasted text");
}

#[test]
fn test_source_text_rejects_empty_input() {
    assert!(SourceText::new("").is_none());
}

#[test]
fn test_source_text_rejects_whitespace_only_input() {
    assert!(SourceText::new("   ").is_none());
    assert!(SourceText::new("\n\t  \r\n").is_none());
}

#[test]
fn test_source_text_keeps_interior_whitespace() {
    let source = SourceText::new("line one\nline two").unwrap();
    assert_eq!(source.as_str(), "line one\nline two");
}

#[test]
fn test_summary_text_is_a_plain_wrapper() {
    // No trimming or validation on the model output side
    let summary = SummaryText::new("  as produced by the model  ".to_string());
    assert_eq!(summary.as_str(), "  as produced by the model  ");
}
