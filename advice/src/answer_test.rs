use super::*;

#[test]
fn confidence_formats_two_decimals() {
    assert_eq!(format_confidence(Some(0.8765)), "0.88");
    assert_eq!(format_confidence(Some(1.0)), "1.00");
    assert_eq!(format_confidence(Some(0.0)), "0.00");
}

#[test]
fn confidence_absent_formats_empty() {
    assert_eq!(format_confidence(None), "");
}

#[test]
fn citation_with_url_renders_link() {
    let citation = Citation {
        source: Some("Gov".to_owned()),
        dataset: Some("Soil DB".to_owned()),
        url: Some("http://x".to_owned()),
    };
    let view = citation.view();
    assert_eq!(view.label, "Soil DB (Gov)");
    assert_eq!(view.href.as_deref(), Some("http://x"));
}

#[test]
fn citation_without_names_uses_placeholders() {
    let view = Citation::default().view();
    assert_eq!(view.label, "dataset (source)");
    assert_eq!(view.href, None);
}

#[test]
fn citation_empty_strings_fall_back_like_missing() {
    let citation = Citation {
        source: Some(String::new()),
        dataset: Some(String::new()),
        url: Some(String::new()),
    };
    assert_eq!(citation.label(), "dataset (source)");
    assert_eq!(citation.link(), None);
}

#[test]
fn decode_full_response() {
    let raw = r#"{
        "answer": "Irrigate lightly.",
        "confidence": 0.72,
        "reasons": ["No rain expected", "High temperature"],
        "citations": [{"source": "IMD", "dataset": "Rainfall", "url": "https://imd.example"}],
        "followups": ["Which variety?"],
        "debug": {"docs": 3}
    }"#;
    let result: AnswerResult = serde_json::from_str(raw).expect("decode");
    assert_eq!(result.answer, "Irrigate lightly.");
    assert_eq!(result.confidence, Some(0.72));
    assert_eq!(result.reasons, vec!["No rain expected", "High temperature"]);
    assert_eq!(result.citations.len(), 1);
    assert_eq!(result.citations[0].dataset.as_deref(), Some("Rainfall"));
    assert_eq!(result.followups, vec!["Which variety?"]);
}

#[test]
fn decode_empty_object_yields_defaults() {
    let result: AnswerResult = serde_json::from_str("{}").expect("decode");
    assert_eq!(result, AnswerResult::default());
}

#[test]
fn decode_treats_nulls_as_empty() {
    let raw = r#"{"answer":null,"confidence":null,"reasons":null,"citations":null,"followups":null}"#;
    let result: AnswerResult = serde_json::from_str(raw).expect("decode");
    assert_eq!(result, AnswerResult::default());
}

#[test]
fn decode_rejects_non_numeric_confidence() {
    let raw = r#"{"answer":"a","confidence":"high"}"#;
    assert!(serde_json::from_str::<AnswerResult>(raw).is_err());
}

#[test]
fn confidence_exact_ties_round_away_from_zero() {
    assert_eq!(format_confidence(Some(0.125)), "0.13");
    assert_eq!(format_confidence(Some(0.625)), "0.63");
    assert_eq!(format_confidence(Some(0.375)), "0.38");
    assert_eq!(format_confidence(Some(0.875)), "0.88");
    assert_eq!(format_confidence(Some(-0.125)), "-0.13");
}

#[test]
fn confidence_near_ties_follow_exact_binary_value() {
    // 0.145 is stored just below the tie and 0.135 just above it.
    assert_eq!(format_confidence(Some(0.145)), "0.14");
    assert_eq!(format_confidence(Some(0.135)), "0.14");
    assert_eq!(format_confidence(Some(0.25)), "0.25");
}
