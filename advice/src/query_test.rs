use super::*;

fn form(question: &str, district: &str, crop: &str, lang: &str) -> FormSnapshot {
    FormSnapshot {
        question: question.to_owned(),
        district: district.to_owned(),
        crop: crop.to_owned(),
        lang: lang.to_owned(),
    }
}

#[test]
fn from_form_keeps_filled_fields() {
    let query = Query::from_form(&form("When to sow?", "Pune", "wheat", "hi"));
    assert_eq!(query.question, "When to sow?");
    assert_eq!(query.district.as_deref(), Some("Pune"));
    assert_eq!(query.crop.as_deref(), Some("wheat"));
    assert_eq!(query.lang, "hi");
}

#[test]
fn from_form_empty_filters_become_absent() {
    let query = Query::from_form(&form("q", "", "", "en"));
    assert_eq!(query.district, None);
    assert_eq!(query.crop, None);
}

#[test]
fn from_form_empty_lang_defaults_to_en() {
    let query = Query::from_form(&form("q", "", "", ""));
    assert_eq!(query.lang, "en");
}

#[test]
fn from_form_sends_question_verbatim_even_when_empty() {
    let query = Query::from_form(&form("", "", "", ""));
    assert_eq!(query.question, "");
}

#[test]
fn whitespace_filter_is_not_treated_as_empty() {
    let query = Query::from_form(&form("q", " ", "", ""));
    assert_eq!(query.district.as_deref(), Some(" "));
}

#[test]
fn serialized_body_uses_null_for_empty_filters() {
    let query = Query::from_form(&form("Irrigate?", "", "rice", ""));
    let body = serde_json::to_value(&query).expect("serialize");
    assert_eq!(
        body,
        serde_json::json!({
            "question": "Irrigate?",
            "district": null,
            "crop": "rice",
            "lang": "en"
        })
    );
}

#[test]
fn serialized_body_never_contains_empty_string_filters() {
    for (district, crop) in [("", ""), ("Nashik", ""), ("", "onion"), ("Nashik", "onion")] {
        let body = serde_json::to_value(Query::from_form(&form("q", district, crop, "en"))).expect("serialize");
        for (key, input) in [("district", district), ("crop", crop)] {
            if input.is_empty() {
                assert!(body[key].is_null(), "{key} should be null for empty input");
            } else {
                assert_eq!(body[key], input);
            }
        }
    }
}

#[test]
fn builder_matches_form_normalization() {
    let built = Query::new("q").with_district("").with_crop("maize").with_lang("");
    let from_form = Query::from_form(&form("q", "", "maize", ""));
    assert_eq!(built, from_form);
}

#[test]
fn deserialize_missing_lang_defaults() {
    let query: Query = serde_json::from_str(r#"{"question":"q","district":null,"crop":null}"#).expect("parse");
    assert_eq!(query.lang, "en");
}

#[test]
fn deserialize_null_or_empty_lang_defaults() {
    for raw in [
        r#"{"question":"q","district":null,"crop":null,"lang":null}"#,
        r#"{"question":"q","district":null,"crop":null,"lang":""}"#,
    ] {
        let query: Query = serde_json::from_str(raw).expect("parse");
        assert_eq!(query.lang, "en", "body: {raw}");
    }
}

#[test]
fn deserialize_keeps_explicit_lang() {
    let query: Query = serde_json::from_str(r#"{"question":"q","district":null,"crop":null,"lang":"hi"}"#).expect("parse");
    assert_eq!(query.lang, "hi");
}
