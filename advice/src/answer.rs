//! Advisor response payload and per-field display rules.
//!
//! DESIGN
//! ======
//! Every response field is optional from the client's point of view. Missing
//! keys and explicit `null` both decode to the field's empty default, so the
//! renderer never has to distinguish the two.

#[cfg(test)]
#[path = "answer_test.rs"]
mod answer_test;

use serde::{Deserialize, Deserializer, Serialize};

const SOURCE_PLACEHOLDER: &str = "source";
const DATASET_PLACEHOLDER: &str = "dataset";

/// Structured answer returned by a successful `POST /ask`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    /// Answer text.
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: String,
    /// Confidence score, conceptually within `0.0..=1.0`.
    #[serde(default)]
    pub confidence: Option<f64>,
    /// Reasoning bullet points, in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub reasons: Vec<String>,
    /// Supporting sources, in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub citations: Vec<Citation>,
    /// Suggested next questions. Only the terminal client shows these.
    #[serde(default, deserialize_with = "null_as_default")]
    pub followups: Vec<String>,
}

/// A dataset reference backing an answer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub dataset: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Render-ready form of a [`Citation`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CitationView {
    /// `"{dataset} ({source})"` with placeholders substituted.
    pub label: String,
    /// Link target; `None` renders as plain text.
    pub href: Option<String>,
}

impl Citation {
    /// Display text; blank `dataset`/`source` fall back to literal placeholders.
    #[must_use]
    pub fn label(&self) -> String {
        let dataset = filled(self.dataset.as_deref()).unwrap_or(DATASET_PLACEHOLDER);
        let source = filled(self.source.as_deref()).unwrap_or(SOURCE_PLACEHOLDER);
        format!("{dataset} ({source})")
    }

    /// Link target, present only for a non-empty `url`.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        filled(self.url.as_deref())
    }

    #[must_use]
    pub fn view(&self) -> CitationView {
        CitationView { label: self.label(), href: self.link().map(str::to_owned) }
    }
}

/// Format a confidence score with exactly two decimals; absent renders empty.
///
/// Exact ties round away from zero (`0.125` -> `"0.13"`), matching the
/// browser's `Number.prototype.toFixed`.
#[must_use]
pub fn format_confidence(confidence: Option<f64>) -> String {
    confidence.map(|c| format!("{:.2}", round_ties_away(c))).unwrap_or_default()
}

/// `{:.2}` breaks exact ties to even. The only doubles sitting exactly on a
/// hundredths tie are odd multiples of 1/8, where `c * 8` and `c * 100` are exact.
fn round_ties_away(c: f64) -> f64 {
    let eighths = c * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        (c * 100.0).round() / 100.0
    } else {
        c
    }
}

fn filled(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
