//! Outgoing question payload and form normalization.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::DEFAULT_LANG;

/// Raw input field values captured at submit time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub question: String,
    pub district: String,
    pub crop: String,
    pub lang: String,
}

/// Body of `POST /ask`.
///
/// `district` and `crop` serialize as JSON `null` when absent, never as `""`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Natural-language question. Sent verbatim, not validated locally.
    pub question: String,
    /// District filter, if any.
    pub district: Option<String>,
    /// Crop filter, if any.
    pub crop: Option<String>,
    /// Language code for the answer. Missing, `null`, or `""` decode as [`DEFAULT_LANG`].
    #[serde(default = "default_lang", deserialize_with = "lang_or_default")]
    pub lang: String,
}

impl Query {
    /// Build a query with no filters in the default language.
    #[must_use]
    pub fn new(question: impl Into<String>) -> Self {
        Self { question: question.into(), district: None, crop: None, lang: default_lang() }
    }

    /// Build a query from a form snapshot, applying field normalization.
    #[must_use]
    pub fn from_form(form: &FormSnapshot) -> Self {
        Self::new(form.question.clone())
            .with_district(&form.district)
            .with_crop(&form.crop)
            .with_lang(&form.lang)
    }

    /// Set the district; an empty value clears it.
    #[must_use]
    pub fn with_district(mut self, district: &str) -> Self {
        self.district = non_empty(district);
        self
    }

    /// Set the crop; an empty value clears it.
    #[must_use]
    pub fn with_crop(mut self, crop: &str) -> Self {
        self.crop = non_empty(crop);
        self
    }

    /// Set the language; an empty value falls back to [`DEFAULT_LANG`].
    #[must_use]
    pub fn with_lang(mut self, lang: &str) -> Self {
        self.lang = non_empty(lang).unwrap_or_else(default_lang);
        self
    }
}

fn default_lang() -> String {
    DEFAULT_LANG.to_owned()
}

fn lang_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|lang| !lang.is_empty()).unwrap_or_else(default_lang))
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() { None } else { Some(value.to_owned()) }
}
