//! Result view model.
//!
//! DESIGN
//! ======
//! `ResultView` is the full state of the result region: the browser panel
//! renders it through a signal and the terminal client prints it. Applying an
//! [`Outcome`] replaces every field, so the view always reflects exactly the
//! most recently completed request.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::answer::{CitationView, format_confidence};
use crate::error::Outcome;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultView {
    /// Hidden until the first submission completes; never hidden again.
    pub visible: bool,
    /// Set when the last completed submission failed.
    pub failed: bool,
    pub answer: String,
    pub confidence: String,
    pub reasons: Vec<String>,
    pub citations: Vec<CitationView>,
}

impl ResultView {
    /// Replace the view contents with a completed outcome.
    pub fn apply(&mut self, outcome: Outcome) {
        self.visible = true;
        self.failed = !outcome.is_success();
        self.reasons.clear();
        self.citations.clear();
        match outcome {
            Outcome::Success(result) => {
                self.answer = result.answer;
                self.confidence = format_confidence(result.confidence);
                self.reasons.extend(result.reasons);
                self.citations.extend(result.citations.iter().map(|c| c.view()));
            }
            Outcome::Failure(message) => {
                self.answer = message;
                self.confidence.clear();
            }
        }
    }
}
