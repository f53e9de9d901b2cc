#[cfg(test)]
#[path = "ask_test.rs"]
mod ask_test;

use advice::{Outcome, ResultView};

/// State behind the question panel.
///
/// Overlapping submissions are allowed: each completion overwrites `result`
/// wholesale, so whichever request finishes last is what the user sees.
/// `in_flight` only drives the busy label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AskState {
    pub result: ResultView,
    pub in_flight: usize,
    /// Number of submissions started since load, used to tag log lines.
    pub submitted: u64,
}

impl AskState {
    /// Record a new submission and return its sequence number.
    pub fn begin(&mut self) -> u64 {
        self.in_flight += 1;
        self.submitted += 1;
        self.submitted
    }

    /// Record a completed submission and render its outcome.
    pub fn complete(&mut self, outcome: Outcome) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.result.apply(outcome);
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}
