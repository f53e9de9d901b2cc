//! Shared request/response model for the advisor `/ask` contract.
//!
//! This crate owns the wire representation used by the `client`, the host
//! server, and the `cli`. It also owns the pure response-shaping logic so the
//! browser panel and the terminal render a result the same way.
//!
//! FLOW
//! ====
//! `FormSnapshot` -> [`Query`] -> (HTTP, owned by callers) ->
//! `Result<AnswerResult, AskError>` -> [`Outcome`] -> [`ResultView::apply`].

pub mod answer;
pub mod error;
pub mod query;
pub mod view;

pub use answer::{AnswerResult, Citation, CitationView, format_confidence};
pub use error::{AskError, Outcome};
pub use query::{FormSnapshot, Query};
pub use view::ResultView;

/// Path of the advisor endpoint, relative to the serving origin.
pub const ASK_PATH: &str = "/ask";

/// Language used when the form leaves `lang` empty.
pub const DEFAULT_LANG: &str = "en";

/// Languages offered by the UI selector. Submissions are not checked against this list.
pub const SUPPORTED_LANGS: [&str; 2] = ["en", "hi"];
