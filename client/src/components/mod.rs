//! UI components for the question panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `query_panel` captures input and starts submissions; `result_panel` renders
//! the shared `AskState` result. Both read the state from Leptos context.

pub mod query_panel;
pub mod result_panel;
