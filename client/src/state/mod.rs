//! Client-side state.
//!
//! DESIGN
//! ======
//! One `AskState` signal is provided at the app root; the form writes to it
//! when a submission starts and completes, the result region reads from it.

pub mod ask;
