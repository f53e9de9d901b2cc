//! Networking for the `/ask` exchange.

pub mod api;
