//! HTTP handlers, shared state, and parameter validation.

pub mod populate;
pub mod search;
pub mod state;
pub mod status;
