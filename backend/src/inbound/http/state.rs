//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the domain use-cases and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserIndex;
use crate::domain::{IndexPopulator, UserSearch};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Synthetic-data population use-case.
    pub populator: IndexPopulator,
    /// Fuzzy search use-case.
    pub search: UserSearch,
}

impl HttpState {
    /// Construct state from the shared engine port.
    pub fn new(index: Arc<dyn UserIndex>) -> Self {
        Self {
            populator: IndexPopulator::new(Arc::clone(&index)),
            search: UserSearch::new(index),
        }
    }
}
