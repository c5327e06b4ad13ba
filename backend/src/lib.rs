//! Thin HTTP facade over an external Elasticsearch-compatible search engine.
//!
//! Two operations: bulk-generate synthetic user documents into a fixed index,
//! and run a fuzzy multi-field search against it. Indexing, ranking, and
//! storage all live in the engine; this crate only orchestrates.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use middleware::Trace;
