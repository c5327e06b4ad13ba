//! Elasticsearch adapter for the user index port.

mod dto;
mod http_index;

pub use http_index::ElasticsearchUserIndex;
