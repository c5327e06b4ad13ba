//! Transport-free core: document model, generation, and use-cases.

pub mod generator;
pub mod populate;
pub mod ports;
pub mod search;
pub mod user;

pub use populate::IndexPopulator;
pub use search::UserSearch;
pub use user::UserDocument;
