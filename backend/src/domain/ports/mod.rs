//! Domain ports for the hexagonal boundary.

mod user_index;

#[cfg(test)]
pub use user_index::MockUserIndex;
pub use user_index::{USER_INDEX, UserIndex, UserIndexError, UserSearchQuery};
