//! User document exchanged with the external search engine.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One indexed user record.
///
/// A pure data-transfer value: the engine is the system of record and assigns
/// its own internal identifier per write, so no uniqueness is enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDocument {
    /// Display identifier.
    #[schema(example = "johndoe")]
    pub username: String,
    /// Email-shaped contact address.
    #[schema(example = "john.doe@example.com")]
    pub email: String,
    /// Free-form full name.
    #[schema(example = "John Doe")]
    pub real_name: String,
}
