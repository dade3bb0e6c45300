//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User record stored in the users document.
///
/// Serialized field order and names match the wire format: `username` may be
/// absent entirely (it is omitted rather than serialized as null), and the
/// identifier travels as `_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Free-form display name; no uniqueness or non-emptiness constraint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Opaque unique identifier (UUID v4), assigned at creation
    #[serde(rename = "_id")]
    pub id: String,
}
