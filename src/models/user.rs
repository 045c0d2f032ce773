//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User profile stored in MongoDB, keyed by the identity provider's
/// opaque subject id. One document per firebaseUID and per email.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identity-provider subject id (application user key)
    #[serde(rename = "firebaseUID")]
    pub firebase_uid: String,
    /// Email address
    pub email: String,
    /// Display name
    pub name: String,
    /// Profile picture URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
    /// Last login timestamp (ISO 8601)
    pub last_login: String,
    /// When the user first signed in (ISO 8601)
    pub created_at: String,
}
