use serde::{Deserialize, Serialize};

/// Minimal identity adopted by the session gate after a successful login.
///
/// Serialized as `{"phoneNumber": ..., "name": ...}`, the same shape the
/// authentication endpoint returns inside its `user` field. The password is
/// deliberately not part of this type: it exists only inside the login
/// request and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub phone_number: String,
    pub name: String,
}
