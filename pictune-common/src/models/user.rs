//! User entity

use serde::{Deserialize, Serialize};

/// A user account as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub user_name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Body for POST /auth/signup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Body for PUT /users/{id}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub user_name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
}
