//! End user records and request bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer of the organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndUser {
    pub id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    /// The id of this user in an external system, if linked.
    pub external_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub middle_names: Vec<String>,
    #[serde(default)]
    pub additional_emails: Vec<String>,
    #[serde(default)]
    pub additional_phone_numbers: Vec<String>,
    pub avatar_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for creating an end user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndUserCreate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub middle_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub additional_emails: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub additional_phone_numbers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Request body for a partial end user update.
///
/// Only the fields that are set are sent; everything else is left
/// untouched on the server.
pub type EndUserPatch = EndUserCreate;

/// Request body for a full end user replacement. Fields left unset are
/// cleared on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndUserUpdate {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub external_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub middle_names: Vec<String>,
    #[serde(default)]
    pub additional_emails: Vec<String>,
    #[serde(default)]
    pub additional_phone_numbers: Vec<String>,
    pub avatar_url: Option<String>,
}

/// A patch targeting one user within a bulk operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndUserBulkPatch {
    pub id: String,
    #[serde(flatten)]
    pub patch: EndUserPatch,
}

/// Per-user outcome of a bulk operation.
///
/// Bulk endpoints report success or failure individually for each user
/// in the batch rather than failing the whole request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkActionOutcome {
    /// Outcome discriminator (e.g., `BulkActionSuccess`, `BulkActionFailure`).
    #[serde(rename = "_type")]
    pub outcome: String,
    pub id: Option<String>,
    /// Failure detail, present on failure outcomes.
    pub message: Option<String>,
}

impl BulkActionOutcome {
    /// Returns `true` if this entry reports a success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcome == "BulkActionSuccess"
    }
}
