//! Custom attribute values attached to conversations and end users.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A custom attribute as stored on an entity.
///
/// Returned by the custom-attribute patch endpoints, which answer with
/// the full attribute set after the update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAttribute {
    pub id: Option<String>,
    pub name: Option<String>,
    /// Machine-readable attribute identifier.
    pub identifier: Option<String>,
    /// The stored value; a string or list of strings depending on the
    /// attribute definition.
    #[serde(default)]
    pub value: Value,
}
