//! Queue records and request bodies.

use serde::{Deserialize, Serialize};

/// A queue conversations are offered from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Queue {
    pub id: String,
    pub name: String,
    pub queue_type: Option<String>,
    pub is_default: Option<bool>,
}

/// Request body for creating a queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_functionality: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
}

/// Request body naming the agents to add to or remove from a queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueMemberChange {
    pub agent_ids: Vec<String>,
}
