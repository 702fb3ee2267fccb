//! Team records and request bodies.

use serde::{Deserialize, Serialize};

/// A named group of agents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
}

/// Request body for creating a team.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamCreate {
    pub name: String,
}

/// Request body naming the agents to add to or remove from a team.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberChange {
    pub agent_ids: Vec<String>,
}
