//! Agent operations.

use super::{decode, decode_items, encode};
use crate::client::{DixaClient, Expect, Result};
use crate::model::{Agent, AgentCreate, AgentPatch};

/// Service for agent operations.
pub struct AgentsService<'c> {
    client: &'c DixaClient,
}

impl<'c> AgentsService<'c> {
    pub(crate) const fn new(client: &'c DixaClient) -> Self {
        Self { client }
    }

    /// Creates an agent.
    pub async fn create(&self, body: &AgentCreate) -> Result<Agent> {
        let payload = self
            .client
            .post("/v1/agents", encode(body)?, Expect::Object)
            .await?;
        decode(payload)
    }

    /// Fetches a single agent by id.
    pub async fn get(&self, agent_id: &str) -> Result<Agent> {
        let payload = self
            .client
            .get(&format!("/v1/agents/{agent_id}"), None, Expect::Object)
            .await?;
        decode(payload)
    }

    /// Lists every agent in the organization.
    pub async fn list(&self) -> Result<Vec<Agent>> {
        let items = self.client.paginate("/v1/agents", None).await?;
        decode_items(items)
    }

    /// Replaces an agent.
    pub async fn update(&self, agent_id: &str, body: &AgentCreate) -> Result<Agent> {
        let payload = self
            .client
            .put(
                &format!("/v1/agents/{agent_id}"),
                Some(encode(body)?),
                Expect::Object,
            )
            .await?;
        decode(payload)
    }

    /// Partially updates an agent. Unset fields are left untouched.
    pub async fn patch(&self, agent_id: &str, body: &AgentPatch) -> Result<Agent> {
        let payload = self
            .client
            .patch(
                &format!("/v1/agents/{agent_id}"),
                Some(encode(body)?),
                Expect::Object,
            )
            .await?;
        decode(payload)
    }

    /// Deletes an agent.
    pub async fn delete(&self, agent_id: &str) -> Result<()> {
        self.client
            .delete(&format!("/v1/agents/{agent_id}"))
            .await?;
        Ok(())
    }
}
