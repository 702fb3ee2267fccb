//! Team operations.

use super::{decode, decode_items, encode};
use crate::client::{DixaClient, Expect, HttpMethod, HttpRequest, Result};
use crate::model::{Agent, Team, TeamCreate, TeamMemberChange};

/// Service for team operations.
pub struct TeamsService<'c> {
    client: &'c DixaClient,
}

impl<'c> TeamsService<'c> {
    pub(crate) const fn new(client: &'c DixaClient) -> Self {
        Self { client }
    }

    /// Creates a team.
    pub async fn create(&self, body: &TeamCreate) -> Result<Team> {
        let payload = self
            .client
            .post("/v1/teams", encode(body)?, Expect::Object)
            .await?;
        decode(payload)
    }

    /// Fetches a single team by id.
    pub async fn get(&self, team_id: &str) -> Result<Team> {
        let payload = self
            .client
            .get(&format!("/v1/teams/{team_id}"), None, Expect::Object)
            .await?;
        decode(payload)
    }

    /// Lists every team in the organization.
    pub async fn list(&self) -> Result<Vec<Team>> {
        let items = self.client.paginate("/v1/teams", None).await?;
        decode_items(items)
    }

    /// Deletes a team.
    pub async fn delete(&self, team_id: &str) -> Result<()> {
        self.client.delete(&format!("/v1/teams/{team_id}")).await?;
        Ok(())
    }

    /// Lists the agents belonging to a team.
    pub async fn list_agents(&self, team_id: &str) -> Result<Vec<Agent>> {
        let items = self
            .client
            .paginate(&format!("/v1/teams/{team_id}/agents"), None)
            .await?;
        decode_items(items)
    }

    /// Adds agents to a team.
    pub async fn add_agents(&self, team_id: &str, change: &TeamMemberChange) -> Result<()> {
        self.client
            .put(
                &format!("/v1/teams/{team_id}/agents"),
                Some(encode(change)?),
                Expect::Any,
            )
            .await?;
        Ok(())
    }

    /// Removes agents from a team.
    pub async fn remove_agents(&self, team_id: &str, change: &TeamMemberChange) -> Result<()> {
        let request =
            HttpRequest::builder(HttpMethod::Delete, format!("/v1/teams/{team_id}/agents"))
                .body(encode(change)?)
                .expect(Expect::Any)
                .build()?;
        self.client.execute(&request).await?;
        Ok(())
    }
}
