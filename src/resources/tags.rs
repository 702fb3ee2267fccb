//! Tag operations.

use super::{decode, encode};
use crate::client::{DixaClient, Expect, Result};
use crate::model::{Tag, TagCreate};

/// Service for tag operations.
pub struct TagsService<'c> {
    client: &'c DixaClient,
}

impl<'c> TagsService<'c> {
    pub(crate) const fn new(client: &'c DixaClient) -> Self {
        Self { client }
    }

    /// Creates a tag.
    pub async fn create(&self, body: &TagCreate) -> Result<Tag> {
        let payload = self
            .client
            .post("/v1/tags", encode(body)?, Expect::Object)
            .await?;
        decode(payload)
    }

    /// Fetches a single tag by id.
    pub async fn get(&self, tag_id: &str) -> Result<Tag> {
        let payload = self
            .client
            .get(&format!("/v1/tags/{tag_id}"), None, Expect::Object)
            .await?;
        decode(payload)
    }

    /// Lists every tag in the organization.
    pub async fn list(&self) -> Result<Vec<Tag>> {
        let payload = self.client.get("/v1/tags", None, Expect::Array).await?;
        decode(payload)
    }

    /// Makes a tag available for use on conversations.
    pub async fn activate(&self, tag_id: &str) -> Result<()> {
        self.client
            .patch(&format!("/v1/tags/{tag_id}/activate"), None, Expect::Any)
            .await?;
        Ok(())
    }

    /// Retires a tag without removing it from conversations it is
    /// already applied to.
    pub async fn deactivate(&self, tag_id: &str) -> Result<()> {
        self.client
            .patch(&format!("/v1/tags/{tag_id}/deactivate"), None, Expect::Any)
            .await?;
        Ok(())
    }
}
