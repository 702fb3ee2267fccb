//! Queue operations.

use super::{decode, decode_items, encode};
use crate::client::{DixaClient, Expect, HttpMethod, HttpRequest, Result};
use crate::model::{Agent, Queue, QueueCreate, QueueMemberChange};

/// Service for queue operations.
pub struct QueuesService<'c> {
    client: &'c DixaClient,
}

impl<'c> QueuesService<'c> {
    pub(crate) const fn new(client: &'c DixaClient) -> Self {
        Self { client }
    }

    /// Creates a queue.
    pub async fn create(&self, body: &QueueCreate) -> Result<Queue> {
        let payload = self
            .client
            .post("/v1/queues", encode(body)?, Expect::Object)
            .await?;
        decode(payload)
    }

    /// Fetches a single queue by id.
    pub async fn get(&self, queue_id: &str) -> Result<Queue> {
        let payload = self
            .client
            .get(&format!("/v1/queues/{queue_id}"), None, Expect::Object)
            .await?;
        decode(payload)
    }

    /// Lists every queue in the organization.
    pub async fn list(&self) -> Result<Vec<Queue>> {
        let items = self.client.paginate("/v1/queues", None).await?;
        decode_items(items)
    }

    /// Lists the agents assigned to a queue.
    pub async fn list_agents(&self, queue_id: &str) -> Result<Vec<Agent>> {
        let items = self
            .client
            .paginate(&format!("/v1/queues/{queue_id}/members"), None)
            .await?;
        decode_items(items)
    }

    /// Assigns agents to a queue.
    pub async fn assign_agents(&self, queue_id: &str, change: &QueueMemberChange) -> Result<()> {
        self.client
            .post(
                &format!("/v1/queues/{queue_id}/members"),
                encode(change)?,
                Expect::Any,
            )
            .await?;
        Ok(())
    }

    /// Removes agents from a queue.
    pub async fn remove_agents(&self, queue_id: &str, change: &QueueMemberChange) -> Result<()> {
        let request = HttpRequest::builder(
            HttpMethod::Delete,
            format!("/v1/queues/{queue_id}/members"),
        )
        .body(encode(change)?)
        .expect(Expect::Any)
        .build()?;
        self.client.execute(&request).await?;
        Ok(())
    }
}
