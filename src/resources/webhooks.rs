//! Webhook subscription operations.

use super::{decode, decode_items, encode};
use crate::client::{DixaClient, Expect, Result};
use crate::model::{WebhookSubscription, WebhookSubscriptionCreate, WebhookSubscriptionPatch};

/// Service for webhook subscription operations.
pub struct WebhooksService<'c> {
    client: &'c DixaClient,
}

impl<'c> WebhooksService<'c> {
    pub(crate) const fn new(client: &'c DixaClient) -> Self {
        Self { client }
    }

    /// Creates a webhook subscription.
    pub async fn create(&self, body: &WebhookSubscriptionCreate) -> Result<WebhookSubscription> {
        let payload = self
            .client
            .post("/v1/webhooks", encode(body)?, Expect::Object)
            .await?;
        decode(payload)
    }

    /// Fetches a single webhook subscription by id.
    pub async fn get(&self, webhook_id: &str) -> Result<WebhookSubscription> {
        let payload = self
            .client
            .get(&format!("/v1/webhooks/{webhook_id}"), None, Expect::Object)
            .await?;
        decode(payload)
    }

    /// Lists every webhook subscription.
    pub async fn list(&self) -> Result<Vec<WebhookSubscription>> {
        let items = self.client.paginate("/v1/webhooks", None).await?;
        decode_items(items)
    }

    /// Partially updates a webhook subscription.
    pub async fn patch(
        &self,
        webhook_id: &str,
        body: &WebhookSubscriptionPatch,
    ) -> Result<WebhookSubscription> {
        let payload = self
            .client
            .patch(
                &format!("/v1/webhooks/{webhook_id}"),
                Some(encode(body)?),
                Expect::Object,
            )
            .await?;
        decode(payload)
    }

    /// Deletes a webhook subscription.
    pub async fn delete(&self, webhook_id: &str) -> Result<()> {
        self.client
            .delete(&format!("/v1/webhooks/{webhook_id}"))
            .await?;
        Ok(())
    }
}
