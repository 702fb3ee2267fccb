//! Resource services mapping API endpoints onto typed operations.
//!
//! Each service borrows the client and composes requests against one
//! endpoint family:
//!
//! ```no_run
//! # async fn example(client: dixa_api::DixaClient) -> dixa_api::client::Result<()> {
//! let conversation = client.conversations().get(123).await?;
//! let agents = client.agents().list().await?;
//! # Ok(())
//! # }
//! ```

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::{DixaClient, Result};

mod agents;
mod conversations;
mod end_users;
mod queues;
mod tags;
mod teams;
mod webhooks;

pub use agents::AgentsService;
pub use conversations::ConversationsService;
pub use end_users::{EndUserListFilter, EndUsersService};
pub use queues::QueuesService;
pub use tags::TagsService;
pub use teams::TeamsService;
pub use webhooks::WebhooksService;

impl DixaClient {
    /// Conversation operations.
    #[must_use]
    pub const fn conversations(&self) -> ConversationsService<'_> {
        ConversationsService::new(self)
    }

    /// End user operations.
    #[must_use]
    pub const fn end_users(&self) -> EndUsersService<'_> {
        EndUsersService::new(self)
    }

    /// Agent operations.
    #[must_use]
    pub const fn agents(&self) -> AgentsService<'_> {
        AgentsService::new(self)
    }

    /// Tag operations.
    #[must_use]
    pub const fn tags(&self) -> TagsService<'_> {
        TagsService::new(self)
    }

    /// Queue operations.
    #[must_use]
    pub const fn queues(&self) -> QueuesService<'_> {
        QueuesService::new(self)
    }

    /// Team operations.
    #[must_use]
    pub const fn teams(&self) -> TeamsService<'_> {
        TeamsService::new(self)
    }

    /// Webhook subscription operations.
    #[must_use]
    pub const fn webhooks(&self) -> WebhooksService<'_> {
        WebhooksService::new(self)
    }
}

/// Decodes a response payload into a typed record.
pub(crate) fn decode<T: DeserializeOwned>(payload: Value) -> Result<T> {
    serde_json::from_value(payload).map_err(Into::into)
}

/// Decodes accumulated page items into typed records.
pub(crate) fn decode_items<T: DeserializeOwned>(items: Vec<Value>) -> Result<Vec<T>> {
    decode(Value::Array(items))
}

/// Serializes a request body.
pub(crate) fn encode<T: serde::Serialize>(body: &T) -> Result<Value> {
    serde_json::to_value(body).map_err(Into::into)
}
