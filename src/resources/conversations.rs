//! Conversation operations.

use std::collections::HashMap;

use serde_json::{json, Value};

use super::{decode, decode_items, encode};
use crate::client::{DixaClient, Expect, HttpMethod, HttpRequest, Result};
use crate::model::{
    ActivityLog, AnonymizationRequest, Conversation, ConversationCreate, ConversationFlow,
    ConversationRating, ConversationSearchHit, CustomAttribute, InternalNote, Message, MessageAdd,
    NoteAdd, Tag,
};

/// Service for conversation operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: dixa_api::DixaClient) -> dixa_api::Result<()> {
/// let conversation = client.conversations().get(123).await?;
/// let messages = client.conversations().list_messages(123).await?;
/// # Ok(())
/// # }
/// ```
pub struct ConversationsService<'c> {
    client: &'c DixaClient,
}

impl<'c> ConversationsService<'c> {
    pub(crate) const fn new(client: &'c DixaClient) -> Self {
        Self { client }
    }

    /// Creates a conversation on the channel named by the request body.
    pub async fn create(&self, body: &ConversationCreate) -> Result<Conversation> {
        let payload = self
            .client
            .post("/v1/conversations", encode(body)?, Expect::Object)
            .await?;
        decode(payload)
    }

    /// Fetches a single conversation by its csid.
    pub async fn get(&self, csid: u64) -> Result<Conversation> {
        let payload = self
            .client
            .get(&format!("/v1/conversations/{csid}"), None, Expect::Object)
            .await?;
        decode(payload)
    }

    /// Adds an inbound or outbound message to a conversation.
    pub async fn add_message(&self, csid: u64, body: &MessageAdd) -> Result<Message> {
        let payload = self
            .client
            .post(
                &format!("/v1/conversations/{csid}/messages"),
                encode(body)?,
                Expect::Object,
            )
            .await?;
        decode(payload)
    }

    /// Adds a single internal note to a conversation.
    pub async fn add_internal_note(&self, csid: u64, body: &NoteAdd) -> Result<InternalNote> {
        let payload = self
            .client
            .post(
                &format!("/v1/conversations/{csid}/notes"),
                encode(body)?,
                Expect::Object,
            )
            .await?;
        decode(payload)
    }

    /// Adds several internal notes in one request.
    pub async fn add_internal_notes(
        &self,
        csid: u64,
        notes: &[NoteAdd],
    ) -> Result<Vec<InternalNote>> {
        let payload = self
            .client
            .post(
                &format!("/v1/conversations/{csid}/notes/bulk"),
                json!({ "data": notes }),
                Expect::Array,
            )
            .await?;
        decode(payload)
    }

    /// Requests anonymization of an entire conversation.
    pub async fn anonymize(&self, csid: u64) -> Result<AnonymizationRequest> {
        let payload = self
            .client
            .patch(
                &format!("/v1/conversations/{csid}/anonymize"),
                None,
                Expect::Object,
            )
            .await?;
        decode(payload)
    }

    /// Requests anonymization of a single message.
    pub async fn anonymize_message(
        &self,
        csid: u64,
        message_id: &str,
    ) -> Result<AnonymizationRequest> {
        let payload = self
            .client
            .patch(
                &format!("/v1/conversations/{csid}/messages/{message_id}/anonymize"),
                None,
                Expect::Object,
            )
            .await?;
        decode(payload)
    }

    /// Claims a conversation for an agent.
    pub async fn claim(&self, csid: u64, agent_id: &str, force: bool) -> Result<()> {
        self.client
            .put(
                &format!("/v1/conversations/{csid}/claim"),
                Some(json!({ "agentId": agent_id, "force": force })),
                Expect::Any,
            )
            .await?;
        Ok(())
    }

    /// Closes a conversation on behalf of an agent.
    pub async fn close(&self, csid: u64, agent_id: &str) -> Result<()> {
        self.client
            .put(
                &format!("/v1/conversations/{csid}/close"),
                Some(json!({ "userId": agent_id })),
                Expect::Any,
            )
            .await?;
        Ok(())
    }

    /// Reopens a closed conversation on behalf of an agent.
    pub async fn reopen(&self, csid: u64, agent_id: &str) -> Result<()> {
        self.client
            .put(
                &format!("/v1/conversations/{csid}/reopen"),
                Some(json!({ "userId": agent_id })),
                Expect::Any,
            )
            .await?;
        Ok(())
    }

    /// Transfers a conversation to another queue, optionally naming the
    /// agent performing the transfer.
    pub async fn transfer(&self, csid: u64, queue_id: &str, user_id: Option<&str>) -> Result<()> {
        let mut body = json!({ "queueId": queue_id });
        if let Some(user_id) = user_id {
            body["userId"] = Value::String(user_id.to_string());
        }
        self.client
            .post(
                &format!("/v1/conversations/{csid}/transfer/queue"),
                body,
                Expect::Any,
            )
            .await?;
        Ok(())
    }

    /// Applies a tag to a conversation.
    pub async fn tag(&self, csid: u64, tag_id: &str) -> Result<()> {
        self.client
            .put(
                &format!("/v1/conversations/{csid}/tags/{tag_id}"),
                None,
                Expect::Any,
            )
            .await?;
        Ok(())
    }

    /// Removes a tag from a conversation.
    pub async fn untag(&self, csid: u64, tag_id: &str) -> Result<()> {
        let request = HttpRequest::builder(
            HttpMethod::Delete,
            format!("/v1/conversations/{csid}/tags/{tag_id}"),
        )
        .expect(Expect::Any)
        .build()?;
        self.client.execute(&request).await?;
        Ok(())
    }

    /// Sets custom attribute values on a conversation. Returns the
    /// full attribute set as stored after the update.
    pub async fn patch_custom_attributes(
        &self,
        csid: u64,
        attributes: &HashMap<String, Value>,
    ) -> Result<Vec<CustomAttribute>> {
        let payload = self
            .client
            .patch(
                &format!("/v1/conversations/{csid}/custom-attributes"),
                Some(encode(attributes)?),
                Expect::Array,
            )
            .await?;
        decode(payload)
    }

    /// Lists every message in a conversation, oldest first.
    pub async fn list_messages(&self, csid: u64) -> Result<Vec<Message>> {
        let items = self
            .client
            .paginate(&format!("/v1/conversations/{csid}/messages"), None)
            .await?;
        decode_items(items)
    }

    /// Lists the internal notes on a conversation.
    pub async fn list_internal_notes(&self, csid: u64) -> Result<Vec<InternalNote>> {
        let items = self
            .client
            .paginate(&format!("/v1/conversations/{csid}/notes"), None)
            .await?;
        decode_items(items)
    }

    /// Lists the activity log of a conversation.
    pub async fn list_activity_log(&self, csid: u64) -> Result<Vec<ActivityLog>> {
        let items = self
            .client
            .paginate(&format!("/v1/conversations/{csid}/activitylog"), None)
            .await?;
        decode_items(items)
    }

    /// Lists the tags currently applied to a conversation.
    pub async fn list_tags(&self, csid: u64) -> Result<Vec<Tag>> {
        let items = self
            .client
            .paginate(&format!("/v1/conversations/{csid}/tags"), None)
            .await?;
        decode_items(items)
    }

    /// Lists the flows a conversation passed through, optionally
    /// filtered by channel.
    pub async fn list_flows(
        &self,
        csid: u64,
        channel: Option<&str>,
    ) -> Result<Vec<ConversationFlow>> {
        let query = channel.map(|channel| {
            let mut params = HashMap::new();
            params.insert("channel".to_string(), channel.to_string());
            params
        });
        let items = self
            .client
            .paginate(&format!("/v1/conversations/{csid}/flows"), query)
            .await?;
        decode_items(items)
    }

    /// Lists the conversations linked to this one.
    pub async fn list_linked_conversations(&self, csid: u64) -> Result<Vec<Conversation>> {
        let items = self
            .client
            .paginate(&format!("/v1/conversations/{csid}/linked"), None)
            .await?;
        decode_items(items)
    }

    /// Lists the satisfaction ratings left on a conversation.
    pub async fn list_rating(&self, csid: u64) -> Result<Vec<ConversationRating>> {
        let items = self
            .client
            .paginate(&format!("/v1/conversations/{csid}/rating"), None)
            .await?;
        decode_items(items)
    }

    /// Lists the activity log across the whole organization.
    pub async fn list_organization_activity_log(&self) -> Result<Vec<ActivityLog>> {
        let items = self
            .client
            .paginate("/v1/conversations/activitylog", None)
            .await?;
        decode_items(items)
    }

    /// Searches conversations by free text, following pagination to the
    /// end of the result set.
    ///
    /// The search endpoint lives under the `/v1/search` root, not under
    /// the conversations collection.
    pub async fn search(&self, query: &str) -> Result<Vec<ConversationSearchHit>> {
        let mut params = HashMap::new();
        params.insert("query".to_string(), query.to_string());
        let items = self
            .client
            .paginate("/v1/search/conversations", Some(params))
            .await?;
        decode_items(items)
    }
}
