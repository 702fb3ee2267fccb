//! Conversation records and request bodies.
//!
//! Conversations are channel-tagged on the wire: the `_type`
//! discriminator selects the variant decoder directly, and an unknown
//! tag fails with a serde unknown-variant error instead of silently
//! falling through.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Direction of a message or callback relative to the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// From an end user to the organization.
    Inbound,
    /// From the organization to an end user.
    Outbound,
}

/// Fields shared by every conversation channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationDetails {
    /// The conversation id (csid).
    pub id: u64,
    /// The end user who requested the conversation.
    pub requester_id: Option<String>,
    /// The queue the conversation is offered to.
    pub queue_id: Option<String>,
    /// The agent currently assigned, if any.
    pub assignee_id: Option<String>,
    /// Subject line, for channels that carry one.
    pub subject: Option<String>,
    /// ISO 639-1 language code.
    pub language: Option<String>,
    /// Conversation state as reported by the API (e.g., `open`, `closed`).
    pub state: Option<String>,
    pub direction: Option<Direction>,
    pub created_at: Option<DateTime<Utc>>,
}

/// A conversation, tagged by channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum Conversation {
    /// An email conversation.
    Email(ConversationDetails),
    /// A live chat conversation.
    Chat(ConversationDetails),
    /// A contact form submission.
    ContactForm(ConversationDetails),
    /// A requested phone callback.
    Callback(ConversationDetails),
    /// An SMS conversation.
    Sms(ConversationDetails),
}

impl Conversation {
    /// Returns the channel-independent fields.
    #[must_use]
    pub const fn details(&self) -> &ConversationDetails {
        match self {
            Self::Email(d) | Self::Chat(d) | Self::ContactForm(d) | Self::Callback(d)
            | Self::Sms(d) => d,
        }
    }

    /// Returns the conversation id.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.details().id
    }
}

/// Message content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl Content {
    /// Creates plain text content.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            content_type: None,
        }
    }
}

/// An attachment on a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty_name: Option<String>,
}

/// A message within a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    /// The agent or end user who authored the message.
    pub author_id: Option<String>,
    pub direction: Option<Direction>,
    pub text: Option<String>,
    #[serde(default)]
    pub attachments: Vec<File>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for adding a message, tagged by direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum MessageAdd {
    /// A message authored by an end user.
    Inbound(InboundMessage),
    /// A message authored by an agent.
    Outbound(OutboundMessage),
}

/// Body of an inbound message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundMessage {
    pub content: Content,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub attachments: Vec<File>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_email: Option<String>,
}

/// Body of an outbound message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundMessage {
    pub agent_id: String,
    pub content: Content,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub attachments: Vec<File>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub bcc: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub cc: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_email: Option<String>,
}

/// Request body for creating a conversation, tagged by channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum ConversationCreate {
    /// Create a phone callback request.
    #[serde(rename_all = "camelCase")]
    Callback {
        contact_endpoint_id: String,
        direction: Direction,
        queue_id: String,
        requester_id: String,
    },
    /// Create a chat conversation.
    #[serde(rename_all = "camelCase")]
    Chat {
        #[serde(skip_serializing_if = "Option::is_none")]
        browser_info: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        message: MessageAdd,
        requester_id: String,
        widget_id: String,
    },
    /// Create a conversation from a contact form.
    #[serde(rename_all = "camelCase")]
    ContactForm {
        email_integration_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        message: MessageAdd,
        requester_id: String,
        subject: String,
    },
    /// Create an email conversation.
    #[serde(rename_all = "camelCase")]
    Email {
        email_integration_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        message: MessageAdd,
        requester_id: String,
        subject: String,
    },
    /// Create an SMS conversation.
    #[serde(rename_all = "camelCase")]
    Sms {
        contact_endpoint_id: String,
        message: MessageAdd,
        requester_id: String,
    },
}

/// An internal note on a conversation, visible to agents only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalNote {
    pub id: Option<String>,
    pub message: String,
    pub agent_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for adding an internal note.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteAdd {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// One entry in a conversation's activity log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: String,
    pub conversation_id: Option<u64>,
    /// Activity discriminator (e.g., `ConversationCreated`).
    pub activity_type: Option<String>,
    /// Activity-specific attributes, kept opaque.
    #[serde(default)]
    pub attributes: Value,
    pub created_at: Option<DateTime<Utc>>,
}

/// A hit from the conversation search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSearchHit {
    pub id: u64,
    /// Matched fields and fragments, kept opaque.
    #[serde(default)]
    pub highlights: Value,
}

/// A flow a conversation passed through (chatbot, routing, etc.).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationFlow {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub channel: Option<String>,
}

/// A satisfaction rating left on a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRating {
    pub conversation_id: Option<u64>,
    pub agent_id: Option<String>,
    pub rating_score: Option<i32>,
    pub rating_comment: Option<String>,
    pub rating_status: Option<String>,
}

/// The kind of entity an anonymization request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnonymizationTarget {
    Conversation,
    Message,
    User,
}

/// A pending or completed anonymization request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnonymizationRequest {
    #[serde(rename = "_type")]
    pub target: AnonymizationTarget,
    pub id: String,
    pub initiated_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
    pub requested_by: String,
    pub target_entity_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_conversation_decodes_by_discriminator() {
        let conversation: Conversation = serde_json::from_value(json!({
            "_type": "Email",
            "id": 123,
            "requesterId": "user-1",
            "subject": "Broken widget",
            "state": "open",
            "direction": "Inbound",
            "createdAt": "2026-01-15T09:30:00Z"
        }))
        .unwrap();

        assert!(matches!(conversation, Conversation::Email(_)));
        assert_eq!(conversation.id(), 123);
        assert_eq!(
            conversation.details().subject.as_deref(),
            Some("Broken widget")
        );
    }

    #[test]
    fn test_conversation_rejects_unknown_discriminator() {
        let result: Result<Conversation, _> = serde_json::from_value(json!({
            "_type": "Carrier Pigeon",
            "id": 1
        }));

        let error = result.unwrap_err().to_string();
        assert!(error.contains("Carrier Pigeon") || error.contains("unknown variant"));
    }

    #[test]
    fn test_message_add_serializes_with_tag() {
        let body = MessageAdd::Outbound(OutboundMessage {
            agent_id: "agent-1".to_string(),
            content: Content::text("Hello"),
            attachments: Vec::new(),
            bcc: Vec::new(),
            cc: Vec::new(),
            external_id: None,
            integration_email: None,
        });

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["_type"], "Outbound");
        assert_eq!(value["agentId"], "agent-1");
        assert_eq!(value["content"]["value"], "Hello");
        assert!(value.get("bcc").is_none());
        assert!(value.get("externalId").is_none());
    }

    #[test]
    fn test_conversation_create_email_serializes_camel_case() {
        let body = ConversationCreate::Email {
            email_integration_id: "integration-1".to_string(),
            language: Some("en".to_string()),
            message: MessageAdd::Inbound(InboundMessage {
                content: Content::text("Help"),
                attachments: Vec::new(),
                external_id: None,
                integration_email: None,
            }),
            requester_id: "user-1".to_string(),
            subject: "Subject".to_string(),
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["_type"], "Email");
        assert_eq!(value["emailIntegrationId"], "integration-1");
        assert_eq!(value["requesterId"], "user-1");
        assert_eq!(value["message"]["_type"], "Inbound");
    }

    #[test]
    fn test_anonymization_request_decodes_target() {
        let request: AnonymizationRequest = serde_json::from_value(json!({
            "_type": "Message",
            "id": "req-1",
            "initiatedAt": "2026-02-01T10:00:00Z",
            "processedAt": null,
            "requestedBy": "agent-1",
            "targetEntityId": "msg-9"
        }))
        .unwrap();

        assert_eq!(request.target, AnonymizationTarget::Message);
        assert!(request.processed_at.is_none());
    }

    #[test]
    fn test_message_tolerates_missing_optional_fields() {
        let message: Message = serde_json::from_value(json!({"id": "msg-1"})).unwrap();
        assert_eq!(message.id, "msg-1");
        assert!(message.author_id.is_none());
        assert!(message.attachments.is_empty());
    }
}
