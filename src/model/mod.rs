//! Typed records exchanged with the API.
//!
//! Responses deserialize from the payload left after envelope
//! unwrapping; request bodies serialize with `camelCase` member names
//! and omit unset optional fields.

mod agent;
mod conversation;
mod custom_attribute;
mod end_user;
mod queue;
mod tag;
mod team;
mod webhook;

pub use agent::{Agent, AgentCreate, AgentPatch};
pub use conversation::{
    ActivityLog, AnonymizationRequest, AnonymizationTarget, Content, Conversation,
    ConversationCreate, ConversationDetails, ConversationFlow, ConversationRating,
    ConversationSearchHit, Direction, File, InboundMessage, InternalNote, Message, MessageAdd,
    NoteAdd, OutboundMessage,
};
pub use custom_attribute::CustomAttribute;
pub use end_user::{
    BulkActionOutcome, EndUser, EndUserBulkPatch, EndUserCreate, EndUserPatch, EndUserUpdate,
};
pub use queue::{Queue, QueueCreate, QueueMemberChange};
pub use tag::{Tag, TagCreate, TagState};
pub use team::{Team, TeamCreate, TeamMemberChange};
pub use webhook::{WebhookSubscription, WebhookSubscriptionCreate, WebhookSubscriptionPatch};
