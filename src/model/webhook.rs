//! Webhook subscription records and request bodies.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A webhook subscription delivering events to an external endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookSubscription {
    pub id: String,
    pub name: String,
    pub url: String,
    pub enabled: Option<bool>,
    /// Signing secret for delivery verification.
    pub secret: Option<String>,
    #[serde(default)]
    pub subscribed_events: Vec<String>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

/// Request body for creating a webhook subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookSubscriptionCreate {
    pub name: String,
    pub url: String,
    pub subscribed_events: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub headers: HashMap<String, String>,
}

/// Request body for a partial webhook subscription update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookSubscriptionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscribed_events: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_subscription_decodes_with_defaults() {
        let subscription: WebhookSubscription = serde_json::from_value(json!({
            "id": "hook-1",
            "name": "closed conversations",
            "url": "https://example.com/hook"
        }))
        .unwrap();

        assert!(subscription.subscribed_events.is_empty());
        assert!(subscription.headers.is_empty());
    }

    #[test]
    fn test_patch_skips_unset_fields() {
        let body = WebhookSubscriptionPatch {
            enabled: Some(false),
            ..WebhookSubscriptionPatch::default()
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"enabled": false})
        );
    }
}
