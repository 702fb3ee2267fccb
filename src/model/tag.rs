//! Tag records and request bodies.

use serde::{Deserialize, Serialize};

/// Whether a tag can currently be applied to conversations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagState {
    Active,
    Inactive,
}

/// A label agents attach to conversations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub state: Option<TagState>,
    pub color: Option<String>,
}

/// Request body for creating a tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tag_decodes_state() {
        let tag: Tag = serde_json::from_value(json!({
            "id": "tag-1",
            "name": "vip",
            "state": "Active"
        }))
        .unwrap();

        assert_eq!(tag.state, Some(TagState::Active));
    }

    #[test]
    fn test_create_body_skips_color_when_unset() {
        let body = TagCreate {
            name: "vip".to_string(),
            color: None,
        };

        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"name": "vip"}));
    }
}
