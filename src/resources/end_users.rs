//! End user operations.

use std::collections::HashMap;

use serde_json::{json, Value};

use super::{decode, decode_items, encode};
use crate::client::{DixaClient, Expect, Result};
use crate::model::{
    AnonymizationRequest, BulkActionOutcome, Conversation, CustomAttribute, EndUser,
    EndUserBulkPatch, EndUserCreate, EndUserPatch, EndUserUpdate,
};

/// Filter for listing end users. Unset fields do not constrain the
/// result.
#[derive(Debug, Clone, Default)]
pub struct EndUserListFilter {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub external_id: Option<String>,
}

impl EndUserListFilter {
    fn into_query(self) -> Option<HashMap<String, String>> {
        let mut params = HashMap::new();
        if let Some(email) = self.email {
            params.insert("email".to_string(), email);
        }
        if let Some(phone) = self.phone {
            params.insert("phone".to_string(), phone);
        }
        if let Some(external_id) = self.external_id {
            params.insert("externalId".to_string(), external_id);
        }
        (!params.is_empty()).then_some(params)
    }
}

/// Service for end user operations.
pub struct EndUsersService<'c> {
    client: &'c DixaClient,
}

impl<'c> EndUsersService<'c> {
    pub(crate) const fn new(client: &'c DixaClient) -> Self {
        Self { client }
    }

    /// Creates an end user.
    pub async fn create(&self, body: &EndUserCreate) -> Result<EndUser> {
        let payload = self
            .client
            .post("/v1/endusers", encode(body)?, Expect::Object)
            .await?;
        decode(payload)
    }

    /// Creates several end users in one request. The outcome is
    /// reported per user; a failed entry does not fail the batch.
    pub async fn create_bulk(&self, users: &[EndUserCreate]) -> Result<Vec<BulkActionOutcome>> {
        let payload = self
            .client
            .post("/v1/endusers/bulk", json!({ "data": users }), Expect::Array)
            .await?;
        decode(payload)
    }

    /// Fetches a single end user by id.
    pub async fn get(&self, user_id: &str) -> Result<EndUser> {
        let payload = self
            .client
            .get(&format!("/v1/endusers/{user_id}"), None, Expect::Object)
            .await?;
        decode(payload)
    }

    /// Lists end users matching the filter, following pagination to the
    /// end of the result set.
    pub async fn list(&self, filter: EndUserListFilter) -> Result<Vec<EndUser>> {
        let items = self
            .client
            .paginate("/v1/endusers", filter.into_query())
            .await?;
        decode_items(items)
    }

    /// Partially updates an end user. Unset fields are left untouched.
    pub async fn patch(&self, user_id: &str, body: &EndUserPatch) -> Result<EndUser> {
        let payload = self
            .client
            .patch(
                &format!("/v1/endusers/{user_id}"),
                Some(encode(body)?),
                Expect::Object,
            )
            .await?;
        decode(payload)
    }

    /// Partially updates several end users in one request.
    pub async fn patch_bulk(
        &self,
        patches: &[EndUserBulkPatch],
    ) -> Result<Vec<BulkActionOutcome>> {
        let payload = self
            .client
            .patch(
                "/v1/endusers",
                Some(json!({ "data": patches })),
                Expect::Array,
            )
            .await?;
        decode(payload)
    }

    /// Sets custom attribute values on an end user. Returns the full
    /// attribute set as stored after the update.
    pub async fn patch_custom_attributes(
        &self,
        user_id: &str,
        attributes: &HashMap<String, Value>,
    ) -> Result<Vec<CustomAttribute>> {
        let payload = self
            .client
            .patch(
                &format!("/v1/endusers/{user_id}/custom-attributes"),
                Some(encode(attributes)?),
                Expect::Array,
            )
            .await?;
        decode(payload)
    }

    /// Replaces an end user. Fields left unset in the body are cleared.
    pub async fn update(&self, user_id: &str, body: &EndUserUpdate) -> Result<EndUser> {
        let payload = self
            .client
            .put(
                &format!("/v1/endusers/{user_id}"),
                Some(encode(body)?),
                Expect::Object,
            )
            .await?;
        decode(payload)
    }

    /// Replaces several end users in one request.
    pub async fn update_bulk(&self, users: &[EndUserUpdate]) -> Result<Vec<BulkActionOutcome>> {
        let payload = self
            .client
            .put("/v1/endusers", Some(json!({ "data": users })), Expect::Array)
            .await?;
        decode(payload)
    }

    /// Requests anonymization of an end user.
    pub async fn anonymize(&self, user_id: &str) -> Result<AnonymizationRequest> {
        let payload = self
            .client
            .patch(
                &format!("/v1/endusers/{user_id}/anonymize"),
                None,
                Expect::Object,
            )
            .await?;
        decode(payload)
    }

    /// Lists the conversations requested by an end user.
    pub async fn list_conversations(&self, user_id: &str) -> Result<Vec<Conversation>> {
        let items = self
            .client
            .paginate(&format!("/v1/endusers/{user_id}/conversations"), None)
            .await?;
        decode_items(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_yields_no_query() {
        assert!(EndUserListFilter::default().into_query().is_none());
    }

    #[test]
    fn test_filter_maps_external_id_param() {
        let filter = EndUserListFilter {
            external_id: Some("crm-7".to_string()),
            ..EndUserListFilter::default()
        };

        let query = filter.into_query().unwrap();
        assert_eq!(query.get("externalId").map(String::as_str), Some("crm-7"));
        assert_eq!(query.len(), 1);
    }
}
