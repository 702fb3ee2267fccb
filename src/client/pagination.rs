//! Cursor pagination over list endpoints.
//!
//! Dixa list endpoints return an envelope of the form
//! `{"data": [...], "meta": {"next": "<cursor>"}}`. The paginator drives
//! the request executor once per page, accumulating items in server
//! order until the continuation cursor is absent. The cursor is opaque;
//! it is re-sent as the `pageKey` query parameter of the next page.

use std::collections::HashMap;

use serde_json::Value;

use crate::client::errors::{DixaError, Result, ShapeError};
use crate::client::http_client::{shape_name, DixaClient};
use crate::client::http_request::{Expect, HttpMethod, HttpRequest};

/// Query parameter carrying the continuation cursor.
const PAGE_KEY_PARAM: &str = "pageKey";

/// One page of a paginated response: the items and the continuation
/// cursor, if any. Produced by one executor call and consumed
/// immediately.
#[derive(Debug)]
pub(crate) struct Page {
    /// Items in server order.
    pub items: Vec<Value>,
    /// Opaque continuation cursor; absence signals end-of-stream.
    pub next: Option<String>,
}

impl Page {
    /// Parses the pagination envelope out of a response body.
    ///
    /// The shape contract is structural: the body must be an object
    /// whose `data` member is an array. `meta.next` is read as the
    /// cursor when it is a string; `null` or absent ends the stream.
    pub(crate) fn parse(body: Value) -> std::result::Result<Self, ShapeError> {
        let Value::Object(mut envelope) = body else {
            return Err(ShapeError {
                expected: Expect::Object,
                actual: shape_name(&body),
            });
        };

        let items = match envelope.remove("data") {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(ShapeError {
                    expected: Expect::Array,
                    actual: shape_name(&other),
                })
            }
            None => {
                return Err(ShapeError {
                    expected: Expect::Array,
                    actual: "missing data member",
                })
            }
        };

        let next = envelope
            .get("meta")
            .and_then(|meta| meta.get("next"))
            .and_then(Value::as_str)
            .map(String::from);

        Ok(Self { items, next })
    }
}

impl DixaClient {
    /// Fetches every page of a cursor-paginated list endpoint and
    /// returns the accumulated items in server order.
    ///
    /// Page fetches are strictly sequential: the next cursor is only
    /// known after the current page is decoded. Caller-supplied query
    /// parameters are re-sent on every page. Any page failure aborts
    /// the whole run; accumulated items are discarded.
    ///
    /// # Errors
    ///
    /// Everything [`Self::send`] returns, plus [`DixaError::Shape`] on
    /// a malformed envelope and [`DixaError::PageLimitExceeded`] when a
    /// configured page cap is hit while the server keeps returning
    /// cursors.
    pub async fn paginate(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<Vec<Value>> {
        let mut items = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages_fetched: u32 = 0;

        loop {
            if let Some(limit) = self.max_pages() {
                if pages_fetched >= limit {
                    return Err(DixaError::PageLimitExceeded { limit });
                }
            }

            let mut page_query = query.clone().unwrap_or_default();
            if let Some(ref key) = cursor {
                page_query.insert(PAGE_KEY_PARAM.to_string(), key.clone());
            }

            let mut builder = HttpRequest::builder(HttpMethod::Get, path);
            if !page_query.is_empty() {
                builder = builder.query(page_query);
            }
            let request = builder.build()?;

            let response = self.send(&request).await?;
            let page = Page::parse(response.body)?;

            items.extend(page.items);
            pages_fetched += 1;

            match page.next {
                Some(next) => cursor = Some(next),
                None => return Ok(items),
            }
        }
    }
}
