//! Supabase REST backend implementation
//!
//! Executes arbitrary SQL through the project's `exec_sql` RPC function and
//! probes table existence through PostgREST table endpoints with a zero-row
//! count query.

use crate::error::{RemoteError, RemoteResult};
use crate::traits::{RowCounter, SqlExecutor};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use sf_core::RemoteConfig;

/// Supabase REST backend
pub struct SupabaseBackend {
    client: reqwest::Client,
    base_url: String,
    service_key: String,
}

/// Error body shape returned by PostgREST
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
}

impl SupabaseBackend {
    /// Create a backend from resolved connection settings.
    pub fn new(config: &RemoteConfig) -> RemoteResult<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            service_key: config.service_key.clone(),
        })
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }
}

#[async_trait]
impl SqlExecutor for SupabaseBackend {
    async fn exec(&self, sql: &str) -> RemoteResult<()> {
        let url = format!("{}/rest/v1/rpc/exec_sql", self.base_url);
        let response = self
            .authed(self.client.post(&url))
            .json(&json!({ "sql": sql }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(RemoteError::Execution(error_message(
            status.as_u16(),
            &body,
        )))
    }

    fn backend_type(&self) -> &'static str {
        "supabase"
    }
}

#[async_trait]
impl RowCounter for SupabaseBackend {
    async fn count_rows(&self, table: &str) -> RemoteResult<u64> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);
        let response = self
            .authed(self.client.get(&url))
            .query(&[("select", "id"), ("limit", "0")])
            .header("Prefer", "count=exact")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Execution(error_message(
                status.as_u16(),
                &body,
            )));
        }

        // With count=exact and limit=0 the body is empty; the total arrives
        // in the Content-Range header as `*/N` (or `a-b/N`).
        let range = response
            .headers()
            .get(reqwest::header::CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                RemoteError::MalformedResponse("missing Content-Range header".to_string())
            })?;
        parse_content_range_total(range).ok_or_else(|| {
            RemoteError::MalformedResponse(format!("unparseable Content-Range: {range}"))
        })
    }
}

/// Extract a readable message from a PostgREST error body.
///
/// Falls back to the raw body, then to the bare HTTP status when the body is
/// empty or not the expected JSON shape.
fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(err) if !err.message.is_empty() => err.message,
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => format!("HTTP {status}"),
    }
}

/// Parse the total from a `Content-Range` value (`0-0/42` or `*/42`).
fn parse_content_range_total(value: &str) -> Option<u64> {
    value.rsplit('/').next()?.trim().parse().ok()
}

#[cfg(test)]
#[path = "supabase_test.rs"]
mod tests;
