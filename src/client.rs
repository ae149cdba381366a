use anyhow::{Context, Result};
use serde_json::Value;
use tracing::info;

use crate::models::SubmissionRequest;

/// Blocking HTTP client for the job server's jobs endpoint.
pub struct JobClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl JobClient {
    /// Create a client for the given jobs endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// POST a submission to the job server. The response body is discarded.
    pub fn submit(&self, request: &SubmissionRequest) -> Result<()> {
        let res = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .context("Failed to POST submission to the job server")?;

        info!(status = res.status().as_u16(), "Submission posted");
        Ok(())
    }

    /// GET the jobs endpoint and parse the response body as JSON.
    pub fn fetch(&self) -> Result<Value> {
        let res = self
            .http
            .get(&self.endpoint)
            .send()
            .context("Failed to GET the jobs endpoint")?;

        let status = res.status().as_u16();
        let body: Value = res
            .json()
            .context("Jobs response body is not valid JSON")?;

        info!(status, "Fetched jobs");
        Ok(body)
    }
}

/// Format a JSON value for human consumption with 2-space indentation.
pub fn render(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to render JSON response")
}
