//! Chat-completion transport.

use serde_json::Value;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends a completion request and returns the decoded JSON reply.
///
/// Errors are plain messages; callers only need to know that the call failed.
pub trait CompletionClient {
    fn complete(&self, payload: &Value) -> Result<Value, String>;
}

/// HTTPS client for an OpenAI-compatible chat-completions endpoint.
pub struct ChatCompletionClient {
    agent: ureq::Agent,
    endpoint: String,
    api_key: String,
}

impl ChatCompletionClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(REQUEST_TIMEOUT)
            .timeout_read(REQUEST_TIMEOUT)
            .timeout_write(REQUEST_TIMEOUT)
            .build();
        Self {
            agent,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

impl CompletionClient for ChatCompletionClient {
    fn complete(&self, payload: &Value) -> Result<Value, String> {
        let response = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Accept", "application/json")
            .send_json(payload.clone())
            .map_err(describe_ureq_error)?;
        serde_json::from_reader(response.into_reader())
            .map_err(|err| format!("reply is not valid JSON: {err}"))
    }
}

fn describe_ureq_error(err: ureq::Error) -> String {
    match err {
        ureq::Error::Status(status, _) => format!("http status {status}"),
        ureq::Error::Transport(transport) => format!("transport error: {transport}"),
    }
}
