//! QA notification email generator.
//!
//! # Responsibility
//! - Ask a chat-completion API to draft a QA hand-off email for a merged PR.
//! - Parse the `SUBJECT:` / `BODY:` convention out of the reply.
//! - Fall back to a deterministic template on any network or reply fault.
//!
//! # Invariants
//! - Once the inputs parse, generation always yields an email; only bad
//!   inputs or file-system failures are errors.
//! - The fallback depends only on the issue and PR details.

mod client;

pub use client::{ChatCompletionClient, CompletionClient};

use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL: &str = "gpt-4.1";
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_OUTPUT_DIR: &str = "/tmp";
pub const SUBJECT_FILE_NAME: &str = "qa_email_subject.txt";
pub const BODY_FILE_NAME: &str = "qa_email_body.html";

const MAX_TOKENS: u32 = 800;
const TEMPERATURE: f64 = 0.5;
const SYSTEM_PROMPT: &str = "You are a helpful assistant that generates professional QA notification emails. Focus on providing clear context and actionable information for testing.";

static SUBJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"SUBJECT:\s*(.*?)(?:\n|$)").expect("valid subject regex"));
static BODY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"BODY:\s*((?s:.*))").expect("valid body regex"));

/// Drafted email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaEmail {
    pub subject: String,
    /// HTML body.
    pub body: String,
}

#[derive(Debug)]
pub enum QaEmailError {
    MissingEnv(&'static str),
    InvalidJson {
        var: &'static str,
        source: serde_json::Error,
    },
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for QaEmailError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEnv(var) => write!(f, "environment variable `{var}` is not set"),
            Self::InvalidJson { var, source } => {
                write!(f, "environment variable `{var}` is not valid JSON: {source}")
            }
            Self::Write { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for QaEmailError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingEnv(_) => None,
            Self::InvalidJson { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
        }
    }
}

/// Issue and pull request details the email is about.
#[derive(Debug, Clone, PartialEq)]
pub struct QaEmailInput {
    pub issue: Value,
    pub pull_request: Value,
}

impl QaEmailInput {
    /// Parses both documents from raw JSON text.
    pub fn parse(issue_json: &str, pr_json: &str) -> Result<Self, QaEmailError> {
        let issue = serde_json::from_str(issue_json).map_err(|source| QaEmailError::InvalidJson {
            var: "ISSUE_DETAILS",
            source,
        })?;
        let pull_request =
            serde_json::from_str(pr_json).map_err(|source| QaEmailError::InvalidJson {
                var: "PR_DETAILS",
                source,
            })?;
        Ok(Self {
            issue,
            pull_request,
        })
    }

    /// Reads `ISSUE_DETAILS` and `PR_DETAILS` from the environment.
    pub fn from_env() -> Result<Self, QaEmailError> {
        let issue = std::env::var("ISSUE_DETAILS")
            .map_err(|_| QaEmailError::MissingEnv("ISSUE_DETAILS"))?;
        let pr = std::env::var("PR_DETAILS").map_err(|_| QaEmailError::MissingEnv("PR_DETAILS"))?;
        Self::parse(&issue, &pr)
    }
}

/// Builds the user prompt sent to the model.
pub fn build_prompt(input: &QaEmailInput) -> String {
    format!(
        "Generate a professional QA notification email for a development ticket that's ready for testing.

Issue Details:
{}

Pull Request Details:
{}

Create an email that:
1. Has a clear, actionable subject line
2. Provides context about what was developed
3. Includes testing requirements if available in the issue body
4. Has links to both the issue and merged PR
5. Is professional and helpful for the QA team

Return in format:
SUBJECT: [subject line]
BODY: [email body in HTML format]",
        pretty(&input.issue),
        pretty(&input.pull_request)
    )
}

/// Builds the chat-completion request body.
pub fn build_request_payload(model: &str, prompt: &str) -> Value {
    json!({
        "model": model,
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": prompt },
        ],
        "max_tokens": MAX_TOKENS,
        "temperature": TEMPERATURE,
    })
}

/// Returns `choices[0].message.content` from a completion reply.
pub fn extract_content(response: &Value) -> Option<&str> {
    response
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
}

/// Splits model output into subject and body.
///
/// A missing subject falls back to the default subject line; a missing body
/// falls back to the whole content.
pub fn parse_email_content(content: &str, input: &QaEmailInput) -> QaEmail {
    let subject = SUBJECT_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|subject| !subject.is_empty())
        .unwrap_or_else(|| default_subject(&input.issue));
    let body = BODY_RE
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| content.to_string());

    QaEmail { subject, body }
}

/// Deterministic email used when the model cannot be reached or parsed.
pub fn fallback_email(input: &QaEmailInput) -> QaEmail {
    let issue = &input.issue;
    let pr = &input.pull_request;
    let priorities = priority_labels(issue);
    let priority = if priorities.is_empty() {
        "Normal".to_string()
    } else {
        priorities.join(", ")
    };

    let body = format!(
        "
      <h2>Ready for QA Testing</h2>
      <p><strong>Issue #{issue_number}:</strong> <a href=\"{issue_url}\">{issue_title}</a></p>
      <p><strong>Merged PR:</strong> <a href=\"{pr_url}\">#{pr_number} - {pr_title}</a></p>
      <p><strong>Developer:</strong> {developer}</p>
      <p><strong>Priority:</strong> {priority}</p>
      <p>This ticket has been completed and is ready for testing. Please review the issue description and acceptance criteria.</p>
      ",
        issue_number = field_text(issue, "number"),
        issue_url = field_text(issue, "html_url"),
        issue_title = field_text(issue, "title"),
        pr_url = field_text(pr, "html_url"),
        pr_number = field_text(pr, "number"),
        pr_title = field_text(pr, "title"),
        developer = developer_name(pr),
    );

    QaEmail {
        subject: default_subject(issue),
        body,
    }
}

/// Asks `client` for a draft and falls back on any fault.
pub fn generate(input: &QaEmailInput, client: &impl CompletionClient, model: &str) -> QaEmail {
    let payload = build_request_payload(model, &build_prompt(input));
    let response = match client.complete(&payload) {
        Ok(response) => response,
        Err(err) => {
            warn!("event=qa_email_generate module=qa_email status=fallback reason=request error={err}");
            return fallback_email(input);
        }
    };

    match extract_content(&response) {
        Some(content) => {
            info!("event=qa_email_generate module=qa_email status=ok");
            parse_email_content(content, input)
        }
        None => {
            warn!("event=qa_email_generate module=qa_email status=fallback reason=reply_shape");
            fallback_email(input)
        }
    }
}

/// Writes subject and body files under `dir` and returns their paths.
pub fn write_email(dir: &Path, email: &QaEmail) -> Result<(PathBuf, PathBuf), QaEmailError> {
    let subject_path = dir.join(SUBJECT_FILE_NAME);
    let body_path = dir.join(BODY_FILE_NAME);
    write_file(&subject_path, &email.subject)?;
    write_file(&body_path, &email.body)?;
    Ok((subject_path, body_path))
}

fn write_file(path: &Path, contents: &str) -> Result<(), QaEmailError> {
    std::fs::write(path, contents).map_err(|source| QaEmailError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn default_subject(issue: &Value) -> String {
    format!(
        "Ready for QA: Issue #{} - {}",
        field_text(issue, "number"),
        field_text(issue, "title")
    )
}

fn priority_labels(issue: &Value) -> Vec<String> {
    issue
        .get("labels")
        .and_then(Value::as_array)
        .map(|labels| {
            labels
                .iter()
                .filter_map(|label| match label {
                    Value::String(name) => Some(name.as_str()),
                    Value::Object(_) => label.get("name").and_then(Value::as_str),
                    _ => None,
                })
                .filter(|name| name.starts_with("priority:"))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn developer_name(pr: &Value) -> String {
    match pr.get("user") {
        Some(user @ Value::Object(_)) => field_text(user, "login"),
        _ => field_text(pr, "user"),
    }
}

fn field_text(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
