//! Generates the QA notification email for a merged pull request.
//!
//! Reads `ISSUE_DETAILS` and `PR_DETAILS` (JSON) plus `OPENAI_API_KEY`, and
//! writes `qa_email_subject.txt` / `qa_email_body.html` into
//! `QA_EMAIL_OUTPUT_DIR` (default `/tmp`).
//!
//! `QA_EMAIL_MODEL` (default `gpt-4.1`) picks the model and
//! `QA_EMAIL_API_URL` (default `https://api.openai.com/v1/chat/completions`)
//! the chat-completions endpoint.

use flowdemo_core::init_logging;
use flowdemo_qa_email::{
    fallback_email, generate, write_email, ChatCompletionClient, QaEmailInput, DEFAULT_API_URL,
    DEFAULT_MODEL, DEFAULT_OUTPUT_DIR,
};
use log::{error, info, warn};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = init_logging("info", None) {
        eprintln!("logging init failed: {err}");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=qa_email_run module=qa_email status=error error={err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let input = QaEmailInput::from_env()?;
    let output_dir = PathBuf::from(env_or("QA_EMAIL_OUTPUT_DIR", DEFAULT_OUTPUT_DIR));

    let email = match non_empty_env("OPENAI_API_KEY") {
        Some(api_key) => {
            let client = ChatCompletionClient::new(env_or("QA_EMAIL_API_URL", DEFAULT_API_URL), api_key);
            generate(&input, &client, &env_or("QA_EMAIL_MODEL", DEFAULT_MODEL))
        }
        None => {
            warn!("event=qa_email_generate module=qa_email status=fallback reason=missing_api_key");
            fallback_email(&input)
        }
    };

    let (subject_path, body_path) = write_email(&output_dir, &email)?;
    info!(
        "event=qa_email_run module=qa_email status=ok subject={} body={}",
        subject_path.display(),
        body_path.display()
    );
    println!("QA email content generated successfully!");
    Ok(())
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    non_empty_env(key).unwrap_or_else(|| default.to_string())
}
