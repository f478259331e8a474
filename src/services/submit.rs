//! Form validation and the simulated submission call.
//!
//! There is no backend: submitting serializes the payload, logs it to the
//! console, then waits a fixed delay before resolving. The error path of
//! [`submit_form`] exists for symmetry but is unreachable in practice.

use gloo_timers::future::TimeoutFuture;

use crate::config::SUBMIT_DELAY_MS;
use crate::types::{AppError, AppResult, SubmissionPayload};

/// Gate a submission attempt.
///
/// The whole rule: username and email non-empty after trimming, and the
/// email contains an `@`. Nothing regex-grade, and files are never
/// validated.
pub fn validate_form(username: &str, email: &str) -> AppResult<()> {
    if username.trim().is_empty() || email.trim().is_empty() {
        return Err(AppError::Validation(
            "Please fill in all required fields".to_string(),
        ));
    }

    if !email.contains('@') {
        return Err(AppError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }

    Ok(())
}

/// Send the form data to the simulated backend.
pub async fn submit_form(payload: &SubmissionPayload) -> AppResult<()> {
    let json = serde_json::to_string_pretty(payload)
        .map_err(|e| AppError::Submission(format!("failed to serialize payload: {}", e)))?;

    log::info!(
        "📤 [{}] Submitting intake form:\n{}",
        chrono::Local::now().format("%H:%M:%S"),
        json
    );

    // Pas de backend : un délai fixe tient lieu d'appel réseau
    TimeoutFuture::new(SUBMIT_DELAY_MS).await;

    log::info!("✅ Submission acknowledged for {}", payload.username);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SelectedFile;

    fn validation_message(result: AppResult<()>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn accepts_minimal_valid_input() {
        assert!(validate_form("alice", "a@b.com").is_ok());
    }

    #[test]
    fn rejects_empty_username() {
        assert_eq!(
            validation_message(validate_form("", "x@y.com")),
            "Please fill in all required fields"
        );
    }

    #[test]
    fn rejects_whitespace_only_fields() {
        assert_eq!(
            validation_message(validate_form("   ", "x@y.com")),
            "Please fill in all required fields"
        );
        assert_eq!(
            validation_message(validate_form("bob", "  ")),
            "Please fill in all required fields"
        );
    }

    #[test]
    fn rejects_email_without_at_sign() {
        assert_eq!(
            validation_message(validate_form("bob", "not-an-email")),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn payload_serializes_camel_case() {
        let files = vec![SelectedFile {
            name: "cat.png".to_string(),
            size_bytes: 1024,
            mime_type: "image/png".to_string(),
            handle: 0u32,
        }];
        let payload = SubmissionPayload::new("alice", "a@b.com", &files);

        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains(r#""username":"alice""#));
        assert!(json.contains(r#""sizeBytes":1024"#));
        assert!(json.contains(r#""mimeType":"image/png""#));
    }

    #[test]
    fn payload_snapshots_empty_selection() {
        let payload = SubmissionPayload::new("alice", "a@b.com", &[] as &[SelectedFile<u32>]);
        assert!(payload.files.is_empty());
    }
}
