//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Selection Types** - Files picked by the user
//! - **Notification Types** - Toast messages
//! - **Payload Types** - The logged submission payload
//! - **Error Types** - Frontend error handling

use serde::Serialize;
use std::fmt;

// =============================================================================
// Selection Types
// =============================================================================

/// How many files the intake widget accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// A new pick replaces the current selection.
    Single,
    /// New picks are appended to the current selection.
    #[default]
    Multiple,
}

/// A file the user has picked, held only in memory while the form is open.
///
/// `H` is the opaque raw handle - [`web_sys::File`] in the browser, any
/// cloneable stand-in under test. Duplicates by name are allowed; entries
/// are distinguished by position in the selection.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<H = web_sys::File> {
    /// File name as reported by the browser
    pub name: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// MIME type (may be empty for unknown types)
    pub mime_type: String,
    /// Raw handle, needed to read the file's bytes
    pub handle: H,
}

impl<H> SelectedFile<H> {
    /// Whether this file should get an image preview.
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

impl SelectedFile {
    /// Build an entry from a browser file handle.
    pub fn from_handle(handle: web_sys::File) -> Self {
        Self {
            name: handle.name(),
            size_bytes: handle.size() as u64,
            mime_type: handle.type_(),
            handle,
        }
    }
}

// =============================================================================
// Notification Types
// =============================================================================

/// Toast severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Operation completed
    Success,
    /// Operation rejected or failed
    Error,
}

impl ToastKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
        }
    }
}

/// A fire-and-forget user-visible notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Unique id, used as render key and for dismissal
    pub id: u64,
    /// Severity
    pub kind: ToastKind,
    /// Short heading ("Success!", "Error")
    pub title: String,
    /// Message body
    pub message: String,
}

// =============================================================================
// Payload Types
// =============================================================================

/// File metadata included in the logged submission payload.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadFile {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

/// Everything the form sends on submission.
///
/// With no backend, this is serialized and logged to the console.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub username: String,
    pub email: String,
    pub files: Vec<PayloadFile>,
}

impl SubmissionPayload {
    /// Snapshot the current form state into a payload.
    pub fn new<H>(username: &str, email: &str, files: &[SelectedFile<H>]) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            files: files
                .iter()
                .map(|entry| PayloadFile {
                    name: entry.name.clone(),
                    size_bytes: entry.size_bytes,
                    mime_type: entry.mime_type.clone(),
                })
                .collect(),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Form input rejected before submission.
    Validation(String),
    /// Preview read could not be started.
    Preview(String),
    /// Submission failed.
    Submission(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::Preview(msg) => write!(f, "Preview error: {}", msg),
            AppError::Submission(msg) => write!(f, "Submission error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
