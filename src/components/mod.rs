//! UI Components for the Dropform application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//!
//! # Feature Components
//! - [`FormSection`] - Username/email fields, validation and submission
//! - [`FileIntake`] - File selection with drag & drop, browse and folder pick
//! - [`ToastHost`] - Fire-and-forget notifications

mod file_intake;
mod form;
mod hero;
mod toast;

pub use file_intake::*;
pub use form::*;
pub use hero::*;
pub use toast::*;
