//! Browser-facing services.
//!
//! This module provides the two asynchronous capabilities the form
//! depends on:
//!
//! # Services
//!
//! - [`preview`] - File bytes to data-URL decoding (image previews)
//! - [`submit`] - Validation and the simulated submission call

pub mod preview;
pub mod submit;

pub use preview::*;
pub use submit::*;
