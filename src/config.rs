//! Application configuration.
//!
//! Centralized configuration for the Dropform frontend.
//! There is no backend and no environment surface; everything the app
//! needs to know lives here.

/// Duration of the simulated submission call (in milliseconds).
///
/// There is no real backend; submitting waits this long and succeeds.
pub const SUBMIT_DELAY_MS: u32 = 1500;

/// How long a toast notification stays on screen (in milliseconds).
///
/// Toasts can also be dismissed earlier by clicking them.
pub const TOAST_DISMISS_MS: u32 = 5000;
