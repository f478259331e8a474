//! Dropform - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for a small intake form: the user enters a
//! username and an email, attaches one or more files (drag & drop, click
//! to browse, or folder selection) and submits everything to a simulated
//! backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── FormSection                                            │
//! │  │   └── FileIntake (selection, previews)                   │
//! │  └── ToastHost (notifications)                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (SelectedFile, Toast, etc.)
//! - [`selection`] - Pure file-list and preview-map operations
//! - [`components`] - UI components (Hero, FormSection, FileIntake, ...)
//! - [`services`] - Preview reading and simulated submission

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod selection;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Selection
    SelectedFile, SelectionMode,
    // Notifications
    Toast, ToastKind,
    // Submission payload
    SubmissionPayload, PayloadFile,
    // Errors
    AppError, AppResult,
};

// Selection core
pub use selection::PreviewMap;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Dropform - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the application
    let (toasts, set_toasts) = create_signal(Vec::<Toast>::new());

    view! {
        <div class="container">
            <Hero/>
            <FormSection set_toasts=set_toasts/>
        </div>

        <ToastHost toasts=toasts set_toasts=set_toasts/>
    }
}
