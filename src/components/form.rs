//! Intake form: username, email, file selection and simulated submission.
//!
//! State machine: Idle -> Submitting -> (Success | Failure) -> Idle.
//! Validation runs synchronously before entering Submitting; while
//! submitting, the inputs and the submit button are disabled, which is the
//! only double-submit protection the form needs.

use leptos::*;
use web_sys::SubmitEvent;

use crate::components::{push_toast, FileIntake};
use crate::services::{submit_form, validate_form};
use crate::types::{AppError, SelectedFile, SubmissionPayload, Toast, ToastKind};

#[component]
pub fn FormSection(set_toasts: WriteSignal<Vec<Toast>>) -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (files, set_files) = create_signal(None::<Vec<SelectedFile>>);
    let (is_submitting, set_is_submitting) = create_signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        if is_submitting.get() {
            return;
        }

        // Validation synchrone avant d'entrer en Submitting
        if let Err(e) = validate_form(&username.get(), &email.get()) {
            log::warn!("⚠️ {}", e);
            let message = match &e {
                AppError::Validation(msg) => msg.clone(),
                other => other.to_string(),
            };
            push_toast(set_toasts, ToastKind::Error, "Error", &message);
            return;
        }

        let current_files = files.get();
        let payload = SubmissionPayload::new(
            &username.get(),
            &email.get(),
            current_files.as_deref().unwrap_or(&[]),
        );

        set_is_submitting.set(true);
        spawn_local(async move {
            match submit_form(&payload).await {
                Ok(()) => {
                    push_toast(
                        set_toasts,
                        ToastKind::Success,
                        "Success!",
                        "Your information has been submitted successfully",
                    );
                    // Reset complet : champs, sélection et aperçus (via le
                    // signal contrôlé du widget)
                    set_username.set(String::new());
                    set_email.set(String::new());
                    set_files.set(None);
                }
                Err(e) => {
                    // Inatteignable avec l'appel simulé ; l'état saisi est conservé
                    log::error!("❌ Submission failed: {}", e);
                    push_toast(
                        set_toasts,
                        ToastKind::Error,
                        "Error",
                        "Something went wrong. Please try again.",
                    );
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="form-card">
            <form on:submit=on_submit>
                <div class="form-field">
                    <label for="username">"Username"</label>
                    <input
                        type="text"
                        id="username"
                        placeholder="Enter your username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        disabled=move || is_submitting.get()
                    />
                </div>

                <div class="form-field">
                    <label for="email">"Email"</label>
                    <input
                        type="email"
                        id="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        disabled=move || is_submitting.get()
                    />
                </div>

                <div class="form-field">
                    <label>"Upload Files"</label>
                    <FileIntake files=files set_files=set_files/>
                </div>

                <p class="form-hint">
                    "Files of any type are accepted and are not checked for size; "
                    "very large files may take a while to submit."
                </p>

                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || is_submitting.get()
                >
                    {move || if is_submitting.get() { "⏳ Submitting..." } else { "Submit" }}
                </button>
            </form>
        </div>
    }
}
