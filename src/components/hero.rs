//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Submit Your Information"</h1>
            <p class="subtitle">
                "Enter your details and attach the files to include with your submission."
            </p>
        </div>
    }
}
