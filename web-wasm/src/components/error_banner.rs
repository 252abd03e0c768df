//! Dismissible error banner
//!
//! One banner for all error classes; a new error replaces the current one.

use crate::app::AppState;
use leptos::prelude::*;

#[component]
pub fn ErrorBanner(state: AppState) -> impl IntoView {
    view! {
        <Show when=move || state.error.get().is_some()>
            <div class="error-banner" role="alert">
                <span class="error-text">
                    {move || {
                        state
                            .error
                            .get()
                            .map(|err| err.to_string())
                            .unwrap_or_default()
                    }}
                </span>
                <button
                    class="error-close"
                    aria-label="Dismiss error"
                    on:click=move |_| state.error.set(None)
                >
                    "✕"
                </button>
            </div>
        </Show>
    }
}
