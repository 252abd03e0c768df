//! Analyze / Clear action buttons

use crate::app::{run_analysis, AppState};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ActionBar(state: AppState) -> impl IntoView {
    let has_files = move || !state.files.get().is_empty();
    let busy = move || state.is_analyzing.get();
    let analyze_label = move || {
        if state.is_analyzing.get() {
            let count = state.files.get().len();
            if count > 1 {
                format!("Analyzing {count} photos…")
            } else {
                "Analyzing…".to_string()
            }
        } else {
            "Analyze Outfit".to_string()
        }
    };

    view! {
        <div class="action-bar">
            <button
                class="btn btn-primary"
                disabled=move || !has_files() || busy()
                on:click=move |_| spawn_local(run_analysis(state))
            >
                <Show when=busy>
                    <span class="btn-loader"></span>
                </Show>
                <span class="btn-text">{analyze_label}</span>
            </button>
            <button
                class="btn btn-secondary"
                disabled=move || !has_files() || busy()
                on:click=move |_| state.reset_all()
            >
                "Clear"
            </button>
        </div>
    }
}
