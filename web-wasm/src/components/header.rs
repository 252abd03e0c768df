//! Header component

use crate::app::AppState;
use leptos::prelude::*;

#[component]
pub fn Header(state: AppState) -> impl IntoView {
    let key_saved = move || !state.api_key.get().is_empty();

    view! {
        <header class="header">
            <div class="header-titles">
                <h1>"FashionSense"</h1>
                <p class="tagline">"Upload your outfit, get styling suggestions"</p>
            </div>
            <button
                class="settings-btn"
                aria-label="API key settings"
                on:click=move |_| state.settings_open.set(true)
            >
                "⚙"
                <Show when=key_saved>
                    <span class="settings-badge"></span>
                </Show>
            </button>
        </header>
    }
}
