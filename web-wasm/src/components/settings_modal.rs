//! API key settings modal

use crate::app::AppState;
use crate::key_store;
use leptos::html;
use leptos::prelude::*;

#[component]
pub fn SettingsModal(state: AppState) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    // Reload the stored key each time the modal opens.
    Effect::new(move |_| {
        if state.settings_open.get() {
            set_draft.set(key_store::get());
            if let Some(input) = input_ref.get_untracked() {
                let _ = input.focus();
            }
        }
    });

    window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            state.settings_open.set(false);
        }
    });

    let close = move || state.settings_open.set(false);

    let on_save = move |_| {
        let key = draft.get_untracked().trim().to_string();
        // Saving an empty key clears the slot.
        key_store::set(&key);
        state.api_key.set(key);
        close();
    };

    let on_clear = move |_| {
        key_store::clear();
        set_draft.set(String::new());
        state.api_key.set(String::new());
    };

    view! {
        <Show when=move || state.settings_open.get()>
            <div class="modal-overlay" on:click=move |_| close()>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"API Key"</h2>
                        <button class="modal-close" aria-label="Close settings" on:click=move |_| close()>
                            "✕"
                        </button>
                    </div>
                    <p class="text-muted">
                        "Stored only in this browser and sent along with each analysis request."
                    </p>
                    <input
                        type="password"
                        placeholder="Paste your API key…"
                        node_ref=input_ref
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                    />
                    <div class="modal-actions">
                        <button class="btn btn-primary" on:click=on_save>"Save"</button>
                        <button class="btn btn-tertiary" on:click=on_clear>"Clear Key"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
