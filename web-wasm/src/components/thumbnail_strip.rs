//! Thumbnail strip component
//!
//! Mirrors the current selection as removable thumbnails with a count
//! badge. HEIC files get a placeholder tile since browsers cannot decode
//! them for preview.

use crate::app::{AppState, SelectedFile};
use leptos::prelude::*;

#[component]
pub fn ThumbnailStrip(state: AppState) -> impl IntoView {
    let count_label = move || {
        let count = state.files.get().len();
        format!("{} photo{} selected", count, if count == 1 { "" } else { "s" })
    };

    view! {
        <Show when=move || !state.files.get().is_empty()>
            <div class="thumbnail-strip">
                <div class="thumb-count">{count_label}</div>
                <div class="thumb-row">
                    <For
                        each=move || state.files.get()
                        key=|item| item.id.clone()
                        children=move |item| view! { <Thumbnail state=state item=item /> }
                    />
                </div>
            </div>
        </Show>
    }
}

#[component]
fn Thumbnail(state: AppState, item: SelectedFile) -> impl IntoView {
    let SelectedFile {
        id,
        name,
        is_heic,
        preview,
    } = item;
    let remove_label = format!("Remove {name}");
    let alt = name.clone();

    let on_remove = move |_| {
        // Position is looked up at click time; keyed rows outlive earlier
        // removals, so a captured index would go stale.
        let index = state
            .files
            .get_untracked()
            .iter()
            .position(|f| f.id == id);
        if let Some(index) = index {
            state.remove_at(index);
        }
    };

    view! {
        <div class="thumb-item">
            <button class="thumb-remove" aria-label=remove_label on:click=on_remove>
                "✕"
            </button>
            {if is_heic {
                view! {
                    <div class="thumb-placeholder">
                        <span class="thumb-heic-icon">"📷"</span>
                        <span class="thumb-filename">{name}</span>
                    </div>
                }
                    .into_any()
            } else {
                view! {
                    <img
                        class="thumb-img"
                        alt=alt
                        src=move || preview.get().unwrap_or_default()
                    />
                }
                    .into_any()
            }}
        </div>
    }
}
