//! Upload drop zone component
//!
//! Click-to-browse and drag-and-drop intake. Switches to a compact "add
//! more" mode while files are selected.

use crate::app::{handle_files, AppState};
use leptos::html;
use leptos::prelude::*;
use web_sys::DragEvent;

#[component]
pub fn UploadZone(state: AppState) -> impl IntoView {
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref: NodeRef<html::Input> = NodeRef::new();
    let has_files = move || !state.files.get().is_empty();

    let open_picker = move || {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    let on_change = move |_| {
        if let Some(input) = input_ref.get_untracked() {
            if let Some(list) = input.files() {
                handle_files(state, list);
            }
            // Reset so re-selecting the same file fires change again.
            input.set_value("");
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
        if let Some(transfer) = ev.data_transfer() {
            if let Some(list) = transfer.files() {
                handle_files(state, list);
            }
        }
    };

    view! {
        <div
            class="drop-zone"
            class:dragover=move || is_dragover.get()
            class:compact=has_files
            tabindex="0"
            role="button"
            on:click=move |_| open_picker()
            on:keydown=move |ev| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    open_picker();
                }
            }
            on:dragover=move |ev: DragEvent| {
                ev.prevent_default();
                set_is_dragover.set(true);
            }
            on:dragleave=move |_: DragEvent| set_is_dragover.set(false)
            on:drop=on_drop
        >
            <input
                type="file"
                class="file-input"
                multiple
                accept=".jpg,.jpeg,.png,.gif,.webp,.heic,.heif"
                node_ref=input_ref
                on:change=on_change
                on:click=|ev| ev.stop_propagation()
            />
            <Show
                when=move || !has_files()
                fallback=|| {
                    view! { <p class="drop-zone-compact">"+ Add more photos"</p> }
                }
            >
                <div class="drop-zone-inner">
                    <div class="upload-icon">"📷"</div>
                    <p>"Drag & drop outfit photos, or click to browse"</p>
                    <p class="text-muted">"JPG, PNG, WebP, GIF, or HEIC"</p>
                </div>
            </Show>
        </div>
    }
}
