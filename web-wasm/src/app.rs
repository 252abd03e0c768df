//! Application state and the top-level component

use crate::components::{
    action_bar::ActionBar, error_banner::ErrorBanner, header::Header,
    results_section::ResultsSection, settings_modal::SettingsModal,
    thumbnail_strip::ThumbnailStrip, upload_zone::UploadZone,
};
use crate::{api, key_store, normalize};
use fashionsense_common::{files, AnalysisResult, Error, RoastRequest};
use futures::future::join_all;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FileList, FileReader, ScrollBehavior, ScrollIntoViewOptions};

/// DOM id of the results section, used for scroll-into-view after render.
pub(crate) const RESULTS_SECTION_ID: &str = "results-section";

// File handles are not thread-safe, so they live outside the reactive graph
// and are looked up by id when a request is built.
thread_local! {
    static FILE_HANDLES: RefCell<HashMap<String, File>> = RefCell::new(HashMap::new());
    static NEXT_FILE_SEQ: Cell<u64> = const { Cell::new(0) };
}

/// One selected image, as the UI sees it.
#[derive(Clone)]
pub struct SelectedFile {
    pub id: String,
    pub name: String,
    pub is_heic: bool,
    /// Data URL for the thumbnail, set once the FileReader finishes.
    pub preview: RwSignal<Option<String>>,
}

/// All long-lived client state, shared between components by copy.
#[derive(Clone, Copy)]
pub struct AppState {
    pub files: RwSignal<Vec<SelectedFile>>,
    pub analysis: RwSignal<Option<AnalysisResult>>,
    pub roast: RwSignal<Option<String>>,
    pub error: RwSignal<Option<Error>>,
    pub is_analyzing: RwSignal<bool>,
    pub is_roasting: RwSignal<bool>,
    pub settings_open: RwSignal<bool>,
    /// Mirror of the stored API key; drives the settings badge.
    pub api_key: RwSignal<String>,
    /// Monotonic request token. A completion whose token is no longer
    /// current (a reset or newer request happened meanwhile) is discarded.
    request_seq: RwSignal<u64>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            files: RwSignal::new(Vec::new()),
            analysis: RwSignal::new(None),
            roast: RwSignal::new(None),
            error: RwSignal::new(None),
            is_analyzing: RwSignal::new(false),
            is_roasting: RwSignal::new(false),
            settings_open: RwSignal::new(false),
            api_key: RwSignal::new(key_store::get()),
            request_seq: RwSignal::new(0),
        }
    }

    pub fn begin_request(&self) -> u64 {
        let token = self.request_seq.get_untracked() + 1;
        self.request_seq.set(token);
        token
    }

    pub fn token_current(&self, token: u64) -> bool {
        self.request_seq.get_untracked() == token
    }

    /// Append accepted files to the selection, registering their handles
    /// and starting thumbnail reads.
    pub fn add_files(&self, accepted: Vec<File>) {
        let mut added = Vec::with_capacity(accepted.len());
        for file in accepted {
            let name = file.name();
            let id = next_file_id(&name);
            let item = SelectedFile {
                id: id.clone(),
                is_heic: files::is_heic(&name),
                name,
                preview: RwSignal::new(None),
            };
            if !item.is_heic {
                load_preview(&file, item.preview);
            }
            FILE_HANDLES.with(|handles| handles.borrow_mut().insert(id, file));
            added.push(item);
        }
        self.files.update(|files| files.extend(added));
    }

    /// Remove one file by position. Emptying the selection resets the
    /// whole UI; otherwise only the thumbnails change.
    pub fn remove_at(&self, index: usize) {
        let mut removed_id = None;
        let mut emptied = false;
        self.files.update(|files| {
            if index < files.len() {
                removed_id = Some(files.remove(index).id);
            }
            emptied = files.is_empty();
        });
        if let Some(id) = removed_id {
            FILE_HANDLES.with(|handles| handles.borrow_mut().remove(&id));
        }
        if emptied {
            self.reset_all();
        }
    }

    /// Back to the initial empty state. Also invalidates any in-flight
    /// request so its response cannot repopulate the UI.
    pub fn reset_all(&self) {
        self.begin_request();
        FILE_HANDLES.with(|handles| handles.borrow_mut().clear());
        self.files.set(Vec::new());
        self.is_analyzing.set(false);
        self.is_roasting.set(false);
        self.error.set(None);
        self.clear_results();
    }

    pub fn clear_results(&self) {
        self.analysis.set(None);
        self.roast.set(None);
    }
}

fn next_file_id(name: &str) -> String {
    NEXT_FILE_SEQ.with(|seq| {
        let n = seq.get();
        seq.set(n + 1);
        // Timestamp alone can collide for a multi-file batch, hence the
        // per-session sequence number.
        format!("{}-{}-{}", name, js_sys::Date::now(), n)
    })
}

/// Intake for a batch of candidate files from the picker or a drop event.
pub fn handle_files(state: AppState, list: FileList) {
    let candidates: Vec<File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
    if candidates.is_empty() {
        return;
    }

    let names: Vec<String> = candidates.iter().map(|f| f.name()).collect();
    let (accepted, rejected) = files::screen_batch(names.iter().map(String::as_str));
    if !rejected.is_empty() {
        state.error.set(Some(Error::UnsupportedFiles(rejected)));
    }
    if accepted.is_empty() {
        return;
    }

    let accepted: Vec<File> = accepted.into_iter().map(|i| candidates[i].clone()).collect();
    state.add_files(accepted);
    state.error.set(None);
    state.clear_results();
    spawn_local(run_analysis(state));
}

/// Normalize the selection, upload it, and render the outcome.
pub async fn run_analysis(state: AppState) {
    let selected = state.files.get_untracked();
    if selected.is_empty() {
        return;
    }
    let handles: Vec<File> = FILE_HANDLES.with(|table| {
        let table = table.borrow();
        selected
            .iter()
            .filter_map(|item| table.get(&item.id).cloned())
            .collect()
    });

    let token = state.begin_request();
    state.is_analyzing.set(true);
    state.error.set(None);
    state.clear_results();

    let parts = join_all(handles.iter().map(normalize::prepare_upload)).await;
    let outcome = api::analyze(&parts, &key_store::get()).await;

    apply_analysis_outcome(state, token, outcome);
}

/// Apply a finished analysis to the UI. A stale completion (a reset or a
/// newer request bumped the token meanwhile) must not touch anything, the
/// busy flag included: whichever path invalidated the token owns it now.
fn apply_analysis_outcome(state: AppState, token: u64, outcome: Result<AnalysisResult, Error>) {
    if !state.token_current(token) {
        return;
    }
    state.is_analyzing.set(false);

    match outcome {
        Ok(result) => {
            state.analysis.set(Some(result));
            scroll_results_into_view();
        }
        Err(err) => state.error.set(Some(err)),
    }
}

/// Ask for a roast of the last analysis. No-op without one.
pub async fn run_roast(state: AppState) {
    let Some(analysis) = state.analysis.get_untracked() else {
        return;
    };
    if state.is_roasting.get_untracked() {
        return;
    }

    let token = state.begin_request();
    state.is_roasting.set(true);

    let request = RoastRequest::from_analysis(&analysis, key_store::get());
    let outcome = api::roast(&request).await;

    // At most one roast is in flight (guarded above), so releasing the
    // flag is safe even when the completion itself is stale.
    state.is_roasting.set(false);
    if !state.token_current(token) {
        return;
    }

    match outcome {
        Ok(text) => state.roast.set(Some(text)),
        Err(err) => state.error.set(Some(err)),
    }
}

fn load_preview(file: &File, preview: RwSignal<Option<String>>) {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(_) => return,
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                preview.set(Some(data_url));
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(file);
}

fn scroll_results_into_view() {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(RESULTS_SECTION_ID));
    if let Some(element) = element {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn selected(name: &str) -> SelectedFile {
        SelectedFile {
            id: next_file_id(name),
            name: name.to_string(),
            is_heic: files::is_heic(name),
            preview: RwSignal::new(None),
        }
    }

    #[wasm_bindgen_test]
    fn removing_last_file_resets_everything() {
        let state = AppState::new();
        state.files.set(vec![selected("look.jpg")]);
        state.analysis.set(Some(AnalysisResult::default()));
        state.roast.set(Some("bold choices".to_string()));
        state.error.set(Some(Error::Network));
        state.is_analyzing.set(true);

        state.remove_at(0);

        assert!(state.files.get_untracked().is_empty());
        assert!(state.analysis.get_untracked().is_none());
        assert!(state.roast.get_untracked().is_none());
        assert!(state.error.get_untracked().is_none());
        assert!(!state.is_analyzing.get_untracked());
        assert!(!state.is_roasting.get_untracked());
    }

    #[wasm_bindgen_test]
    fn removing_one_of_several_keeps_results() {
        let state = AppState::new();
        state.files.set(vec![selected("a.jpg"), selected("b.png")]);
        state.analysis.set(Some(AnalysisResult::default()));

        state.remove_at(0);

        let remaining = state.files.get_untracked();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "b.png");
        assert!(state.analysis.get_untracked().is_some());
    }

    #[wasm_bindgen_test]
    fn remove_at_out_of_range_is_a_noop() {
        let state = AppState::new();
        state.files.set(vec![selected("a.jpg")]);

        state.remove_at(5);

        assert_eq!(state.files.get_untracked().len(), 1);
    }

    #[wasm_bindgen_test]
    fn reset_invalidates_inflight_token() {
        let state = AppState::new();
        let token = state.begin_request();
        assert!(state.token_current(token));

        state.reset_all();

        assert!(!state.token_current(token));
    }

    #[wasm_bindgen_test]
    fn stale_completion_leaves_newer_request_busy() {
        let state = AppState::new();
        let stale = state.begin_request();
        state.is_analyzing.set(true);
        // A second batch starts before the first response lands.
        let current = state.begin_request();

        apply_analysis_outcome(state, stale, Ok(AnalysisResult::default()));

        assert!(state.is_analyzing.get_untracked());
        assert!(state.analysis.get_untracked().is_none());

        apply_analysis_outcome(state, current, Ok(AnalysisResult::default()));

        assert!(!state.is_analyzing.get_untracked());
        assert!(state.analysis.get_untracked().is_some());
    }

    #[wasm_bindgen_test]
    fn completion_after_reset_is_discarded() {
        let state = AppState::new();
        let token = state.begin_request();
        state.is_analyzing.set(true);
        state.reset_all();

        apply_analysis_outcome(state, token, Err(Error::Network));

        assert!(state.error.get_untracked().is_none());
        assert!(!state.is_analyzing.get_untracked());
    }
}

/// Root component.
#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    view! {
        <div class="container">
            <Header state=state />
            <main>
                <ErrorBanner state=state />
                <UploadZone state=state />
                <ThumbnailStrip state=state />
                <ActionBar state=state />
                <ResultsSection state=state />
            </main>
            <SettingsModal state=state />
        </div>
    }
}
