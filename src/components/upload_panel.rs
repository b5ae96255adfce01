//! Drop area, file picker, preview, and the upload-to-prediction flow.
//!
//! This is the core control flow of the page: file capture, MIME
//! validation, async data-URL read, one POST to the prediction endpoint,
//! then a state update that the result panel renders from. Every failure
//! ends the cycle with an error toast; nothing is retried.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::components::notifications::push_toast;
#[cfg(feature = "hydrate")]
use crate::net::api::predict;
use crate::state::notify::NotifyState;
#[cfg(feature = "hydrate")]
use crate::state::notify::ToastKind;
use crate::state::result::ResultState;
#[cfg(feature = "hydrate")]
use crate::state::upload::is_image_mime;
use crate::state::upload::{UploadPhase, UploadState};
#[cfg(feature = "hydrate")]
use crate::util::file_reader::read_as_data_url;

/// Drop area with hidden file input, upload preview, and loading overlay.
#[component]
pub fn UploadPanel() -> impl IntoView {
    let upload = expect_context::<RwSignal<UploadState>>();
    let result = expect_context::<RwSignal<ResultState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    #[cfg(not(feature = "hydrate"))]
    let _ = notify;

    let file_input = NodeRef::<leptos::html::Input>::new();

    let drop_class = move || {
        if upload.get().drag_active {
            "drop-area drop-area--dragover"
        } else {
            "drop-area"
        }
    };

    let on_dragover = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(|state| state.drag_active = true);
    };

    let on_dragleave = move |_| {
        upload.update(|state| state.drag_active = false);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        upload.update(|state| state.drag_active = false);
        #[cfg(feature = "hydrate")]
        {
            if let Some(file) = ev
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0))
            {
                handle_file(upload, result, notify, file);
            }
        }
    };

    let on_pick = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let input = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok());
            if let Some(input) = input {
                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                    handle_file(upload, result, notify, file);
                }
                // Allow re-selecting the same file.
                input.set_value("");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_close = move |_| {
        upload.update(UploadState::reset);
        result.update(ResultState::clear);
    };

    view! {
        <div
            id="drop-area"
            class=drop_class
            on:click=on_pick
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <p class="drop-area__hint">"Drag & drop an image here, or click to browse"</p>
            <input
                id="file-input"
                class="drop-area__input"
                type="file"
                accept="image/*"
                node_ref=file_input
                on:change=on_change
                on:click=move |ev| ev.stop_propagation()
            />
        </div>

        <Show when=move || upload.get().preview_visible()>
            <div id="preview-container" class="preview">
                <img
                    id="preview"
                    class="preview__image"
                    src=move || upload.get().preview_url.unwrap_or_default()
                    alt="Upload preview"
                />
                <button class="btn preview__close" on:click=on_close>
                    "Start Over"
                </button>
            </div>
        </Show>

        <Show when=move || upload.get().phase == UploadPhase::Loading>
            <div id="loading-overlay" class="loading-overlay">
                <div class="loading-overlay__spinner"></div>
                <p>"Identifying character..."</p>
            </div>
        </Show>
    }
}

/// Validate, read, and classify one file, driving the phase machine.
///
/// Runs as a local task: the two suspension points are the file read and
/// the HTTP response. A newer upload simply overwrites whatever state an
/// older in-flight cycle left behind.
#[cfg(feature = "hydrate")]
fn handle_file(
    upload: RwSignal<UploadState>,
    result: RwSignal<ResultState>,
    notify: RwSignal<NotifyState>,
    file: web_sys::File,
) {
    if !is_image_mime(&file.type_()) {
        push_toast(notify, ToastKind::Error, "Please upload a valid image file.");
        return;
    }

    leptos::task::spawn_local(async move {
        let data_url = match read_as_data_url(&file).await {
            Ok(url) => url,
            Err(error) => {
                log::warn!("file read failed: {error}");
                push_toast(notify, ToastKind::Error, "Error reading the file.");
                return;
            }
        };

        upload.update(|state| state.begin_preview(data_url.clone()));
        upload.update(UploadState::begin_loading);

        match predict(&data_url).await {
            Ok(response) => match response.into_result() {
                Ok(prediction) => {
                    let resolved = classify::render::resolve(&prediction);
                    push_toast(
                        notify,
                        ToastKind::Success,
                        format!("Successfully identified as {}!", resolved.name),
                    );
                    result.update(|state| state.set(prediction));
                    upload.update(UploadState::show_result);
                }
                Err(error) => {
                    push_toast(notify, ToastKind::Error, format!("Error: {error}"));
                    upload.update(UploadState::show_error);
                }
            },
            Err(error) => {
                log::warn!("predict request failed: {error}");
                push_toast(notify, ToastKind::Error, "Error identifying the character.");
                upload.update(UploadState::show_error);
            }
        }
    });
}
