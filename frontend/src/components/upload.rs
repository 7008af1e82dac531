//! Spreadsheet upload with drag & drop support.
//!
//! The dropped or browsed file is handed to the hidden file input so the
//! batch form posts it natively.

use leptos::*;
use web_sys::{DragEvent, FileList};
use crate::fields::batch_columns;
use crate::{
    UploadState, ACCEPTED_UPLOAD, BATCH_SUBMIT_ID, FILE_INPUT_ID, FILE_NAME_ID,
    PREDICT_BATCH_URL, UPLOAD_AREA_ID,
};

fn file_names(files: Option<&FileList>) -> Vec<String> {
    let Some(files) = files else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| file.name())
        .collect()
}

#[component]
pub fn UploadSection() -> impl IntoView {
    let state = create_rw_signal(UploadState::new());
    let file_input = create_node_ref::<html::Input>();

    // Re-derive the selection from the input's file list
    let handle_file_select = move || match file_input.get_untracked() {
        Some(input) => {
            let names = file_names(input.files().as_ref());
            state.update(|s| s.select(&names));
        }
        None => log::warn!("#{} not mounted, selection ignored", FILE_INPUT_ID),
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        state.update(UploadState::drag_over);
    };

    let on_drag_leave = move |_: DragEvent| state.update(UploadState::drag_leave);

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let files = ev.data_transfer().and_then(|dt| dt.files());
        let names = file_names(files.as_ref());

        let mut adopted = false;
        state.update(|s| adopted = s.drop_files(&names));
        if !adopted {
            return;
        }
        match (file_input.get_untracked(), files) {
            (Some(input), Some(files)) => input.set_files(Some(&files)),
            _ => log::warn!("#{} not mounted, dropped file not attached", FILE_INPUT_ID),
        }
    };

    let open_picker = move |_| {
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let area_style = move || {
        state.with(|s| {
            format!(
                "border-color: {}; background-color: {}",
                s.border_color(),
                s.background()
            )
        })
    };
    let name_style = move || state.with(|s| s.label_color().map(|c| format!("color: {}", c)));

    view! {
        <form action=PREDICT_BATCH_URL method="post" enctype="multipart/form-data" class="batch-form">
            <div
                class="upload-area"
                class:dragging=move || state.with(UploadState::is_dragging)
                id=UPLOAD_AREA_ID
                style=area_style
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
                on:click=open_picker
            >
                <div class="upload-icon">"📤"</div>
                <div class="upload-text">"Drag & drop your Excel file here"</div>
                <div class="upload-hint">"or click to browse (.xlsx, .xls)"</div>
            </div>

            <input
                type="file"
                id=FILE_INPUT_ID
                name="file"
                accept=ACCEPTED_UPLOAD
                style="display:none"
                node_ref=file_input
                on:change=move |_| handle_file_select()
            />

            <p id=FILE_NAME_ID class="file-name" style=name_style>
                {move || state.with(UploadState::label)}
            </p>

            <div class="upload-hint">
                "Required columns: " {batch_columns().join(", ")}
            </div>

            <button
                type="submit"
                id=BATCH_SUBMIT_ID
                class="btn btn-primary"
                disabled=move || !state.with(UploadState::submit_enabled)
            >
                "Predict Batch"
            </button>
        </form>
    }
}
