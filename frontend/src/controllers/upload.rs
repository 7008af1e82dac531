//! Upload widget state.
//!
//! ```text
//! idle ──dragover──▶ dragging ──dragleave / drop──▶ idle
//! idle ──drop(files) / browse──▶ file-selected
//! ```
//!
//! Only the first file of a selection is considered.

use crate::config::{
    DRAG_BACKGROUND, DRAG_BORDER, IDLE_BACKGROUND, NEUTRAL_BORDER, SELECTED_COLOR,
    SELECTED_FILE_PREFIX,
};

/// Drag highlight and current file selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    dragging: bool,
    selected: Option<String>,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A drag hovers the upload area.
    pub fn drag_over(&mut self) {
        self.dragging = true;
    }

    /// The drag left the upload area.
    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// Files were dropped on the upload area.
    ///
    /// Returns `true` when the drop replaced the selection. A drop without
    /// files only clears the highlight.
    pub fn drop_files<S: AsRef<str>>(&mut self, names: &[S]) -> bool {
        self.dragging = false;
        if names.is_empty() {
            log::debug!("Drop without files ignored");
            return false;
        }
        self.select(names);
        true
    }

    /// Re-derive the selection from the file input's current list.
    pub fn select<S: AsRef<str>>(&mut self, names: &[S]) {
        self.selected = names.first().map(|n| n.as_ref().to_string());
        match &self.selected {
            Some(name) => log::info!("📄 File selected: {}", name),
            None => log::debug!("File selection cleared"),
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[cfg(test)]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Text of the file name indicator.
    pub fn label(&self) -> String {
        self.selected
            .as_ref()
            .map(|name| format!("{}{}", SELECTED_FILE_PREFIX, name))
            .unwrap_or_default()
    }

    /// Colour of the file name indicator.
    pub fn label_color(&self) -> Option<&'static str> {
        self.selected.as_ref().map(|_| SELECTED_COLOR)
    }

    /// Whether the dependent submit control is enabled.
    pub fn submit_enabled(&self) -> bool {
        self.selected.is_some()
    }

    pub fn border_color(&self) -> &'static str {
        if self.dragging {
            DRAG_BORDER
        } else {
            NEUTRAL_BORDER
        }
    }

    pub fn background(&self) -> &'static str {
        if self.dragging {
            DRAG_BACKGROUND
        } else {
            IDLE_BACKGROUND
        }
    }
}
