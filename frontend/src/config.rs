//! Application configuration.
//!
//! Centralized configuration for the satisfaction predictor frontend.
//! Everything here is compile-time; the page has no runtime settings.

// =============================================================================
// Backend endpoints
// =============================================================================

/// Single passenger prediction (urlencoded form post).
pub const PREDICT_URL: &str = "/predict";

/// Batch prediction from a spreadsheet (multipart form post, field `file`).
pub const PREDICT_BATCH_URL: &str = "/predict_batch";

/// Spreadsheet extensions accepted by the batch endpoint.
pub const ACCEPTED_UPLOAD: &str = ".xlsx,.xls";

// =============================================================================
// Element identifiers
// =============================================================================

pub const UPLOAD_AREA_ID: &str = "uploadArea";
pub const FILE_INPUT_ID: &str = "fileInput";
pub const FILE_NAME_ID: &str = "fileName";
pub const BATCH_SUBMIT_ID: &str = "batchSubmit";
pub const PREDICTION_FORM_ID: &str = "predictionForm";

// =============================================================================
// Colours
// =============================================================================

/// Upload area border while a drag hovers it.
pub const DRAG_BORDER: &str = "#3498db";
/// Upload area background while a drag hovers it.
pub const DRAG_BACKGROUND: &str = "rgba(52, 152, 219, 0.1)";
/// Neutral border, shared by the idle upload area and valid fields.
pub const NEUTRAL_BORDER: &str = "#bdc3c7";
pub const IDLE_BACKGROUND: &str = "transparent";
/// File name colour once a file is selected.
pub const SELECTED_COLOR: &str = "#2ecc71";
/// Border of a required field left empty.
pub const INVALID_BORDER: &str = "#e74c3c";

// =============================================================================
// Messages
// =============================================================================

/// Blocking notice shown when required fields are empty.
pub const REQUIRED_FIELDS_NOTICE: &str = "Please fill in all required fields.";

/// Prefix of the selected file label.
pub const SELECTED_FILE_PREFIX: &str = "Selected file: ";

// =============================================================================
// Numeric bounds
// =============================================================================

pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 5.0;
pub const AGE_MIN: f64 = 1.0;
pub const AGE_MAX: f64 = 120.0;
/// Minimum for delays and flight distance.
pub const NON_NEGATIVE_MIN: f64 = 0.0;
