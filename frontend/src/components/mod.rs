//! UI Components for the satisfaction predictor.
//!
//! # Layout Components
//! - [`Header`] - Top bar
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`TabBar`] / [`TabPanel`] - Single vs batch prediction tabs
//! - [`PredictionForm`] - Single passenger form with required-field check
//! - [`FormField`] - One catalogue field, clamped on change
//! - [`UploadSection`] - Spreadsheet upload with drag & drop

mod header;
mod hero;
mod tabs;
mod field;
mod prediction_form;
mod upload;
mod footer;

pub use header::*;
pub use hero::*;
pub use tabs::*;
pub use field::*;
pub use prediction_form::*;
pub use upload::*;
pub use footer::*;
