//! DOM-free widget state.
//!
//! Each controller owns only the state of one widget and exposes the
//! transitions its DOM events trigger. Components in [`crate::components`]
//! bind them to the page.
//!
//! - [`tabs`] - which panel is visible
//! - [`upload`] - drag & drop / browse selection feedback
//! - [`validator`] - required-field check at submit
//! - [`bounds`] - numeric clamping on change

pub mod tabs;
pub mod upload;
pub mod validator;
pub mod bounds;

pub use tabs::*;
pub use upload::*;
pub use validator::*;
pub use bounds::*;
