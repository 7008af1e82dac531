//! Browser services.
//!
//! # Services
//!
//! - [`notify`] - blocking notices shown to the user

pub mod notify;

pub use notify::*;
