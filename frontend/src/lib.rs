//! Passenger Satisfaction - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for the airline passenger satisfaction
//! predictor: a single passenger form and a spreadsheet batch upload.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── TabBar                                                 │
//! │  ├── TabPanel "single" ── PredictionForm                    │
//! │  └── TabPanel "batch"  ── UploadSection                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (TabId, FieldSpec, UiError)
//! - [`fields`] - Prediction form field catalogue
//! - [`controllers`] - DOM-free widget state (tabs, upload, validation, bounds)
//! - [`components`] - UI components
//! - [`services`] - Browser services (blocking notices)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod fields;
pub mod controllers;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Tabs
    TabId,
    // Fields
    FieldKind, FieldSpec,
    // Errors
    UiError, UiResult,
};

// Controllers
pub use controllers::*;

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install panic hook and logger, then mount the app on `<body>`.
pub fn mount() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Satisfaction Predictor - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Passenger Satisfaction Predictor"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let tabs = create_rw_signal(TabSet::default());

    view! {
        <Header/>

        <div class="container">
            <Hero/>

            <TabBar tabs=tabs/>

            <TabPanel tabs=tabs tab=TabId::Single>
                <PredictionForm/>
            </TabPanel>

            <TabPanel tabs=tabs tab=TabId::Batch>
                <UploadSection/>
            </TabPanel>
        </div>

        <Footer/>
    }
}
