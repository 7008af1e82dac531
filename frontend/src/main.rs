//! Entry point for the WASM application

pub fn main() {
    satisfaction_ui::mount();
}
