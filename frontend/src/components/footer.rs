//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Copyright © 2025 Skyline Analytics • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
        </footer>
    }
}
