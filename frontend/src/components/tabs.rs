//! Tab selector bar and panels.

use leptos::*;
use crate::{TabId, TabSet};

#[component]
pub fn TabBar(tabs: RwSignal<TabSet>) -> impl IntoView {
    let ids = tabs.with_untracked(|set| set.tabs().to_vec());

    view! {
        <div class="tabs">
            {ids
                .into_iter()
                .map(|tab| {
                    let on_click = move |_| {
                        tabs.update(|set| {
                            if let Err(e) = set.activate(tab) {
                                log::warn!("Tab not shown: {}", e);
                            }
                        });
                    };
                    view! {
                        <button
                            type="button"
                            class="tab-btn"
                            class:active=move || tabs.with(|set| set.is_selector_active(tab))
                            on:click=on_click
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Panel shown only while `tab` is active.
#[component]
pub fn TabPanel(tabs: RwSignal<TabSet>, tab: TabId, children: Children) -> impl IntoView {
    view! {
        <div
            id=tab.as_str()
            class="tab-content"
            class:active=move || tabs.with(|set| set.is_visible(tab))
        >
            {children()}
        </div>
    }
}
