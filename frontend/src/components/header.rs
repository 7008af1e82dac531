use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">"SKYLINE"</a>
                <span class="badge">"Satisfaction Predictor"</span>
            </div>
        </header>
    }
}
