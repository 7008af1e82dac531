//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Airline Passenger Satisfaction"</h1>
            <p class="subtitle">
                "Predict whether a passenger will be satisfied with their flight. "
                "Fill in a single passenger profile, or upload a spreadsheet to score many at once."
            </p>
        </div>
    }
}
