//! Single passenger prediction form.
//!
//! Submission is a native form post; the submit handler only blocks it
//! while required fields are empty.

use leptos::*;
use web_sys::SubmitEvent;
use crate::fields::{DELAY_FIELDS, PROFILE_FIELDS, RATING_FIELDS};
use crate::services::notify_blocking;
use crate::{
    FieldBinding, FormField, FormValidator, PREDICTION_FORM_ID, PREDICT_URL,
    REQUIRED_FIELDS_NOTICE,
};

#[component]
pub fn PredictionForm() -> impl IntoView {
    let bind = |specs: &'static [crate::FieldSpec]| {
        specs.iter().map(FieldBinding::new).collect::<Vec<_>>()
    };
    let profile = bind(PROFILE_FIELDS);
    let ratings = bind(RATING_FIELDS);
    let delays = bind(DELAY_FIELDS);

    let bindings: Vec<FieldBinding> = profile
        .iter()
        .chain(ratings.iter())
        .chain(delays.iter())
        .copied()
        .collect();

    let on_submit = move |ev: SubmitEvent| {
        // Unmounted controls are skipped, not flagged.
        let values: Vec<(FieldBinding, String)> = bindings
            .iter()
            .filter_map(|binding| match binding.node.value() {
                Ok(value) => Some((*binding, value)),
                Err(e) => {
                    log::warn!("{}: {}", binding.spec.name, e);
                    None
                }
            })
            .collect();

        let report = FormValidator.check(
            values
                .iter()
                .map(|(b, value)| (b.spec.name, value.as_str(), b.spec.required)),
        );

        for (binding, _) in &values {
            if let Some(mark) = report.mark_of(binding.spec.name) {
                binding.mark.set(Some(mark));
            }
        }

        if let Err(e) = report.into_result() {
            ev.prevent_default();
            log::info!("🚫 Submission blocked: {}", e);
            if let Err(e) = notify_blocking(REQUIRED_FIELDS_NOTICE) {
                log::warn!("Notice not shown: {}", e);
            }
        }
    };

    let render = |group: Vec<FieldBinding>| {
        group
            .into_iter()
            .map(|binding| view! { <FormField binding=binding/> })
            .collect_view()
    };

    view! {
        <form id=PREDICTION_FORM_ID action=PREDICT_URL method="post" on:submit=on_submit>
            <fieldset>
                <legend>"Passenger Information"</legend>
                <div class="form-grid">{render(profile)}</div>
            </fieldset>
            <fieldset>
                <legend>"Service Ratings (1-5)"</legend>
                <div class="form-grid">{render(ratings)}</div>
            </fieldset>
            <fieldset>
                <legend>"Delays"</legend>
                <div class="form-grid">{render(delays)}</div>
            </fieldset>
            <button type="submit" class="btn btn-primary">"Predict Satisfaction"</button>
        </form>
    }
}
