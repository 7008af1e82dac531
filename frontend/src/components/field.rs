//! Form field controls bound to the catalogue.

use leptos::*;
use web_sys::{Event, HtmlInputElement};
use crate::{enforce_bounds, BoundsRule, FieldKind, FieldMark, FieldSpec, UiError, UiResult};

/// Handle on the rendered control of a field.
#[derive(Clone, Copy)]
pub enum FieldRef {
    Input(NodeRef<html::Input>),
    Select(NodeRef<html::Select>),
}

impl FieldRef {
    /// Current value of the mounted control.
    pub fn value(&self) -> UiResult<String> {
        let value = match self {
            FieldRef::Input(node) => node.get_untracked().map(|input| input.value()),
            FieldRef::Select(node) => node.get_untracked().map(|select| select.value()),
        };
        value.ok_or_else(|| UiError::MissingElement("form field".into()))
    }
}

/// A catalogue field plus its DOM handle and validity mark.
#[derive(Clone, Copy)]
pub struct FieldBinding {
    pub spec: &'static FieldSpec,
    pub node: FieldRef,
    pub mark: RwSignal<Option<FieldMark>>,
}

impl FieldBinding {
    pub fn new(spec: &'static FieldSpec) -> Self {
        let node = match spec.kind {
            FieldKind::Select(_) => FieldRef::Select(create_node_ref()),
            FieldKind::Number { .. } => FieldRef::Input(create_node_ref()),
        };
        Self { spec, node, mark: create_rw_signal(None) }
    }
}

/// Label plus control for one field.
#[component]
pub fn FormField(binding: FieldBinding) -> impl IntoView {
    let spec = binding.spec;
    let mark = binding.mark;
    let style = move || mark.get().map(|m| format!("border-color: {}", m.border_color()));

    let control = match (spec.kind.clone(), binding.node) {
        (FieldKind::Select(options), FieldRef::Select(node)) => view! {
            <select id=spec.name name=spec.name required=spec.required style=style node_ref=node>
                <option value="">"Select..."</option>
                {options
                    .iter()
                    .map(|opt| view! { <option value=*opt>{*opt}</option> })
                    .collect_view()}
            </select>
        }
        .into_view(),
        (FieldKind::Number { min, max }, FieldRef::Input(node)) => {
            let rules = BoundsRule::for_field(spec);
            // Runs on commit (change), never per keystroke.
            let on_change = move |ev: Event| {
                let input: HtmlInputElement = event_target(&ev);
                if let Some(clamped) = enforce_bounds(&rules, &input.value()) {
                    input.set_value(&clamped);
                }
            };
            view! {
                <input
                    type="number"
                    id=spec.name
                    name=spec.name
                    min=min.map(|m| m.to_string())
                    max=max.map(|m| m.to_string())
                    required=spec.required
                    style=style
                    node_ref=node
                    on:change=on_change
                />
            }
            .into_view()
        }
        _ => {
            log::warn!("Field {} has no matching control", spec.name);
            ().into_view()
        }
    };

    view! {
        <div class="form-group">
            <label for=spec.name>{spec.name}</label>
            {control}
        </div>
    }
}
