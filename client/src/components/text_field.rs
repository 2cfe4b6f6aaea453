//! Labelled text input bound to one field of the active form.

use authforms::AuthPage;
use leptos::prelude::*;

/// Text input with inline helper text for the field's visible error.
#[component]
pub fn TextField(
    page: RwSignal<AuthPage>,
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let value = move || page.with(|p| p.session().text(name).to_owned());
    let error = move || page.with(|p| p.session().visible_error(name));

    view! {
        <label class="auth-field" class:auth-field--error=move || error().is_some()>
            <span class="auth-field__label">{label}</span>
            <input
                class="auth-field__input"
                type=input_type
                name=name
                prop:value=value
                on:input=move |ev| {
                    let next = event_target_value(&ev);
                    page.update(|p| {
                        let _ = p.set_text(name, next);
                    });
                }
            />
            <span class="auth-field__helper">{move || error().unwrap_or_default()}</span>
        </label>
    }
}
