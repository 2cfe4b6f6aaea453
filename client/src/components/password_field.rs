//! Sign-up password input with the Generate / Show-Hide affordance.

use authforms::{AuthPage, PasswordAffordance, SignupForm, fields};
use leptos::prelude::*;

use crate::util::form::{
    edit_signup, fill_generated_password, generator_rng, password_input_type, read_signup, visibility_label,
};

/// While the password is empty the field offers "Generate"; afterwards it
/// offers the visibility toggle.
#[component]
pub fn PasswordField(page: RwSignal<AuthPage>) -> impl IntoView {
    let value = move || read_signup(page, |f| f.password().to_owned());
    let error = move || page.with(|p| p.session().visible_error(fields::PASSWORD));
    let visible = Memo::new(move |_| read_signup(page, SignupForm::password_visible));
    let affordance = Memo::new(move |_| read_signup(page, |f| Some(f.password_affordance())));

    let on_generate = move |_| {
        let mut rng = generator_rng();
        edit_signup(page, |f| {
            fill_generated_password(f, &mut rng);
        });
    };
    let on_toggle = move |_| edit_signup(page, SignupForm::toggle_password_visibility);

    view! {
        <div class="auth-field" class:auth-field--error=move || error().is_some()>
            <span class="auth-field__label">"Password"</span>
            <div class="auth-field__row">
                <input
                    class="auth-field__input"
                    name=fields::PASSWORD
                    type=move || password_input_type(visible.get())
                    prop:value=value
                    on:input=move |ev| {
                        let next = event_target_value(&ev);
                        edit_signup(page, |f| {
                            let _ = f.set_password(next);
                        });
                    }
                />
                {move || match affordance.get() {
                    Some(PasswordAffordance::ToggleVisibility) => view! {
                        <button type="button" class="auth-field__action" on:click=on_toggle>
                            {move || visibility_label(visible.get())}
                        </button>
                    }
                    .into_any(),
                    Some(PasswordAffordance::Generate) | None => view! {
                        <button type="button" class="auth-field__action" on:click=on_generate>
                            "Generate"
                        </button>
                    }
                    .into_any(),
                }}
            </div>
            <span class="auth-field__helper">{move || error().unwrap_or_default()}</span>
        </div>
    }
}
