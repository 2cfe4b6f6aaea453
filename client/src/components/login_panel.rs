//! Login form: e-mail and password.

use authforms::{AuthPage, FormKind, LogSubmitter, SessionState, fields};
use leptos::prelude::*;

use crate::components::text_field::TextField;
use crate::util::form::submit_label;

/// Submit stays enabled; a failed attempt reveals the field errors.
#[component]
pub fn LoginPanel(page: RwSignal<AuthPage>) -> impl IntoView {
    let submitted = Memo::new(move |_| page.with(|p| p.session().state() == SessionState::Submitted));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        page.update(|p| {
            let _ = p.submit(&mut LogSubmitter);
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <TextField page=page name=fields::EMAIL label="E-mail" input_type="email"/>
            <TextField page=page name=fields::PASSWORD label="Password" input_type="password"/>
            <button class="auth-submit" type="submit" disabled=move || submitted.get()>
                {submit_label(FormKind::Login)}
            </button>
            <Show when=move || submitted.get()>
                <p class="auth-form__done">
                    "Signing in. "
                    <button type="button" class="auth-link" on:click=move |_| page.update(AuthPage::restart)>
                        "Start over"
                    </button>
                </p>
            </Show>
        </form>
    }
}
