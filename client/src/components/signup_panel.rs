//! Sign-up form: contact fields, password with strength feedback, referral
//! code, and terms acceptance.

use authforms::{AuthPage, FormKind, LogSubmitter, SessionState, fields};
use leptos::prelude::*;

use crate::components::password_field::PasswordField;
use crate::components::strength_checklist::StrengthChecklist;
use crate::components::text_field::TextField;
use crate::util::form::submit_label;

/// The submit button stays disabled until every field passes.
#[component]
pub fn SignupPanel(page: RwSignal<AuthPage>) -> impl IntoView {
    let valid = Memo::new(move |_| page.with(|p| p.session().is_valid()));
    let submitted = Memo::new(move |_| page.with(|p| p.session().state() == SessionState::Submitted));
    let terms = move || page.with(|p| p.session().flag(fields::ACCEPT_TERMS));
    let terms_error = move || page.with(|p| p.session().visible_error(fields::ACCEPT_TERMS));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        page.update(|p| {
            let _ = p.submit(&mut LogSubmitter);
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <TextField page=page name=fields::EMAIL label="E-mail" input_type="email"/>
            <TextField page=page name=fields::PHONE label="Phone number" input_type="tel"/>
            <PasswordField page=page/>
            <StrengthChecklist page=page/>
            <TextField page=page name=fields::REFERRAL_CODE label="Referral code"/>
            <label class="auth-terms">
                <input
                    type="checkbox"
                    prop:checked=terms
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        page.update(|p| {
                            let _ = p.set_flag(fields::ACCEPT_TERMS, checked);
                        });
                    }
                />
                <span>
                    "I accept the " <a href="/terms">"Terms of Use"</a> " and have read the "
                    <a href="/privacy">"Privacy Policy"</a>
                </span>
            </label>
            <p class="auth-terms__error">{move || terms_error().unwrap_or_default()}</p>
            <button
                class="auth-submit"
                type="submit"
                disabled=move || !valid.get() || submitted.get()
            >
                {submit_label(FormKind::SignUp)}
            </button>
            <Show when=move || submitted.get()>
                <p class="auth-form__done">
                    "Request sent. "
                    <button type="button" class="auth-link" on:click=move |_| page.update(AuthPage::restart)>
                        "Start over"
                    </button>
                </p>
            </Show>
        </form>
    }
}
