//! Auth page: sign-up / login toggle above the active form.

use authforms::{AuthPage, FormConfig, FormKind};
use leptos::prelude::*;

use crate::components::login_panel::LoginPanel;
use crate::components::signup_panel::SignupPanel;
use crate::util::form::toggle_label;

#[component]
pub fn AuthScreen() -> impl IntoView {
    let config = use_context::<FormConfig>().unwrap_or_default();
    let page = RwSignal::new(AuthPage::new(config));
    // Remount the form only when the mode flips, not on every keystroke.
    let mode = Memo::new(move |_| page.with(AuthPage::mode));

    let options = [FormKind::SignUp, FormKind::Login]
        .into_iter()
        .map(|kind| {
            view! {
                <button
                    type="button"
                    class="auth-toggle__option"
                    class:auth-toggle__option--active=move || mode.get() == kind
                    on:click=move |_| {
                        page.update(|p| {
                            p.select(Some(kind));
                        });
                    }
                >
                    {toggle_label(kind)}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="auth-page">
            <div class="auth-page__column">
                <div class="auth-card">
                    <div class="auth-toggle">{options}</div>
                    {move || match mode.get() {
                        FormKind::SignUp => view! { <SignupPanel page=page/> }.into_any(),
                        FormKind::Login => view! { <LoginPanel page=page/> }.into_any(),
                    }}
                </div>
            </div>
            <aside class="auth-banner">
                <h1>"Start Investing in global stock markets"</h1>
                <p>"Sign up and get started today with a 14-day free trial!"</p>
            </aside>
        </div>
    }
}
