//! Live password strength indicators under the sign-up password.

use authforms::AuthPage;
use leptos::prelude::*;

use crate::util::form::{check_class, read_signup};

#[component]
pub fn StrengthChecklist(page: RwSignal<AuthPage>) -> impl IntoView {
    let checks = move || read_signup(page, |f| f.strength_checks().to_vec());

    view! {
        <ul class="strength-list">
            {move || {
                checks()
                    .into_iter()
                    .map(|check| {
                        let mark = if check.passed { "✓" } else { "✕" };
                        view! {
                            <li class=check_class(check.passed)>
                                <span class="strength-item__mark">{mark}</span>
                                <span class="strength-item__label">{check.label}</span>
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ul>
    }
}
