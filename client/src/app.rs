//! Root application component.

use authforms::FormConfig;
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::pages::auth::AuthScreen;

/// Root application component.
///
/// `config` is the form policy every page reads from context. The browser
/// entry point mounts with the defaults; there is no process environment
/// to read there.
#[component]
pub fn App(#[prop(optional)] config: FormConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/authforms.css"/>
        <Title text="Sign up"/>
        <AuthScreen/>
    }
}
