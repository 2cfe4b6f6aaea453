//! # client
//!
//! Leptos frontend for the authentication page. Renders the sign-up and login
//! forms from `authforms` state; all validation lives in that crate.

pub mod app;
pub mod components;
pub mod pages;
pub mod util;

/// WASM entry point: install browser logging and render into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    use leptos::prelude::*;

    use crate::app::App;

    leptos::mount::mount_to_body(|| view! { <App/> });
}
