//! Helpers bridging `authforms` page state and the view layer.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use authforms::{AuthPage, FormKind, SignupForm};
use leptos::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `type` attribute for the password input.
pub fn password_input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

pub fn visibility_label(visible: bool) -> &'static str {
    if visible { "Hide" } else { "Show" }
}

pub fn toggle_label(kind: FormKind) -> &'static str {
    match kind {
        FormKind::SignUp => "Sign up",
        FormKind::Login => "Login",
    }
}

pub fn submit_label(kind: FormKind) -> &'static str {
    match kind {
        FormKind::SignUp => "Sign Up",
        FormKind::Login => "Sign In",
    }
}

/// CSS modifier for a strength indicator.
pub fn check_class(passed: bool) -> &'static str {
    if passed {
        "strength-item strength-item--ok"
    } else {
        "strength-item strength-item--fail"
    }
}

/// Randomness for the password generator. Not a security boundary; the
/// generated password is a convenience the user can still edit.
pub fn generator_rng() -> StdRng {
    StdRng::seed_from_u64(seed())
}

#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn seed() -> u64 {
    let high = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let low = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    (high << 32) | low
}

#[cfg(not(feature = "csr"))]
#[allow(clippy::cast_possible_truncation)]
fn seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}

/// Fill the empty password with a generated one. Failures are logged and
/// leave the form untouched.
pub fn fill_generated_password<R: Rng + ?Sized>(form: &mut SignupForm, rng: &mut R) -> bool {
    match form.generate_password(rng) {
        Ok(_) => true,
        Err(error) => {
            tracing::warn!(%error, "password generation failed");
            false
        }
    }
}

/// Read from the sign-up form if it is the one showing.
pub fn read_signup<T: Default>(page: RwSignal<AuthPage>, f: impl FnOnce(&SignupForm) -> T) -> T {
    page.with(|p| p.signup().map(f).unwrap_or_default())
}

/// Mutate the sign-up form if it is the one showing.
pub fn edit_signup(page: RwSignal<AuthPage>, f: impl FnOnce(&mut SignupForm)) {
    page.update(|p| {
        if let Some(form) = p.signup_mut() {
            f(form);
        }
    });
}
