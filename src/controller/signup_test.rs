use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::submit::SubmissionPayload;

fn filled() -> SignupForm {
    let mut form = SignupForm::default();
    form.set_email("user@test.com").expect("email");
    form.set_phone("+15551234567").expect("phone");
    form.set_password("Abcdef12").expect("password");
    form.set_referral_code("").expect("referral");
    form.set_accept_terms(true).expect("terms");
    form
}

// =============================================================
// Validity
// =============================================================

#[test]
fn complete_signup_is_submittable() {
    assert_eq!(filled().state(), SessionState::Submittable);
}

#[test]
fn unaccepted_terms_only_flags_terms() {
    let mut form = filled();
    form.set_accept_terms(false).expect("terms");
    let report = form.session().report();
    assert!(!report.is_valid());
    assert_eq!(report.invalid_fields(), vec![fields::ACCEPT_TERMS]);
    assert_eq!(
        report.error(fields::ACCEPT_TERMS),
        Some("You must accept the terms and conditions")
    );
}

#[test]
fn password_with_email_fails_strength_and_schema() {
    let mut form = filled();
    form.set_email("a@b.com").expect("email");
    form.set_password("a@b.comXYZ1").expect("password");

    let strength = form.strength();
    assert!(!strength.no_email);
    assert!(strength.min_length && strength.digit_and_letter && strength.has_uppercase);
    assert_eq!(form.session().report().invalid_fields(), vec![fields::PASSWORD]);
}

#[test]
fn strength_follows_configured_minimum() {
    let config = FormConfig {
        password_min_len: 10,
        ..FormConfig::default()
    };
    let mut form = SignupForm::new(config);
    form.set_password("Abcdef12").expect("password");
    assert!(!form.strength().min_length);
    assert_eq!(form.strength_checks()[1].label, "At least 10 characters");
    assert_eq!(
        form.session().report().error(fields::PASSWORD),
        Some("Password must be at least 10 characters")
    );
}

// =============================================================
// Visibility and generation
// =============================================================

#[test]
fn password_starts_hidden_and_toggles() {
    let mut form = SignupForm::default();
    assert!(!form.password_visible());
    form.toggle_password_visibility();
    assert!(form.password_visible());
    form.toggle_password_visibility();
    assert!(!form.password_visible());
}

#[test]
fn affordance_switches_with_password_content() {
    let mut form = SignupForm::default();
    assert_eq!(form.password_affordance(), PasswordAffordance::Generate);
    assert!(form.can_generate_password());
    form.set_password("a").expect("password");
    assert_eq!(form.password_affordance(), PasswordAffordance::ToggleVisibility);
    assert!(!form.can_generate_password());
}

#[test]
fn generation_fills_password_and_reveals_it() {
    let mut form = SignupForm::default();
    form.set_email("user@test.com").expect("email");
    let mut rng = StdRng::seed_from_u64(5);

    let generated = form.generate_password(&mut rng).expect("password is empty").to_owned();
    assert_eq!(generated.chars().count(), 12);
    assert_eq!(form.password(), generated);
    assert!(form.password_visible());
    assert!(form.strength().all_passed());
    assert!(form.session().result(fields::PASSWORD).is_some_and(|r| r.valid));
}

#[test]
fn generation_respects_reveal_policy() {
    let config = FormConfig {
        reveal_generated_password: false,
        ..FormConfig::default()
    };
    let mut form = SignupForm::new(config);
    form.generate_password(&mut StdRng::seed_from_u64(1))
        .expect("password is empty");
    assert!(!form.password_visible());
}

#[test]
fn generation_refused_over_existing_password() {
    let mut form = SignupForm::default();
    form.set_password("Mine1234").expect("password");
    assert_eq!(
        form.generate_password(&mut StdRng::seed_from_u64(1)),
        Err(FormError::GenerateUnavailable)
    );
    assert_eq!(form.password(), "Mine1234");
}

#[test]
fn generation_uses_configured_length() {
    let config = FormConfig {
        generated_password_len: 20,
        ..FormConfig::default()
    };
    let mut form = SignupForm::new(config);
    let generated = form
        .generate_password(&mut StdRng::seed_from_u64(9))
        .expect("password is empty");
    assert_eq!(generated.len(), 20);
}

#[test]
fn unnormalized_short_length_surfaces_generator_error() {
    let config = FormConfig {
        generated_password_len: 2,
        ..FormConfig::default()
    };
    let mut form = SignupForm::new(config);
    assert_eq!(
        form.generate_password(&mut StdRng::seed_from_u64(1)),
        Err(FormError::Generator(generator::GeneratorError::TooShort {
            requested: 2,
            minimum: 4
        }))
    );
    assert_eq!(form.password(), "");
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_closes_session_and_hides_password() {
    let mut form = filled();
    form.toggle_password_visibility();

    let mut received = Vec::new();
    form.submit(&mut |p: SubmissionPayload| received.push(p))
        .expect("valid form submits");

    assert_eq!(received.len(), 1);
    assert_eq!(form.state(), SessionState::Submitted);
    assert!(!form.password_visible());
    assert!(!form.can_generate_password());
    assert_eq!(
        form.generate_password(&mut StdRng::seed_from_u64(1)),
        Err(FormError::SessionClosed)
    );
}
