use super::*;
use crate::schema::{FieldKind, FormKind, Rule, fields};

fn valid_signup() -> FormValues {
    FormValues::new()
        .with(fields::EMAIL, "user@test.com")
        .with(fields::PHONE, "+15551234567")
        .with(fields::PASSWORD, "Abcdef12")
        .with(fields::REFERRAL_CODE, "")
        .with(fields::ACCEPT_TERMS, true)
}

// =============================================================
// Sign-up
// =============================================================

#[test]
fn valid_signup_passes_every_field() {
    let schema = FormSchema::signup();
    let report = validate(&schema, &valid_signup());
    assert!(report.is_valid());
    assert!(is_form_valid(&schema, &valid_signup()));
    assert_eq!(report.errors().count(), 0);
    assert_eq!(report.get(fields::PASSWORD), Some(&ValidationResult::ok()));
}

#[test]
fn password_containing_email_is_rejected() {
    let schema = FormSchema::signup();
    let values = valid_signup()
        .with(fields::EMAIL, "a@b.com")
        .with(fields::PASSWORD, "a@b.comXYZ1");
    let report = validate(&schema, &values);
    assert!(!report.is_valid());
    assert!(!is_form_valid(&schema, &values));
    assert_eq!(report.invalid_fields(), vec![fields::PASSWORD]);
    assert_eq!(
        report.error(fields::PASSWORD),
        Some("Password can't contain your e-mail address")
    );
}

#[test]
fn email_in_different_case_does_not_block_password() {
    let schema = FormSchema::signup();
    let values = valid_signup()
        .with(fields::EMAIL, "a@b.com")
        .with(fields::PASSWORD, "A@B.COMxyz12");
    assert!(is_form_valid(&schema, &values));
}

#[test]
fn terms_not_accepted_reports_only_terms() {
    let schema = FormSchema::signup();
    let values = valid_signup().with(fields::ACCEPT_TERMS, false);
    let report = validate(&schema, &values);
    assert!(!is_form_valid(&schema, &values));
    assert_eq!(
        report.errors().collect::<Vec<_>>(),
        vec![(fields::ACCEPT_TERMS, "You must accept the terms and conditions")]
    );
}

#[test]
fn first_failing_rule_wins() {
    let schema = FormSchema::signup();
    let report = validate(&schema, &valid_signup().with(fields::PASSWORD, "abc"));
    assert_eq!(
        report.error(fields::PASSWORD),
        Some("Password must be at least 8 characters")
    );

    let report = validate(&schema, &valid_signup().with(fields::PASSWORD, "abcdefgh"));
    assert_eq!(report.error(fields::PASSWORD), Some("Password must contain a number"));

    let report = validate(&schema, &valid_signup().with(fields::PASSWORD, "abcdefg1"));
    assert_eq!(
        report.error(fields::PASSWORD),
        Some("Password must contain an uppercase letter")
    );

    let report = validate(&schema, &valid_signup().with(fields::EMAIL, ""));
    assert_eq!(report.error(fields::EMAIL), Some("E-mail is required"));

    let report = validate(&schema, &valid_signup().with(fields::EMAIL, "nope"));
    assert_eq!(report.error(fields::EMAIL), Some("Enter a valid e-mail address"));
}

#[test]
fn referral_code_is_optional_but_checked_when_present() {
    let schema = FormSchema::signup();
    assert!(is_form_valid(&schema, &valid_signup().with(fields::REFERRAL_CODE, "FRIEND10")));
    let report = validate(&schema, &valid_signup().with(fields::REFERRAL_CODE, "bad code!"));
    assert_eq!(report.invalid_fields(), vec![fields::REFERRAL_CODE]);
}

#[test]
fn absent_fields_evaluate_as_empty() {
    let schema = FormSchema::signup();
    let report = validate(&schema, &FormValues::new());
    assert_eq!(report.error(fields::EMAIL), Some("E-mail is required"));
    assert_eq!(report.error(fields::PHONE), Some("Phone number is required"));
    assert_eq!(report.get(fields::REFERRAL_CODE), Some(&ValidationResult::ok()));
    assert_eq!(
        report.error(fields::ACCEPT_TERMS),
        Some("You must accept the terms and conditions")
    );
}

#[test]
fn validate_is_idempotent() {
    let schema = FormSchema::signup();
    let values = valid_signup().with(fields::PHONE, "123");
    assert_eq!(validate(&schema, &values), validate(&schema, &values));
}

#[test]
fn report_iterates_in_schema_order() {
    let schema = FormSchema::signup();
    let names: Vec<&str> = validate(&schema, &valid_signup()).iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["email", "phone", "password", "referralCode", "acceptTerms"]);
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_empty_email_fails_but_short_password_passes() {
    let schema = FormSchema::login();
    let values = FormValues::new()
        .with(fields::EMAIL, "")
        .with(fields::PASSWORD, "x");
    let report = validate(&schema, &values);
    assert!(report.error(fields::EMAIL).is_some());
    assert!(report.get(fields::PASSWORD).is_some_and(|r| r.valid));
    assert!(!is_form_valid(&schema, &values));
}

#[test]
fn login_requires_password() {
    let schema = FormSchema::login();
    let values = FormValues::new().with(fields::EMAIL, "user@test.com");
    let report = validate(&schema, &values);
    assert_eq!(report.error(fields::PASSWORD), Some("Password is required"));
}

// =============================================================
// Custom schemas
// =============================================================

#[test]
fn field_without_rules_is_always_valid() {
    let schema = FormSchema::new(
        FormKind::Login,
        vec![FieldSchema::new("nickname", "Nickname", FieldKind::Text)],
    );
    assert!(is_form_valid(&schema, &FormValues::new()));
}

#[test]
fn validate_field_reports_custom_message() {
    let field = FieldSchema::new("code", "Code", FieldKind::Text).rule(Rule::text("need 42", |v| v == "42"));
    assert_eq!(
        validate_field(&field, &FormValues::new().with("code", "41")),
        ValidationResult::error("need 42")
    );
}
