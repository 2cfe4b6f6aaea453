use super::*;
use crate::submit::SubmissionPayload;
use crate::values::FieldValue;

#[test]
fn empty_email_blocks_login() {
    let mut form = LoginForm::new();
    form.set_email("").expect("email");
    form.set_password("x").expect("password");

    let report = form.session().report();
    assert!(report.error(fields::EMAIL).is_some());
    assert!(report.get(fields::PASSWORD).is_some_and(|r| r.valid));
    assert_eq!(form.state(), SessionState::Editing);
}

#[test]
fn errors_hidden_until_submit_attempt() {
    let mut form = LoginForm::new();
    form.set_email("nope").expect("email");
    assert_eq!(form.session().visible_error(fields::EMAIL), None);

    let mut sink = |_: SubmissionPayload| {};
    assert!(matches!(
        form.submit(&mut sink),
        Err(FormError::NotSubmittable { .. })
    ));
    assert!(form.session().visible_error(fields::EMAIL).is_some());
}

#[test]
fn any_non_empty_password_is_accepted() {
    let mut form = LoginForm::new();
    form.set_email("user@test.com").expect("email");
    form.set_password("x").expect("password");
    assert_eq!(form.state(), SessionState::Submittable);

    let mut received = Vec::new();
    form.submit(&mut |p: SubmissionPayload| received.push(p))
        .expect("valid login submits");
    assert_eq!(received[0].get(fields::PASSWORD), Some(&FieldValue::from("x")));
    assert_eq!(form.state(), SessionState::Submitted);
    assert_eq!(form.email(), "");
    assert_eq!(form.password(), "");
}
