use super::*;

const NAME: usize = 0;
const EMAIL_FIELD: usize = 1;
const PHONE_FIELD: usize = 2;
const SUBJECT: usize = 3;
const MESSAGE: usize = 4;

fn filled() -> ContactForm {
    let mut form = ContactForm::contact();
    form.input(NAME, "Nimal Perera");
    form.input(EMAIL_FIELD, "nimal@example.lk");
    form.input(SUBJECT, "Admissions");
    form.input(MESSAGE, "When do grade six admissions open?");
    form
}

#[test]
fn messages_follow_validity_state() {
    assert_eq!(
        Validity::ValueMissing.message(FieldKind::Text),
        "This field is required"
    );
    assert_eq!(
        Validity::TypeMismatch.message(FieldKind::Email),
        "Please enter a valid email address"
    );
    assert_eq!(
        Validity::TypeMismatch.message(FieldKind::Text),
        "Please enter a valid value"
    );
    assert_eq!(
        Validity::TooShort(10).message(FieldKind::TextArea),
        "Please enter at least 10 characters"
    );
    assert_eq!(
        Validity::PatternMismatch.message(FieldKind::Tel),
        "Please enter a valid value"
    );
}

#[test]
fn field_rules() {
    let [name, email, phone, _, message] = CONTACT_FIELDS;

    assert_eq!(name.validate(""), Err(Validity::ValueMissing));
    assert_eq!(name.validate("A"), Err(Validity::TooShort(2)));
    assert_eq!(name.validate("Al"), Ok(()));

    assert_eq!(email.validate("not-an-email"), Err(Validity::TypeMismatch));
    assert_eq!(email.validate("a@b"), Ok(()));
    assert_eq!(email.validate("first.last@school.lk"), Ok(()));

    assert_eq!(phone.validate(""), Ok(()));
    assert_eq!(phone.validate("+94 11 285 5100"), Ok(()));
    assert_eq!(phone.validate("call me"), Err(Validity::PatternMismatch));

    assert_eq!(message.validate("short"), Err(Validity::TooShort(10)));
}

#[test]
fn untouched_fields_are_not_decorated() {
    let mut form = ContactForm::contact();
    assert_eq!(form.decoration(NAME), Decoration::Pristine);

    form.input(NAME, "N");
    assert_eq!(form.decoration(NAME), Decoration::Invalid(Validity::TooShort(2)));
    assert_eq!(
        form.error_message(NAME).as_deref(),
        Some("Please enter at least 2 characters")
    );

    form.input(NAME, "Nimal");
    assert_eq!(form.decoration(NAME), Decoration::Valid);
    assert_eq!(form.error_message(NAME), None);
}

#[test]
fn blur_validates_an_empty_required_field() {
    let mut form = ContactForm::contact();
    form.focus(SUBJECT);
    form.blur(SUBJECT);

    assert_eq!(form.decoration(SUBJECT), Decoration::Invalid(Validity::ValueMissing));
}

#[test]
fn labels_float_on_focus_or_content() {
    let mut form = ContactForm::contact();
    assert!(!form.label_floats(NAME));

    form.focus(NAME);
    assert!(form.label_floats(NAME));

    form.input(NAME, "   ");
    form.blur(NAME);
    assert!(!form.label_floats(NAME));

    form.input(NAME, "Nimal");
    assert!(form.label_floats(NAME));
}

#[test]
fn empty_required_field_blocks_submission() {
    let mut form = filled();
    form.input(SUBJECT, "");

    assert_eq!(form.submit(), SubmitOutcome::Blocked(vec![SUBJECT]));
    assert_eq!(form.phase(), SubmitPhase::Editing);
    assert_eq!(form.decoration(SUBJECT), Decoration::Invalid(Validity::ValueMissing));
}

#[test]
fn blank_form_marks_every_required_field() {
    let mut form = ContactForm::contact();

    assert_eq!(
        form.submit(),
        SubmitOutcome::Blocked(vec![NAME, EMAIL_FIELD, SUBJECT, MESSAGE])
    );
    assert_eq!(form.decoration(PHONE_FIELD), Decoration::Valid);
}

#[test]
fn valid_submission_runs_pending_success_restore() {
    let mut form = filled();

    let SubmitOutcome::Sending(generation) = form.submit() else {
        panic!("valid form should submit");
    };
    assert_eq!(form.phase(), SubmitPhase::Sending);
    assert_eq!(form.submit(), SubmitOutcome::Busy);

    assert!(form.sent(generation));
    assert_eq!(form.phase(), SubmitPhase::Sent);

    assert!(form.restore(generation));
    assert_eq!(form.phase(), SubmitPhase::Editing);
    assert_eq!(form.field(NAME).map(|f| f.value.as_str()), Some(""));
    assert_eq!(form.decoration(NAME), Decoration::Pristine);
}

#[test]
fn restore_requires_success_first() {
    let mut form = filled();
    let SubmitOutcome::Sending(generation) = form.submit() else {
        panic!("valid form should submit");
    };

    assert!(!form.restore(generation));
    assert!(form.sent(generation));
    assert!(!form.sent(generation));
}
