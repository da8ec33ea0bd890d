//! Contact form validation and the simulated submit flow.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::transition::{Generation, GenerationCounter};

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

// the same shape browsers accept for <input type="email">
pub const EMAIL_REGEX: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";
pub const PHONE_REGEX: &str = r"^\+?[0-9 ()-]{7,20}$";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_REGEX).expect("EMAIL_REGEX is a valid pattern"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_REGEX).expect("PHONE_REGEX is a valid pattern"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea,
}

impl FieldKind {
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::TextArea => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
        }
    }
}

// Validity
//
// mirrors the constraint validation states a browser reports for a field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validity {
    ValueMissing,
    TypeMismatch,
    TooShort(usize),
    PatternMismatch,
}

impl Validity {
    pub fn message(self, kind: FieldKind) -> String {
        match self {
            Validity::ValueMissing => String::from("This field is required"),
            Validity::TypeMismatch if kind == FieldKind::Email => {
                String::from("Please enter a valid email address")
            }
            Validity::TooShort(min) => format!("Please enter at least {min} characters"),
            Validity::TypeMismatch | Validity::PatternMismatch => {
                String::from("Please enter a valid value")
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub min_length: Option<usize>,
}

impl FieldSpec {
    // empty optional fields are always valid, as in the browser
    pub fn validate(&self, value: &str) -> Result<(), Validity> {
        if value.is_empty() {
            return if self.required {
                Err(Validity::ValueMissing)
            } else {
                Ok(())
            };
        }

        match self.kind {
            FieldKind::Email if !EMAIL.is_match(value) => return Err(Validity::TypeMismatch),
            FieldKind::Tel if !PHONE.is_match(value) => return Err(Validity::PatternMismatch),
            _ => {}
        }

        match self.min_length {
            Some(min) if value.chars().count() < min => Err(Validity::TooShort(min)),
            _ => Ok(()),
        }
    }
}

pub const CONTACT_FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        name: "name",
        label: "Your Name",
        kind: FieldKind::Text,
        required: true,
        min_length: Some(2),
    },
    FieldSpec {
        name: "email",
        label: "Email Address",
        kind: FieldKind::Email,
        required: true,
        min_length: None,
    },
    FieldSpec {
        name: "phone",
        label: "Phone Number",
        kind: FieldKind::Tel,
        required: false,
        min_length: None,
    },
    FieldSpec {
        name: "subject",
        label: "Subject",
        kind: FieldKind::Text,
        required: true,
        min_length: Some(3),
    },
    FieldSpec {
        name: "message",
        label: "Your Message",
        kind: FieldKind::TextArea,
        required: true,
        min_length: Some(10),
    },
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub focused: bool,
    // set once the field has been validated; untouched fields are not decorated
    pub checked: Option<Result<(), Validity>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decoration {
    Pristine,
    Valid,
    Invalid(Validity),
}

impl Decoration {
    pub fn class(self) -> &'static str {
        match self {
            Decoration::Pristine => "",
            Decoration::Valid => "border-green-500/50",
            Decoration::Invalid(_) => "border-red-500 bg-red-50/30",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Editing,
    Sending,
    Sent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    // the listed fields failed validation; nothing is sent
    Blocked(Vec<usize>),
    // pass the generation to sent() after the pending delay
    Sending(Generation),
    // a submission is already in flight
    Busy,
}

// ContactForm
//
// there is no endpoint behind the form.  a valid submit shows a pending state, then a
// success message, then puts a fresh form back; each of those steps is stamped with the
// submit's generation
#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    specs: Vec<FieldSpec>,
    fields: Vec<FieldState>,
    phase: SubmitPhase,
    generation: GenerationCounter,
}

impl ContactForm {
    pub fn new(specs: &[FieldSpec]) -> Self {
        ContactForm {
            specs: specs.to_vec(),
            fields: vec![FieldState::default(); specs.len()],
            phase: SubmitPhase::Editing,
            generation: GenerationCounter::new(),
        }
    }

    pub fn contact() -> Self {
        Self::new(&CONTACT_FIELDS)
    }

    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    pub fn field(&self, index: usize) -> Option<&FieldState> {
        self.fields.get(index)
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    fn check(&mut self, index: usize) -> bool {
        let (Some(spec), Some(field)) = (self.specs.get(index), self.fields.get_mut(index)) else {
            return false;
        };

        let result = spec.validate(&field.value);
        field.checked = Some(result);
        result.is_ok()
    }

    pub fn input(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.value = value.into();
        }
        self.check(index);
    }

    pub fn focus(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(index) {
            field.focused = true;
        }
    }

    pub fn blur(&mut self, index: usize) {
        if let Some(field) = self.fields.get_mut(index) {
            field.focused = false;
        }
        self.check(index);
    }

    pub fn decoration(&self, index: usize) -> Decoration {
        match self.fields.get(index).and_then(|f| f.checked) {
            None => Decoration::Pristine,
            Some(Ok(())) => Decoration::Valid,
            Some(Err(validity)) => Decoration::Invalid(validity),
        }
    }

    pub fn error_message(&self, index: usize) -> Option<String> {
        match (self.decoration(index), self.specs.get(index)) {
            (Decoration::Invalid(validity), Some(spec)) => Some(validity.message(spec.kind)),
            _ => None,
        }
    }

    // the label floats above the field while it has focus or holds non-blank text
    pub fn label_floats(&self, index: usize) -> bool {
        self.fields
            .get(index)
            .map(|f| f.focused || !f.value.trim().is_empty())
            .unwrap_or(false)
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.phase != SubmitPhase::Editing {
            return SubmitOutcome::Busy;
        }

        let invalid: Vec<usize> = (0..self.specs.len()).filter(|&i| !self.check(i)).collect();
        if !invalid.is_empty() {
            debug!(?invalid, "contact form blocked");
            return SubmitOutcome::Blocked(invalid);
        }

        self.phase = SubmitPhase::Sending;
        SubmitOutcome::Sending(self.generation.advance())
    }

    // pass the same generation to restore() after the success delay
    pub fn sent(&mut self, generation: Generation) -> bool {
        if !self.generation.is_current(generation) || self.phase != SubmitPhase::Sending {
            return false;
        }

        self.phase = SubmitPhase::Sent;
        true
    }

    pub fn restore(&mut self, generation: Generation) -> bool {
        if !self.generation.is_current(generation) || self.phase != SubmitPhase::Sent {
            return false;
        }

        self.phase = SubmitPhase::Editing;
        self.fields = vec![FieldState::default(); self.specs.len()];
        true
    }
}
