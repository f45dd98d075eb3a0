//! Record validation: required fields, email/phone shape, uniqueness.
//!
//! Validation never fails; it returns a [`ValidationErrors`] map which is
//! empty when the candidate can be saved. Errors are stable kinds whose
//! message keys are resolved by the locale service at render time.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::model::{Employee, EmployeeDraft, EmployeeField, EmployeeId};

/// Required length of a stored phone number.
pub const PHONE_DIGITS: usize = 10;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    // Something, '@', something, '.', something.
    EMAIL_REGEX.get_or_init(|| Regex::new(r".+@.+\..+").expect("valid email regex"))
}

/// What a validation error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorTarget {
    Field(EmployeeField),
    /// The candidate as a whole (duplicates).
    Record,
}

/// Kind of validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    Required,
    InvalidEmail,
    InvalidPhone,
    Duplicate,
}

impl ValidationError {
    /// Translation key of the user-facing message.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::Required => "validationRequired",
            Self::InvalidEmail => "validationEmail",
            Self::InvalidPhone => "validationPhone",
            Self::Duplicate => "validationDuplicate",
        }
    }
}

/// Field-keyed validation result. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<ErrorTarget, ValidationError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn field(&self, field: EmployeeField) -> Option<ValidationError> {
        self.entries.get(&ErrorTarget::Field(field)).copied()
    }

    pub fn is_duplicate(&self) -> bool {
        self.entries.contains_key(&ErrorTarget::Record)
    }

    /// Fields that carry an error, in form order.
    pub fn fields(&self) -> impl Iterator<Item = EmployeeField> + '_ {
        self.entries.keys().filter_map(|target| match target {
            ErrorTarget::Field(field) => Some(*field),
            ErrorTarget::Record => None,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorTarget, ValidationError)> + '_ {
        self.entries.iter().map(|(target, error)| (*target, *error))
    }

    /// Drop the error on one field, e.g. after the user edits it.
    pub fn clear_field(&mut self, field: EmployeeField) {
        self.entries.remove(&ErrorTarget::Field(field));
    }

    fn insert(&mut self, target: ErrorTarget, error: ValidationError) {
        self.entries.insert(target, error);
    }
}

/// Validate `candidate` against `existing` records.
///
/// The record whose id equals `exclude_id` is skipped by the duplicate
/// check, so an edited record never conflicts with its stored self.
///
/// Format rules run on any non-empty value and replace a `Required` entry
/// on the same field, so a whitespace-only email or phone reports the
/// format error.
pub fn validate(
    candidate: &EmployeeDraft,
    existing: &[Employee],
    exclude_id: Option<&EmployeeId>,
) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    for field in EmployeeField::ALL {
        if candidate.get(field).trim().is_empty() {
            errors.insert(ErrorTarget::Field(field), ValidationError::Required);
        }
    }

    let email = candidate.email.as_str();
    if !email.is_empty() && !is_valid_email(email) {
        errors.insert(
            ErrorTarget::Field(EmployeeField::Email),
            ValidationError::InvalidEmail,
        );
    }

    let phone = candidate.phone_number.as_str();
    if !phone.is_empty() && !is_valid_phone(phone) {
        errors.insert(
            ErrorTarget::Field(EmployeeField::PhoneNumber),
            ValidationError::InvalidPhone,
        );
    }

    if find_conflict(candidate, existing, exclude_id).is_some() {
        errors.insert(ErrorTarget::Record, ValidationError::Duplicate);
    }

    errors
}

/// First stored record that shares a name pair, phone number or email with
/// `candidate`, skipping `exclude_id`.
pub fn find_conflict<'a>(
    candidate: &EmployeeDraft,
    existing: &'a [Employee],
    exclude_id: Option<&EmployeeId>,
) -> Option<&'a Employee> {
    existing.iter().find(|e| {
        exclude_id != Some(&e.id)
            && ((e.first_name == candidate.first_name && e.last_name == candidate.last_name)
                || e.phone_number == candidate.phone_number
                || e.email == candidate.email)
    })
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Exactly ten ASCII digits, nothing else.
pub fn is_valid_phone(value: &str) -> bool {
    value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}
