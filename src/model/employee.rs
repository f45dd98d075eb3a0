use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned to a record when it is created.
///
/// Stored as a string. Rosters that carry numeric ids (negative and
/// fractional included) are accepted on load and kept as their JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct EmployeeId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawId> for EmployeeId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => Self(text),
            RawId::Number(n) => Self(n.to_string()),
        }
    }
}

impl From<EmployeeId> for String {
    fn from(id: EmployeeId) -> Self {
        id.0
    }
}

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EmployeeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The eight business fields of a record, in form order.
///
/// `as_str()` is the camelCase attribute name used in serialized records and
/// as the key of field-level validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmployeeField {
    FirstName,
    LastName,
    DateOfEmployment,
    DateOfBirth,
    PhoneNumber,
    Email,
    Department,
    Position,
}

impl EmployeeField {
    pub const ALL: [EmployeeField; 8] = [
        Self::FirstName,
        Self::LastName,
        Self::DateOfEmployment,
        Self::DateOfBirth,
        Self::PhoneNumber,
        Self::Email,
        Self::Department,
        Self::Position,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::DateOfEmployment => "dateOfEmployment",
            Self::DateOfBirth => "dateOfBirth",
            Self::PhoneNumber => "phoneNumber",
            Self::Email => "email",
            Self::Department => "department",
            Self::Position => "position",
        }
    }

    /// Parse from an attribute name. Unknown names return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == s)
    }
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field values of a record that has not been given an id yet.
///
/// This is what the form edits and what validation inspects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub date_of_employment: String,
    pub date_of_birth: String,
    /// Digits only; presentation formatting lives in `model::format`.
    pub phone_number: String,
    pub email: String,
    pub department: String,
    pub position: String,
}

impl EmployeeDraft {
    pub fn get(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::FirstName => &self.first_name,
            EmployeeField::LastName => &self.last_name,
            EmployeeField::DateOfEmployment => &self.date_of_employment,
            EmployeeField::DateOfBirth => &self.date_of_birth,
            EmployeeField::PhoneNumber => &self.phone_number,
            EmployeeField::Email => &self.email,
            EmployeeField::Department => &self.department,
            EmployeeField::Position => &self.position,
        }
    }

    pub fn set(&mut self, field: EmployeeField, value: impl Into<String>) {
        let slot = match field {
            EmployeeField::FirstName => &mut self.first_name,
            EmployeeField::LastName => &mut self.last_name,
            EmployeeField::DateOfEmployment => &mut self.date_of_employment,
            EmployeeField::DateOfBirth => &mut self.date_of_birth,
            EmployeeField::PhoneNumber => &mut self.phone_number,
            EmployeeField::Email => &mut self.email,
            EmployeeField::Department => &mut self.department,
            EmployeeField::Position => &mut self.position,
        };
        *slot = value.into();
    }
}

/// A stored employee record.
///
/// Edits replace the whole record; there is no partial patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_employment: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub email: String,
    pub department: String,
    pub position: String,
}

impl Employee {
    pub fn from_draft(id: EmployeeId, draft: EmployeeDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            date_of_employment: draft.date_of_employment,
            date_of_birth: draft.date_of_birth,
            phone_number: draft.phone_number,
            email: draft.email,
            department: draft.department,
            position: draft.position,
        }
    }

    /// Copy the field values out, e.g. to prefill an edit form.
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_employment: self.date_of_employment.clone(),
            date_of_birth: self.date_of_birth.clone(),
            phone_number: self.phone_number.clone(),
            email: self.email.clone(),
            department: self.department.clone(),
            position: self.position.clone(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Text the list filter matches against: first name, last name and
    /// department separated by single spaces, lowercased.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.first_name, self.last_name, self.department).to_lowercase()
    }
}
