//! Add/edit form workflow.
//!
//! The form holds a draft and its current errors. `submit` validates against
//! the store, assigns an id for new records and dispatches the write.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::model::{Employee, EmployeeDraft, EmployeeField, EmployeeId};
use crate::store::{Action, AppState, Store, StoreError};
use crate::validation::{validate, ValidationErrors, PHONE_DIGITS};

/// Source of ids for newly created records.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> EmployeeId;
}

/// Millisecond Unix timestamps as decimal strings.
///
/// Ids never repeat within one generator: a second call in the same
/// millisecond gets the previous value plus one.
#[derive(Debug, Default)]
pub struct TimestampIds {
    last: AtomicU64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimestampIds {
    fn next_id(&self) -> EmployeeId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let mut previous = self.last.load(Ordering::Relaxed);
        loop {
            let next = now.max(previous + 1);
            match self.last.compare_exchange_weak(
                previous,
                next,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return EmployeeId::new(next.to_string()),
                Err(actual) => previous = actual,
            }
        }
    }
}

/// Result of [`EmployeeForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record was written; the caller navigates back to the list.
    Saved(EmployeeId),
    /// Validation failed; errors are on the form.
    Rejected,
    /// The edited record is no longer in the store; nothing was written.
    Missing(EmployeeId),
}

/// Form state for creating or editing one employee.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeForm {
    target: Option<EmployeeId>,
    draft: EmployeeDraft,
    errors: ValidationErrors,
}

impl EmployeeForm {
    /// Empty form for a new record.
    pub fn create() -> Self {
        Self::default()
    }

    /// Form editing the record `id`.
    ///
    /// The draft is prefilled from the record when it exists. A missing
    /// record leaves the draft empty; submitting then updates nothing.
    pub fn edit(state: &AppState, id: EmployeeId) -> Self {
        let draft = state
            .find_employee(&id)
            .map(Employee::to_draft)
            .unwrap_or_default();
        Self {
            target: Some(id),
            draft,
            errors: ValidationErrors::default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&EmployeeId> {
        self.target.as_ref()
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Update one field and clear its error.
    pub fn set_field(&mut self, field: EmployeeField, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.clear_field(field);
    }

    /// Phone input as typed: only digits are kept, at most ten.
    pub fn set_phone_input(&mut self, raw: &str) {
        let digits: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(PHONE_DIGITS)
            .collect();
        self.set_field(EmployeeField::PhoneNumber, digits);
    }

    /// Validate and, if clean, write the record to the store.
    ///
    /// New records get an id from `ids` and are appended; edits replace the
    /// record with the target id. An edit whose target has since left the
    /// store reports [`SubmitOutcome::Missing`] without dispatching.
    pub fn submit(
        &mut self,
        store: &Store,
        ids: &dyn IdGenerator,
    ) -> Result<SubmitOutcome, StoreError> {
        let state = store.get_state();
        self.errors = validate(&self.draft, &state.employees, self.target.as_ref());
        if !self.errors.is_empty() {
            tracing::debug!(errors = self.errors.len(), "form submission rejected");
            return Ok(SubmitOutcome::Rejected);
        }

        let (id, action) = match &self.target {
            Some(id) if state.find_employee(id).is_none() => {
                tracing::warn!(id = %id, "edited employee no longer exists");
                return Ok(SubmitOutcome::Missing(id.clone()));
            }
            Some(id) => (
                id.clone(),
                Action::UpdateEmployee(Employee::from_draft(id.clone(), self.draft.clone())),
            ),
            None => {
                let id = ids.next_id();
                (
                    id.clone(),
                    Action::AddEmployee(Employee::from_draft(id, self.draft.clone())),
                )
            }
        };

        store.dispatch(action)?;
        Ok(SubmitOutcome::Saved(id))
    }
}
