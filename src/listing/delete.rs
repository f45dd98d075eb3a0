use crate::model::{Employee, EmployeeId};
use crate::store::{Action, Store, StoreError};

/// Two-step delete: pick a record, then confirm or cancel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteConfirmation {
    pending: Option<Employee>,
}

impl DeleteConfirmation {
    /// Mark the record with `id` for deletion.
    ///
    /// Returns false, leaving any earlier selection alone, if no record has
    /// that id.
    pub fn request(&mut self, records: &[Employee], id: &EmployeeId) -> bool {
        match records.iter().find(|e| &e.id == id) {
            Some(employee) => {
                self.pending = Some(employee.clone());
                true
            }
            None => false,
        }
    }

    /// Record awaiting confirmation, for the "delete <name>?" prompt.
    pub fn pending(&self) -> Option<&Employee> {
        self.pending.as_ref()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Remove the pending record from the store's collection.
    ///
    /// Returns the removed id, or `None` if nothing was pending.
    pub fn confirm(&mut self, store: &Store) -> Result<Option<EmployeeId>, StoreError> {
        let Some(employee) = self.pending.take() else {
            return Ok(None);
        };

        let remaining: Vec<Employee> = store
            .get_state()
            .employees
            .into_iter()
            .filter(|e| e.id != employee.id)
            .collect();

        store.dispatch(Action::SetEmployees(remaining))?;
        tracing::info!(id = %employee.id, "employee deleted");
        Ok(Some(employee.id))
    }
}
