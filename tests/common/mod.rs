//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;

use employee_directory::model::{Employee, EmployeeDraft, EmployeeId};
use employee_directory::storage::{KeyValueStorage, MemoryStorage, StorageError};
use employee_directory::store::Store;
use parking_lot::Mutex;

/// A draft that passes validation against an empty collection.
pub fn draft(first: &str, last: &str, phone: &str, email: &str) -> EmployeeDraft {
    EmployeeDraft {
        first_name: first.to_string(),
        last_name: last.to_string(),
        date_of_employment: "2022-09-23".to_string(),
        date_of_birth: "1990-01-01".to_string(),
        phone_number: phone.to_string(),
        email: email.to_string(),
        department: "Analytics".to_string(),
        position: "Uzman".to_string(),
    }
}

pub fn employee(id: &str, first: &str, last: &str, phone: &str, email: &str) -> Employee {
    Employee::from_draft(EmployeeId::new(id), draft(first, last, phone, email))
}

/// `count` distinct, valid employees with ids "1".."count".
pub fn roster(count: usize) -> Vec<Employee> {
    (1..=count)
        .map(|i| {
            employee(
                &i.to_string(),
                &format!("First{i}"),
                &format!("Last{i}"),
                &format!("{:010}", 5_000_000_000u64 + i as u64),
                &format!("user{i}@example.com"),
            )
        })
        .collect()
}

pub fn memory_store() -> Store {
    Store::new(Arc::new(MemoryStorage::new())).expect("memory storage never fails")
}

/// Records every value passed to a subscriber.
pub fn recorder<T: Send + 'static>() -> (Arc<Mutex<Vec<T>>>, Arc<Mutex<Vec<T>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    (Arc::clone(&seen), seen)
}

/// Storage whose writes always fail.
pub struct FailingStorage;

impl KeyValueStorage for FailingStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable {
            message: "disk full".to_string(),
        })
    }
}
