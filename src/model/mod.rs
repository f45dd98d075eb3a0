mod employee;
pub mod format;

pub use employee::{Employee, EmployeeDraft, EmployeeField, EmployeeId};
