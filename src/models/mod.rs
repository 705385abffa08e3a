pub mod employee;

pub use employee::{CreateEmployeeInput, DeleteEmployeeRequest, Employee, UpstreamResponse};
