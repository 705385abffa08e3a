pub mod employee;

pub use employee::{EmployeeService, TOP_EARNERS_COUNT};
