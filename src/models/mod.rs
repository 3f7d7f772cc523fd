//! Data models for employees and departments.

pub mod department;
pub mod employee;

pub use department::Department;
pub use employee::{CreateEmployee, Employee, generate_employee_id};
