//! In-memory employee directory.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::error::{AppError, Result};
use crate::models::Employee;

/// Owns every employee record and its login credential, keyed by ID.
///
/// Passwords are stored and compared in plaintext.
#[derive(Debug, Default)]
pub struct Directory {
    employees: HashMap<String, Employee>,
    credentials: HashMap<String, String>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record under its own ID.
    ///
    /// An existing record with the same ID is replaced.
    pub fn insert(&mut self, employee: Employee) {
        let id = employee.id().to_string();
        let password = employee.password().to_string();

        if self.contains(&id) {
            warn!("Employee ID {} already registered, overwriting", id);
        }
        info!("Registered employee {} ({})", id, employee.department());

        self.credentials.insert(id.clone(), password);
        self.employees.insert(id, employee);
    }

    /// Return the record if `id` exists and `password` matches exactly.
    pub fn lookup_for_display(&self, id: &str, password: &str) -> Result<&Employee> {
        match self.credentials.get(id) {
            Some(stored) if stored == password => self.employees.get(id).ok_or(AppError::EmployeeNotFound),
            _ => {
                warn!("Failed login for employee ID {:?}", id);
                Err(AppError::AuthenticationFailed)
            }
        }
    }

    /// Check if an ID is registered.
    ///
    /// Does not authenticate; use `lookup_for_display` to read a record.
    pub fn contains(&self, id: &str) -> bool {
        self.credentials.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
