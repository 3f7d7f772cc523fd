//! Employee record and the DTO used to create one.

use std::fmt;
use std::ops::Range;

use chrono::{Local, NaiveDate};
use rand::Rng;

use super::department::Department;

/// Range employee IDs are drawn from.
pub const EMPLOYEE_ID_RANGE: Range<u64> = 1_000_000_000..1_900_000_000;

/// Stored in place of an empty middle name.
pub const MIDDLE_NAME_PLACEHOLDER: &str = "N/A";

/// DTO for creating an employee.
#[derive(Debug, Clone, Default)]
pub struct CreateEmployee {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub phone_number: String,
    pub address: String,
    pub department: String,
    pub email: String,
    pub password: String,
}

/// A registered employee.
#[derive(Debug, Clone)]
pub struct Employee {
    id: String,
    password: String,
    first_name: String,
    last_name: String,
    middle_name: String,
    phone_number: String,
    address: String,
    department: String,
    email: String,
    date_of_joining: NaiveDate,
    salary: f64,
}

/// Generate a random employee ID. Uniqueness is not checked.
pub fn generate_employee_id() -> String {
    rand::rng().random_range(EMPLOYEE_ID_RANGE).to_string()
}

impl Employee {
    /// Build a record joining today with salary not yet calculated.
    pub fn new(data: CreateEmployee) -> Self {
        Self::with_join_date(data, Local::now().date_naive())
    }

    /// Build a record with an explicit join date.
    pub fn with_join_date(data: CreateEmployee, date_of_joining: NaiveDate) -> Self {
        let middle_name = data
            .middle_name
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| MIDDLE_NAME_PLACEHOLDER.to_string());

        Self {
            id: generate_employee_id(),
            password: data.password,
            first_name: data.first_name,
            last_name: data.last_name,
            middle_name,
            phone_number: data.phone_number,
            address: data.address,
            department: data.department,
            email: data.email,
            date_of_joining,
            salary: 0.0,
        }
    }

    /// Apply the department salary table. Unrecognized departments keep 0.0.
    pub fn calculate_salary(&mut self) {
        if let Some(salary) = Department::classify(&self.department).salary() {
            self.salary = salary;
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Login password, stored in plaintext.
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn middle_name(&self) -> &str {
        &self.middle_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn date_of_joining(&self) -> NaiveDate {
        self.date_of_joining
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    /// Replace the generated ID, for exercising ID collisions.
    #[cfg(test)]
    pub(crate) fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Column header matching the `Display` layout.
    pub fn table_header() -> String {
        format!(
            "{:<15} {:<20} {:<15} {:<15} {:<20} {:<10} {}",
            "ID", "Name", "Phone", "Department", "Email", "Joined", "Salary"
        )
    }
}

/// One fixed-width details row.
impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<15} {:<20} {:<15} {:<15} {:<20} {:<10} {:.2}",
            self.id,
            self.full_name(),
            self.phone_number,
            self.department,
            self.email,
            self.date_of_joining.format("%Y-%m-%d").to_string(),
            self.salary
        )
    }
}
