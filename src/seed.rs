//! Demonstration records loaded at startup.

use tracing::info;

use crate::directory::Directory;
use crate::models::{CreateEmployee, Employee};

/// Password shared by every demonstration record.
pub const DEMO_PASSWORD: &str = "password123";

/// (first, last, phone, address, department, email)
const DEMO_EMPLOYEES: [(&str, &str, &str, &str, &str, &str); 3] = [
    ("Yuraj", "Shrestha", "9876543210", "Kathmandu", "IT", "yuraj@example.com"),
    ("Ekraj", "Shrestha", "9876543211", "Pokhara", "HR", "ekraj@example.com"),
    ("Jenisha", "Karki", "9876543212", "Lalitpur", "Sales", "jenisha@example.com"),
];

/// Register the demonstration employees and return their generated IDs
/// in load order.
pub fn preload(directory: &mut Directory) -> Vec<String> {
    let ids: Vec<String> = DEMO_EMPLOYEES
        .iter()
        .map(|&(first_name, last_name, phone_number, address, department, email)| {
            let mut employee = Employee::new(CreateEmployee {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                middle_name: None,
                phone_number: phone_number.to_string(),
                address: address.to_string(),
                department: department.to_string(),
                email: email.to_string(),
                password: DEMO_PASSWORD.to_string(),
            });
            employee.calculate_salary();

            let id = employee.id().to_string();
            directory.insert(employee);
            id
        })
        .collect();

    info!("Preloaded {} demonstration employees", ids.len());
    ids
}
