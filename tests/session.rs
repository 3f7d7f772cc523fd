//! End-to-end menu scenarios driven through in-memory input.

use std::io::Cursor;

use chrono::Local;
use staff_registry::auth::{ADMIN_WELCOME, AdminGate};
use staff_registry::directory::Directory;
use staff_registry::seed::{self, DEMO_PASSWORD};
use staff_registry::session::Session;

const ADD_ANA: &str = "1\nAna\nLee\n\n5551234567\nX\nIT\na@x.com\np1\n";

fn run(directory: Directory, input: &str) -> (Directory, String) {
    let mut session = Session::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        directory,
        AdminGate::default(),
    );
    session.run().unwrap();
    let (directory, out) = session.into_parts();
    (directory, String::from_utf8(out).unwrap())
}

fn added_id(output: &str) -> String {
    let marker = "Employee ID: ";
    let start = output.find(marker).expect("no employee ID echoed") + marker.len();
    output[start..].chars().take_while(char::is_ascii_digit).collect()
}

/// First employee details row in the output.
fn details_line(output: &str) -> Option<&str> {
    output.lines().find(|line| line.ends_with(".00"))
}

#[test]
fn test_add_employee_echoes_id_in_range() {
    let (directory, out) = run(Directory::new(), &format!("{ADD_ANA}4\n"));

    let id = added_id(&out);
    let value: u64 = id.parse().unwrap();
    assert!((1_000_000_000..=1_899_999_999).contains(&value));

    let employee = directory.lookup_for_display(&id, "p1").unwrap();
    assert_eq!(employee.salary(), 175_000.0);
    assert_eq!(employee.middle_name(), "N/A");
}

#[test]
fn test_view_added_employee() {
    let (directory, out) = run(Directory::new(), &format!("{ADD_ANA}4\n"));
    let id = added_id(&out);

    let (_, out) = run(directory, &format!("2\n{id}\np1\n4\n"));
    let line = details_line(&out).expect("no details printed");

    assert!(line.contains(&id));
    assert!(line.contains("Ana Lee"));
    assert!(line.contains("5551234567"));
    assert!(line.contains("IT"));
    assert!(line.contains("a@x.com"));
    assert!(line.contains(&Local::now().date_naive().format("%Y-%m-%d").to_string()));
    assert!(line.ends_with("175000.00"));
}

#[test]
fn test_view_with_wrong_password() {
    let (directory, out) = run(Directory::new(), &format!("{ADD_ANA}4\n"));
    let id = added_id(&out);

    let (_, out) = run(directory, &format!("2\n{id}\nwrong\n4\n"));
    assert!(out.contains("Invalid ID or Password."));
    assert!(!out.contains("Ana Lee"));
    assert!(details_line(&out).is_none());
}

#[test]
fn test_view_unknown_id() {
    let (_, out) = run(Directory::new(), "2\n1000000000\np1\n4\n");
    assert!(out.contains("Invalid ID or Password."));
}

#[test]
fn test_admin_login() {
    let (_, out) = run(Directory::new(), "3\nadmin\nadmin123\n4\n");
    assert!(out.contains(ADMIN_WELCOME));

    let (_, out) = run(Directory::new(), "3\nadmin\nwrong\n4\n");
    assert!(out.contains("Invalid Admin ID or Password."));
    assert!(!out.contains(ADMIN_WELCOME));
}

#[test]
fn test_preloaded_employees_retrievable() {
    let mut directory = Directory::new();
    let ids = seed::preload(&mut directory);
    assert_eq!(directory.len(), 3);

    let mut input = String::new();
    for id in &ids {
        input.push_str(&format!("2\n{id}\n{DEMO_PASSWORD}\n"));
    }
    input.push_str("4\n");

    let (_, out) = run(directory, &input);
    let lines: Vec<&str> = out.lines().filter(|line| line.ends_with(".00")).collect();
    assert_eq!(lines.len(), 3);

    for ((line, id), (department, salary)) in lines
        .iter()
        .zip(&ids)
        .zip([("IT", "175000.00"), ("HR", "150000.00"), ("Sales", "125000.00")])
    {
        assert!(line.starts_with(id.as_str()));
        assert!(line.contains(department));
        assert!(line.ends_with(salary));
    }
}

#[test]
fn test_unrecognized_department_has_zero_salary() {
    let (directory, out) = run(Directory::new(), "1\nBo\nKim\nJ\n555\nY\nLegal\nb@x.com\npw\n4\n");
    let id = added_id(&out);

    let (_, out) = run(directory, &format!("2\n{id}\npw\n4\n"));
    assert!(out.lines().any(|line| line.contains("Bo Kim") && line.ends_with("0.00")));
}
