//! Interactive console menu.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::auth::{ADMIN_WELCOME, AdminGate};
use crate::directory::Directory;
use crate::error::{AppError, Result};
use crate::models::{CreateEmployee, Employee};

const MENU: &str = "\n===== Employee Management System =====
1. Add Employee
2. View Employee Details
3. Admin Login
4. Exit";

/// Main menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddEmployee,
    ViewEmployee,
    AdminLogin,
    Exit,
}

impl MenuChoice {
    /// Parse the number typed at the menu prompt.
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim() {
            "1" => Ok(Self::AddEmployee),
            "2" => Ok(Self::ViewEmployee),
            "3" => Ok(Self::AdminLogin),
            "4" => Ok(Self::Exit),
            _ => Err(AppError::InvalidMenuChoice),
        }
    }
}

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    MainMenu,
    AddEmployee,
    ViewEmployee,
    AdminLogin,
    Exited,
}

impl From<MenuChoice> for SessionState {
    fn from(choice: MenuChoice) -> Self {
        match choice {
            MenuChoice::AddEmployee => Self::AddEmployee,
            MenuChoice::ViewEmployee => Self::ViewEmployee,
            MenuChoice::AdminLogin => Self::AdminLogin,
            MenuChoice::Exit => Self::Exited,
        }
    }
}

/// Menu loop over any line reader and writer.
pub struct Session<R, W> {
    input: R,
    output: W,
    directory: Directory,
    admin: AdminGate,
    state: SessionState,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, directory: Directory, admin: AdminGate) -> Self {
        Self {
            input,
            output,
            directory,
            admin,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Consume the session, returning the directory and the output sink.
    pub fn into_parts(self) -> (Directory, W) {
        (self.directory, self.output)
    }

    /// Run until the user exits or input ends.
    ///
    /// Only console I/O errors are returned; every other failure is
    /// printed and the menu shown again.
    pub fn run(&mut self) -> Result<()> {
        while self.state != SessionState::Exited {
            match self.step() {
                Ok(()) => {}
                Err(AppError::InputClosed) => {
                    debug!("Input closed, ending session");
                    self.state = SessionState::Exited;
                }
                Err(e) if e.is_recoverable() => {
                    writeln!(self.output, "{e}")?;
                    self.state = SessionState::MainMenu;
                }
                Err(e) => return Err(e),
            }
        }

        writeln!(self.output, "Exiting... Goodbye!")?;
        self.output.flush()?;
        info!("Session ended");
        Ok(())
    }

    /// Show the menu, read one choice, and perform it.
    pub fn step(&mut self) -> Result<()> {
        self.state = SessionState::MainMenu;
        writeln!(self.output, "{MENU}")?;
        let choice = MenuChoice::parse(&self.prompt("Enter your choice: ")?)?;
        self.state = choice.into();

        match self.state {
            SessionState::AddEmployee => self.add_employee()?,
            SessionState::ViewEmployee => self.view_employee()?,
            SessionState::AdminLogin => self.admin_login()?,
            SessionState::MainMenu | SessionState::Exited => return Ok(()),
        }

        self.state = SessionState::MainMenu;
        Ok(())
    }

    fn add_employee(&mut self) -> Result<()> {
        let data = CreateEmployee {
            first_name: self.prompt("Enter First Name: ")?,
            last_name: self.prompt("Enter Last Name: ")?,
            middle_name: Some(self.prompt("Enter Middle Name (optional): ")?),
            phone_number: self.prompt("Enter Phone Number: ")?,
            address: self.prompt("Enter Address: ")?,
            department: self.prompt("Enter Department (HR/IT/Sales): ")?,
            email: self.prompt("Enter Email: ")?,
            password: self.prompt("Set Password: ")?,
        };

        let mut employee = Employee::new(data);
        employee.calculate_salary();
        let id = employee.id().to_string();
        self.directory.insert(employee);

        writeln!(self.output, "Employee added successfully! Employee ID: {id}")?;
        Ok(())
    }

    fn view_employee(&mut self) -> Result<()> {
        let id = self.prompt("Enter Employee ID: ")?;
        let password = self.prompt("Enter Password: ")?;

        let employee = self.directory.lookup_for_display(&id, &password)?;
        writeln!(self.output, "{}", Employee::table_header())?;
        writeln!(self.output, "{employee}")?;
        Ok(())
    }

    fn admin_login(&mut self) -> Result<()> {
        let id = self.prompt("Enter Admin ID: ")?;
        let password = self.prompt("Enter Admin Password: ")?;

        self.admin.login(&id, &password)?;
        writeln!(self.output, "{ADMIN_WELCOME}")?;
        Ok(())
    }

    /// Print a prompt and read one line without its line ending.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    fn prompt(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(AppError::InputClosed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
