//! Department model.
//!
//! A [`Department`] owns a bounded roster of employees kept in ascending
//! employee-id order.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::DepartmentRecord;
use crate::error::{PayrollError, PayrollResult};

use super::Employee;

/// The maximum number of employees a department accepts.
pub const MAX_EMPLOYEES: usize = 20;

/// A named group of at most [`MAX_EMPLOYEES`] employees.
///
/// The department stores its own copy of every employee added to it, so
/// later changes to the caller's value never reach the roster. The roster
/// is re-sorted by employee id after every insertion. Ids are not required
/// to be unique; lookups act on the first match in roster order.
///
/// # Examples
///
/// ```
/// use payroll_roster::models::{Department, Employee};
/// use rust_decimal::Decimal;
///
/// let mut department = Department::new("Advising").unwrap();
/// let employee = Employee::new("Ada", "Lovelace", 1300, Decimal::from(40), &[8, 8, 8, 8, 8])
///     .unwrap();
/// department.add_employee(&employee).unwrap();
/// assert!(department.is_in_department(1300));
/// assert_eq!(department.num_employees(), 1);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(try_from = "DepartmentRecord", into = "DepartmentRecord")]
pub struct Department {
    name: String,
    employees: Vec<Employee>,
}

impl Department {
    /// Creates an empty department.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if `name` is empty.
    pub fn new(name: &str) -> PayrollResult<Self> {
        Ok(Self {
            name: validate_department_name(Some(name))?,
            employees: Vec::new(),
        })
    }

    /// Returns the department name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the roster in ascending employee-id order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Adds a copy of `employee` to the roster and re-sorts it by id.
    ///
    /// Commissioned employees stay commissioned. No check is made for an
    /// existing employee with the same id.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if the department already holds
    /// [`MAX_EMPLOYEES`] employees; the roster is left unchanged.
    pub fn add_employee(&mut self, employee: &Employee) -> PayrollResult<()> {
        if self.is_full() {
            warn!(
                department = %self.name,
                employee_id = employee.employee_id(),
                "Department is full, employee rejected"
            );
            return Err(PayrollError::invalid(
                "employees",
                format!(
                    "This Department is already at the max. number of employees: {}",
                    MAX_EMPLOYEES
                ),
            ));
        }

        self.employees.push(employee.clone());
        self.employees.sort();
        debug!(
            department = %self.name,
            employee_id = employee.employee_id(),
            roster_size = self.employees.len(),
            "Employee added"
        );
        Ok(())
    }

    /// Removes and returns the first employee with `employee_id`.
    ///
    /// Returns `None` and leaves the roster untouched if there is no match.
    pub fn remove_employee(&mut self, employee_id: u32) -> Option<Employee> {
        let position = self
            .employees
            .iter()
            .position(|e| e.employee_id() == employee_id)?;
        let removed = self.employees.remove(position);
        debug!(
            department = %self.name,
            employee_id,
            roster_size = self.employees.len(),
            "Employee removed"
        );
        Some(removed)
    }

    /// Returns true if an employee with `employee_id` is on the roster.
    pub fn is_in_department(&self, employee_id: u32) -> bool {
        self.employees
            .iter()
            .any(|e| e.employee_id() == employee_id)
    }

    /// Returns the number of employees on the roster.
    pub fn num_employees(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if no more employees can be added.
    pub fn is_full(&self) -> bool {
        self.employees.len() >= MAX_EMPLOYEES
    }
}

fn validate_department_name(name: Option<&str>) -> PayrollResult<String> {
    let name = name.ok_or_else(|| {
        PayrollError::missing("department_name", "Null value passed in for department_name")
    })?;
    if name.is_empty() {
        return Err(PayrollError::invalid(
            "department_name",
            format!("Invalid Department Name: {}", name),
        ));
    }
    Ok(name.to_string())
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = format!("Department: {}", self.name);
        writeln!(f, "{}", header)?;
        write!(f, "{}", "-".repeat(header.chars().count()))?;
        writeln!(f, "\nEmployees:")?;
        for employee in &self.employees {
            writeln!(f, "{}", employee)?;
        }
        Ok(())
    }
}

impl TryFrom<DepartmentRecord> for Department {
    type Error = PayrollError;

    fn try_from(record: DepartmentRecord) -> PayrollResult<Self> {
        let mut department = Self {
            name: validate_department_name(record.name.as_deref())?,
            employees: Vec::new(),
        };

        for entry in record.employees {
            let record = entry.ok_or_else(|| {
                PayrollError::missing("employee", "Null Employee sent to add_employee")
            })?;
            let employee = Employee::try_from(record)?;
            department.add_employee(&employee)?;
        }
        Ok(department)
    }
}

impl From<Department> for DepartmentRecord {
    fn from(department: Department) -> Self {
        Self {
            name: Some(department.name),
            employees: department
                .employees
                .into_iter()
                .map(|employee| Some(employee.into()))
                .collect(),
        }
    }
}
