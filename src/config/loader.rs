//! Roster loading functionality.
//!
//! This module provides the [`RosterLoader`] type for loading department
//! rosters from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::models::Department;

use super::types::DepartmentRecord;

/// Loads department rosters from YAML.
///
/// # File Format
///
/// ```text
/// name: Sales
/// employees:
///   - first_name: Ada
///     last_name: Lovelace
///     employee_id: 1200
///     hourly_rate: "42.50"
///     days: [8, 8, 8, 8, 8]
///   - first_name: Grace
///     last_name: Hopper
///     employee_id: 1100
///     hourly_rate: "30.00"
///     days: [4, 4, 4, 4, 4]
///     commission:
///       sales_amount_needed: "1000.00"
///       weekly_sales_total: "2500.00"
/// ```
///
/// Employees are added in file order, so the usual capacity limit and
/// id ordering apply.
///
/// # Example
///
/// ```
/// use payroll_roster::config::RosterLoader;
///
/// let yaml = r#"
/// name: Sales
/// employees:
///   - first_name: Ada
///     last_name: Lovelace
///     employee_id: 1200
///     hourly_rate: "42.50"
///     days: [8, 8, 8, 8, 8]
/// "#;
/// let department = RosterLoader::from_yaml_str(yaml).unwrap();
/// assert_eq!(department.name(), "Sales");
/// assert!(department.is_in_department(1200));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RosterLoader;

impl RosterLoader {
    /// Loads a department from the roster file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (`RosterNotFound`)
    /// - The file is not valid YAML for a roster (`RosterParseError`)
    /// - Any record fails validation (`MissingValue` / `InvalidValue`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Department> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::RosterNotFound {
            path: path_str.clone(),
        })?;

        let record = Self::parse(&content, &path_str)?;
        let department = Department::try_from(record)?;
        debug!(
            path = %path_str,
            department = %department.name(),
            employees = department.num_employees(),
            "Roster loaded"
        );
        Ok(department)
    }

    /// Builds a department from roster YAML held in memory.
    ///
    /// Parse errors report the path as `<memory>`.
    pub fn from_yaml_str(yaml: &str) -> PayrollResult<Department> {
        let record = Self::parse(yaml, "<memory>")?;
        Department::try_from(record)
    }

    /// Renders a department back into roster YAML.
    ///
    /// # Errors
    ///
    /// Returns `RosterSerializeError` if serialization fails.
    pub fn to_yaml_string(department: &Department) -> PayrollResult<String> {
        serde_yaml::to_string(department).map_err(|e| PayrollError::RosterSerializeError {
            message: e.to_string(),
        })
    }

    fn parse(content: &str, path: &str) -> PayrollResult<DepartmentRecord> {
        serde_yaml::from_str(content).map_err(|e| PayrollError::RosterParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}
