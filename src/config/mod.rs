//! Roster records and loading for the payroll roster engine.
//!
//! This module provides the serde record types that describe employees and
//! departments on the way in and out of YAML or JSON, and the
//! [`RosterLoader`] that builds a validated [`Department`](crate::models::Department)
//! from a roster file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_roster::config::RosterLoader;
//!
//! let department = RosterLoader::load("./rosters/sales.yaml").unwrap();
//! println!("Loaded department: {}", department.name());
//! ```

mod loader;
mod types;

pub use loader::RosterLoader;
pub use types::{CommissionRecord, DepartmentRecord, EmployeeRecord};
