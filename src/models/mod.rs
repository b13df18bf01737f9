//! Core data models for the payroll roster engine.
//!
//! This module contains the timecard, employee and department models.

mod department;
mod employee;
mod timecard;

pub use department::{Department, MAX_EMPLOYEES};
pub use employee::{
    bonus_multiplier, Employee, EmployeeKind, SalesCommission, MAX_EMPLOYEE_ID, MAX_NAME_LENGTH,
    MIN_EMPLOYEE_ID,
};
pub use timecard::{Timecard, DAYS_PER_WEEK, MAX_HOURS_PER_DAY};
