//! Employee model and related types.
//!
//! This module defines the [`Employee`] struct, the [`EmployeeKind`] enum
//! that distinguishes standard from commissioned employees, and the
//! [`SalesCommission`] terms carried by commissioned employees.

use std::cmp::Ordering;
use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::{CommissionRecord, EmployeeRecord};
use crate::error::{PayrollError, PayrollResult};

use super::{Timecard, DAYS_PER_WEEK, MAX_HOURS_PER_DAY};

/// The longest first or last name accepted, in characters.
pub const MAX_NAME_LENGTH: usize = 20;

/// The lowest valid employee id.
pub const MIN_EMPLOYEE_ID: u32 = 1000;

/// The highest valid employee id.
pub const MAX_EMPLOYEE_ID: u32 = 9999;

/// Returns the share of weekly sales paid out once the commission threshold is met.
///
/// The multiplier is 0.25 (25% of weekly sales).
pub fn bonus_multiplier() -> Decimal {
    Decimal::new(25, 2)
}

/// Commission terms for a commissioned employee.
///
/// Both amounts are strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesCommission {
    sales_amount_needed: Decimal,
    weekly_sales_total: Decimal,
}

impl SalesCommission {
    /// Creates commission terms from a threshold and the week's sales.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if either amount is zero or negative. The
    /// threshold is checked first.
    pub fn new(sales_amount_needed: Decimal, weekly_sales_total: Decimal) -> PayrollResult<Self> {
        Ok(Self {
            sales_amount_needed: validate_sales_amount_needed(sales_amount_needed)?,
            weekly_sales_total: validate_weekly_sales_total(weekly_sales_total)?,
        })
    }

    /// Returns the minimum weekly sales needed to earn commission.
    pub fn sales_amount_needed(&self) -> Decimal {
        self.sales_amount_needed
    }

    /// Returns the sales made this week.
    pub fn weekly_sales_total(&self) -> Decimal {
        self.weekly_sales_total
    }

    /// Returns true if this week's sales reach the threshold (inclusive).
    pub fn threshold_met(&self) -> bool {
        self.weekly_sales_total >= self.sales_amount_needed
    }

    /// Returns the commission earned on this week's sales.
    pub fn commission_pay(&self) -> Decimal {
        self.weekly_sales_total * bonus_multiplier()
    }
}

fn validate_sales_amount_needed(amount: Decimal) -> PayrollResult<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(PayrollError::invalid(
            "sales_amount_needed",
            format!("Invalid sales amount needed: {}", amount),
        ));
    }
    Ok(amount)
}

fn validate_weekly_sales_total(amount: Decimal) -> PayrollResult<Decimal> {
    if amount <= Decimal::ZERO {
        return Err(PayrollError::invalid(
            "weekly_sales_total",
            format!("Invalid weekly sales total: {}", amount),
        ));
    }
    Ok(amount)
}

/// How an employee's weekly pay is worked out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeKind {
    /// Paid hourly: weekly hours times the hourly rate.
    Standard,
    /// Paid commission when the sales threshold is met, hourly otherwise.
    Commissioned(SalesCommission),
}

/// An employee with a validated identity, hourly rate and timecard.
///
/// Employees are ordered and compared by `employee_id` alone; two
/// employees with the same id compare equal whatever their other fields.
/// Cloning produces a deep copy with its own timecard.
///
/// # Examples
///
/// ```
/// use payroll_roster::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee::new("Miguel", "Ledezma", 1234, Decimal::from(100), &[1, 2, 3, 4, 5])
///     .unwrap();
/// assert_eq!(employee.weekly_pay(), Decimal::from(1500));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(try_from = "EmployeeRecord", into = "EmployeeRecord")]
pub struct Employee {
    first_name: String,
    last_name: String,
    employee_id: u32,
    hourly_rate: Decimal,
    timecard: Timecard,
    kind: EmployeeKind,
}

impl Employee {
    /// Creates a standard (hourly) employee.
    ///
    /// Fields are validated in order: first name, last name, id, hourly
    /// rate, then the five day values.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if a name is empty or longer than 20
    /// characters, the id is outside `[1000, 9999]`, the rate is not
    /// positive or too large for a full week's pay to be represented, or
    /// the day values do not form a valid [`Timecard`].
    pub fn new(
        first_name: &str,
        last_name: &str,
        employee_id: u32,
        hourly_rate: Decimal,
        days: &[i32],
    ) -> PayrollResult<Self> {
        Ok(Self {
            first_name: validate_name("first_name", Some(first_name))?,
            last_name: validate_name("last_name", Some(last_name))?,
            employee_id: validate_employee_id(i64::from(employee_id))?,
            hourly_rate: validate_hourly_rate(Some(hourly_rate))?,
            timecard: Timecard::new(days)?,
            kind: EmployeeKind::Standard,
        })
    }

    /// Creates a commissioned employee.
    ///
    /// The base fields are validated exactly as in [`Employee::new`] before
    /// the commission terms are checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_roster::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::commissioned(
    ///     "Christopher",
    ///     "Hield",
    ///     5000,
    ///     Decimal::from(50),
    ///     &[5, 6, 7, 8, 9],
    ///     Decimal::from(1000),
    ///     Decimal::from(2000),
    /// )
    /// .unwrap();
    /// assert_eq!(employee.weekly_pay(), Decimal::from(500));
    /// ```
    pub fn commissioned(
        first_name: &str,
        last_name: &str,
        employee_id: u32,
        hourly_rate: Decimal,
        days: &[i32],
        sales_amount_needed: Decimal,
        weekly_sales_total: Decimal,
    ) -> PayrollResult<Self> {
        let base = Self::new(first_name, last_name, employee_id, hourly_rate, days)?;
        let commission = SalesCommission::new(sales_amount_needed, weekly_sales_total)?;
        Ok(Self {
            kind: EmployeeKind::Commissioned(commission),
            ..base
        })
    }

    /// Returns the employee's first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Sets the first name, leaving the old value in place on error.
    pub fn set_first_name(&mut self, first_name: &str) -> PayrollResult<()> {
        self.first_name = validate_name("first_name", Some(first_name))?;
        Ok(())
    }

    /// Returns the employee's last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Sets the last name, leaving the old value in place on error.
    pub fn set_last_name(&mut self, last_name: &str) -> PayrollResult<()> {
        self.last_name = validate_name("last_name", Some(last_name))?;
        Ok(())
    }

    /// Returns the employee id.
    pub fn employee_id(&self) -> u32 {
        self.employee_id
    }

    /// Sets the employee id, leaving the old value in place on error.
    pub fn set_employee_id(&mut self, employee_id: u32) -> PayrollResult<()> {
        self.employee_id = validate_employee_id(i64::from(employee_id))?;
        Ok(())
    }

    /// Returns the hourly rate.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// Sets the hourly rate, leaving the old value in place on error.
    pub fn set_hourly_rate(&mut self, hourly_rate: Decimal) -> PayrollResult<()> {
        self.hourly_rate = validate_hourly_rate(Some(hourly_rate))?;
        Ok(())
    }

    /// Returns the employee's timecard.
    pub fn timecard(&self) -> &Timecard {
        &self.timecard
    }

    /// Returns how this employee is paid.
    pub fn kind(&self) -> &EmployeeKind {
        &self.kind
    }

    /// Returns the commission terms for commissioned employees.
    pub fn commission(&self) -> Option<&SalesCommission> {
        match &self.kind {
            EmployeeKind::Standard => None,
            EmployeeKind::Commissioned(commission) => Some(commission),
        }
    }

    /// Returns true if the employee is paid on commission.
    pub fn is_commissioned(&self) -> bool {
        matches!(self.kind, EmployeeKind::Commissioned(_))
    }

    /// Returns the hourly pay for the week: weekly hours times hourly rate.
    ///
    /// Rates are bounded at validation so that a full 120-hour week cannot
    /// overflow.
    pub fn hourly_pay(&self) -> Decimal {
        Decimal::from(self.timecard.weekly_hours()) * self.hourly_rate
    }

    /// Calculates the pay for the week.
    ///
    /// Standard employees earn [`Employee::hourly_pay`]. Commissioned
    /// employees whose weekly sales reach the threshold earn
    /// `weekly_sales_total * 0.25` instead; below the threshold they fall
    /// back to hourly pay.
    pub fn weekly_pay(&self) -> Decimal {
        match &self.kind {
            EmployeeKind::Commissioned(commission) if commission.threshold_met() => {
                commission.commission_pay()
            }
            _ => self.hourly_pay(),
        }
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.employee_id == other.employee_id
    }
}

impl Eq for Employee {}

impl PartialOrd for Employee {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Employee {
    fn cmp(&self, other: &Self) -> Ordering {
        self.employee_id.cmp(&other.employee_id)
    }
}

/// Rounds an amount to cents for display, halves away from zero.
fn currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<20} {} {}", "Name:", self.first_name, self.last_name)?;
        writeln!(f, "{:<20} {}", "Id:", self.employee_id)?;
        writeln!(f, "{:<20} ${:.2}", "Hourly Rate:", currency(self.hourly_rate))?;
        write!(f, "{}", self.timecard)?;
        writeln!(f, "{:<20} ${:.2}", "Weekly Pay:", currency(self.weekly_pay()))?;

        if let EmployeeKind::Commissioned(commission) = &self.kind {
            writeln!(
                f,
                "{:<20} ${:.2}",
                "Sales Amount Needed:",
                currency(commission.sales_amount_needed)
            )?;
            writeln!(
                f,
                "{:<20} ${:.2}",
                "Weekly Sales Total:",
                currency(commission.weekly_sales_total)
            )?;
        }
        Ok(())
    }
}

fn validate_name(field: &str, name: Option<&str>) -> PayrollResult<String> {
    let name = name.ok_or_else(|| {
        PayrollError::missing(field, format!("Null value passed in for {}", field))
    })?;
    let length = name.chars().count();
    if length == 0 || length > MAX_NAME_LENGTH {
        return Err(PayrollError::invalid(
            field,
            format!("Bad value passed in for {}: {}", field, name),
        ));
    }
    Ok(name.to_string())
}

fn validate_employee_id(employee_id: i64) -> PayrollResult<u32> {
    u32::try_from(employee_id)
        .ok()
        .filter(|id| (MIN_EMPLOYEE_ID..=MAX_EMPLOYEE_ID).contains(id))
        .ok_or_else(|| {
            PayrollError::invalid(
                "employee_id",
                format!("Bad value passed in for employee_id: {}", employee_id),
            )
        })
}

fn validate_hourly_rate(hourly_rate: Option<Decimal>) -> PayrollResult<Decimal> {
    let hourly_rate = hourly_rate.ok_or_else(|| {
        PayrollError::missing("hourly_rate", "Null value passed in for hourly_rate")
    })?;
    if hourly_rate <= Decimal::ZERO {
        return Err(PayrollError::invalid(
            "hourly_rate",
            format!("Bad value passed in for hourly_rate: {}", hourly_rate),
        ));
    }
    // A full week at this rate must stay representable.
    if max_weekly_hours().checked_mul(hourly_rate).is_none() {
        return Err(PayrollError::invalid(
            "hourly_rate",
            format!("Hourly rate too large to compute weekly pay: {}", hourly_rate),
        ));
    }
    Ok(hourly_rate)
}

fn max_weekly_hours() -> Decimal {
    Decimal::from(DAYS_PER_WEEK as u32 * MAX_HOURS_PER_DAY)
}

impl TryFrom<EmployeeRecord> for Employee {
    type Error = PayrollError;

    fn try_from(record: EmployeeRecord) -> PayrollResult<Self> {
        let first_name = validate_name("first_name", record.first_name.as_deref())?;
        let last_name = validate_name("last_name", record.last_name.as_deref())?;
        let employee_id = record
            .employee_id
            .ok_or_else(|| {
                PayrollError::missing("employee_id", "Null value passed in for employee_id")
            })
            .and_then(validate_employee_id)?;
        let hourly_rate = validate_hourly_rate(record.hourly_rate)?;
        let timecard = Timecard::from_record(record.days.as_deref())?;

        let kind = match record.commission {
            None => EmployeeKind::Standard,
            Some(CommissionRecord {
                sales_amount_needed,
                weekly_sales_total,
            }) => {
                let sales_amount_needed = sales_amount_needed.ok_or_else(|| {
                    PayrollError::missing(
                        "sales_amount_needed",
                        "Null value passed in for sales_amount_needed",
                    )
                })?;
                let sales_amount_needed = validate_sales_amount_needed(sales_amount_needed)?;
                let weekly_sales_total = weekly_sales_total.ok_or_else(|| {
                    PayrollError::missing(
                        "weekly_sales_total",
                        "Null value passed in for weekly_sales_total",
                    )
                })?;
                let weekly_sales_total = validate_weekly_sales_total(weekly_sales_total)?;
                EmployeeKind::Commissioned(SalesCommission {
                    sales_amount_needed,
                    weekly_sales_total,
                })
            }
        };

        Ok(Self {
            first_name,
            last_name,
            employee_id,
            hourly_rate,
            timecard,
            kind,
        })
    }
}

impl From<Employee> for EmployeeRecord {
    fn from(employee: Employee) -> Self {
        let commission = employee.commission().map(|commission| CommissionRecord {
            sales_amount_needed: Some(commission.sales_amount_needed),
            weekly_sales_total: Some(commission.weekly_sales_total),
        });
        Self {
            days: Some(
                employee
                    .timecard
                    .days()
                    .iter()
                    .map(|&hours| hours as i32)
                    .collect(),
            ),
            first_name: Some(employee.first_name),
            last_name: Some(employee.last_name),
            employee_id: Some(i64::from(employee.employee_id)),
            hourly_rate: Some(employee.hourly_rate),
            commission,
        }
    }
}
