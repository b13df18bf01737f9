//! Timecard model.
//!
//! A [`Timecard`] records the hours worked on each of the five weekdays
//! of a single week.

use std::fmt;

use chrono::Weekday;
use serde::Serialize;
use tracing::warn;

use crate::error::{PayrollError, PayrollResult};

/// The number of working days recorded on a timecard.
pub const DAYS_PER_WEEK: usize = 5;

/// The most hours that can be recorded against a single day.
pub const MAX_HOURS_PER_DAY: u32 = 24;

/// Hours worked per weekday for one week.
///
/// Every stored value lies in `[0, MAX_HOURS_PER_DAY]`. Cloning a timecard
/// produces an independent copy.
///
/// # Examples
///
/// ```
/// use payroll_roster::models::Timecard;
///
/// let timecard = Timecard::new(&[5, 6, 7, 8, 9]).unwrap();
/// assert_eq!(timecard.weekly_hours(), 35);
/// assert_eq!(timecard.hours_for_day(2).unwrap(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timecard {
    hours: [u32; DAYS_PER_WEEK],
}

impl Timecard {
    /// Creates a timecard from exactly five per-day hour values.
    ///
    /// Values are written in day order and construction stops at the first
    /// value outside `[0, 24]`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if `hours` does not hold exactly five values or
    /// if any value is out of range.
    pub fn new(hours: &[i32]) -> PayrollResult<Self> {
        if hours.len() != DAYS_PER_WEEK {
            return Err(PayrollError::invalid(
                "days",
                format!(
                    "Invalid int array passed to Timecard, length: {}",
                    hours.len()
                ),
            ));
        }

        let mut timecard = Self {
            hours: [0; DAYS_PER_WEEK],
        };
        for (day, &value) in hours.iter().enumerate() {
            timecard.set_hours_for_day(day, value)?;
        }
        Ok(timecard)
    }

    /// Creates a timecard from an optional sequence, as found in records.
    ///
    /// # Errors
    ///
    /// Returns `MissingValue` if the sequence is absent, otherwise the same
    /// errors as [`Timecard::new`].
    pub fn from_record(hours: Option<&[i32]>) -> PayrollResult<Self> {
        let hours = hours
            .ok_or_else(|| PayrollError::missing("days", "Null int array passed to Timecard"))?;
        Self::new(hours)
    }

    fn set_hours_for_day(&mut self, day: usize, hours: i32) -> PayrollResult<()> {
        if day >= DAYS_PER_WEEK {
            return Err(PayrollError::invalid(
                "day",
                format!("Bad day value passed to set_hours_for_day: {}", day),
            ));
        }
        let hours = u32::try_from(hours)
            .ok()
            .filter(|h| *h <= MAX_HOURS_PER_DAY)
            .ok_or_else(|| {
                PayrollError::invalid(
                    "hours",
                    format!("Bad hours value passed to set_hours_for_day: {}", hours),
                )
            })?;
        self.hours[day] = hours;
        Ok(())
    }

    /// Returns the hours recorded for `day`, where day 0 is the first weekday.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` if `day` is not in `[0, 4]`.
    pub fn hours_for_day(&self, day: usize) -> PayrollResult<u32> {
        self.hours.get(day).copied().ok_or_else(|| {
            PayrollError::invalid(
                "day",
                format!("Bad day value passed to hours_for_day: {}", day),
            )
        })
    }

    /// Returns the hours recorded for a weekday (Monday through Friday).
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` for Saturday and Sunday.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Weekday;
    /// use payroll_roster::models::Timecard;
    ///
    /// let timecard = Timecard::new(&[1, 2, 3, 4, 5]).unwrap();
    /// assert_eq!(timecard.hours_on(Weekday::Wed).unwrap(), 3);
    /// assert!(timecard.hours_on(Weekday::Sat).is_err());
    /// ```
    pub fn hours_on(&self, weekday: Weekday) -> PayrollResult<u32> {
        match weekday {
            Weekday::Sat | Weekday::Sun => Err(PayrollError::invalid(
                "day",
                format!("No hours are recorded for {}", weekday),
            )),
            _ => self.hours_for_day(weekday.num_days_from_monday() as usize),
        }
    }

    /// Returns the total hours worked across the week.
    ///
    /// A day that cannot be read contributes zero and is logged.
    pub fn weekly_hours(&self) -> u32 {
        (0..DAYS_PER_WEEK)
            .map(|day| match self.hours_for_day(day) {
                Ok(hours) => hours,
                Err(err) => {
                    warn!(day, error = %err, "Invalid day skipped in summing weekly hours");
                    0
                }
            })
            .sum()
    }

    /// Returns the per-day hours in day order.
    pub fn days(&self) -> &[u32; DAYS_PER_WEEK] {
        &self.hours
    }
}

impl fmt::Display for Timecard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<20} {}", "Weekly Hours:", self.weekly_hours())?;
        for (day, hours) in self.hours.iter().enumerate() {
            writeln!(f, "{:>7} {}: {:>11}", "Day", day + 1, hours)?;
        }
        Ok(())
    }
}
