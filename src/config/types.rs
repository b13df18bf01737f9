//! Record types for roster files.
//!
//! Every field is optional so that an absent value can be reported as
//! `MissingValue` by the conversion into the validated model, rather than
//! as a parse error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Commission terms as written in a roster file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommissionRecord {
    /// The minimum weekly sales needed to earn commission.
    pub sales_amount_needed: Option<Decimal>,
    /// The sales made this week.
    pub weekly_sales_total: Option<Decimal>,
}

/// An employee as written in a roster file.
///
/// An employee with a `commission` section is a commissioned employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The employee's first name.
    pub first_name: Option<String>,
    /// The employee's last name.
    pub last_name: Option<String>,
    /// The employee id. Kept wide so out-of-range ids reach validation.
    pub employee_id: Option<i64>,
    /// The hourly rate.
    pub hourly_rate: Option<Decimal>,
    /// Hours worked on each of the five weekdays.
    pub days: Option<Vec<i32>>,
    /// Commission terms, present only for commissioned employees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission: Option<CommissionRecord>,
}

/// A department as written in a roster file.
///
/// A `null` entry in `employees` is reported as a missing employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepartmentRecord {
    /// The department name.
    pub name: Option<String>,
    /// The employees to add, in file order.
    #[serde(default)]
    pub employees: Vec<Option<EmployeeRecord>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_employee_record_with_all_fields() {
        let yaml = r#"
first_name: Ada
last_name: Lovelace
employee_id: 1200
hourly_rate: "42.50"
days: [8, 8, 8, 8, 8]
"#;
        let record: EmployeeRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.first_name.as_deref(), Some("Ada"));
        assert_eq!(record.employee_id, Some(1200));
        assert_eq!(record.hourly_rate, Some(Decimal::from_str("42.50").unwrap()));
        assert_eq!(record.days, Some(vec![8, 8, 8, 8, 8]));
        assert!(record.commission.is_none());
    }

    #[test]
    fn test_absent_fields_deserialize_as_none() {
        let record: EmployeeRecord = serde_yaml::from_str("first_name: Ada\n").unwrap();
        assert_eq!(record.last_name, None);
        assert_eq!(record.days, None);
    }

    #[test]
    fn test_null_employee_entry_is_kept() {
        let yaml = r#"
name: Sales
employees:
  - ~
"#;
        let record: DepartmentRecord = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(record.employees, vec![None]);
    }

    #[test]
    fn test_standard_employee_serializes_without_commission() {
        let record = EmployeeRecord {
            first_name: Some("Ada".to_string()),
            ..EmployeeRecord::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("commission").is_none());
    }
}
