//! Integration tests for the payroll roster engine.
//!
//! This test suite covers:
//! - Employee construction and field read-back
//! - Standard and commissioned weekly pay
//! - Copy independence
//! - Department capacity, ordering and removal
//! - Report layout
//! - Roster files on disk

use rust_decimal::Decimal;
use std::fs;
use std::str::FromStr;

use payroll_roster::config::RosterLoader;
use payroll_roster::error::PayrollError;
use payroll_roster::models::{Department, Employee, Timecard, MAX_EMPLOYEES};

// =============================================================================
// Test Helpers
// =============================================================================

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn standard(employee_id: u32) -> Employee {
    Employee::new("Miguel", "Ledezma", employee_id, decimal("100"), &[1, 2, 3, 4, 5]).unwrap()
}

fn commissioned(employee_id: u32, needed: &str, total: &str) -> Employee {
    Employee::commissioned(
        "Grace",
        "Hopper",
        employee_id,
        decimal("100"),
        &[1, 2, 3, 4, 5],
        decimal(needed),
        decimal(total),
    )
    .unwrap()
}

fn roster_ids(department: &Department) -> Vec<u32> {
    department
        .employees()
        .iter()
        .map(Employee::employee_id)
        .collect()
}

// =============================================================================
// Pay
// =============================================================================

#[test]
fn test_standard_pay_example() {
    let employee = standard(1234);
    assert_eq!(employee.timecard().weekly_hours(), 15);
    assert_eq!(employee.weekly_pay(), decimal("1500.0"));
}

#[test]
fn test_commission_pay_example() {
    assert_eq!(commissioned(1234, "1000", "2000").weekly_pay(), decimal("500.0"));
}

#[test]
fn test_commission_fallback_example() {
    assert_eq!(commissioned(1234, "1001", "1000").weekly_pay(), decimal("1500.0"));
}

#[test]
fn test_commission_replaces_hourly_pay_rather_than_adding_to_it() {
    let employee = commissioned(1234, "100", "100");
    assert_eq!(employee.weekly_pay(), decimal("25"));
    assert_eq!(employee.hourly_pay(), decimal("1500"));
}

// =============================================================================
// Copies
// =============================================================================

#[test]
fn test_copies_render_identical_reports_and_stay_independent() {
    let originals = vec![standard(1234), commissioned(1235, "1000", "2000")];
    for original in originals {
        let before = original.to_string();
        let mut copy = original.clone();
        assert_eq!(copy.to_string(), before);

        copy.set_last_name("Copy").unwrap();
        copy.set_employee_id(9999).unwrap();
        assert_eq!(original.to_string(), before);
        assert_ne!(original.employee_id(), copy.employee_id());
    }

    let timecard = Timecard::new(&[24, 0, 24, 0, 24]).unwrap();
    assert_eq!(timecard.clone().to_string(), timecard.to_string());
}

// =============================================================================
// Department
// =============================================================================

#[test]
fn test_department_capacity() {
    let mut department = Department::new("Advising").unwrap();
    for offset in 0..MAX_EMPLOYEES as u32 {
        department.add_employee(&standard(2000 + offset)).unwrap();
    }

    let result = department.add_employee(&standard(3000));
    assert!(matches!(result, Err(PayrollError::InvalidValue { .. })));
    assert_eq!(department.num_employees(), 20);
}

#[test]
fn test_department_ordering() {
    let mut department = Department::new("Advising").unwrap();
    for id in [1300, 1200, 1250] {
        department.add_employee(&standard(id)).unwrap();
    }
    assert_eq!(roster_ids(&department), vec![1200, 1250, 1300]);

    let report = department.to_string();
    let positions: Vec<usize> = ["1200", "1250", "1300"]
        .iter()
        .map(|id| report.find(&format!("Id:                  {}", id)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_department_remove() {
    let mut department = Department::new("Advising").unwrap();
    department.add_employee(&standard(1200)).unwrap();
    department.add_employee(&commissioned(1300, "1", "2")).unwrap();

    assert!(department.remove_employee(1111).is_none());
    assert_eq!(department.num_employees(), 2);

    let removed = department.remove_employee(1300).unwrap();
    assert!(removed.is_commissioned());
    assert_eq!(department.num_employees(), 1);
    assert!(!department.is_in_department(1300));
    assert!(department.is_in_department(1200));
}

#[test]
fn test_department_keeps_its_own_copy() {
    let mut department = Department::new("Advising").unwrap();
    let mut employee = standard(1200);
    department.add_employee(&employee).unwrap();
    let before = department.to_string();

    employee.set_hourly_rate(decimal("1")).unwrap();
    assert_eq!(department.to_string(), before);
}

// =============================================================================
// Reports
// =============================================================================

#[test]
fn test_full_commissioned_report() {
    let employee = commissioned(5000, "1000", "2000");
    let expected = "\
Name:                Grace Hopper
Id:                  5000
Hourly Rate:         $100.00
Weekly Hours:        15
    Day 1:           1
    Day 2:           2
    Day 3:           3
    Day 4:           4
    Day 5:           5
Weekly Pay:          $500.00
Sales Amount Needed: $1000.00
Weekly Sales Total:  $2000.00
";
    assert_eq!(employee.to_string(), expected);
}

#[test]
fn test_department_report_starts_with_header() {
    let mut department = Department::new("Advising").unwrap();
    department.add_employee(&standard(1200)).unwrap();
    let report = department.to_string();
    assert!(report.starts_with("Department: Advising\n--------------------\nEmployees:\n"));
    assert!(report.ends_with("Weekly Pay:          $1500.00\n\n"));
}

// =============================================================================
// Roster files
// =============================================================================

#[test]
fn test_load_roster_from_disk() {
    let path = std::env::temp_dir().join(format!("payroll_roster_{}.yaml", std::process::id()));
    fs::write(
        &path,
        r#"
name: Advising
employees:
  - first_name: Ada
    last_name: Lovelace
    employee_id: 1300
    hourly_rate: 100
    days: [1, 2, 3, 4, 5]
  - first_name: Grace
    last_name: Hopper
    employee_id: 1200
    hourly_rate: 100
    days: [1, 2, 3, 4, 5]
    commission:
      sales_amount_needed: 1000
      weekly_sales_total: 2000
"#,
    )
    .unwrap();

    let result = RosterLoader::load(&path);
    fs::remove_file(&path).unwrap();

    let department = result.unwrap();
    assert_eq!(roster_ids(&department), vec![1200, 1300]);
    assert_eq!(department.employees()[0].weekly_pay(), decimal("500"));
    assert_eq!(department.employees()[1].weekly_pay(), decimal("1500"));
}

#[test]
fn test_roster_with_unpayable_rate_is_rejected_and_large_rate_renders() {
    let roster = |rate: &str| {
        format!(
            "name: Payroll\nemployees:\n  - {{first_name: Ada, last_name: Lovelace, employee_id: 1200, hourly_rate: \"{}\", days: [24, 24, 24, 24, 24]}}\n",
            rate
        )
    };

    let err = RosterLoader::from_yaml_str(&roster("10000000000000000000000000000")).unwrap_err();
    assert!(matches!(err, PayrollError::InvalidValue { ref field, .. } if field == "hourly_rate"));

    let department = RosterLoader::from_yaml_str(&roster("1000000000000000000000000")).unwrap();
    let report = department.to_string();
    assert!(report.contains("Weekly Pay:          $120000000000000000000000000.00\n"));
}

#[test]
fn test_roster_over_capacity_is_rejected() {
    let mut yaml = String::from("name: Big\nemployees:\n");
    for offset in 0..=MAX_EMPLOYEES {
        yaml.push_str(&format!(
            "  - {{first_name: A, last_name: B, employee_id: {}, hourly_rate: 1, days: [0, 0, 0, 0, 0]}}\n",
            1000 + offset
        ));
    }
    let err = RosterLoader::from_yaml_str(&yaml).unwrap_err();
    assert!(matches!(err, PayrollError::InvalidValue { ref field, .. } if field == "employees"));
}

#[test]
fn test_department_json_round_trip() {
    let mut department = Department::new("Advising").unwrap();
    department.add_employee(&standard(1200)).unwrap();
    department.add_employee(&commissioned(1100, "10", "20")).unwrap();

    let json = serde_json::to_string(&department).unwrap();
    let reloaded: Department = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded.to_string(), department.to_string());
}
