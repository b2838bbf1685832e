//! Input validation for employee operations.
//!
//! Rules are checked in order and stop at the first failure:
//! name, salary, then hire date.

use chrono::NaiveDate;

use super::error::ValidationError;
use super::model::NewEmployee;

/// Accepted `hire_date` format.
pub const HIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw `add_employee` input as received from a client.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeDraft<'a> {
    pub name: &'a str,
    pub position: &'a str,
    pub department: &'a str,
    pub salary: f64,
    pub hire_date: Option<&'a str>,
}

/// Validate a draft, trimming text fields and resolving the hire date.
///
/// `today` is used when no hire date is given. Position and department are
/// trimmed but may end up empty.
pub fn validate_new_employee(
    draft: &EmployeeDraft<'_>,
    today: NaiveDate,
) -> Result<NewEmployee, ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    // Written so that NaN fails too.
    if !(draft.salary > 0.0) {
        return Err(ValidationError::NonPositiveSalary);
    }

    let hire_date = match draft.hire_date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(raw) => NaiveDate::parse_from_str(raw, HIRE_DATE_FORMAT)
            .map_err(|_| ValidationError::BadDateFormat(raw.to_string()))?,
        None => today,
    };

    Ok(NewEmployee {
        name: name.to_string(),
        position: draft.position.trim().to_string(),
        department: draft.department.trim().to_string(),
        salary: draft.salary,
        hire_date,
    })
}

/// Check a requested list size. Any positive value is passed through.
pub fn validate_limit(limit: i64) -> Result<i64, ValidationError> {
    if limit < 1 {
        return Err(ValidationError::NonPositiveLimit(limit));
    }
    Ok(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn draft<'a>(name: &'a str, salary: f64, hire_date: Option<&'a str>) -> EmployeeDraft<'a> {
        EmployeeDraft {
            name,
            position: "Engineer",
            department: "R&D",
            salary,
            hire_date,
        }
    }

    #[test]
    fn test_trims_and_keeps_given_date() {
        let input = EmployeeDraft {
            name: "  Alice  ",
            position: " Engineer ",
            department: "\tR&D\n",
            salary: 50000.0,
            hire_date: Some("2024-01-15"),
        };
        let employee = validate_new_employee(&input, today()).unwrap();
        assert_eq!(employee.name(), "Alice");
        assert_eq!(employee.position(), "Engineer");
        assert_eq!(employee.department(), "R&D");
        assert_eq!(employee.salary(), 50000.0);
        assert_eq!(
            employee.hire_date(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_missing_date_defaults_to_today() {
        let employee = validate_new_employee(&draft("Bob", 1.0, None), today()).unwrap();
        assert_eq!(employee.hire_date(), today());

        let employee = validate_new_employee(&draft("Bob", 1.0, Some("")), today()).unwrap();
        assert_eq!(employee.hire_date(), today());
    }

    #[test]
    fn test_empty_or_blank_name() {
        for name in ["", "   ", "\t\n"] {
            let err = validate_new_employee(&draft(name, 100.0, None), today()).unwrap_err();
            assert_eq!(err, ValidationError::EmptyName);
        }
    }

    #[test]
    fn test_non_positive_salary() {
        for salary in [0.0, -5.0, f64::NAN] {
            let err = validate_new_employee(&draft("Carol", salary, None), today()).unwrap_err();
            assert_eq!(err, ValidationError::NonPositiveSalary);
        }
    }

    #[test]
    fn test_name_checked_before_salary() {
        let err = validate_new_employee(&draft(" ", -1.0, Some("nope")), today()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyName);
    }

    #[test]
    fn test_bad_date_format() {
        for raw in ["15-01-2024", "2024/01/15", "2024-13-01", "yesterday"] {
            let err = validate_new_employee(&draft("Dan", 10.0, Some(raw)), today()).unwrap_err();
            assert_eq!(err, ValidationError::BadDateFormat(raw.to_string()));
        }
    }

    #[test]
    fn test_empty_position_is_accepted() {
        let input = EmployeeDraft {
            name: "Eve",
            position: "  ",
            department: "",
            salary: 10.0,
            hire_date: None,
        };
        let employee = validate_new_employee(&input, today()).unwrap();
        assert_eq!(employee.position(), "");
        assert_eq!(employee.department(), "");
    }

    #[test]
    fn test_validate_limit() {
        assert_eq!(validate_limit(5), Ok(5));
        assert_eq!(validate_limit(i64::MAX), Ok(i64::MAX));
        assert_eq!(validate_limit(0), Err(ValidationError::NonPositiveLimit(0)));
        assert_eq!(validate_limit(-3), Err(ValidationError::NonPositiveLimit(-3)));
    }
}
