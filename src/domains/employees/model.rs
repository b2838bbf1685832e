//! Employee records and row mapping.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// An employee as stored in the `employees` table.
///
/// `hire_date` serializes as `YYYY-MM-DD` text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub department: String,
    pub salary: f64,
    pub hire_date: NaiveDate,
}

impl Employee {
    /// Map a row with `id` as int8, `salary` as float8 and `hire_date` as date.
    pub fn from_row(row: &Row) -> Result<Self, tokio_postgres::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            position: row.try_get("position")?,
            department: row.try_get("department")?,
            salary: row.try_get("salary")?,
            hire_date: row.try_get("hire_date")?,
        })
    }
}

/// A validated employee ready to be inserted.
///
/// Only produced by [`super::validation::validate_new_employee`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub(crate) name: String,
    pub(crate) position: String,
    pub(crate) department: String,
    pub(crate) salary: f64,
    pub(crate) hire_date: NaiveDate,
}

impl NewEmployee {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_serializes_flat_record() {
        let employee = Employee {
            id: 7,
            name: "Alice".to_string(),
            position: "Engineer".to_string(),
            department: "R&D".to_string(),
            salary: 50000.0,
            hire_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };

        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["name"], "Alice");
        assert!(value["salary"].is_f64());
        assert_eq!(value["salary"].as_f64(), Some(50000.0));
        assert_eq!(value["hire_date"], "2024-01-15");
        assert_eq!(value.as_object().unwrap().len(), 6);
    }
}
