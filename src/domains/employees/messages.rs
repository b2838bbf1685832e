//! User-facing message catalog.
//!
//! Error records carry text from here, never the raw database error. Causes
//! are logged where the error is handled.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{EmployeeError, ValidationError};
use crate::core::database::DatabaseError;

/// Language used for messages returned to clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Es,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "es" | "spanish" | "español" => Ok(Self::Es),
            other => Err(format!("Unsupported locale: {}", other)),
        }
    }
}

/// Which operation a message describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListEmployees,
    AddEmployee,
}

/// Renders localized error messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Message for an operation failure.
    ///
    /// Validation failures are returned as-is; everything else gets an
    /// operation prefix and a generic description of the failure kind.
    pub fn failure(&self, operation: Operation, err: &EmployeeError) -> String {
        match err {
            EmployeeError::Validation(v) => self.validation(v),
            EmployeeError::Connection(db) | EmployeeError::Query(db) => {
                format!("{}: {}", self.prefix(operation), self.database(db))
            }
        }
    }

    fn prefix(&self, operation: Operation) -> &'static str {
        match (self.locale, operation) {
            (Locale::Es, Operation::ListEmployees) => "Error al obtener empleados",
            (Locale::Es, Operation::AddEmployee) => "Error al agregar empleado",
            (Locale::En, Operation::ListEmployees) => "Error listing employees",
            (Locale::En, Operation::AddEmployee) => "Error adding employee",
        }
    }

    fn validation(&self, err: &ValidationError) -> String {
        match (self.locale, err) {
            (Locale::Es, ValidationError::EmptyName) => {
                "El nombre del empleado no puede estar vacío.".to_string()
            }
            (Locale::Es, ValidationError::NonPositiveSalary) => {
                "El salario debe ser mayor que cero.".to_string()
            }
            (Locale::Es, ValidationError::BadDateFormat(raw)) => format!(
                "La fecha de contratación '{}' no tiene el formato AAAA-MM-DD.",
                raw
            ),
            (Locale::Es, ValidationError::NonPositiveLimit(limit)) => format!(
                "El límite debe ser un entero positivo (recibido: {}).",
                limit
            ),
            (Locale::En, ValidationError::EmptyName) => {
                "The employee name must not be empty.".to_string()
            }
            (Locale::En, ValidationError::NonPositiveSalary) => {
                "The salary must be greater than zero.".to_string()
            }
            (Locale::En, ValidationError::BadDateFormat(raw)) => {
                format!("The hire date '{}' is not in YYYY-MM-DD format.", raw)
            }
            (Locale::En, ValidationError::NonPositiveLimit(limit)) => {
                format!("The limit must be a positive integer (got {}).", limit)
            }
        }
    }

    fn database(&self, err: &DatabaseError) -> &'static str {
        match (self.locale, err) {
            (Locale::Es, DatabaseError::MissingVariable(_) | DatabaseError::InvalidPort { .. }) => {
                "la configuración de la base de datos está incompleta o es inválida"
            }
            (Locale::Es, DatabaseError::Connect(_)) => "no se pudo conectar a la base de datos",
            (Locale::Es, DatabaseError::ConnectTimeout(_)) => {
                "se agotó el tiempo de conexión a la base de datos"
            }
            (Locale::Es, DatabaseError::Query(_)) => "la base de datos rechazó la consulta",
            (Locale::Es, DatabaseError::QueryTimeout(_)) => {
                "se agotó el tiempo de espera de la consulta"
            }
            (Locale::En, DatabaseError::MissingVariable(_) | DatabaseError::InvalidPort { .. }) => {
                "database configuration is missing or invalid"
            }
            (Locale::En, DatabaseError::Connect(_)) => "could not connect to the database",
            (Locale::En, DatabaseError::ConnectTimeout(_)) => {
                "timed out connecting to the database"
            }
            (Locale::En, DatabaseError::Query(_)) => "the database rejected the query",
            (Locale::En, DatabaseError::QueryTimeout(_)) => "the query timed out",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_locale_parse() {
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(" es ".parse::<Locale>(), Ok(Locale::Es));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_validation_message_is_not_prefixed() {
        let messages = Messages::new(Locale::Es);
        let err = EmployeeError::Validation(ValidationError::EmptyName);
        assert_eq!(
            messages.failure(Operation::AddEmployee, &err),
            "El nombre del empleado no puede estar vacío."
        );
    }

    #[test]
    fn test_database_message_hides_cause() {
        let messages = Messages::new(Locale::En);
        let err = EmployeeError::Connection(DatabaseError::MissingVariable("DB_PASSWORD"));
        let text = messages.failure(Operation::ListEmployees, &err);
        assert_eq!(
            text,
            "Error listing employees: database configuration is missing or invalid"
        );
        assert!(!text.contains("DB_PASSWORD"));
    }

    #[test]
    fn test_spanish_prefix() {
        let messages = Messages::default();
        let err = EmployeeError::Query(DatabaseError::QueryTimeout(Duration::from_secs(30)));
        assert!(
            messages
                .failure(Operation::AddEmployee, &err)
                .starts_with("Error al agregar empleado: ")
        );
    }
}
