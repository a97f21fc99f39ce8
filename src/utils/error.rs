use crate::domain::model::FieldType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoltError {
    #[error("Component '{component}' received a tuple before prepare() or after cleanup()")]
    NotPrepared { component: String },

    #[error("Component '{component}' was already prepared")]
    AlreadyPrepared { component: String },

    #[error("Tuple has no field at position {index} (arity {arity})")]
    MissingField { index: usize, arity: usize },

    #[error("Field {index} has type {found}, expected {expected}")]
    FieldType {
        index: usize,
        expected: FieldType,
        found: FieldType,
    },

    #[error("Emitted tuple does not match declared schema: {message}")]
    SchemaMismatch { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid delimiter pattern: {0}")]
    RegexError(#[from] regex::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Contract,
    Io,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for a failed run. Never zero.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl BoltError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BoltError::NotPrepared { .. }
            | BoltError::AlreadyPrepared { .. }
            | BoltError::MissingField { .. }
            | BoltError::FieldType { .. }
            | BoltError::SchemaMismatch { .. } => ErrorCategory::Contract,
            BoltError::IoError(_) => ErrorCategory::Io,
            BoltError::CsvError(_) | BoltError::SerializationError(_) => ErrorCategory::Output,
            BoltError::RegexError(_)
            | BoltError::ConfigValidationError { .. }
            | BoltError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BoltError::NotPrepared { .. }
            | BoltError::AlreadyPrepared { .. }
            | BoltError::MissingField { .. }
            | BoltError::FieldType { .. }
            | BoltError::SchemaMismatch { .. } => ErrorSeverity::High,
            BoltError::IoError(_) => ErrorSeverity::Medium,
            BoltError::CsvError(_) | BoltError::SerializationError(_) => ErrorSeverity::Critical,
            BoltError::RegexError(_)
            | BoltError::ConfigValidationError { .. }
            | BoltError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BoltError::NotPrepared { .. } => {
                "Call prepare() once before feeding tuples to the component".to_string()
            }
            BoltError::AlreadyPrepared { .. } => {
                "Create a fresh component instead of preparing the same one twice".to_string()
            }
            BoltError::MissingField { .. } | BoltError::FieldType { .. } => {
                "Route only single-field string tuples into the word counter".to_string()
            }
            BoltError::SchemaMismatch { .. } => {
                "Check that the component emits what declare_output_fields() reports".to_string()
            }
            BoltError::IoError(_) => "Check that the input and output paths are accessible".to_string(),
            BoltError::CsvError(_) | BoltError::SerializationError(_) => {
                "Try a different output format or check the output destination".to_string()
            }
            BoltError::RegexError(_) => {
                "Use a valid regular expression for the word delimiter".to_string()
            }
            BoltError::ConfigValidationError { field, .. }
            | BoltError::InvalidConfigValueError { field, .. } => {
                format!("Fix '{}' in the configuration and run again", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Contract => format!("Invalid input for word counter: {}", self),
            ErrorCategory::Io => format!("Could not read or write data: {}", self),
            ErrorCategory::Output => format!("Could not format output: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, BoltError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_violations_are_high_severity() {
        let err = BoltError::MissingField { index: 0, arity: 0 };
        assert_eq!(err.category(), ErrorCategory::Contract);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(
            err.to_string(),
            "Tuple has no field at position 0 (arity 0)"
        );
    }

    #[test]
    fn test_field_type_message_names_both_types() {
        let err = BoltError::FieldType {
            index: 0,
            expected: FieldType::String,
            found: FieldType::UnsignedInteger,
        };
        assert_eq!(
            err.to_string(),
            "Field 0 has type unsigned_integer, expected string"
        );
    }

    #[test]
    fn test_io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: BoltError = io.into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(err.user_friendly_message().starts_with("Could not read or write data"));
    }

    #[test]
    fn test_config_suggestion_names_field() {
        let err = BoltError::InvalidConfigValueError {
            field: "output.format".to_string(),
            value: "xml".to_string(),
            reason: "unknown format".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.recovery_suggestion().contains("output.format"));
    }

    #[test]
    fn test_every_failure_exits_non_zero() {
        let errors = [
            BoltError::NotPrepared {
                component: "count".to_string(),
            },
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into(),
            BoltError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: "missing [runner]".to_string(),
            },
            BoltError::SchemaMismatch {
                message: "arity".to_string(),
            },
        ];
        for err in errors {
            assert_ne!(err.severity().exit_code(), 0, "{}", err);
        }
        assert_eq!(ErrorSeverity::Medium.exit_code(), 2);
        assert_eq!(ErrorSeverity::High.exit_code(), 1);
        assert_eq!(ErrorSeverity::Critical.exit_code(), 3);
    }
}
