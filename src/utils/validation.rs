use crate::utils::error::{BoltError, Result};
use regex::Regex;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BoltError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BoltError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_optional_path(field_name: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(p) => validate_path(field_name, p),
        None => Ok(()),
    }
}

/// A delimiter must compile and must not match the empty string, or every
/// line would be split between each character.
pub fn validate_delimiter(field_name: &str, pattern: &str) -> Result<()> {
    let re = Regex::new(pattern).map_err(|e| BoltError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: pattern.to_string(),
        reason: format!("Invalid regular expression: {}", e),
    })?;

    if re.is_match("") {
        return Err(BoltError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: pattern.to_string(),
            reason: "Delimiter must not match the empty string".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BoltError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "words.txt").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "bad\0path").is_err());
        assert!(validate_optional_path("output", None).is_ok());
    }

    #[test]
    fn test_validate_delimiter() {
        assert!(validate_delimiter("delimiter", r"\s+").is_ok());
        assert!(validate_delimiter("delimiter", r"[,;]").is_ok());
        assert!(validate_delimiter("delimiter", r"\s*").is_err());
        assert!(validate_delimiter("delimiter", "(").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("runner.name", "count").is_ok());
        assert!(validate_non_empty_string("runner.name", "   ").is_err());
    }
}
