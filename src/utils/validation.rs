use crate::utils::error::{FuelError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(FuelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FuelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(FuelError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input.path", "input").is_ok());
        assert!(validate_path("input.path", "./data/day1.txt").is_ok());
        assert!(validate_path("input.path", "").is_err());
        assert!(validate_path("input.path", "   ").is_err());
        assert!(validate_path("input.path", "in\0put").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("input.on_missing", "fail", &["fail", "empty"]).is_ok());
        assert!(validate_one_of("input.on_missing", "skip", &["fail", "empty"]).is_err());
    }
}
