use crate::utils::error::{FlowError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FlowError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "flow config, input and report paths must not be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FlowError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "file path must not contain NUL characters".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FlowError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "flow and function names must not be blank".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(FlowError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
