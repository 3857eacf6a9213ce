use crate::utils::error::{QuestError, Result};

pub const CPF_LENGTH: usize = 11;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn parse_int(field_name: &str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| QuestError::invalid_input(field_name, raw, format!("not an integer ({})", e)))
}

pub fn parse_real(field_name: &str, raw: &str) -> Result<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|e| QuestError::invalid_input(field_name, raw, format!("not a number ({})", e)))?;

    if !value.is_finite() {
        return Err(QuestError::invalid_input(
            field_name,
            raw,
            "value must be a finite number",
        ));
    }
    Ok(value)
}

/// Shape check only: the two trailing check digits are not verified.
pub fn validate_cpf_shape(cpf: &str) -> Result<()> {
    let length = cpf.chars().count();
    if length != CPF_LENGTH {
        return Err(QuestError::invalid_input(
            "CPF",
            cpf,
            format!("expected {} digits, got {} characters", CPF_LENGTH, length),
        ));
    }

    if !cpf.bytes().all(|b| b.is_ascii_digit()) {
        return Err(QuestError::invalid_input(
            "CPF",
            cpf,
            "only the digits 0-9 are allowed",
        ));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QuestError::invalid_input(
            field_name,
            value,
            "value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        return Err(QuestError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!(
                "Unknown level '{}'. Valid levels: {}",
                level,
                LOG_LEVELS.join(", ")
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("number", "42").unwrap(), 42);
        assert_eq!(parse_int("number", " -7 ").unwrap(), -7);
        assert!(parse_int("number", "4.2").is_err());
        assert!(parse_int("number", "").is_err());
        assert!(parse_int("number", "abc").is_err());
    }

    #[test]
    fn test_parse_real() {
        assert_eq!(parse_real("number", "2.5").unwrap(), 2.5);
        assert_eq!(parse_real("number", "10").unwrap(), 10.0);
        assert!(parse_real("number", "ten").is_err());
        assert!(parse_real("number", "NaN").is_err());
        assert!(parse_real("number", "inf").is_err());
    }

    #[test]
    fn test_validate_cpf_shape() {
        assert!(validate_cpf_shape("12345678901").is_ok());
        assert!(validate_cpf_shape("1234567890").is_err());
        assert!(validate_cpf_shape("1234567890a").is_err());
        assert!(validate_cpf_shape("123456789012").is_err());
        assert!(validate_cpf_shape("").is_err());
        // 11 characters, but not ASCII digits
        assert!(validate_cpf_shape("١٢٣٤٥٦٧٨٩٠١").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("email", "a@b.c").is_ok());
        assert!(validate_non_empty_string("email", "   ").is_err());
    }

    #[test]
    fn test_validate_log_level() {
        assert!(validate_log_level("logging.level", "debug").is_ok());
        assert!(validate_log_level("logging.level", "WARN").is_ok());
        assert!(validate_log_level("logging.level", "loud").is_err());
    }
}
