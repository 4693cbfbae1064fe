use super::models::Config;
use thiserror::Error;

const MAX_INPUT_BYTES: u64 = 100 * 1024 * 1024; // 100 MB

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("convert.target must not be empty")]
    EmptyTarget,

    #[error("convert.client must not be empty when set")]
    EmptyClient,

    #[error("convert.options.indent may only contain spaces and tabs: {0:?}")]
    InvalidIndent(String),

    #[error("input.max_bytes must be positive")]
    ZeroInputLimit,

    #[error("input.max_bytes ({actual}) exceeds limit of 100MB ({limit})")]
    InputLimitTooLarge { actual: u64, limit: u64 },
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_convert(config)?;
    validate_input(config)?;
    Ok(())
}

fn validate_convert(config: &Config) -> Result<(), ValidationError> {
    if config.convert.target.trim().is_empty() {
        return Err(ValidationError::EmptyTarget);
    }

    if let Some(client) = &config.convert.client {
        if client.trim().is_empty() {
            return Err(ValidationError::EmptyClient);
        }
    }

    validate_indent(&config.convert.options.indent)
}

/// Indentation units may only be made of spaces and tabs.
pub fn validate_indent(indent: &str) -> Result<(), ValidationError> {
    if !indent.chars().all(|c| c == ' ' || c == '\t') {
        return Err(ValidationError::InvalidIndent(indent.to_string()));
    }
    Ok(())
}

fn validate_input(config: &Config) -> Result<(), ValidationError> {
    let max_bytes = config.input.max_bytes.as_u64();

    if max_bytes == 0 {
        return Err(ValidationError::ZeroInputLimit);
    }

    if max_bytes > MAX_INPUT_BYTES {
        return Err(ValidationError::InputLimitTooLarge {
            actual: max_bytes,
            limit: MAX_INPUT_BYTES,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::humanize::ByteSize;

    #[test]
    fn test_valid_config() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_target() {
        let mut config = Config::default();
        config.convert.target = " ".to_string();

        let result = validate(&config);
        assert!(matches!(result, Err(ValidationError::EmptyTarget)));
    }

    #[test]
    fn test_empty_client() {
        let mut config = Config::default();
        config.convert.client = Some(String::new());

        let result = validate(&config);
        assert!(matches!(result, Err(ValidationError::EmptyClient)));
    }

    #[test]
    fn test_invalid_indent() {
        let mut config = Config::default();
        config.convert.options.indent = "--".to_string();

        let result = validate(&config);
        assert!(matches!(result, Err(ValidationError::InvalidIndent(_))));
    }

    #[test]
    fn test_validate_indent_value() {
        assert!(validate_indent("\t").is_ok());
        assert!(validate_indent("    ").is_ok());
        assert!(matches!(
            validate_indent("x"),
            Err(ValidationError::InvalidIndent(ref value)) if value == "x"
        ));
    }

    #[test]
    fn test_input_limits() {
        let mut config = Config::default();
        config.input.max_bytes = ByteSize(0);
        assert!(matches!(
            validate(&config),
            Err(ValidationError::ZeroInputLimit)
        ));

        config.input.max_bytes = ByteSize(200 * 1024 * 1024);
        assert!(matches!(
            validate(&config),
            Err(ValidationError::InputLimitTooLarge { .. })
        ));
    }
}
