use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuestError {
    #[error("Invalid input for {field}: '{value}' ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Result of {operation}({input}) does not fit in 128 bits")]
    Overflow { operation: String, input: String },

    #[error("Business rule violated: {message}")]
    BusinessRule { message: String },

    #[error("{entity} with id {id} not found")]
    NotFound { entity: String, id: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl QuestError {
    pub fn invalid_input(field: &str, value: &str, reason: impl Into<String>) -> Self {
        QuestError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn business_rule(message: impl Into<String>) -> Self {
        QuestError::BusinessRule {
            message: message.into(),
        }
    }

    /// Errors the menu recovers from by warning the operator and abandoning
    /// the current item. Everything else ends the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            QuestError::InvalidInput { .. }
                | QuestError::Overflow { .. }
                | QuestError::BusinessRule { .. }
                | QuestError::NotFound { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuestError::InvalidInput { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            QuestError::Overflow { operation, .. } => {
                format!("The {} result is too large to display", operation)
            }
            QuestError::BusinessRule { message } => message.clone(),
            QuestError::NotFound { entity, id } => format!("No {} with id {}", entity, id),
            QuestError::ConfigError { message } => {
                format!("Could not load the settings file: {}", message)
            }
            QuestError::ConfigValidationError { field, message } => {
                format!("Setting '{}' is not valid: {}", field, message)
            }
            QuestError::IoError(e) => format!("Terminal input/output failed: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, QuestError>;
