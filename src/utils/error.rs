use thiserror::Error;

#[derive(Error, Debug)]
pub enum IssError {
    #[error("Remote API error at {endpoint}: {reason}")]
    RemoteApi { endpoint: String, reason: String },

    #[error("Missing required parameter: {field}")]
    MissingParameter { field: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Remote,
    Usage,
    System,
}

impl IssError {
    pub fn remote(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        IssError::RemoteApi {
            endpoint: endpoint.into(),
            reason: reason.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        IssError::MissingParameter {
            field: field.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            IssError::RemoteApi { .. } => ErrorCategory::Remote,
            IssError::MissingParameter { .. }
            | IssError::Config { .. }
            | IssError::InvalidConfigValue { .. } => ErrorCategory::Usage,
            IssError::Io(_) => ErrorCategory::System,
        }
    }

    /// Process exit status for this failure. Usage errors follow the
    /// convention of argument parsers and exit with 2.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Remote | ErrorCategory::System => 1,
            ErrorCategory::Usage => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            IssError::RemoteApi { endpoint, reason } => {
                format!("Something is wrong with the ISS API ({}): {}", endpoint, reason)
            }
            IssError::MissingParameter { field } => {
                format!("--pass requires {}", field)
            }
            IssError::Config { message } => format!("Invalid configuration: {}", message),
            IssError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid value for {}: {}", field, reason)
            }
            IssError::Io(e) => format!("Could not write output: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, IssError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(IssError::remote("http://x/iss-now.json", "HTTP 503").exit_code(), 1);
        assert_eq!(IssError::missing("-long").exit_code(), 2);
        assert_eq!(
            IssError::Config {
                message: "bad".to_string()
            }
            .category(),
            ErrorCategory::Usage
        );
    }

    #[test]
    fn test_missing_parameter_message_names_field() {
        let err = IssError::missing("-lat");
        assert_eq!(err.to_string(), "Missing required parameter: -lat");
        assert!(err.user_friendly_message().contains("-lat"));
    }
}
