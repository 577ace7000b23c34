//! Error types for the graphctl CLI

use thiserror::Error;

/// Result type alias for graphctl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Normalized API error.
///
/// Every failure that originates from a Graph call is classified into exactly
/// one of these variants before it reaches a command handler. See
/// [`crate::client::odata::classify_failure`] for the classification rules.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}. Run `graphctl init` to refresh your access token.")]
    AuthFailure(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Request was throttled by the service: {0}")]
    Throttled(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Graph error {code}: {message}")]
    UnknownBackend { code: String, message: String },

    #[error("Invalid API response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Transport("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Transport("Failed to connect to the Graph API".to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// CLI input validation errors, raised before any network call
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{value} is not a valid GUID")]
    InvalidGuid { value: String },

    #[error("{value} is not a valid boolean for option --{option}")]
    InvalidBoolean { value: String, option: String },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `graphctl init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Access token not configured. Run `graphctl init` to set up your access token.")]
    MissingToken,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_auth_failure_message() {
        let err = ApiError::AuthFailure("token expired".to_string());
        let msg = err.to_string();
        assert!(msg.contains("graphctl init"));
        assert!(msg.contains("token expired"));
    }

    #[test]
    fn test_api_error_not_found() {
        let err = ApiError::NotFound("team abc-123".to_string());
        assert!(err.to_string().contains("abc-123"));
    }

    #[test]
    fn test_api_error_throttled() {
        let err = ApiError::Throttled("too many requests".to_string());
        assert!(err.to_string().contains("throttled"));
    }

    #[test]
    fn test_api_error_transport() {
        let err = ApiError::Transport("Connection refused".to_string());
        assert!(err.to_string().contains("Connection refused"));
    }

    #[test]
    fn test_api_error_unknown_backend_includes_code() {
        let err = ApiError::UnknownBackend {
            code: "Service_Unavailable".to_string(),
            message: "try later".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Service_Unavailable"));
        assert!(msg.contains("try later"));
    }

    #[test]
    fn test_api_error_malformed_response() {
        let err = ApiError::MalformedResponse("expected JSON object".to_string());
        assert!(err.to_string().contains("expected JSON object"));
    }

    #[test]
    fn test_validation_error_guid_message_format() {
        let err = ValidationError::InvalidGuid {
            value: "not-a-guid".to_string(),
        };
        assert_eq!(err.to_string(), "not-a-guid is not a valid GUID");
    }

    #[test]
    fn test_validation_error_boolean_names_option_and_value() {
        let err = ValidationError::InvalidBoolean {
            value: "maybe".to_string(),
            option: "allow-add-remove-apps".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("maybe"));
        assert!(msg.contains("allow-add-remove-apps"));
        assert!(msg.contains("not a valid boolean"));
    }

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound;
        assert!(err.to_string().contains("graphctl init"));
    }

    #[test]
    fn test_config_error_missing_token() {
        let err = ConfigError::MissingToken;
        assert!(err.to_string().contains("graphctl init"));
    }

    #[test]
    fn test_error_from_api_error() {
        let api_err = ApiError::NotFound("x".to_string());
        let err: Error = api_err.into();

        match err {
            Error::Api(ApiError::NotFound(_)) => (),
            _ => panic!("Expected Error::Api(ApiError::NotFound)"),
        }
    }

    #[test]
    fn test_error_from_validation_error() {
        let val_err = ValidationError::InvalidGuid {
            value: "x".to_string(),
        };
        let err: Error = val_err.into();

        match err {
            Error::Validation(ValidationError::InvalidGuid { .. }) => (),
            _ => panic!("Expected Error::Validation(ValidationError::InvalidGuid)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
