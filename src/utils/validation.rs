use crate::utils::error::{IssError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(IssError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(IssError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(IssError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Unwraps a required option or reports which parameter the caller left out.
pub fn validate_required_field<T: Copy>(field_name: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| IssError::missing(field_name))
}

/// Rejects NaN and infinities, which parse as `f64` but are not coordinates.
pub fn validate_finite(field_name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(IssError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api_base", "http://api.open-notify.org").is_ok());
        assert!(validate_url("api_base", "https://example.com").is_ok());
        assert!(validate_url("api_base", "").is_err());
        assert!(validate_url("api_base", "invalid-url").is_err());
        assert!(validate_url("api_base", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        assert_eq!(validate_required_field("-lat", Some(40.71)).unwrap(), 40.71);
        match validate_required_field::<f64>("-long", None) {
            Err(IssError::MissingParameter { field }) => assert_eq!(field, "-long"),
            other => panic!("expected MissingParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_finite() {
        assert_eq!(validate_finite("-lat", -74.0).unwrap(), -74.0);
        assert!(validate_finite("-lat", f64::NAN).is_err());
        assert!(validate_finite("-long", f64::INFINITY).is_err());
        let err = validate_finite("-alt", f64::NEG_INFINITY).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
