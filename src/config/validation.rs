//! Configuration validation logic.

use regex::Regex;
use url::Url;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_email(&config.account.email)?;
    validate_password(&config.account.password)?;
    validate_endpoint(&config.options.endpoint)?;

    Ok(())
}

/// Validate the foauth email.
pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(Error::MissingConfig("email".to_string()));
    }

    // Loose shape check: local part, one @, dotted domain.
    let email_pattern = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    if !email_pattern.is_match(email) {
        return Err(Error::ConfigValidation {
            field: "email".to_string(),
            message: format!("'{}' does not look like an email address", email),
        });
    }

    // Check for placeholder values
    let lower = email.to_lowercase();
    if lower.starts_with("you@") || lower.contains("replaceme") {
        return Err(Error::ConfigValidation {
            field: "email".to_string(),
            message: "Email appears to be a placeholder. Please provide your foauth email."
                .to_string(),
        });
    }

    Ok(())
}

/// Validate the foauth password.
pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(Error::MissingConfig("password".to_string()));
    }

    if password.to_lowercase().contains("replaceme") {
        return Err(Error::ConfigValidation {
            field: "password".to_string(),
            message: "Password appears to be a placeholder. Please provide your foauth password."
                .to_string(),
        });
    }

    Ok(())
}

/// Validate the endpoint base URL.
pub fn validate_endpoint(endpoint: &str) -> Result<()> {
    if endpoint.is_empty() {
        return Err(Error::MissingConfig("endpoint".to_string()));
    }

    let url = Url::parse(endpoint)?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "endpoint".to_string(),
            message: format!("Unsupported scheme '{}', expected http or https", url.scheme()),
        });
    }

    Ok(())
}
