// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Email shape check and the validated address type sent to the contact endpoint.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// `local@domain.tld`, where no part contains whitespace or `@`.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email shape regex")
});

/// Local validation failures, shown inline under the input.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing was typed.
    #[error("Email is required")]
    EmptyInput,
    /// Text was typed but does not look like an address.
    #[error("Please enter a valid email address")]
    InvalidFormat,
}

/// Return `true` when `candidate` has the minimal `local@domain.tld` shape.
///
/// This is a shape check only; it does not try to follow RFC 5322.
///
/// # Examples
///
/// ```rust,ignore
/// assert!(validate_email("jane@example.com"));
/// assert!(!validate_email("jane@example"));
/// ```
pub fn validate_email(candidate: &str) -> bool {
    EMAIL_SHAPE.is_match(candidate)
}

/// An address that passed the validation gate.
///
/// Holds the sanitized text: line breaks removed, surrounding ASCII whitespace trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactEmail(String);

impl ContactEmail {
    /// Run the validation gate on the sanitized input: emptiness first, then the shape check.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = sanitize(raw.as_ref());
        if value.is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        if !validate_email(&value) {
            return Err(ValidationError::InvalidFormat);
        }
        Ok(Self(value))
    }

    /// Masked form for log output, e.g. `j***@example.com`.
    pub fn redacted(&self) -> String {
        match self.0.split_once('@') {
            Some((local, domain)) => {
                let first = local.chars().next().unwrap_or('*');
                format!("{first}***@{domain}")
            }
            None => "***".to_string(),
        }
    }
}

/// Email-field value sanitization: drop CR/LF, then trim leading and trailing ASCII whitespace.
fn sanitize(raw: &str) -> String {
    let joined: String = raw.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
    joined.trim_matches(|c: char| c.is_ascii_whitespace()).to_string()
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
