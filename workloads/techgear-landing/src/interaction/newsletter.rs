//! Newsletter signup form state and email validation.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// Why a signup was rejected. The display text is the user-facing message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterError {
    #[error("Please enter your email address")]
    Empty,

    #[error("Please enter a valid email address")]
    InvalidFormat,
}

/// Message shown after an accepted signup.
pub const SUBSCRIBED_MESSAGE: &str = "Thank you for subscribing!";

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // One "@", no whitespace, and a dot-separated domain part.
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// An email address that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// The part after the `@`.
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map_or("", |(_, domain)| domain)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Check a raw form value.
pub fn validate_email(input: &str) -> Result<EmailAddress, NewsletterError> {
    if input.is_empty() {
        return Err(NewsletterError::Empty);
    }
    if !email_pattern().is_match(input) {
        return Err(NewsletterError::InvalidFormat);
    }
    Ok(EmailAddress(input.to_string()))
}

/// The signup form: the current field value and whether a signup went through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewsletterForm {
    email: String,
    submitted: bool,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the field value (an input event).
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn input(&self) -> &str {
        &self.email
    }

    /// Whether a signup has been accepted; the form is replaced by a
    /// confirmation once it has.
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Submit the current value.
    ///
    /// On success the form is marked submitted and the field cleared. On
    /// rejection nothing changes.
    pub fn submit(&mut self) -> Result<EmailAddress, NewsletterError> {
        let address = validate_email(&self.email)?;
        self.submitted = true;
        self.email.clear();
        info!(domain = address.domain(), "newsletter signup accepted");
        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email(""), Err(NewsletterError::Empty));
        assert_eq!(
            validate_email("not-an-email"),
            Err(NewsletterError::InvalidFormat)
        );
        assert_eq!(validate_email("a@b"), Err(NewsletterError::InvalidFormat));
        assert_eq!(
            validate_email("two@@example.com"),
            Err(NewsletterError::InvalidFormat)
        );
        assert_eq!(
            validate_email("user name@example.com"),
            Err(NewsletterError::InvalidFormat)
        );
        assert_eq!(
            validate_email(" "),
            Err(NewsletterError::InvalidFormat)
        );
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("first.last@mail.example.co").is_ok());
    }

    #[test]
    fn test_domain() {
        let address = validate_email("first.last@mail.example.co").unwrap();
        assert_eq!(address.domain(), "mail.example.co");
        assert_eq!(address.to_string(), "first.last@mail.example.co");
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            NewsletterError::Empty.to_string(),
            "Please enter your email address"
        );
        assert_eq!(
            NewsletterError::InvalidFormat.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_rejected_submit_leaves_state() {
        let mut form = NewsletterForm::new();
        form.set_input("nope");
        assert_eq!(form.submit(), Err(NewsletterError::InvalidFormat));
        assert_eq!(form.input(), "nope");
        assert!(!form.is_submitted());
    }

    #[test]
    fn test_accepted_submit_clears_field() {
        let mut form = NewsletterForm::new();
        form.set_input("user@example.com");
        let address = form.submit().unwrap();
        assert_eq!(address.to_string(), "user@example.com");
        assert_eq!(form.input(), "");
        assert!(form.is_submitted());
    }
}
