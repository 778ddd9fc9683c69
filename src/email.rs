//! Regex-backed email validation.

use regex_lite::Regex;

use crate::signup::{EmailValidator, Fault};

const EMAIL_PATTERN: &str =
    r"^([a-zA-Z0-9_\-\.]+)@([a-zA-Z0-9_\-\.]+)\.([a-zA-Z]{2,7})$";

/// Syntactic [`EmailValidator`] over a compiled pattern.
pub struct RegexEmailValidator {
    pattern: Regex,
}

impl RegexEmailValidator {
    /// Create a new [`RegexEmailValidator`].
    pub fn new() -> Result<Self, regex_lite::Error> {
        Ok(Self {
            pattern: Regex::new(EMAIL_PATTERN)?,
        })
    }
}

impl EmailValidator for RegexEmailValidator {
    fn is_valid(&self, email: &str) -> Result<bool, Fault> {
        Ok(self.pattern.is_match(email))
    }
}
