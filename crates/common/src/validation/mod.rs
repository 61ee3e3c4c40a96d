//! Input validators for credentials and contact details.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Special characters accepted by the password strength rule.
pub const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Collected validation failures; empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Create an empty (valid) report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure.
    pub fn push(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Append every failure from `other`.
    pub fn extend(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Basic `local@domain.tld` shape check.
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.as_ref().is_some_and(|re| re.is_match(email))
}

/// Password strength rules: length, lowercase, uppercase, digit, special.
pub fn validate_password(password: &str) -> ValidationReport {
    let mut report = ValidationReport::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        report.push("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        report.push("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        report.push("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        report.push("Password must contain at least one number");
    }
    if !password.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        report.push("Password must contain at least one special character (@$!%*?&)");
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("a.b+c@sub.example.vn"));
        assert!(!validate_email("user@example"));
        assert!(!validate_email("user example@x.com"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn strong_password_passes() {
        assert!(validate_password("Str0ng!Pass").is_valid());
    }

    #[test]
    fn weak_password_lists_every_rule() {
        let report = validate_password("abc");
        assert_eq!(report.errors.len(), 4);
        assert!(report.errors[0].contains("at least 8 characters"));
        assert!(report.errors.iter().any(|e| e.contains("uppercase")));
        assert!(report.errors.iter().any(|e| e.contains("number")));
        assert!(report.errors.iter().any(|e| e.contains("special character")));
    }

    #[test]
    fn report_extend_merges() {
        let mut report = ValidationReport::new();
        report.push("first");
        let mut other = ValidationReport::new();
        other.push("second");
        report.extend(other);
        assert_eq!(report.errors, vec!["first", "second"]);
        assert!(!report.is_valid());
    }
}
