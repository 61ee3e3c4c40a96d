//! Caller-side validation of auth requests.
//!
//! Runs before any request is sent; failures become
//! [`Failure::Validation`] via [`ensure_valid`].

use portalkit_common::validation::{validate_email, validate_password, ValidationReport};
use portalkit_domain::{Failure, LoginRequest, RegisterRequest};

const INVALID_EMAIL: &str = "Please enter a valid email address";

pub fn validate_login_request(request: &LoginRequest) -> ValidationReport {
    let mut report = ValidationReport::new();
    if !validate_email(&request.email) {
        report.push(INVALID_EMAIL);
    }
    if request.password.is_empty() {
        report.push("Password is required");
    }
    report
}

pub fn validate_register_request(request: &RegisterRequest) -> ValidationReport {
    let mut report = ValidationReport::new();
    if !validate_email(&request.email) {
        report.push(INVALID_EMAIL);
    }
    if request.name.trim().chars().count() < 2 {
        report.push("Name must be at least 2 characters long");
    }
    report.extend(validate_password(&request.password));
    if request.password != request.confirm_password {
        report.push("Passwords do not match");
    }
    report
}

/// Collapse a report into a validation failure listing every problem.
pub fn ensure_valid(report: ValidationReport) -> Result<(), Failure> {
    if report.is_valid() {
        Ok(())
    } else {
        Err(Failure::validation(report.errors.join("; ")))
    }
}
