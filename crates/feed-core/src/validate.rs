//! Input validation rules.
//!
//! Checked after the auth gate and before any repository mutation. Every
//! violated rule is reported, not just the first.

use crate::error::DomainError;

pub const MIN_PASSWORD_LEN: usize = 5;
pub const MIN_NAME_LEN: usize = 3;
pub const MIN_TITLE_LEN: usize = 3;
pub const MIN_CONTENT_LEN: usize = 5;

/// Canonical form of an email address: trimmed and lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Minimal syntactic check: non-empty local part and a dotted domain.
fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

/// Validate signup input. `email` is expected to already be normalized.
pub fn signup(email: &str, name: &str, password: &str) -> Result<(), DomainError> {
    let mut errors = Vec::new();
    if !is_valid_email(email) {
        errors.push("email is invalid".to_string());
    }
    if password.trim().chars().count() < MIN_PASSWORD_LEN {
        errors.push(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    if name.trim().chars().count() < MIN_NAME_LEN {
        errors.push(format!("name must be at least {MIN_NAME_LEN} characters"));
    }
    collect(errors)
}

/// Validate post input, shared by create and update.
pub fn post(title: &str, content: &str) -> Result<(), DomainError> {
    let mut errors = Vec::new();
    if title.trim().chars().count() < MIN_TITLE_LEN {
        errors.push(format!("title must be at least {MIN_TITLE_LEN} characters"));
    }
    if content.trim().chars().count() < MIN_CONTENT_LEN {
        errors.push(format!(
            "content must be at least {MIN_CONTENT_LEN} characters"
        ));
    }
    collect(errors)
}

/// Validate a status update.
pub fn status(status: &str) -> Result<(), DomainError> {
    if status.trim().is_empty() {
        return Err(DomainError::Validation(vec![
            "status must not be empty".to_string(),
        ]));
    }
    Ok(())
}

fn collect(errors: Vec<String>) -> Result<(), DomainError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violations(result: Result<(), DomainError>) -> Vec<String> {
        match result {
            Err(DomainError::Validation(errors)) => errors,
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn valid_signup_passes() {
        assert!(signup("ann@example.com", "Ann", "pass1").is_ok());
    }

    #[test]
    fn signup_reports_all_violations_at_once() {
        let errors = violations(signup("not-an-email", "Jo", "abc"));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@x.com"));
        assert!(!is_valid_email("a@x"));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("ax.com"));
    }

    #[test]
    fn normalization_trims_and_lowercases() {
        assert_eq!(normalize_email("  Ann@Example.COM "), "ann@example.com");
    }

    #[test]
    fn short_title_and_content_both_reported() {
        let errors = violations(post("Hi", "abc"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn blank_status_rejected() {
        assert!(status("   ").is_err());
        assert!(status("ready").is_ok());
    }
}
