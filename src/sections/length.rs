//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const MIN_LENGTH: usize = 8;

/// Checks if the password meets minimum length requirements.
///
/// Length is counted in characters, not bytes.
///
/// # Returns
/// - `Some(suggestion)` if password is too short
/// - `None` if password has sufficient length
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(format!(
            "Increase password length to at least {} characters.",
            MIN_LENGTH
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        let result = length_section(&pwd);
        assert_eq!(
            result,
            Some("Increase password length to at least 8 characters.".to_string())
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let pwd = SecretString::new("12345678".to_string().into());
        assert_eq!(length_section(&pwd), None);
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 7 characters, 14 bytes
        let pwd = SecretString::new("ééééééé".to_string().into());
        assert!(length_section(&pwd).is_some());
    }

    #[test]
    fn test_length_section_empty() {
        let pwd = SecretString::new(String::new().into());
        assert!(length_section(&pwd).is_some());
    }
}
