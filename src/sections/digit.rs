//! Digit section - checks for at least one decimal digit.

use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

// `\d` is Unicode-aware: any decimal digit (`Nd`) counts, not only 0-9.
static DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d").expect("digit pattern is valid"));

/// Checks that the password contains at least one decimal digit.
pub fn digit_section(password: &SecretString) -> SectionResult {
    if !DIGIT.is_match(password.expose_secret()) {
        return Some("Include at least one digit (0-9).".to_string());
    }
    None
}
