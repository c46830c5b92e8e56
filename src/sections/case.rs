//! Case section - requires both uppercase and lowercase letters.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks that the password mixes ASCII uppercase and lowercase letters.
///
/// Both are required for the section to pass; one without the other fails.
pub fn case_mixing_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());

    if !(has_upper && has_lower) {
        return Some("Use both uppercase and lowercase letters.".to_string());
    }
    None
}
