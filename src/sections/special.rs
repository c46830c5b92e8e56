//! Special character section.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Characters that satisfy the special character rule.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*";

/// Checks that the password contains at least one of [`SPECIAL_CHARACTERS`].
///
/// Other punctuation (e.g. `?` or `-`) does not count.
pub fn special_character_section(password: &SecretString) -> SectionResult {
    let has_special = password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARACTERS.contains(c));

    if !has_special {
        return Some(format!(
            "Include at least one special character ({}).",
            SPECIAL_CHARACTERS
        ));
    }
    None
}
