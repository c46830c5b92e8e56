//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

use crate::sections::{
    case_mixing_section, digit_section, length_section, special_character_section,
    SectionResult,
};
use crate::types::{PasswordEvaluation, PasswordScore};

/// Evaluates password strength and returns a detailed evaluation.
///
/// Every section is run independently; each passing section adds one point
/// and each failing one appends its suggestion, in section order.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `PasswordEvaluation` containing score and suggestions.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let mut suggestions = Vec::new();
    let mut score: u8 = 0;

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&SecretString) -> SectionResult); 4] = [
        ("length", length_section),
        ("case", case_mixing_section),
        ("digit", digit_section),
        ("special", special_character_section),
    ];

    for (_section_name, section_fn) in sections {
        match section_fn(password) {
            Some(suggestion) => {
                #[cfg(feature = "tracing")]
                tracing::trace!("section {} failed", _section_name);
                suggestions.push(suggestion);
            }
            None => score += 1,
        }
    }

    PasswordEvaluation {
        score: PasswordScore::new(score),
        suggestions,
    }
}
