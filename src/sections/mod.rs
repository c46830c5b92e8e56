//! Password evaluation sections
//!
//! Each section tests one rule and, when the rule fails, yields the
//! suggestion shown to the user.

mod case;
mod digit;
mod length;
mod special;

pub use case::case_mixing_section;
pub use digit::digit_section;
pub use length::length_section;
pub use special::{special_character_section, SPECIAL_CHARACTERS};

/// Result type for section evaluation functions.
/// - `Some(suggestion)` - Section failed with an improvement suggestion
/// - `None` - Section passed
pub type SectionResult = Option<String>;
