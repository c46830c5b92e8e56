//! Repetition checks against the password history.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::history::{HistoryError, HistoryStore};

/// Number of identical prior records that blocks another save.
pub const REPETITION_THRESHOLD: usize = 5;

/// Raised when a password already appears [`REPETITION_THRESHOLD`] times or
/// more in the history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepetitionAlert {
    pub password: String,
    pub count: usize,
}

impl fmt::Display for RepetitionAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ALERT: The password '{}' has been used {} times! Please try a new password.",
            self.password, self.count
        )
    }
}

/// Counts exact, case-sensitive occurrences of `password` in the history.
pub fn count_occurrences(
    store: &HistoryStore,
    password: &SecretString,
) -> Result<usize, HistoryError> {
    let candidate = password.expose_secret();
    Ok(store
        .read_all()?
        .iter()
        .filter(|stored| stored.as_str() == candidate)
        .count())
}

/// Checks the candidate against the history before it is saved.
///
/// Returns `Some(alert)` when the candidate has already been stored at
/// least [`REPETITION_THRESHOLD`] times.
pub fn check_repeated_password(
    store: &HistoryStore,
    password: &SecretString,
) -> Result<Option<RepetitionAlert>, HistoryError> {
    let count = count_occurrences(store, password)?;
    if count < REPETITION_THRESHOLD {
        return Ok(None);
    }

    #[cfg(feature = "tracing")]
    tracing::warn!("Repetition limit reached: password stored {} times", count);

    Ok(Some(RepetitionAlert {
        password: password.expose_secret().to_string(),
        count,
    }))
}
