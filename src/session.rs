//! Interactive session state.
//!
//! The scorer, store and checker are stateless. `Session` holds what an
//! interactive front end has to remember between actions: the current input
//! and whether it was already saved.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::evaluator::evaluate_password_strength;
use crate::history::{HistoryError, HistoryStore};
use crate::repetition::{check_repeated_password, RepetitionAlert};
use crate::types::PasswordEvaluation;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Please enter a password!")]
    MissingInput,
    #[error(transparent)]
    History(#[from] HistoryError),
}

/// Result of a save action that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The password was appended to the history.
    Saved,
    /// The current input was already saved in this session; nothing written.
    AlreadySaved,
    /// The repetition limit was reached; nothing written.
    Blocked(RepetitionAlert),
}

#[derive(Debug, Default)]
pub struct Session {
    input: Option<SecretString>,
    saved: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current input. The "already saved" flag is reset only
    /// when the value actually changes.
    pub fn set_input(&mut self, input: SecretString) {
        let changed = self
            .input
            .as_ref()
            .is_none_or(|current| current.expose_secret() != input.expose_secret());
        if changed {
            self.saved = false;
        }
        self.input = Some(input);
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    fn current_input(&self) -> Result<&SecretString, SessionError> {
        self.input
            .as_ref()
            .filter(|pwd| !pwd.expose_secret().is_empty())
            .ok_or(SessionError::MissingInput)
    }

    /// Scores the current input.
    pub fn check(&self) -> Result<PasswordEvaluation, SessionError> {
        Ok(evaluate_password_strength(self.current_input()?))
    }

    /// Saves the current input unless it hit the repetition limit or was
    /// already saved since it was last changed.
    ///
    /// The repetition check runs first, so a blocked password reports the
    /// alert even when it was saved earlier in the session.
    pub fn save(&mut self, store: &HistoryStore) -> Result<SaveOutcome, SessionError> {
        let password = self.current_input()?;

        if let Some(alert) = check_repeated_password(store, password)? {
            return Ok(SaveOutcome::Blocked(alert));
        }
        if self.saved {
            return Ok(SaveOutcome::AlreadySaved);
        }

        store.append(password)?;
        self.saved = true;
        Ok(SaveOutcome::Saved)
    }

    /// Clears the whole history.
    pub fn clear(&self, store: &HistoryStore) -> Result<(), SessionError> {
        store.clear()?;
        Ok(())
    }
}
