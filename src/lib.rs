//! Password strength meter with local history
//!
//! This library scores passwords against four simple rules and keeps a
//! local CSV history of saved passwords, warning when one is reused too
//! often. The history can be exported as an `.xlsx` workbook.
//!
//! History entries are stored in plaintext.
//!
//! # Features
//!
//! - `cli` (default): Builds the `pwd-meter` binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_HISTORY_PATH`: Custom path to the history file
//!   (default: `./password_history.csv`)
//! - `PWD_EXPORT_PATH`: Custom path of the exported workbook
//!   (default: `./password_history.xlsx`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::{check_repeated_password, evaluate_password_strength, HistoryStore};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let evaluation = evaluate_password_strength(&password);
//! println!("Strength: {}", evaluation.strength());
//! for suggestion in &evaluation.suggestions {
//!     println!("{}", suggestion);
//! }
//!
//! let store = HistoryStore::new("password_history.csv");
//! match check_repeated_password(&store, &password).expect("Failed to read history") {
//!     Some(alert) => println!("{}", alert),
//!     None => store.append(&password).expect("Failed to save password"),
//! }
//! ```

// Internal modules
mod config;
mod evaluator;
mod export;
mod history;
mod repetition;
mod sections;
mod session;
mod types;

// Public API
pub use config::{
    Config, DEFAULT_EXPORT_PATH, DEFAULT_HISTORY_PATH, EXPORT_PATH_ENV, HISTORY_PATH_ENV,
};
pub use evaluator::evaluate_password_strength;
pub use export::{export_to_xlsx, ExportError, EXPORT_HEADER};
pub use history::{HistoryError, HistoryStore, HISTORY_HEADER};
pub use repetition::{
    check_repeated_password, count_occurrences, RepetitionAlert, REPETITION_THRESHOLD,
};
pub use sections::SPECIAL_CHARACTERS;
pub use session::{SaveOutcome, Session, SessionError};
pub use types::{PasswordEvaluation, PasswordScore, PasswordStrength, MAX_SCORE};
