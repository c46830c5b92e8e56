//! Handlers behind each `pwd-meter` subcommand.

use std::io::{self, BufRead};

use anyhow::{Context, Result};
use pwd_meter::{
    export_to_xlsx, Config, PasswordEvaluation, SaveOutcome, Session, SessionError,
};
use secrecy::SecretString;

/// How a command finished when it did not fail.
pub enum Status {
    Done,
    /// A save was refused because of the repetition limit.
    Blocked,
}

/// Uses the argument when given, otherwise the first line of stdin.
fn password_input(arg: Option<String>) -> Result<SecretString> {
    let password = match arg {
        Some(password) => password,
        None => {
            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("Failed to read password from stdin")?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };
    Ok(SecretString::new(password.into()))
}

fn print_evaluation(evaluation: &PasswordEvaluation) {
    println!("Password Strength: {}", evaluation.strength());
    for suggestion in &evaluation.suggestions {
        println!("- {suggestion}");
    }
}

fn print_save_outcome(outcome: &SaveOutcome) -> Status {
    match outcome {
        SaveOutcome::Saved => {
            println!("Password saved successfully!");
            Status::Done
        }
        SaveOutcome::AlreadySaved => {
            println!("Password already saved!");
            Status::Done
        }
        SaveOutcome::Blocked(alert) => {
            eprintln!("{alert}");
            Status::Blocked
        }
    }
}

pub fn check(password: Option<String>) -> Result<Status> {
    let mut session = Session::new();
    session.set_input(password_input(password)?);
    print_evaluation(&session.check()?);
    Ok(Status::Done)
}

pub fn save(config: &Config, password: Option<String>) -> Result<Status> {
    let store = config.history_store();
    let mut session = Session::new();
    session.set_input(password_input(password)?);
    match session.save(&store) {
        Ok(outcome) => Ok(print_save_outcome(&outcome)),
        Err(SessionError::MissingInput) => {
            anyhow::bail!("Please enter a password before saving!")
        }
        Err(e) => Err(e.into()),
    }
}

pub fn history(config: &Config) -> Result<Status> {
    let passwords = config.history_store().read_all()?;
    if passwords.is_empty() {
        println!("No password history found.");
    }
    for password in passwords {
        println!("{password}");
    }
    Ok(Status::Done)
}

pub fn clear(config: &Config) -> Result<Status> {
    config.history_store().clear()?;
    println!("Password history cleared successfully!");
    Ok(Status::Done)
}

pub fn export(config: &Config) -> Result<Status> {
    match export_to_xlsx(&config.history_store(), &config.export_path)? {
        Some(path) => println!("Exported history to {}", path.display()),
        None => println!("No password history to export."),
    }
    Ok(Status::Done)
}

/// Runs a session over stdin.
///
/// Lines starting with `:` are actions (`:check`, `:save`, `:clear`,
/// `:history`, `:export`, `:quit`); any other line becomes the input.
/// Action failures are reported and the session keeps going.
pub fn interactive(config: &Config) -> Result<Status> {
    let store = config.history_store();
    let mut session = Session::new();
    let mut status = Status::Done;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let result = match line.as_str() {
            ":quit" => break,
            ":check" => session
                .check()
                .map(|evaluation| print_evaluation(&evaluation))
                .map_err(anyhow::Error::from),
            ":save" => session
                .save(&store)
                .map(|outcome| {
                    if let Status::Blocked = print_save_outcome(&outcome) {
                        status = Status::Blocked;
                    }
                })
                .map_err(anyhow::Error::from),
            ":clear" => session
                .clear(&store)
                .map(|()| println!("Password history cleared successfully!"))
                .map_err(anyhow::Error::from),
            ":history" => history(config).map(|_| ()),
            ":export" => export(config).map(|_| ()),
            input => {
                session.set_input(SecretString::new(input.to_string().into()));
                Ok(())
            }
        };

        if let Err(e) = result {
            eprintln!("{e:#}");
        }
    }

    Ok(status)
}
