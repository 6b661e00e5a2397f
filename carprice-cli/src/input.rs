//! Parsing of the interactive mileage prompt
use thiserror::Error;

/// Keywords ending the prediction loop, compared case-insensitively
pub const EXIT_KEYWORDS: [&str; 3] = ["q", "quit", "exit"];

/// An invalid answer at the mileage prompt, the user is asked again
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("please enter a mileage or 'exit' to quit")]
    Empty,
    #[error("`{0}` is not a number, enter a mileage in km or 'exit' to quit")]
    NotANumber(String),
    #[error("mileage cannot be negative, got {0}")]
    NegativeMileage(f64),
    #[error("mileage must be a finite number, got {0}")]
    NonFinite(String),
}

/// One classified line of user input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PromptInput {
    Exit,
    Mileage(f64),
}

/// Classify a line read at the prompt
pub fn parse_mileage(line: &str) -> Result<PromptInput, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(InputError::Empty);
    }
    if EXIT_KEYWORDS
        .iter()
        .any(|keyword| line.eq_ignore_ascii_case(keyword))
    {
        return Ok(PromptInput::Exit);
    }

    let km: f64 = line
        .parse()
        .map_err(|_| InputError::NotANumber(line.to_string()))?;
    if !km.is_finite() {
        return Err(InputError::NonFinite(line.to_string()));
    }
    if km < 0. {
        return Err(InputError::NegativeMileage(km));
    }

    Ok(PromptInput::Mileage(km))
}
