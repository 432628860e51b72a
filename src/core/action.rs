//! Player actions and input validation

use super::bounds::{SECRET_MAX, SECRET_MIN};
use std::fmt;
use std::num::IntErrorKind;

/// One action submitted to a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Numeric guess, not yet range-checked
    Guess(i64),
    /// Ask for a hint (costs one attempt)
    Hint,
    /// Abandon the round
    Quit,
}

/// Rejected input; the round is left untouched and no attempt is charged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Token is neither a command nor an integer
    NotANumber,
    /// Integer outside `SECRET_MIN..=SECRET_MAX`
    OutOfDomain,
    /// The round has already finished
    RoundOver,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => write!(f, "Please enter a valid number, 'hint', or 'quit'."),
            Self::OutOfDomain => write!(
                f,
                "Your guess must be between {SECRET_MIN} and {SECRET_MAX}."
            ),
            Self::RoundOver => write!(f, "This round is already over."),
        }
    }
}

impl std::error::Error for ValidationError {}

impl Action {
    /// Parse a raw input token
    ///
    /// Commands are case-insensitive and surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `ValidationError::NotANumber` for anything that is neither a
    /// command nor an integer, and `ValidationError::OutOfDomain` for
    /// integers too large to represent.
    ///
    /// # Examples
    /// ```
    /// use number_guess::core::{Action, ValidationError};
    ///
    /// assert_eq!(Action::parse(" HINT "), Ok(Action::Hint));
    /// assert_eq!(Action::parse("150"), Ok(Action::Guess(150)));
    /// assert_eq!(Action::parse("abc"), Err(ValidationError::NotANumber));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let token = raw.trim().to_lowercase();

        match token.as_str() {
            "quit" => Ok(Self::Quit),
            "hint" => Ok(Self::Hint),
            _ => token.parse::<i64>().map(Self::Guess).map_err(|e| match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    ValidationError::OutOfDomain
                }
                _ => ValidationError::NotANumber,
            }),
        }
    }
}

/// Check that a numeric guess lies in the secret domain
///
/// # Errors
/// Returns `ValidationError::OutOfDomain` when it does not.
pub fn validate_guess(value: i64) -> Result<u32, ValidationError> {
    u32::try_from(value)
        .ok()
        .filter(|v| (SECRET_MIN..=SECRET_MAX).contains(v))
        .ok_or(ValidationError::OutOfDomain)
}
