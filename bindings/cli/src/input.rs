//! Parsing and validation of the interactive two-line input.
//!
//! ## Purpose
//!
//! The first line holds the number of days `n` and the trailing window `d`;
//! the second holds `n` whitespace-separated daily expenditures. Every rule
//! violation maps to an [`InputError`] whose `Display` is the exact message
//! shown to the user.
//!
//! ## Invariants
//!
//! * A parsed [`Parameters`] satisfies `1 <= window <= days <= MAX_DAYS`.
//! * Parsed expenditures lie in `[0, MAX_EXPENDITURE]`.

use std::fmt::{self, Display, Formatter};
use std::io::{self, BufRead};

use fraudwatch::prelude::FraudError;

/// Largest accepted number of days.
pub const MAX_DAYS: usize = 200_000;

/// Largest accepted daily expenditure.
pub const MAX_EXPENDITURE: u32 = 200;

// ============================================================================
// Error Type
// ============================================================================

/// Rejected user input.
#[derive(Debug)]
pub enum InputError {
    /// First line did not hold exactly two tokens.
    ParameterCount(usize),

    /// `n` or `d` is not an integer.
    ParameterNotInteger,

    /// `n` outside `[1, MAX_DAYS]`.
    DaysOutOfRange(i64),

    /// `d` outside `[1, n]`.
    WindowOutOfRange {
        /// Requested window.
        window: i64,
        /// Number of days.
        days: usize,
    },

    /// Second line did not hold exactly `n` tokens.
    ExpenditureCount {
        /// Number of days announced on the first line.
        expected: usize,
        /// Number of tokens found.
        got: usize,
    },

    /// A token is not an integer (1-based day).
    ExpenditureNotInteger {
        /// 1-based day index.
        day: usize,
        /// The offending token.
        token: String,
    },

    /// An expenditure outside `[0, MAX_EXPENDITURE]` (1-based day).
    ExpenditureOutOfRange {
        /// 1-based day index.
        day: usize,
    },

    /// Input ended before a required line.
    UnexpectedEof,

    /// Reading stdin or writing stdout failed.
    Io(io::Error),

    /// The counting engine rejected validated input.
    Engine(FraudError),
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParameterCount(got) => {
                write!(f, "Invalid input: expected 2 values for n and d, but got {got}.")
            }
            Self::ParameterNotInteger => {
                write!(f, "Invalid input: both n and d must be integers.")
            }
            Self::DaysOutOfRange(days) => write!(
                f,
                "Invalid input: you entered n={days}, but n must be between 1 and {MAX_DAYS}."
            ),
            Self::WindowOutOfRange { window, days } => write!(
                f,
                "Invalid input: you entered d={window}, but d must be between 1 and n={days}."
            ),
            Self::ExpenditureCount { expected, got } => write!(
                f,
                "Invalid input: expected n={expected} expenditures, but got {got}."
            ),
            Self::ExpenditureNotInteger { day, token } => {
                write!(f, "Invalid input at day {day}: '{token}' is not an integer.")
            }
            Self::ExpenditureOutOfRange { day } => write!(
                f,
                "Invalid expenditure at day {day}: all expenditures must be between 0 and {MAX_EXPENDITURE}."
            ),
            Self::UnexpectedEof => write!(f, "Error: Input terminated unexpectedly."),
            Self::Io(err) => write!(f, "Error: {err}"),
            Self::Engine(err) => write!(f, "Error: {err}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Engine(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<FraudError> for InputError {
    fn from(err: FraudError) -> Self {
        Self::Engine(err)
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Validated run parameters from the first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameters {
    /// Number of days `n`.
    pub days: usize,
    /// Trailing window `d`.
    pub window: usize,
}

/// Read one line, failing on end of input.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String, InputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::UnexpectedEof);
    }
    Ok(line)
}

/// Parse and range-check `n` and `d`.
pub fn parse_parameters(line: &str) -> Result<Parameters, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[days, window] = tokens.as_slice() else {
        return Err(InputError::ParameterCount(tokens.len()));
    };

    let (Ok(days), Ok(window)) = (days.parse::<i64>(), window.parse::<i64>()) else {
        return Err(InputError::ParameterNotInteger);
    };

    let days = usize::try_from(days)
        .ok()
        .filter(|n| (1..=MAX_DAYS).contains(n))
        .ok_or(InputError::DaysOutOfRange(days))?;
    let window = usize::try_from(window)
        .ok()
        .filter(|d| (1..=days).contains(d))
        .ok_or(InputError::WindowOutOfRange { window, days })?;

    Ok(Parameters { days, window })
}

/// Parse exactly `days` expenditures, each in `[0, MAX_EXPENDITURE]`.
pub fn parse_expenditures(line: &str, days: usize) -> Result<Vec<u32>, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != days {
        return Err(InputError::ExpenditureCount {
            expected: days,
            got: tokens.len(),
        });
    }

    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let day = i + 1;
            let value = token
                .parse::<i64>()
                .map_err(|_| InputError::ExpenditureNotInteger {
                    day,
                    token: (*token).to_string(),
                })?;
            u32::try_from(value)
                .ok()
                .filter(|&v| v <= MAX_EXPENDITURE)
                .ok_or(InputError::ExpenditureOutOfRange { day })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parameters_accept_valid_pair() {
        let params = parse_parameters("  9 5 \n").unwrap();
        assert_eq!(params, Parameters { days: 9, window: 5 });
    }

    #[test]
    fn parameters_token_count() {
        let err = parse_parameters("9").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: expected 2 values for n and d, but got 1."
        );
        assert!(matches!(parse_parameters(""), Err(InputError::ParameterCount(0))));
        assert!(matches!(
            parse_parameters("1 2 3"),
            Err(InputError::ParameterCount(3))
        ));
    }

    #[test]
    fn parameters_must_be_integers() {
        let err = parse_parameters("9 x").unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: both n and d must be integers.");
        assert!(matches!(
            parse_parameters("2.5 1"),
            Err(InputError::ParameterNotInteger)
        ));
    }

    #[test]
    fn parameters_days_range() {
        let err = parse_parameters("0 1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: you entered n=0, but n must be between 1 and 200000."
        );
        assert!(matches!(
            parse_parameters("200001 1"),
            Err(InputError::DaysOutOfRange(200_001))
        ));
        assert!(parse_parameters("200000 1").is_ok());
    }

    #[test]
    fn parameters_window_range() {
        let err = parse_parameters("4 5").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: you entered d=5, but d must be between 1 and n=4."
        );
        assert!(matches!(
            parse_parameters("4 -1"),
            Err(InputError::WindowOutOfRange { window: -1, days: 4 })
        ));
        assert!(parse_parameters("4 4").is_ok());
    }

    #[test]
    fn expenditures_accept_valid_line() {
        let values = parse_expenditures("2 3 4 2 3 6 8 4 5", 9).unwrap();
        assert_eq!(values, vec![2, 3, 4, 2, 3, 6, 8, 4, 5]);
        assert_eq!(parse_expenditures("0 200", 2).unwrap(), vec![0, 200]);
    }

    #[test]
    fn expenditures_count_mismatch() {
        let err = parse_expenditures("1 2 3", 4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: expected n=4 expenditures, but got 3."
        );
    }

    #[test]
    fn expenditures_reject_non_integer_with_day() {
        let err = parse_expenditures("1 2 abc 4", 4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input at day 3: 'abc' is not an integer."
        );
    }

    #[test]
    fn expenditures_reject_out_of_range_with_day() {
        let err = parse_expenditures("1 201 3", 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid expenditure at day 2: all expenditures must be between 0 and 200."
        );
        assert!(matches!(
            parse_expenditures("-1", 1),
            Err(InputError::ExpenditureOutOfRange { day: 1 })
        ));
    }

    #[test]
    fn read_line_reports_eof() {
        let mut reader = Cursor::new("5 3\n");
        assert_eq!(read_line(&mut reader).unwrap(), "5 3\n");

        let err = read_line(&mut reader).unwrap_err();
        assert_eq!(err.to_string(), "Error: Input terminated unexpectedly.");
    }
}
