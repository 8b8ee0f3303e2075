use crate::domain::model::Participant;
use std::path::PathBuf;
use thiserror::Error;

/// 配對結果違反交換規則
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintViolation {
    #[error("{giver} is assigned to themselves")]
    SelfAssignment { giver: Participant },

    #[error("{giver} is assigned to their partner {receiver}")]
    PartnerAssignment {
        giver: Participant,
        receiver: Participant,
    },

    #[error("Some recipients were not assigned: {}", join_names(.unassigned))]
    IncompleteCoverage { unassigned: Vec<Participant> },

    #[error("Some participants have no recipient: {}", join_names(.givers))]
    UnassignedGivers { givers: Vec<Participant> },

    #[error("Pairing contains givers outside the roster: {}", join_names(.givers))]
    UnknownGivers { givers: Vec<Participant> },
}

fn join_names(names: &[Participant]) -> String {
    names
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Error, Debug)]
pub enum SantaError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    InputFileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: {message}", .path.display())]
    ParseError {
        path: PathBuf,
        line: u64,
        message: String,
    },

    #[error("Invalid roster: {message}")]
    RosterError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Pairing failed verification: {0}")]
    ConstraintViolation(#[from] ConstraintViolation),

    #[error("No valid pairing exists for {participants} participants after {attempts} attempts")]
    Unsatisfiable { attempts: usize, participants: usize },

    #[error("Failed to write {}: {source}", .path.display())]
    OutputError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Generation,
    Verification,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SantaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SantaError::CsvError(_)
            | SantaError::InputFileError { .. }
            | SantaError::ParseError { .. }
            | SantaError::RosterError { .. } => ErrorCategory::Input,
            SantaError::ConfigError { .. }
            | SantaError::ConfigValidationError { .. }
            | SantaError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SantaError::Unsatisfiable { .. } => ErrorCategory::Generation,
            SantaError::ConstraintViolation(_) => ErrorCategory::Verification,
            SantaError::OutputError { .. } => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Generation => ErrorSeverity::Medium,
            // 驗證失敗代表配對邏輯有缺陷
            ErrorCategory::Verification => ErrorSeverity::Critical,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SantaError::InputFileError { .. } => {
                "Check that the file exists and is readable"
            }
            SantaError::CsvError(_) | SantaError::ParseError { .. } => {
                "Each couples line must be exactly two names separated by a comma"
            }
            SantaError::RosterError { .. } => {
                "Make sure every couple member is listed as a participant and appears in only one couple"
            }
            SantaError::ConfigError { .. }
            | SantaError::ConfigValidationError { .. }
            | SantaError::InvalidConfigValueError { .. } => {
                "Review the command line arguments or the TOML configuration file"
            }
            SantaError::Unsatisfiable { .. } => {
                "Add more participants or remove couples; the current constraints leave no valid assignment"
            }
            SantaError::ConstraintViolation(_) => {
                "This is a bug in the matcher; please report it with the input files and seed"
            }
            SantaError::OutputError { .. } => {
                "Check that the output directory is writable and has free space"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SantaError::Unsatisfiable { participants, .. } => format!(
                "Could not find a valid gift exchange for {} participants",
                participants
            ),
            SantaError::ConstraintViolation(v) => {
                format!("Generated pairing is invalid ({})", v)
            }
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, SantaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_coverage_lists_names() {
        let err = ConstraintViolation::IncompleteCoverage {
            unassigned: vec![Participant::from("Alec"), Participant::from("Ben")],
        };
        assert_eq!(
            err.to_string(),
            "Some recipients were not assigned: Alec, Ben"
        );
    }

    #[test]
    fn test_categories_and_exit_codes() {
        let unsat = SantaError::Unsatisfiable {
            attempts: 10,
            participants: 2,
        };
        assert_eq!(unsat.category(), ErrorCategory::Generation);
        assert_eq!(unsat.exit_code(), 2);

        let violation: SantaError = ConstraintViolation::SelfAssignment {
            giver: Participant::from("Joe"),
        }
        .into();
        assert_eq!(violation.category(), ErrorCategory::Verification);
        assert_eq!(violation.severity(), ErrorSeverity::Critical);
        assert_eq!(violation.exit_code(), 3);

        let parse = SantaError::ParseError {
            path: PathBuf::from("couples.txt"),
            line: 3,
            message: "expected 2 names, found 1".to_string(),
        };
        assert_eq!(parse.category(), ErrorCategory::Input);
        assert_eq!(parse.exit_code(), 1);
        assert_eq!(parse.to_string(), "couples.txt:3: expected 2 names, found 1");
    }

    #[test]
    fn test_io_failures_keep_their_direction() {
        let not_found = || std::io::Error::new(std::io::ErrorKind::NotFound, "gone");

        let input = SantaError::InputFileError {
            path: PathBuf::from("people.txt"),
            source: not_found(),
        };
        assert_eq!(input.category(), ErrorCategory::Input);
        assert_eq!(input.to_string(), "Failed to read people.txt: gone");

        let output = SantaError::OutputError {
            path: PathBuf::from("out/Joe_gift_recipient.txt"),
            source: not_found(),
        };
        assert_eq!(output.category(), ErrorCategory::Output);
        assert_eq!(output.exit_code(), 3);
    }
}
