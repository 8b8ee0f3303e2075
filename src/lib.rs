pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::{
    exchange::ExchangeEngine,
    matcher::{MatchOutcome, Matcher},
    verifier::{verify, verify_roster},
};
pub use domain::model::{Couple, ExchangeReport, Pairing, Participant, Roster};
pub use utils::error::{ConstraintViolation, Result, SantaError};
