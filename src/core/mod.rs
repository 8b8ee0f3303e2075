pub mod exchange;
pub mod matcher;
pub mod verifier;

pub use crate::domain::model::{Couple, ExchangeReport, Notification, Pairing, Participant, Roster};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
