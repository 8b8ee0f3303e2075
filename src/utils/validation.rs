use crate::domain::model::{Participant, Roster};
use crate::utils::error::{Result, SantaError};
use std::collections::BTreeMap;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SantaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 名字會成為檔名的一部分，不能含路徑字元
pub fn validate_participant_name(name: &str) -> Result<()> {
    validate_non_empty_string("participant", name)?;

    if let Some(bad) = name.chars().find(|&c| matches!(c, '/' | '\\' | '\0' | ',')) {
        return Err(SantaError::InvalidConfigValueError {
            field: "participant".to_string(),
            value: name.to_string(),
            reason: format!("Name cannot contain {:?}", bad),
        });
    }

    if name == "." || name == ".." {
        return Err(SantaError::InvalidConfigValueError {
            field: "participant".to_string(),
            value: name.to_string(),
            reason: "Name cannot be a relative path component".to_string(),
        });
    }

    Ok(())
}

/// Rejects couples that reference unknown people, pair someone with
/// themselves, or share a member with another couple.
pub fn validate_roster(roster: &Roster) -> Result<()> {
    for person in roster.people() {
        validate_participant_name(person.as_str())?;
    }

    let mut seen: BTreeMap<&Participant, usize> = BTreeMap::new();
    for (index, couple) in roster.couples().iter().enumerate() {
        let [a, b] = couple.members();
        if a == b {
            return Err(SantaError::RosterError {
                message: format!("{} cannot be coupled with themselves", a),
            });
        }

        for member in [a, b] {
            if !roster.people().contains(member) {
                return Err(SantaError::RosterError {
                    message: format!("couple {} names {}, who is not a participant", couple, member),
                });
            }
            if let Some(previous) = seen.insert(member, index) {
                return Err(SantaError::RosterError {
                    message: format!(
                        "{} appears in more than one couple: {} and {}",
                        member,
                        roster.couples()[previous],
                        couple
                    ),
                });
            }
        }
    }

    Ok(())
}
