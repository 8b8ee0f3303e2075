use crate::domain::model::{Couple, Pairing, Participant, Roster};
use crate::utils::error::ConstraintViolation;
use std::collections::BTreeSet;

/// 檢查配對是否符合三項規則：不抽自己、不抽伴侶、每人恰好被抽一次。
///
/// Works from the raw pairing only and never trusts how it was produced.
pub fn verify(pairing: &Pairing, couples: &[Couple]) -> Result<(), ConstraintViolation> {
    let mut remaining: BTreeSet<&Participant> = pairing.givers().collect();

    for (giver, receiver) in pairing.iter() {
        if giver == receiver {
            return Err(ConstraintViolation::SelfAssignment {
                giver: giver.clone(),
            });
        }
        if couples.iter().any(|c| c.covers(giver, receiver)) {
            return Err(ConstraintViolation::PartnerAssignment {
                giver: giver.clone(),
                receiver: receiver.clone(),
            });
        }
        remaining.remove(receiver);
    }

    if !remaining.is_empty() {
        return Err(ConstraintViolation::IncompleteCoverage {
            unassigned: remaining.into_iter().cloned().collect(),
        });
    }

    Ok(())
}

/// Like [`verify`], but also requires the givers to be exactly the roster's
/// participants.
pub fn verify_roster(pairing: &Pairing, roster: &Roster) -> Result<(), ConstraintViolation> {
    let givers: BTreeSet<&Participant> = pairing.givers().collect();

    let unknown: Vec<Participant> = givers
        .iter()
        .filter(|g| !roster.people().contains(**g))
        .map(|g| (*g).clone())
        .collect();
    if !unknown.is_empty() {
        return Err(ConstraintViolation::UnknownGivers { givers: unknown });
    }

    let missing: Vec<Participant> = roster
        .people()
        .iter()
        .filter(|p| !givers.contains(p))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(ConstraintViolation::UnassignedGivers { givers: missing });
    }

    verify(pairing, roster.couples())
}
