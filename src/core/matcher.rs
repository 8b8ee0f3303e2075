use crate::domain::model::{Pairing, Participant, Roster};
use rand::Rng;
use std::collections::BTreeSet;

/// 單次配對嘗試的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Matched(Pairing),
    /// 某位送禮者已無合法對象，整次嘗試作廢
    DeadEnd { giver: Participant },
}

/// Greedy one-pass random matcher.
///
/// Each giver draws uniformly among the participants that are neither
/// themselves, their partner, nor already taken earlier in the same attempt.
/// There is no backtracking: a giver left without a candidate abandons the
/// whole attempt and the caller starts over.
pub struct Matcher<R: Rng> {
    rng: R,
}

impl<R: Rng> Matcher<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn generate_pairing(&mut self, roster: &Roster) -> MatchOutcome {
        let mut pairing = Pairing::new();
        let mut taken: BTreeSet<&Participant> = BTreeSet::new();

        for giver in roster.people() {
            let mut invalid: BTreeSet<&Participant> = taken.clone();
            invalid.insert(giver);
            for couple in roster.couples().iter().filter(|c| c.contains(giver)) {
                invalid.extend(couple.members());
            }

            let valid: Vec<&Participant> = roster
                .people()
                .iter()
                .filter(|p| !invalid.contains(p))
                .collect();

            if valid.is_empty() {
                return MatchOutcome::DeadEnd {
                    giver: giver.clone(),
                };
            }

            let target = valid[self.rng.random_range(0..valid.len())];
            pairing.assign(giver.clone(), target.clone());
            taken.insert(target);
        }

        MatchOutcome::Matched(pairing)
    }
}
