use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// 參加者，以名字識別
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participant(String);

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Participant {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Participant {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// 情侶：兩人互相不能抽到對方。成員順序無意義。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Couple {
    first: Participant,
    second: Participant,
}

impl Couple {
    pub fn new(a: impl Into<Participant>, b: impl Into<Participant>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    pub fn members(&self) -> [&Participant; 2] {
        [&self.first, &self.second]
    }

    pub fn contains(&self, person: &Participant) -> bool {
        &self.first == person || &self.second == person
    }

    /// {a, b} 是否為這對情侶的子集合
    pub fn covers(&self, a: &Participant, b: &Participant) -> bool {
        self.contains(a) && self.contains(b)
    }
}

impl fmt::Display for Couple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

/// 一次交換的參加者與情侶名單。載入後即不可變。
///
/// Construct through [`Roster::new`], which collapses repeated couples and
/// rejects couples referencing unknown people or people that belong to more
/// than one couple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    people: BTreeSet<Participant>,
    couples: Vec<Couple>,
}

impl Roster {
    pub fn new(
        people: impl IntoIterator<Item = Participant>,
        couples: impl IntoIterator<Item = Couple>,
    ) -> crate::utils::error::Result<Self> {
        let mut unique = BTreeSet::new();
        for couple in couples {
            if let Some(repeated) = unique.replace(couple) {
                tracing::debug!("Duplicate couple {} collapsed", repeated);
            }
        }

        let roster = Self {
            people: people.into_iter().collect(),
            couples: unique.into_iter().collect(),
        };
        crate::utils::validation::validate_roster(&roster)?;
        Ok(roster)
    }

    pub fn people(&self) -> &BTreeSet<Participant> {
        &self.people
    }

    pub fn couples(&self) -> &[Couple] {
        &self.couples
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

/// Giver → receiver assignment for one exchange.
///
/// Givers are unique; receivers are not checked here so that malformed
/// pairings can still be built and handed to the verifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pairing {
    assignments: BTreeMap<Participant, Participant>,
}

impl Pairing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, giver: Participant, receiver: Participant) {
        self.assignments.insert(giver, receiver);
    }

    pub fn receiver_of(&self, giver: &Participant) -> Option<&Participant> {
        self.assignments.get(giver)
    }

    pub fn givers(&self) -> impl Iterator<Item = &Participant> {
        self.assignments.keys()
    }

    pub fn receivers(&self) -> impl Iterator<Item = &Participant> {
        self.assignments.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Participant, &Participant)> {
        self.assignments.iter()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.iter()
            .map(|(giver, receiver)| Notification::new(giver, receiver))
            .collect()
    }
}

impl FromIterator<(Participant, Participant)> for Pairing {
    fn from_iter<I: IntoIterator<Item = (Participant, Participant)>>(iter: I) -> Self {
        Self {
            assignments: iter.into_iter().collect(),
        }
    }
}

/// 寫給單一送禮者的通知檔
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub file_name: String,
    pub message: String,
}

impl Notification {
    pub fn new(giver: &Participant, receiver: &Participant) -> Self {
        Self {
            file_name: format!("{}_gift_recipient.txt", giver),
            message: format!(
                "Hello, {}. You will be giving a gift to {}.\n",
                giver, receiver
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeReport {
    pub attempts: usize,
    pub participants: usize,
    pub output_dir: String,
    pub files_written: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_couple_is_unordered() {
        assert_eq!(Couple::new("Joe", "Emily"), Couple::new("Emily", "Joe"));

        let couple = Couple::new("Megan", "Marcus");
        assert!(couple.covers(&"Marcus".into(), &"Megan".into()));
        assert!(couple.covers(&"Megan".into(), &"Megan".into()));
        assert!(!couple.covers(&"Megan".into(), &"Ben".into()));
    }

    #[test]
    fn test_pairing_keeps_duplicate_receivers() {
        let pairing: Pairing = [("A", "B"), ("B", "C"), ("C", "B")]
            .into_iter()
            .map(|(g, r)| (Participant::from(g), Participant::from(r)))
            .collect();

        assert_eq!(pairing.len(), 3);
        assert_eq!(pairing.receivers().filter(|r| r.as_str() == "B").count(), 2);
    }

    #[test]
    fn test_notification_format() {
        let note = Notification::new(&"Joe".into(), &"Rachel".into());
        assert_eq!(note.file_name, "Joe_gift_recipient.txt");
        assert_eq!(
            note.message,
            "Hello, Joe. You will be giving a gift to Rachel.\n"
        );
    }

    #[test]
    fn test_roster_collapses_repeated_couples() {
        let roster = Roster::new(
            ["Joe", "Emily", "Ben"].into_iter().map(Participant::from),
            vec![Couple::new("Joe", "Emily"), Couple::new("Emily", "Joe")],
        )
        .unwrap();
        assert_eq!(roster.couples(), &[Couple::new("Joe", "Emily")]);
    }

    #[test]
    fn test_roster_collapses_duplicate_people() {
        let roster = Roster::new(
            ["Ann", "Bob", "Ann"].into_iter().map(Participant::from),
            Vec::new(),
        )
        .unwrap();
        assert_eq!(roster.len(), 2);
    }
}
