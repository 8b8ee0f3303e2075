use crate::domain::model::{Couple, Participant, Roster};
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::validate_participant_name;
use csv::{ReaderBuilder, Trim};
use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

/// 讀取參加者檔案：一行一個名字，重複的名字會合併
pub fn load_people<P: AsRef<Path>>(path: P) -> Result<BTreeSet<Participant>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| SantaError::InputFileError {
        path: path.to_path_buf(),
        source,
    })?;

    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    let mut people = BTreeSet::new();
    for (index, line) in content.lines().enumerate() {
        let name = line.trim();
        if name.is_empty() || name.starts_with('#') {
            continue;
        }

        validate_participant_name(name).map_err(|e| SantaError::ParseError {
            path: path.to_path_buf(),
            line: index as u64 + 1,
            message: e.to_string(),
        })?;

        if !people.insert(Participant::from(name)) {
            tracing::debug!("Duplicate participant '{}' collapsed", name);
        }
    }

    tracing::info!("👥 Loaded {} participants from {}", people.len(), path.display());
    Ok(people)
}

/// 讀取情侶檔案：一行兩個名字，以逗號分隔
pub fn load_couples<P: AsRef<Path>>(path: P) -> Result<Vec<Couple>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SantaError::InputFileError {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let mut couples = Vec::new();
    for record in reader.records() {
        let record = record?;
        // 與參加者檔案一致：縮排後的 # 也算註解
        if record.get(0).is_some_and(|first| first.starts_with('#')) {
            continue;
        }
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let parse_error = |message: String| SantaError::ParseError {
            path: path.to_path_buf(),
            line,
            message,
        };

        if record.len() != 2 {
            return Err(parse_error(format!(
                "expected 2 comma-separated names, found {}",
                record.len()
            )));
        }
        let (a, b) = (&record[0], &record[1]);
        for name in [a, b] {
            validate_participant_name(name).map_err(|e| parse_error(e.to_string()))?;
        }

        couples.push(Couple::new(a, b));
    }

    tracing::info!("💑 Loaded {} couples from {}", couples.len(), path.display());
    Ok(couples)
}

/// 從兩個檔案組出名單，並在產生配對前檢查名單一致性
pub fn load_roster<P: AsRef<Path>, Q: AsRef<Path>>(people_file: P, couples_file: Q) -> Result<Roster> {
    let people = load_people(people_file)?;
    if people.is_empty() {
        return Err(SantaError::RosterError {
            message: "the people file lists no participants".to_string(),
        });
    }
    let couples = load_couples(couples_file)?;
    Roster::new(people, couples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_people_trims_and_deduplicates() {
        let file = temp_file("Joe\n  Emily \n\nJoe\n# comment\nBen\n");
        let people = load_people(file.path()).unwrap();

        let names: Vec<&str> = people.iter().map(|p| p.as_str()).collect();
        assert_eq!(names, vec!["Ben", "Emily", "Joe"]);
    }

    #[test]
    fn test_load_people_missing_file() {
        let result = load_people("/definitely/not/here/people.txt");
        match result {
            Err(SantaError::InputFileError { path, .. }) => {
                assert!(path.ends_with("people.txt"))
            }
            other => panic!("expected InputFileError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_people_rejects_path_like_names() {
        let file = temp_file("Joe\n../Emily\n");
        match load_people(file.path()) {
            Err(SantaError::ParseError { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_couples() {
        let file = temp_file("Joe,Emily\nMegan , Marcus\n\n# exes are fine\n");
        let couples = load_couples(file.path()).unwrap();

        assert_eq!(
            couples,
            vec![Couple::new("Joe", "Emily"), Couple::new("Megan", "Marcus")]
        );
    }

    #[test]
    fn test_loaders_agree_on_comments_and_bom() {
        let people = temp_file("\u{feff}Joe\n  # the Smiths\nEmily\nBen\nRachel\n");
        let couples = temp_file("\u{feff}Joe,Emily\n  # Ben and Rachel split up, sadly\n");

        let people_set = load_people(people.path()).unwrap();
        assert!(people_set.contains(&Participant::from("Joe")));
        assert_eq!(people_set.len(), 4);

        let roster = load_roster(people.path(), couples.path()).unwrap();
        assert_eq!(roster.couples(), &[Couple::new("Joe", "Emily")]);
    }

    #[test]
    fn test_load_couples_rejects_wrong_field_count() {
        let file = temp_file("Joe,Emily\nAlec\n");
        match load_couples(file.path()) {
            Err(SantaError::ParseError { line, message, .. }) => {
                assert_eq!(line, 2);
                assert!(message.contains("found 1"));
            }
            other => panic!("expected ParseError, got {:?}", other),
        }

        let file = temp_file("Joe,Emily,Ben\n");
        assert!(matches!(
            load_couples(file.path()),
            Err(SantaError::ParseError { line: 1, .. })
        ));
    }

    #[test]
    fn test_load_couples_rejects_empty_name() {
        let file = temp_file("Joe,\n");
        assert!(matches!(
            load_couples(file.path()),
            Err(SantaError::ParseError { .. })
        ));
    }

    #[test]
    fn test_load_roster_rejects_empty_people_file() {
        let people = temp_file("\n# nobody yet\n");
        let couples = temp_file("");

        assert!(matches!(
            load_roster(people.path(), couples.path()),
            Err(SantaError::RosterError { .. })
        ));
    }

    #[test]
    fn test_load_roster_collapses_repeated_and_reversed_couples() {
        let people = temp_file("Joe\nEmily\nBen\nRachel\n");
        let couples = temp_file("Joe,Emily\nEmily,Joe\nJoe,Emily\n");

        let roster = load_roster(people.path(), couples.path()).unwrap();
        assert_eq!(roster.couples(), &[Couple::new("Joe", "Emily")]);
    }

    #[test]
    fn test_load_roster_checks_couple_members() {
        let people = temp_file("Joe\nBen\nRachel\n");
        let couples = temp_file("Joe,Emily\n");

        assert!(matches!(
            load_roster(people.path(), couples.path()),
            Err(SantaError::RosterError { .. })
        ));
    }
}
