//! League table rows.

use serde::{Deserialize, Serialize};

/// One row of a league table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub position: u32,
    pub team: String,
    pub points: u32,
    pub played: u32,
}

impl StandingsEntry {
    pub fn new(position: u32, team: impl Into<String>, points: u32, played: u32) -> Self {
        Self {
            position,
            team: team.into(),
            points,
            played,
        }
    }
}

/// Orders a table by reported position and renumbers it `1..=n`.
///
/// The sort is stable, so rows sharing a reported position keep their
/// original relative order.
pub fn into_table(mut entries: Vec<StandingsEntry>) -> Vec<StandingsEntry> {
    entries.sort_by_key(|e| e.position);
    for (entry, position) in entries.iter_mut().zip(1..) {
        entry.position = position;
    }
    entries
}

/// Returns true if positions run `1, 2, ..., n` along the slice.
pub fn is_contiguous(entries: &[StandingsEntry]) -> bool {
    entries.iter().zip(1..).all(|(e, expected)| e.position == expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_table_sorts_and_renumbers() {
        let table = into_table(vec![
            StandingsEntry::new(7, "Girona", 20, 10),
            StandingsEntry::new(2, "Barcelona", 25, 10),
            StandingsEntry::new(2, "Real Madrid", 25, 10),
            StandingsEntry::new(0, "Sevilla", 28, 10),
        ]);

        let teams: Vec<_> = table.iter().map(|e| e.team.as_str()).collect();
        assert_eq!(teams, ["Sevilla", "Barcelona", "Real Madrid", "Girona"]);
        assert!(is_contiguous(&table));
    }

    #[test]
    fn test_is_contiguous() {
        assert!(is_contiguous(&[]));
        assert!(is_contiguous(&[StandingsEntry::new(1, "A", 3, 1)]));
        assert!(!is_contiguous(&[
            StandingsEntry::new(1, "A", 3, 1),
            StandingsEntry::new(3, "B", 0, 1),
        ]));
        assert!(!is_contiguous(&[StandingsEntry::new(2, "A", 3, 1)]));
    }
}
