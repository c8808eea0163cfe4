//! Team season statistics.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Maximum number of entries kept in [`TeamStatistics::form`].
pub const FORM_LENGTH: usize = 5;

/// Outcome of a single match from the team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

/// A recently played match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastMatch {
    pub opponent: String,
    pub result: MatchResult,
    pub score: String,
}

/// Leading goal scorer of a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopScorer {
    pub name: String,
    pub goals: u32,
}

/// Win/draw/loss record, overall or restricted to home or away matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl Record {
    pub const fn new(wins: u32, draws: u32, losses: u32) -> Self {
        Self {
            wins,
            draws,
            losses,
        }
    }

    /// Number of matches covered by this record, or `None` if it overflows.
    pub fn played(&self) -> Option<u32> {
        self.wins.checked_add(self.draws)?.checked_add(self.losses)
    }
}

/// Win/draw/loss counts too large to add up to a match count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("win/draw/loss counts of '{team}' overflow")]
pub struct CountOverflow {
    pub team: String,
}

/// Season statistics of a single team.
///
/// Invariants held by every value built through [`TeamStatistics::normalized`]:
///
/// - `wins + draws + losses == matches_played`
/// - `goal_difference == goals_for - goals_against`
/// - `home_stats + away_stats` equals the overall record, per outcome
/// - `position >= 1` and `form.len() <= FORM_LENGTH`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatistics {
    pub team_name: String,
    pub league: String,
    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub position: u32,
    pub points: u32,
    /// Most recent result first.
    #[serde(default)]
    pub form: Vec<MatchResult>,
    #[serde(default)]
    pub last_matches: Vec<LastMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_scorer: Option<TopScorer>,
    #[serde(default)]
    pub home_stats: Record,
    #[serde(default)]
    pub away_stats: Record,
    /// Corner figures as reported by the scraper, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corners: Option<Value>,
    /// Over/under and both-teams-to-score figures as reported by the scraper.
    #[serde(
        default,
        alias = "goals_stats",
        skip_serializing_if = "Option::is_none"
    )]
    pub goals_stats: Option<Value>,
}

impl TeamStatistics {
    /// Overall win/draw/loss record.
    pub fn record(&self) -> Record {
        Record::new(self.wins, self.draws, self.losses)
    }

    /// Restores the invariants listed on the type.
    ///
    /// `matches_played` follows the win/draw/loss counts, the goal difference is
    /// recomputed, and the away split absorbs whatever the home split does not
    /// account for.
    ///
    /// # Errors
    ///
    /// Returns [`CountOverflow`] if the win/draw/loss counts do not fit a `u32` sum.
    pub fn normalized(mut self) -> Result<Self, CountOverflow> {
        let overall = self.record();
        let Some(played) = overall.played() else {
            return Err(CountOverflow {
                team: self.team_name,
            });
        };

        if played != self.matches_played {
            tracing::warn!(
                team = %self.team_name,
                reported = self.matches_played,
                counted = played,
                "matches played disagrees with win/draw/loss counts"
            );
            self.matches_played = played;
        }

        self.goal_difference = i64::from(self.goals_for) - i64::from(self.goals_against);
        self.position = self.position.max(1);
        self.form.truncate(FORM_LENGTH);

        let home = Record::new(
            self.home_stats.wins.min(overall.wins),
            self.home_stats.draws.min(overall.draws),
            self.home_stats.losses.min(overall.losses),
        );
        self.home_stats = home;
        self.away_stats = Record::new(
            overall.wins - home.wins,
            overall.draws - home.draws,
            overall.losses - home.losses,
        );

        Ok(self)
    }
}
