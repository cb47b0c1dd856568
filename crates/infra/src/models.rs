use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Field names are serialized in camelCase so CSV headers and table columns
// match the projected Cypher aliases.

/// Column names of a row type, in serialization order. Written as the CSV
/// header even when there are no rows.
pub trait CsvRow {
    const HEADERS: &'static [&'static str];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRow {
    pub name: String,
    #[serde(default)]
    pub short_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    pub team: String,
    pub games: i64,
    pub wins: i64,
    pub losses: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub points: i64,
}

impl CsvRow for TeamRow {
    const HEADERS: &'static [&'static str] = &["name", "shortName"];
}

impl CsvRow for StandingRow {
    const HEADERS: &'static [&'static str] = &[
        "team",
        "games",
        "wins",
        "losses",
        "goalsFor",
        "goalsAgainst",
        "points",
    ];
}

impl StandingRow {
    pub fn goal_difference(&self) -> i64 {
        self.goals_for - self.goals_against
    }

    /// `None` when the team has no decided games.
    pub fn win_pct(&self) -> Option<f64> {
        ratio(self.wins, self.games)
    }

    pub fn points_per_game(&self) -> Option<f64> {
        ratio(self.points, self.games)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorerRow {
    pub player: String,
    pub team: String,
    pub goals: i64,
    pub games: i64,
}

impl CsvRow for ScorerRow {
    const HEADERS: &'static [&'static str] = &["player", "team", "goals", "games"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistRow {
    pub player: String,
    pub team: String,
    pub assists: i64,
    pub games: i64,
}

impl CsvRow for AssistRow {
    const HEADERS: &'static [&'static str] = &["player", "team", "assists", "games"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenaltyRow {
    pub player: String,
    pub team: String,
    pub penalties: i64,
    pub penalty_minutes: i64,
    pub games: i64,
}

impl CsvRow for PenaltyRow {
    const HEADERS: &'static [&'static str] =
        &["player", "team", "penalties", "penaltyMinutes", "games"];
}

/// A game as listed in recent results. Any field may be missing on the
/// node; a missing field is unknown, never a reason to drop the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRow {
    pub date: Option<String>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub score: Option<String>,
    pub spectators: Option<i64>,
}

impl CsvRow for GameRow {
    const HEADERS: &'static [&'static str] =
        &["date", "homeTeam", "awayTeam", "score", "spectators"];
}

impl GameRow {
    pub fn parsed_score(&self) -> Option<Score> {
        self.score.as_deref().and_then(Score::parse)
    }

    /// Known attendance only: null and zero both mean "not reported".
    pub fn attendance(&self) -> Option<i64> {
        self.spectators.filter(|&s| s > 0)
    }

    pub fn played_on(&self) -> Option<NaiveDate> {
        let day = self.date.as_deref()?.get(..10)?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStatsRow {
    pub games: i64,
    pub wins: i64,
    pub losses: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub points: i64,
}

impl CsvRow for TeamStatsRow {
    const HEADERS: &'static [&'static str] =
        &["games", "wins", "losses", "goalsFor", "goalsAgainst", "points"];
}

impl TeamStatsRow {
    /// A zero record is how "no data for this team and season" is reported.
    pub fn has_games(&self) -> bool {
        self.games > 0
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for - self.goals_against
    }

    pub fn win_pct(&self) -> Option<f64> {
        ratio(self.wins, self.games)
    }

    pub fn points_per_game(&self) -> Option<f64> {
        ratio(self.points, self.games)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaEntryRow {
    pub node_label: String,
    pub properties: Vec<String>,
}

/// One game's result from a team's point of view, most recent first.
/// `result` is the raw `PLAYED.result` value (`W`, `L`, or whatever else
/// the data holds); `None` when it was never recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRow {
    pub date: Option<String>,
    pub result: Option<String>,
}

impl FormRow {
    pub fn is_win(&self) -> bool {
        self.result.as_deref() == Some("W")
    }
}

impl CsvRow for FormRow {
    const HEADERS: &'static [&'static str] = &["date", "result"];
}

/// Numeric reading of a "home-away" score string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub home: u16,
    pub away: u16,
}

impl Score {
    /// Accepts exactly two unsigned integers around a single hyphen, with
    /// optional whitespace. Anything else, including goal counts that do not
    /// fit in a `u16`, is treated as malformed.
    pub fn parse(raw: &str) -> Option<Self> {
        let (home, away) = raw.trim().split_once('-')?;
        let home = home.trim();
        let away = away.trim();

        if home.is_empty() || away.is_empty() {
            return None;
        }
        if !home.bytes().all(|b| b.is_ascii_digit()) || !away.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        Some(Self {
            home: home.parse().ok()?,
            away: away.parse().ok()?,
        })
    }

    pub fn total(&self) -> u32 {
        u32::from(self.home) + u32::from(self.away)
    }
}

fn ratio(numerator: i64, games: i64) -> Option<f64> {
    if games > 0 {
        Some(numerator as f64 / games as f64)
    } else {
        None
    }
}
