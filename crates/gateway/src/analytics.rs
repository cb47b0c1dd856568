use infra::models::{GameRow, StandingRow};

/// League-level figures derived from one standings table.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueOverview {
    pub teams: usize,
    /// Every game shows up once per participating team, so this is half the
    /// summed team games, rounded up.
    pub games_played: i64,
    pub total_goals: i64,
    pub avg_goals_per_game: Option<f64>,
    pub leader: Option<String>,
    pub best_goal_difference: Option<i64>,
    pub worst_goal_difference: Option<i64>,
    /// Points between first and second place.
    pub leader_margin: Option<i64>,
}

/// 1-based table position of `team` in rows already in standings order.
pub fn position(standings: &[StandingRow], team: &str) -> Option<usize> {
    standings
        .iter()
        .position(|row| row.team == team)
        .map(|index| index + 1)
}

impl LeagueOverview {
    /// Expects rows in standings order (see `ordering::sort_standings`).
    pub fn from_standings(rows: &[StandingRow]) -> Self {
        let team_games: i64 = rows.iter().map(|r| r.games).sum();
        let games_played = (team_games + 1) / 2;
        let total_goals: i64 = rows.iter().map(|r| r.goals_for).sum();

        let avg_goals_per_game = if games_played > 0 {
            Some(total_goals as f64 / games_played as f64)
        } else {
            None
        };

        let leader_margin = match rows {
            [first, second, ..] => Some(first.points - second.points),
            _ => None,
        };

        Self {
            teams: rows.len(),
            games_played,
            total_goals,
            avg_goals_per_game,
            leader: rows.first().map(|r| r.team.clone()),
            best_goal_difference: rows.iter().map(StandingRow::goal_difference).max(),
            worst_goal_difference: rows.iter().map(StandingRow::goal_difference).min(),
            leader_margin,
        }
    }
}

/// Attendance and scoring figures over a list of games.
///
/// Games without reported attendance are left out of the attendance figures
/// rather than counted as empty arenas, and games whose score cannot be read
/// are left out of the scoring figures.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub games: usize,
    pub games_with_attendance: usize,
    pub total_attendance: i64,
    pub avg_attendance: Option<f64>,
    pub max_attendance: Option<i64>,
    pub min_attendance: Option<i64>,
    pub scored_games: usize,
    pub unreadable_scores: usize,
    pub total_goals: u64,
    pub avg_goals_per_game: Option<f64>,
    pub highest_scoring: Option<GameRow>,
}

impl GameSummary {
    pub fn from_games(games: &[GameRow]) -> Self {
        let attendance: Vec<i64> = games.iter().filter_map(GameRow::attendance).collect();
        let total_attendance: i64 = attendance.iter().sum();
        let avg_attendance = if attendance.is_empty() {
            None
        } else {
            Some(total_attendance as f64 / attendance.len() as f64)
        };

        let scored: Vec<(&GameRow, u32)> = games
            .iter()
            .filter_map(|g| g.parsed_score().map(|s| (g, s.total())))
            .collect();
        let total_goals = scored
            .iter()
            .fold(0u64, |sum, &(_, goals)| sum.saturating_add(u64::from(goals)));
        let avg_goals_per_game = if scored.is_empty() {
            None
        } else {
            Some(total_goals as f64 / scored.len() as f64)
        };

        // First game wins ties, matching the order the games were listed in.
        let highest_scoring = scored
            .iter()
            .fold(None::<(&GameRow, u32)>, |best, &(game, goals)| match best {
                Some((_, top)) if top >= goals => best,
                _ => Some((game, goals)),
            })
            .map(|(game, _)| game.clone());

        Self {
            games: games.len(),
            games_with_attendance: attendance.len(),
            total_attendance,
            avg_attendance,
            max_attendance: attendance.iter().copied().max(),
            min_attendance: attendance.iter().copied().min(),
            scored_games: scored.len(),
            unreadable_scores: games.len() - scored.len(),
            total_goals,
            avg_goals_per_game,
            highest_scoring,
        }
    }
}
