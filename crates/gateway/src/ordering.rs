//! Result ordering re-applied on the decoded rows, so the documented order
//! holds whatever collation the store used.

use std::cmp::Reverse;

use infra::models::{AssistRow, FormRow, GameRow, PenaltyRow, ScorerRow, StandingRow};

/// Points desc, goals for desc, goals against asc, team name asc.
pub fn sort_standings(rows: &mut [StandingRow]) {
    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goals_for.cmp(&a.goals_for))
            .then_with(|| a.goals_against.cmp(&b.goals_against))
            .then_with(|| a.team.cmp(&b.team))
    });
}

/// Goals desc; on ties the player with fewer games ranks first.
pub fn sort_scorers(rows: &mut [ScorerRow]) {
    rows.sort_by_key(|r| (Reverse(r.goals), r.games, r.player.clone()));
}

pub fn sort_assists(rows: &mut [AssistRow]) {
    rows.sort_by_key(|r| (Reverse(r.assists), r.games, r.player.clone()));
}

pub fn sort_penalties(rows: &mut [PenaltyRow]) {
    rows.sort_by_key(|r| {
        (
            Reverse(r.penalties),
            Reverse(r.penalty_minutes),
            r.games,
            r.player.clone(),
        )
    });
}

/// Most recent first. Dates are ISO strings, so lexical order is
/// chronological; undated games go last and ties keep the store's order.
pub fn sort_games(rows: &mut [GameRow]) {
    rows.sort_by(|a, b| b.date.cmp(&a.date));
}

pub fn sort_form(rows: &mut [FormRow]) {
    rows.sort_by(|a, b| b.date.cmp(&a.date));
}
