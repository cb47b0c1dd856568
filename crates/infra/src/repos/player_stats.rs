use crate::{
    db::{fetch_as, GraphStore, Statement},
    error::StoreResult,
    models::{AssistRow, PenaltyRow, ScorerRow},
};

// `games` is the number of games the player's team played in the selected
// competition and season.

pub async fn top_scorers(
    db: &dyn GraphStore,
    competition: &str,
    season: &str,
    limit: i64,
) -> StoreResult<Vec<ScorerRow>> {
    fetch_as(
        db,
        Statement::new(
            "top_scorers",
            r#"
            MATCH (p:Player)-[:SCORED]->(goal:Goal)-[:IN_GAME]->(g:Game)-[:PART_OF]->(s:Season {name: $season})
            MATCH (s)-[:PART_OF]->(c:Competition {name: $competition})
            MATCH (p)-[:PLAYS_FOR]->(t:Team)
            WITH p, t, s, count(DISTINCT goal) AS goals
            OPTIONAL MATCH (t)-[:PLAYED]->(tg:Game)-[:PART_OF]->(s)
            WITH p, t, goals, count(DISTINCT tg) AS games
            RETURN p.firstName + ' ' + p.lastName AS player,
                   t.name AS team,
                   goals,
                   games
            ORDER BY goals DESC, games ASC, player ASC
            LIMIT $limit
            "#,
        )
        .param("competition", competition)
        .param("season", season)
        .param("limit", limit),
    )
    .await
}

pub async fn top_assists(
    db: &dyn GraphStore,
    competition: &str,
    season: &str,
    limit: i64,
) -> StoreResult<Vec<AssistRow>> {
    fetch_as(
        db,
        Statement::new(
            "top_assists",
            r#"
            MATCH (p:Player)-[:ASSISTED_IN]->(goal:Goal)-[:IN_GAME]->(g:Game)-[:PART_OF]->(s:Season {name: $season})
            MATCH (s)-[:PART_OF]->(c:Competition {name: $competition})
            MATCH (p)-[:PLAYS_FOR]->(t:Team)
            WITH p, t, s, count(DISTINCT goal) AS assists
            OPTIONAL MATCH (t)-[:PLAYED]->(tg:Game)-[:PART_OF]->(s)
            WITH p, t, assists, count(DISTINCT tg) AS games
            RETURN p.firstName + ' ' + p.lastName AS player,
                   t.name AS team,
                   assists,
                   games
            ORDER BY assists DESC, games ASC, player ASC
            LIMIT $limit
            "#,
        )
        .param("competition", competition)
        .param("season", season)
        .param("limit", limit),
    )
    .await
}

pub async fn penalty_leaders(
    db: &dyn GraphStore,
    competition: &str,
    season: &str,
    limit: i64,
) -> StoreResult<Vec<PenaltyRow>> {
    fetch_as(
        db,
        Statement::new(
            "penalty_leaders",
            r#"
            MATCH (p:Player)-[:COMMITTED]->(pen:Penalty)-[:IN_GAME]->(g:Game)-[:PART_OF]->(s:Season {name: $season})
            MATCH (s)-[:PART_OF]->(c:Competition {name: $competition})
            MATCH (p)-[:PLAYS_FOR]->(t:Team)
            WITH p, t, s,
                 count(DISTINCT pen) AS penalties,
                 sum(coalesce(pen.minutes, 0)) AS penaltyMinutes
            OPTIONAL MATCH (t)-[:PLAYED]->(tg:Game)-[:PART_OF]->(s)
            WITH p, t, penalties, penaltyMinutes, count(DISTINCT tg) AS games
            RETURN p.firstName + ' ' + p.lastName AS player,
                   t.name AS team,
                   penalties,
                   penaltyMinutes,
                   games
            ORDER BY penalties DESC, penaltyMinutes DESC, games ASC, player ASC
            LIMIT $limit
            "#,
        )
        .param("competition", competition)
        .param("season", season)
        .param("limit", limit),
    )
    .await
}
