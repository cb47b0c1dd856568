use crate::{
    db::{fetch_as, GraphStore, Statement},
    error::StoreResult,
    models::{FormRow, TeamStatsRow},
};

/// Aggregates for one team over its decided games. A team without games in
/// the season comes back as `TeamStatsRow::default()`.
pub async fn get_team_stats(
    db: &dyn GraphStore,
    team_name: &str,
    competition: &str,
    season: &str,
) -> StoreResult<TeamStatsRow> {
    let rows: Vec<TeamStatsRow> = fetch_as(
        db,
        Statement::new(
            "team_stats",
            r#"
            MATCH (t:Team {name: $team_name})-[rel:PLAYED]->(g:Game)-[:PART_OF]->(s:Season {name: $season})
            MATCH (s)-[:PART_OF]->(c:Competition {name: $competition})
            WHERE rel.result IN ['W', 'L']
            WITH sum(CASE WHEN rel.result = 'W' THEN 1 ELSE 0 END) AS wins,
                 sum(CASE WHEN rel.result = 'L' THEN 1 ELSE 0 END) AS losses,
                 sum(coalesce(rel.goalsFor, 0)) AS goalsFor,
                 sum(coalesce(rel.goalsAgainst, 0)) AS goalsAgainst,
                 sum(coalesce(rel.points, 0)) AS points
            RETURN wins + losses AS games, wins, losses, goalsFor, goalsAgainst, points
            "#,
        )
        .param("team_name", team_name)
        .param("competition", competition)
        .param("season", season),
    )
    .await?;

    Ok(rows.into_iter().next().unwrap_or_default())
}

/// The team's latest results in the season, most recent first.
pub async fn recent_form(
    db: &dyn GraphStore,
    team_name: &str,
    competition: &str,
    season: &str,
    limit: i64,
) -> StoreResult<Vec<FormRow>> {
    fetch_as(
        db,
        Statement::new(
            "recent_form",
            r#"
            MATCH (t:Team {name: $team_name})-[rel:PLAYED]->(g:Game)-[:PART_OF]->(s:Season {name: $season})
            MATCH (s)-[:PART_OF]->(c:Competition {name: $competition})
            RETURN toString(g.date) AS date, rel.result AS result
            ORDER BY date DESC
            LIMIT $limit
            "#,
        )
        .param("team_name", team_name)
        .param("competition", competition)
        .param("season", season)
        .param("limit", limit),
    )
    .await
}
