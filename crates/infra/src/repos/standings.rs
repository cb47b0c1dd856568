use crate::{
    db::{fetch_as, GraphStore, Statement},
    error::StoreResult,
    models::StandingRow,
};

/// Only games with a decided result (`W` or `L`) are aggregated, so every
/// column covers the same games and `games == wins + losses` per row.
pub async fn get_standings(
    db: &dyn GraphStore,
    competition: &str,
    season: &str,
) -> StoreResult<Vec<StandingRow>> {
    fetch_as(
        db,
        Statement::new(
            "standings",
            r#"
            MATCH (t:Team)-[rel:PLAYED]->(g:Game)-[:PART_OF]->(s:Season {name: $season})
            MATCH (s)-[:PART_OF]->(c:Competition {name: $competition})
            WHERE rel.result IN ['W', 'L']
            WITH t,
                 sum(CASE WHEN rel.result = 'W' THEN 1 ELSE 0 END) AS wins,
                 sum(CASE WHEN rel.result = 'L' THEN 1 ELSE 0 END) AS losses,
                 sum(coalesce(rel.goalsFor, 0)) AS goalsFor,
                 sum(coalesce(rel.goalsAgainst, 0)) AS goalsAgainst,
                 sum(coalesce(rel.points, 0)) AS points
            RETURN t.name AS team,
                   wins + losses AS games,
                   wins,
                   losses,
                   goalsFor,
                   goalsAgainst,
                   points
            ORDER BY points DESC, goalsFor DESC, goalsAgainst ASC, team ASC
            "#,
        )
        .param("competition", competition)
        .param("season", season),
    )
    .await
}
