use crate::{
    db::{fetch_as, GraphStore, Statement},
    error::StoreResult,
    models::GameRow,
};

pub async fn list_recent(
    db: &dyn GraphStore,
    competition: &str,
    season: &str,
    limit: i64,
) -> StoreResult<Vec<GameRow>> {
    fetch_as(
        db,
        Statement::new(
            "recent_games",
            r#"
            MATCH (g:Game)-[:PART_OF]->(s:Season {name: $season})
            MATCH (s)-[:PART_OF]->(c:Competition {name: $competition})
            RETURN toString(g.date) AS date,
                   g.homeTeam AS homeTeam,
                   g.awayTeam AS awayTeam,
                   g.score AS score,
                   g.spectators AS spectators
            ORDER BY date DESC
            LIMIT $limit
            "#,
        )
        .param("competition", competition)
        .param("season", season)
        .param("limit", limit),
    )
    .await
}
