use serde::Deserialize;

use crate::{
    db::{fetch_as, GraphStore, Statement},
    error::StoreResult,
    models::TeamRow,
};

#[derive(Deserialize)]
struct NameRow {
    name: String,
}

pub async fn list_competitions(db: &dyn GraphStore) -> StoreResult<Vec<String>> {
    let rows: Vec<NameRow> = fetch_as(
        db,
        Statement::new(
            "list_competitions",
            r#"
            MATCH (c:Competition)
            WHERE c.name IS NOT NULL
            RETURN DISTINCT c.name AS name
            ORDER BY name ASC
            "#,
        ),
    )
    .await?;

    Ok(rows.into_iter().map(|r| r.name).collect())
}

/// Most recent season first.
pub async fn list_seasons(db: &dyn GraphStore) -> StoreResult<Vec<String>> {
    let rows: Vec<NameRow> = fetch_as(
        db,
        Statement::new(
            "list_seasons",
            r#"
            MATCH (s:Season)
            WHERE s.name IS NOT NULL
            RETURN DISTINCT s.name AS name
            ORDER BY name DESC
            "#,
        ),
    )
    .await?;

    Ok(rows.into_iter().map(|r| r.name).collect())
}

pub async fn list_teams(db: &dyn GraphStore) -> StoreResult<Vec<TeamRow>> {
    fetch_as(
        db,
        Statement::new(
            "list_teams",
            r#"
            MATCH (t:Team)
            WHERE t.name IS NOT NULL
            RETURN t.name AS name, coalesce(t.shortName, '') AS shortName
            ORDER BY name ASC
            "#,
        ),
    )
    .await
}
