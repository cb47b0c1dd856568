use crate::{
    db::{fetch_as, GraphStore, Statement},
    error::StoreResult,
    models::SchemaEntryRow,
};

/// Node labels with the property keys seen on them.
pub async fn get_schema(db: &dyn GraphStore) -> StoreResult<Vec<SchemaEntryRow>> {
    fetch_as(
        db,
        Statement::new(
            "schema",
            r#"
            MATCH (n)
            UNWIND labels(n) AS nodeLabel
            UNWIND keys(n) AS property
            WITH nodeLabel, collect(DISTINCT property) AS properties
            RETURN nodeLabel, properties
            ORDER BY nodeLabel ASC
            "#,
        ),
    )
    .await
}

pub async fn ping(db: &dyn GraphStore) -> StoreResult<()> {
    db.fetch(Statement::new("ping", "RETURN 1 AS ok")).await?;
    Ok(())
}
