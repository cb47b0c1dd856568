use crate::{
    db::{GraphStore, ParamValue, Record, Statement},
    error::StoreResult,
};

/// Runs caller-supplied Cypher as-is. Read-only enforcement happens before
/// this point.
pub async fn run(
    db: &dyn GraphStore,
    query_text: &str,
    params: Vec<(String, ParamValue)>,
) -> StoreResult<Vec<Record>> {
    let statement = Statement {
        name: "ad_hoc",
        text: query_text.to_string(),
        params,
    };

    db.fetch(statement).await
}
