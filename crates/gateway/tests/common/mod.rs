use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use gateway::StatsGateway;
use infra::{GraphStore, Record, Statement, StoreError, StoreResult};
use parking_lot::Mutex;
use serde_json::Value;

/// In-memory store answering by statement name. Failures can be switched
/// on and off between calls; every statement run is recorded.
#[derive(Default)]
pub struct FakeStore {
    responses: HashMap<&'static str, Vec<Record>>,
    failure: Mutex<Option<StoreError>>,
    seen: Mutex<Vec<Statement>>,
}

#[allow(dead_code)]
impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(mut self, statement: &'static str, rows: Vec<Value>) -> Self {
        let records = rows
            .into_iter()
            .map(|row| match row {
                Value::Object(map) => map,
                other => panic!("fixture rows must be objects, got {other}"),
            })
            .collect();
        self.responses.insert(statement, records);
        self
    }

    pub fn fail_with(&self, error: Option<StoreError>) {
        *self.failure.lock() = error;
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().len()
    }

    pub fn calls_to(&self, statement: &str) -> usize {
        self.seen
            .lock()
            .iter()
            .filter(|s| s.name == statement)
            .count()
    }

    pub fn last_statement(&self) -> Statement {
        self.seen
            .lock()
            .last()
            .cloned()
            .expect("no statement was run")
    }
}

#[async_trait]
impl GraphStore for FakeStore {
    async fn fetch(&self, statement: Statement) -> StoreResult<Vec<Record>> {
        let name = statement.name;
        self.seen.lock().push(statement);

        if let Some(error) = self.failure.lock().clone() {
            return Err(error);
        }

        Ok(self.responses.get(name).cloned().unwrap_or_default())
    }
}

#[allow(dead_code)]
pub fn gateway_over(store: FakeStore) -> (StatsGateway, Arc<FakeStore>) {
    let store = Arc::new(store);
    (StatsGateway::new(store.clone()), store)
}

/// A small SHL table, deliberately not in standings order.
#[allow(dead_code)]
pub fn shl_standings() -> Vec<Value> {
    vec![
        serde_json::json!({"team": "Luleå HF", "games": 25, "wins": 14, "losses": 11, "goalsFor": 128, "goalsAgainst": 125, "points": 42}),
        serde_json::json!({"team": "Frölunda HC", "games": 25, "wins": 18, "losses": 7, "goalsFor": 156, "goalsAgainst": 98, "points": 54}),
        serde_json::json!({"team": "Färjestad BK", "games": 24, "wins": 15, "losses": 9, "goalsFor": 132, "goalsAgainst": 118, "points": 45}),
        serde_json::json!({"team": "Växjö Lakers HC", "games": 24, "wins": 15, "losses": 9, "goalsFor": 139, "goalsAgainst": 112, "points": 45}),
        serde_json::json!({"team": "Brynäs IF", "games": 24, "wins": 15, "losses": 9, "goalsFor": 139, "goalsAgainst": 112, "points": 45}),
    ]
}

#[allow(dead_code)]
pub fn recent_games() -> Vec<Value> {
    vec![
        serde_json::json!({"date": "2024-12-08", "homeTeam": "Växjö Lakers HC", "awayTeam": "Brynäs IF", "score": "5-3", "spectators": 11200}),
        serde_json::json!({"date": "2024-12-10", "homeTeam": "Frölunda HC", "awayTeam": "Linköping HC", "score": "4-2", "spectators": 12500}),
        serde_json::json!({"date": "2024-12-09", "homeTeam": "Skellefteå AIK", "awayTeam": "HV 71", "score": "3-1", "spectators": null}),
    ]
}
