use std::collections::HashMap;

use async_trait::async_trait;
use infra::{GraphStore, Record, Statement, StoreError, StoreResult};
use parking_lot::Mutex;
use serde_json::Value;

/// In-memory store that answers by statement name and remembers every
/// statement it was asked to run.
#[derive(Default)]
pub struct FakeStore {
    responses: HashMap<&'static str, Vec<Record>>,
    failure: Option<StoreError>,
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

    pub fn failing(error: StoreError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn statements(&self) -> Vec<Statement> {
        self.seen.lock().clone()
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

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        Ok(self.responses.get(name).cloned().unwrap_or_default())
    }
}
