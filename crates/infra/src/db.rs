use std::sync::Arc;

use async_trait::async_trait;
use neo4rs::{BoltList, BoltMap, BoltNull, BoltString, BoltType, ConfigBuilder, Graph};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{StoreError, StoreResult};

/// One projected row, keyed by the names in the statement's `RETURN` clause.
pub type Record = Map<String, Value>;

/// Shared handle the repos and the gateway hold on to.
pub type Db = Arc<dyn GraphStore>;

#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<ParamValue>),
    Map(Vec<(String, ParamValue)>),
}

impl ParamValue {
    /// Convert a JSON value, recursing into arrays and objects. `None` only
    /// for numbers that fit neither `i64` nor `f64`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(ParamValue::Null),
            Value::Bool(b) => Some(ParamValue::Bool(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(ParamValue::Int)
                .or_else(|| n.as_f64().map(ParamValue::Float)),
            Value::String(s) => Some(ParamValue::Str(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(ParamValue::from_json)
                .collect::<Option<Vec<_>>>()
                .map(ParamValue::List),
            Value::Object(fields) => fields
                .iter()
                .map(|(key, v)| ParamValue::from_json(v).map(|v| (key.clone(), v)))
                .collect::<Option<Vec<_>>>()
                .map(ParamValue::Map),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<ParamValue> for BoltType {
    fn from(value: ParamValue) -> Self {
        match value {
            ParamValue::Null => BoltType::Null(BoltNull),
            ParamValue::Bool(b) => b.into(),
            ParamValue::Int(i) => i.into(),
            ParamValue::Float(f) => f.into(),
            ParamValue::Str(s) => s.into(),
            ParamValue::List(items) => {
                let mut list = BoltList::with_capacity(items.len());
                for item in items {
                    list.push(item.into());
                }
                BoltType::List(list)
            }
            ParamValue::Map(fields) => {
                let mut map = BoltMap::with_capacity(fields.len());
                for (key, value) in fields {
                    map.put(BoltString::from(key), value.into());
                }
                BoltType::Map(map)
            }
        }
    }
}

/// A named Cypher statement with its bound parameters.
///
/// `name` identifies the gateway operation (used for logging, cache keys and
/// test doubles); `text` is what gets sent to the store.
#[derive(Debug, Clone)]
pub struct Statement {
    pub name: &'static str,
    pub text: String,
    pub params: Vec<(String, ParamValue)>,
}

impl Statement {
    pub fn new(name: &'static str, text: impl Into<String>) -> Self {
        Self {
            name,
            text: text.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.params.push((key.to_string(), value.into()));
        self
    }

    pub fn get_param(&self, key: &str) -> Option<&ParamValue> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

/// Read access to the property graph. Implementations run one statement per
/// call and return every row; they never retry.
#[async_trait]
pub trait GraphStore: Send + Sync {
    async fn fetch(&self, statement: Statement) -> StoreResult<Vec<Record>>;
}

/// Run a statement and decode each row into `T` by field name.
pub async fn fetch_as<T: DeserializeOwned>(
    db: &dyn GraphStore,
    statement: Statement,
) -> StoreResult<Vec<T>> {
    let name = statement.name;
    let text = statement.text.clone();
    let records = db.fetch(statement).await?;

    records
        .into_iter()
        .map(|record| {
            serde_json::from_value(Value::Object(record)).map_err(|e| StoreError::Decode {
                statement: name,
                query: text.clone(),
                message: e.to_string(),
            })
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_connections: usize,
    pub fetch_size: usize,
}

/// Bolt-protocol store backed by a pooled `neo4rs::Graph`.
#[derive(Clone)]
pub struct Neo4jStore {
    graph: Graph,
}

impl Neo4jStore {
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let bolt_config = ConfigBuilder::default()
            .uri(config.uri.as_str())
            .user(config.user.as_str())
            .password(config.password.as_str())
            .db(config.database.as_str())
            .max_connections(config.max_connections)
            .fetch_size(config.fetch_size)
            .build()
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let graph = Graph::connect(bolt_config)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        tracing::info!(
            "Connected to graph store at {} (max {} connections)",
            config.uri,
            config.max_connections
        );

        Ok(Self { graph })
    }
}

#[async_trait]
impl GraphStore for Neo4jStore {
    async fn fetch(&self, statement: Statement) -> StoreResult<Vec<Record>> {
        let Statement { name, text, params } = statement;

        let mut query = neo4rs::query(&text);
        for (key, value) in params {
            query = query.param(&key, BoltType::from(value));
        }

        let mut stream = self
            .graph
            .execute(query)
            .await
            .map_err(|e| classify(&text, e))?;

        let mut rows = Vec::new();
        while let Some(row) = stream.next().await.map_err(|e| classify(&text, e))? {
            let record: Record = row.to().map_err(|e| StoreError::Decode {
                statement: name,
                query: text.clone(),
                message: e.to_string(),
            })?;
            rows.push(record);
        }

        tracing::debug!(statement = name, rows = rows.len(), "statement executed");
        Ok(rows)
    }
}

fn classify(query: &str, error: neo4rs::Error) -> StoreError {
    match &error {
        neo4rs::Error::IOError { .. }
        | neo4rs::Error::ConnectionError
        | neo4rs::Error::AuthenticationError(_) => StoreError::Connection(error.to_string()),
        _ => StoreError::Query {
            query: query.to_string(),
            message: error.to_string(),
        },
    }
}
