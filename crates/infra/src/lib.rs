pub mod db;
pub mod error;
pub mod models;
pub mod repos;

pub use db::{Db, GraphStore, Neo4jStore, ParamValue, Record, Statement, StoreConfig};
pub use error::{StoreError, StoreResult};
