pub mod analytics;
pub mod cache;
pub mod cached;
pub mod config;
pub mod error;
pub mod export;
pub mod ordering;
pub mod read_only;
pub mod service;

pub use cache::{CacheKey, TtlCache};
pub use cached::CachedGateway;
pub use config::{CacheTtl, GatewayConfig};
pub use error::{GatewayError, GatewayResult};
pub use service::{names_or_default, StatsGateway};
