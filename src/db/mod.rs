mod cached;
pub mod memory;
pub mod postgres;
pub mod redis;
mod store;

pub use cached::CachedStore;
pub use memory::InMemoryStore;
pub use postgres::{create_pool, PgStore};
pub use self::redis::create_redis_client;
pub use self::redis::Cache;
pub use self::redis::CacheKey;
pub use store::DataStore;
#[cfg(test)]
pub use store::MockDataStore;
