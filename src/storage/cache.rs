//! Redis cache store

use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use super::error::{Result, StoreError};

/// Redis-backed cache. The connection manager is established once at
/// startup; if that fails the handle stays disconnected and every operation
/// reports `Unavailable` until restart.
pub struct CacheStore {
    conn: Option<ConnectionManager>,
}

impl CacheStore {
    pub async fn connect(redis_url: &str) -> Result<Self> {
        let client = redis::Client::open(redis_url)?;
        let conn = ConnectionManager::new(client).await?;
        Ok(Self { conn: Some(conn) })
    }

    /// A handle with no live connection.
    pub fn disconnected() -> Self {
        Self { conn: None }
    }

    fn conn(&self) -> Result<ConnectionManager> {
        self.conn.clone().ok_or(StoreError::Unavailable("redis"))
    }

    /// SET with expiry, in seconds.
    pub async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()> {
        let mut conn = self.conn()?;
        redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EX")
            .arg(ttl_secs)
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }

    /// GET; `None` for missing or expired keys.
    pub async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn()?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disconnected_store_reports_unavailable() {
        let cache = CacheStore::disconnected();

        let err = cache.get("item:x").await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable("redis")));

        let err = cache.set("item:x", "v", 60).await.unwrap_err();
        assert_eq!(err.to_string(), "redis not connected");
    }
}
