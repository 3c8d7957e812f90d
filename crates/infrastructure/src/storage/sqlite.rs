use async_trait::async_trait;
use bytes::Bytes;
use offline_agent_application::ports::{CacheStorage, CacheStore};
use offline_agent_domain::{AgentError, FetchRequest, FetchResponse, ResponseKind};
use sqlx::{Row, SqlitePool};
use std::sync::Arc;
use tracing::debug;

/// SQLite-backed cache storage.
///
/// One `cache_stores` row per named store, one `cache_entries` row per cached
/// response. Concurrency safety comes from SQLite itself (WAL journal, upsert
/// writes); the adapter holds no locks.
pub struct SqliteCacheStorage {
    pool: SqlitePool,
}

impl SqliteCacheStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CacheStorage for SqliteCacheStorage {
    async fn open(&self, name: &str) -> Result<Arc<dyn CacheStore>, AgentError> {
        sqlx::query("INSERT OR IGNORE INTO cache_stores (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| AgentError::cache_store(name, e))?;

        Ok(Arc::new(SqliteCacheStore {
            pool: self.pool.clone(),
            name: name.to_string(),
        }))
    }

    async fn store_names(&self) -> Result<Vec<String>, AgentError> {
        let rows = sqlx::query("SELECT name FROM cache_stores ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AgentError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(|row| row.get::<String, _>("name")).collect())
    }

    async fn delete(&self, name: &str) -> Result<bool, AgentError> {
        sqlx::query("DELETE FROM cache_entries WHERE store_name = ?")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| AgentError::cache_store(name, e))?;

        let result = sqlx::query("DELETE FROM cache_stores WHERE name = ?")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| AgentError::cache_store(name, e))?;

        Ok(result.rows_affected() > 0)
    }
}

pub struct SqliteCacheStore {
    pool: SqlitePool,
    name: String,
}

#[async_trait]
impl CacheStore for SqliteCacheStore {
    async fn lookup(&self, request: &FetchRequest) -> Result<Option<FetchResponse>, AgentError> {
        let row = sqlx::query(
            "SELECT status, headers, body, kind, redirected \
             FROM cache_entries WHERE store_name = ? AND cache_key = ?",
        )
        .bind(&self.name)
        .bind(request.cache_key())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AgentError::cache_store(&self.name, e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let headers: Vec<(String, String)> =
            serde_json::from_str(row.get::<&str, _>("headers"))
                .map_err(|e| AgentError::cache_store(&self.name, e))?;
        let kind: ResponseKind = row
            .get::<&str, _>("kind")
            .parse()
            .map_err(|e: String| AgentError::cache_store(&self.name, e))?;

        Ok(Some(FetchResponse {
            status: row.get::<i64, _>("status") as u16,
            headers,
            body: Bytes::from(row.get::<Vec<u8>, _>("body")),
            kind,
            redirected: row.get::<i64, _>("redirected") != 0,
        }))
    }

    async fn put(
        &self,
        request: &FetchRequest,
        response: &FetchResponse,
    ) -> Result<(), AgentError> {
        let headers = serde_json::to_string(&response.headers)
            .map_err(|e| AgentError::cache_store(&self.name, e))?;

        sqlx::query(
            "INSERT OR REPLACE INTO cache_entries \
             (store_name, cache_key, status, headers, body, kind, redirected) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&self.name)
        .bind(request.cache_key())
        .bind(response.status as i64)
        .bind(headers)
        .bind(response.body.as_ref())
        .bind(response.kind.as_str())
        .bind(response.redirected as i64)
        .execute(&self.pool)
        .await
        .map_err(|e| AgentError::cache_store(&self.name, e))?;

        debug!(cache = %self.name, key = %request.cache_key(), "Entry stored");
        Ok(())
    }
}
