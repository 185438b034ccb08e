//! SQLite persistence for snippets.
//!
//! All queries are parameterized point lookups or small result sets
//! against the single `snippets` table. Expired rows are filtered on
//! every read; nothing updates or deletes a row.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::error::AppError;

/// Maximum number of rows returned by [`SnippetStore::latest`].
const LATEST_LIMIT: i64 = 10;

/// A row from the `snippets` table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Snippet {
    /// Auto-assigned row id, unique and immutable.
    pub id: i64,
    /// Short title.
    pub title: String,
    /// Snippet body.
    pub content: String,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Expiry timestamp, always later than `created`.
    pub expires: DateTime<Utc>,
}

/// Data-access handle over the connection pool.
///
/// Cheap to clone; every clone shares the same pool.
#[derive(Debug, Clone)]
pub struct SnippetStore {
    pool: SqlitePool,
}

impl SnippetStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `snippets` table and its index if missing.
    /// Idempotent; runs once at startup.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS snippets (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 title TEXT NOT NULL,
                 content TEXT NOT NULL,
                 created TEXT NOT NULL,
                 expires TEXT NOT NULL
             )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_snippets_created ON snippets (created)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Cheap connectivity check used by the health endpoint.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Insert a new snippet expiring `expires_days` days from now.
    ///
    /// Returns the id assigned by the database.
    pub async fn insert(
        &self,
        title: &str,
        content: &str,
        expires_days: i64,
    ) -> Result<i64, AppError> {
        let created = Utc::now();
        let expires = created + Duration::days(expires_days);

        let result = sqlx::query(
            "INSERT INTO snippets (title, content, created, expires) VALUES (?, ?, ?, ?)",
        )
        .bind(title)
        .bind(content)
        .bind(created)
        .bind(expires)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Fetch one unexpired snippet by id.
    ///
    /// A missing or already-expired row yields [`AppError::NotFound`],
    /// which callers map to a 404 rather than a 500.
    pub async fn get(&self, id: i64) -> Result<Snippet, AppError> {
        let row = sqlx::query_as::<_, Snippet>(
            "SELECT id, title, content, created, expires FROM snippets \
             WHERE id = ? AND expires > ?",
        )
        .bind(id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or_else(|| AppError::NotFound(format!("snippet {id}")))
    }

    /// Fetch the newest unexpired snippets, at most [`LATEST_LIMIT`].
    ///
    /// Rows created in the same instant come back in descending id
    /// order, so the ordering is deterministic.
    pub async fn latest(&self) -> Result<Vec<Snippet>, AppError> {
        let rows = sqlx::query_as::<_, Snippet>(
            "SELECT id, title, content, created, expires FROM snippets \
             WHERE expires > ? ORDER BY created DESC, id DESC LIMIT ?",
        )
        .bind(Utc::now())
        .bind(LATEST_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    /// One connection only: every new in-memory SQLite connection
    /// would otherwise see a separate empty database.
    async fn test_store() -> SnippetStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let store = SnippetStore::new(pool);
        store.ensure_schema().await.unwrap();
        store
    }

    /// Insert a row with explicit timestamps, bypassing `insert`.
    async fn insert_at(
        store: &SnippetStore,
        title: &str,
        created: DateTime<Utc>,
        expires: DateTime<Utc>,
    ) -> i64 {
        sqlx::query("INSERT INTO snippets (title, content, created, expires) VALUES (?, ?, ?, ?)")
            .bind(title)
            .bind("body")
            .bind(created)
            .bind(expires)
            .execute(&store.pool)
            .await
            .unwrap()
            .last_insert_rowid()
    }

    #[tokio::test]
    async fn insert_then_get_round_trips() {
        let store = test_store().await;

        let id = store.insert("First post", "hello world", 7).await.unwrap();
        assert!(id >= 1);

        let snippet = store.get(id).await.unwrap();
        assert_eq!(snippet.id, id);
        assert_eq!(snippet.title, "First post");
        assert_eq!(snippet.content, "hello world");
        assert!(snippet.expires > snippet.created);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let store = test_store().await;

        let err = store.get(42).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn get_expired_is_not_found() {
        let store = test_store().await;

        let created = Utc::now() - Duration::days(2);
        let expires = Utc::now() - Duration::days(1);
        let id = insert_at(&store, "stale", created, expires).await;

        let err = store.get(id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let store = test_store().await;
        store.ensure_schema().await.unwrap();
        store.ping().await.unwrap();
    }

    #[tokio::test]
    async fn latest_on_empty_table_is_empty() {
        let store = test_store().await;
        assert!(store.latest().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn latest_caps_at_ten_newest_first() {
        let store = test_store().await;

        let base = Utc::now() - Duration::hours(1);
        let expires = Utc::now() + Duration::days(1);
        for i in 0..12 {
            let title = format!("snippet {i}");
            insert_at(&store, &title, base + Duration::minutes(i), expires).await;
        }

        let latest = store.latest().await.unwrap();
        assert_eq!(latest.len(), 10);
        assert_eq!(latest[0].title, "snippet 11");
        for pair in latest.windows(2) {
            assert!(pair[0].created >= pair[1].created);
        }
        for snippet in &latest {
            assert!(snippet.expires > Utc::now());
        }
    }

    #[tokio::test]
    async fn latest_skips_expired_rows() {
        let store = test_store().await;

        let now = Utc::now();
        insert_at(&store, "gone", now - Duration::days(2), now - Duration::days(1)).await;
        let live_id = insert_at(&store, "live", now, now + Duration::days(1)).await;

        let latest = store.latest().await.unwrap();
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].id, live_id);
    }
}
