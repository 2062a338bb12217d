use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::SheetConfig;

pub const SHEET_ID_KEY: &str = "sheet_id";
pub const ACCESS_KEY_KEY: &str = "access_key";
pub const RANGE_KEY: &str = "range";

/// Persists the spreadsheet access settings between sessions.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    async fn load(&self) -> Result<SheetConfig, sqlx::Error>;
    async fn save(&self, config: &SheetConfig) -> Result<(), sqlx::Error>;
}

pub struct SqliteConfigStore {
    db: SqlitePool,
    defaults: SheetConfig,
}

impl SqliteConfigStore {
    /// `defaults` fill in any key that was never saved.
    pub fn new(db: SqlitePool, defaults: SheetConfig) -> Self {
        Self { db, defaults }
    }

    async fn get(&self, key: &str) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT value FROM settings WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.db)
            .await
    }
}

#[async_trait]
impl ConfigStore for SqliteConfigStore {
    async fn load(&self) -> Result<SheetConfig, sqlx::Error> {
        let sheet_id = self.get(SHEET_ID_KEY).await?;
        let access_key = self.get(ACCESS_KEY_KEY).await?;
        let range = self.get(RANGE_KEY).await?;

        Ok(SheetConfig {
            sheet_id: sheet_id.unwrap_or_else(|| self.defaults.sheet_id.clone()),
            access_key: access_key.unwrap_or_else(|| self.defaults.access_key.clone()),
            range: range.unwrap_or_else(|| self.defaults.range.clone()),
        })
    }

    async fn save(&self, config: &SheetConfig) -> Result<(), sqlx::Error> {
        let now = Utc::now().to_rfc3339();
        let mut tx = self.db.begin().await?;

        for (key, value) in [
            (SHEET_ID_KEY, &config.sheet_id),
            (ACCESS_KEY_KEY, &config.access_key),
            (RANGE_KEY, &config.range),
        ] {
            sqlx::query(
                r#"
                INSERT INTO settings (key, value, updated_at)
                VALUES (?1, ?2, ?3)
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
            )
            .bind(key)
            .bind(value)
            .bind(&now)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await
    }
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;

    async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create database");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");
        pool
    }

    fn defaults() -> SheetConfig {
        SheetConfig {
            sheet_id: String::new(),
            access_key: String::new(),
            range: "Sheet1!A1:C20".to_string(),
        }
    }

    #[tokio::test]
    async fn load_without_saved_values_returns_defaults() {
        let store = SqliteConfigStore::new(memory_pool().await, defaults());
        assert_eq!(store.load().await.unwrap(), defaults());
    }

    #[tokio::test]
    async fn saved_values_survive_a_new_store() {
        let pool = memory_pool().await;
        let saved = SheetConfig {
            sheet_id: "1AbC".to_string(),
            access_key: "key-123".to_string(),
            range: "Prices!A2:C9".to_string(),
        };

        SqliteConfigStore::new(pool.clone(), defaults())
            .save(&saved)
            .await
            .unwrap();

        let reopened = SqliteConfigStore::new(pool, defaults());
        assert_eq!(reopened.load().await.unwrap(), saved);
    }

    #[tokio::test]
    async fn saving_twice_overwrites() {
        let store = SqliteConfigStore::new(memory_pool().await, defaults());
        let mut config = SheetConfig {
            sheet_id: "first".to_string(),
            access_key: "k".to_string(),
            range: "A1:C2".to_string(),
        };
        store.save(&config).await.unwrap();
        config.sheet_id = "second".to_string();
        config.access_key.clear();
        store.save(&config).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.sheet_id, "second");
        assert_eq!(loaded.access_key, "");
    }
}
