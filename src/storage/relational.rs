//! Relational stores (PostgreSQL and MySQL via sqlx)
//!
//! Both keep the same `items` shape. The pools connect lazily, so an
//! unreachable database only fails at the startup probe or at the point of
//! use.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::postgres::PgPoolOptions;
use sqlx::{MySqlPool, PgPool};

use super::error::Result;

/// Latest-row read-back shape shared by both stores.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ItemRow {
    pub id: i32,
    pub name: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
}

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn connect_lazy(dsn: &str) -> Result<Self> {
        let pool = PgPoolOptions::new().max_connections(5).connect_lazy(dsn)?;
        Ok(Self { pool })
    }

    /// Reachability probe doubling as best-effort schema bootstrap.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                value TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn insert_item(&self, name: &str, value: &str) -> Result<()> {
        sqlx::query("INSERT INTO items (name, value) VALUES ($1, $2)")
            .bind(name)
            .bind(value)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// The most recently inserted row.
    pub async fn latest_item(&self) -> Result<ItemRow> {
        let row: ItemRow = sqlx::query_as(
            "SELECT id, name, value, created_at FROM items ORDER BY id DESC LIMIT 1",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}

pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn connect_lazy(dsn: &str) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect_lazy(dsn)?;
        Ok(Self { pool })
    }

    /// Reachability probe doubling as best-effort schema bootstrap.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id INT AUTO_INCREMENT PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                value TEXT NOT NULL,
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn insert_item(&self, name: &str, value: &str) -> Result<()> {
        sqlx::query("INSERT INTO items (name, value) VALUES (?, ?)")
            .bind(name)
            .bind(value)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// The most recently inserted row.
    pub async fn latest_item(&self) -> Result<ItemRow> {
        let row: ItemRow = sqlx::query_as(
            "SELECT id, name, value, created_at FROM items ORDER BY id DESC LIMIT 1",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
