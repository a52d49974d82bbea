use anyhow::{Context, Result};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;

use super::schema::{DEMO_DATA, SCHEMA, SEED_DATA};

/// SQLite in-memory database identifier
const MEMORY_DB_PATH: &str = ":memory:";

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Database wrapper with connection pooling support
#[derive(Clone)]
pub struct Database {
    pub pool: DbPool,
}

impl Database {
    /// Create a new database connection pool
    ///
    /// # Arguments
    /// * `path` - Database file path or ":memory:" for an in-memory database
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy();
        let trimmed_path = path_str.trim();

        // Every pooled ":memory:" connection would open its own private
        // database, so the in-memory pool is pinned to a single connection.
        let pool = if trimmed_path.eq_ignore_ascii_case(MEMORY_DB_PATH) {
            Pool::builder()
                .max_size(1)
                .build(SqliteConnectionManager::memory())
        } else {
            Pool::new(SqliteConnectionManager::file(path.as_ref()))
        }
        .context("Failed to create database connection pool")?;

        Ok(Self { pool })
    }

    /// Create an in-memory database pool (useful for testing)
    #[allow(dead_code)]
    pub fn in_memory() -> Result<Self> {
        Self::new(MEMORY_DB_PATH)
    }

    /// Initialize the database schema and the required seed rows
    /// (admin account and the settings singleton). Safe to run repeatedly.
    pub fn initialize(&self) -> Result<()> {
        let conn = self.connection()?;
        conn.execute_batch(SCHEMA)
            .context("Failed to initialize database schema")?;
        conn.execute_batch(SEED_DATA)
            .context("Failed to seed required data")?;
        Ok(())
    }

    /// Seed the database with the demo portfolio content
    #[allow(dead_code)]
    pub fn seed_demo_data(&self) -> Result<()> {
        let conn = self.connection()?;
        conn.execute_batch(DEMO_DATA)
            .context("Failed to seed demo data")?;
        Ok(())
    }

    /// Get a connection from the pool
    pub fn connection(&self) -> Result<DbConnection> {
        self.pool
            .get()
            .context("Failed to get database connection from pool")
    }
}
