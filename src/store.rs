//! SQLite connection setup and table DDL. Tables are created if absent; there are no migrations.

use crate::error::AppError;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteExecutor, SqliteJournalMode, SqlitePool, SqlitePoolOptions,
};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

const TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS pets (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        type TEXT NOT NULL,
        age INTEGER NOT NULL,
        description TEXT NOT NULL,
        adopted BOOLEAN NOT NULL DEFAULT 0,
        image TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS adoptions (
        id INTEGER PRIMARY KEY,
        user_name TEXT NOT NULL,
        pet_id INTEGER NOT NULL,
        pet_name TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS community_posts (
        id INTEGER PRIMARY KEY,
        user_name TEXT,
        title TEXT,
        content TEXT,
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS lost_found_reports (
        id INTEGER PRIMARY KEY,
        user_name TEXT,
        report_type TEXT,
        pet_name TEXT,
        pet_type TEXT,
        breed TEXT,
        color TEXT,
        location TEXT,
        date TEXT,
        contact_phone TEXT,
        description TEXT,
        created_at TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_adoptions_user_name ON adoptions (user_name)",
    "CREATE INDEX IF NOT EXISTS idx_community_posts_created_at ON community_posts (created_at)",
    "CREATE INDEX IF NOT EXISTS idx_lost_found_reports_created_at ON lost_found_reports (created_at)",
];

/// Open the database file, creating it if missing.
pub async fn connect(path: &Path) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Private in-memory database on a single pinned connection. Each call gets a fresh store.
/// Never acquire from the pool while holding a transaction on it.
pub async fn connect_in_memory() -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str("sqlite::memory:")?;
    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

pub async fn count_pets<'e, E>(executor: E) -> Result<i64, AppError>
where
    E: SqliteExecutor<'e>,
{
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pets")
        .fetch_one(executor)
        .await?;
    Ok(count)
}
