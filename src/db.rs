use crate::errors::StoreError;
use chrono::NaiveDateTime;
use log::info;
use sqlx::PgPool;

/// One persisted menu row, scoped to an identity class in the store
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct MenuEntry {
    #[sqlx(rename = "menu_id")]
    pub order: i32,
    #[sqlx(rename = "menu_name")]
    pub label: String,
    #[sqlx(rename = "menu_action")]
    pub action: String,
}

/// One registered user, as listed by the users report
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UserRow {
    pub name: String,
    pub email: Option<String>,
    pub password: String,
}

/// One audit-log row
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct LogRow {
    pub username: String,
    pub log: String,
    pub dtime: NaiveDateTime,
}

/// Create the bot's tables if the administrator has not provisioned them
pub async fn init_schema(pool: &PgPool) -> Result<(), StoreError> {
    info!("Initializing database schema...");

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS bot_menu (
            menu_id SERIAL PRIMARY KEY,
            menu_item TEXT NOT NULL,
            menu_name TEXT NOT NULL,
            menu_action TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS bot_users (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT,
            password TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS bot_logs (
            id SERIAL PRIMARY KEY,
            username TEXT NOT NULL,
            log TEXT NOT NULL,
            dtime TIMESTAMP NOT NULL DEFAULT now()
        )",
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully");
    Ok(())
}

/// Ordered label→action rows for one identity class, ascending by menu_id
pub async fn query_menu_rows(pool: &PgPool, class: &str) -> Result<Vec<MenuEntry>, StoreError> {
    let rows = sqlx::query_as::<_, MenuEntry>(
        "SELECT menu_id, menu_name, menu_action FROM bot_menu
         WHERE menu_item = $1 ORDER BY menu_id",
    )
    .bind(class)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// All registered users for the users report
pub async fn query_users(pool: &PgPool) -> Result<Vec<UserRow>, StoreError> {
    let rows = sqlx::query_as::<_, UserRow>("SELECT name, email, password FROM bot_users")
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

/// Most recent audit rows, newest first
pub async fn query_recent_logs(pool: &PgPool, limit: i64) -> Result<Vec<LogRow>, StoreError> {
    let rows = sqlx::query_as::<_, LogRow>(
        "SELECT username, log, dtime FROM bot_logs ORDER BY id DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Append one audit row. Callers treat failures as fire-and-forget: the
/// reply path proceeds regardless of the outcome.
pub async fn append_log(pool: &PgPool, username: &str, text: &str) -> Result<(), StoreError> {
    sqlx::query("INSERT INTO bot_logs (username, log) VALUES ($1, $2)")
        .bind(username)
        .bind(text)
        .execute(pool)
        .await?;

    Ok(())
}
