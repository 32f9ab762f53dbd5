use sqlx::SqlitePool;

pub const SQL_CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    user_id TEXT PRIMARY KEY NOT NULL,
    hobbies TEXT,
    city TEXT,
    cluster TEXT
)
"#;

pub const SQL_CREATE_USERS_CLUSTER_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_users_cluster ON users (cluster)
"#;

pub const SQL_CREATE_CHATS: &str = r#"
CREATE TABLE IF NOT EXISTS chats (
    chat_id TEXT PRIMARY KEY NOT NULL,
    request_status TEXT
)
"#;

/// Creates the `users` and `chats` tables when they are missing.
pub async fn init_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    for sql in [SQL_CREATE_USERS, SQL_CREATE_USERS_CLUSTER_INDEX, SQL_CREATE_CHATS] {
        sqlx::query(sql).execute(pool).await?;
    }
    Ok(())
}
