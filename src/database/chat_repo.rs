use sqlx::SqlitePool;

use crate::models::ChatRow;

pub const SQL_LOAD_CHATS_BETWEEN: &str = r#"
SELECT
    chat_id,
    request_status
FROM chats
WHERE chat_id = ?1 || '_' || ?2
   OR chat_id = ?2 || '_' || ?1
"#;

/// Chats stored under either `"{a}_{b}"` or `"{b}_{a}"`.
pub async fn load_chats_between(
    pool: &SqlitePool,
    user_a: &str,
    user_b: &str,
) -> sqlx::Result<Vec<ChatRow>> {
    sqlx::query_as::<_, ChatRow>(SQL_LOAD_CHATS_BETWEEN)
        .bind(user_a)
        .bind(user_b)
        .fetch_all(pool)
        .await
}
