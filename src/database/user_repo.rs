use sqlx::SqlitePool;

use crate::models::UsersRow;

pub const SQL_LOAD_USER: &str = r#"
SELECT
    user_id,
    hobbies,
    city,
    CAST(cluster AS TEXT) AS cluster
FROM users
WHERE user_id = ?1
LIMIT 1
"#;

pub const SQL_LIST_USERS_IN_CLUSTER: &str = r#"
SELECT
    user_id,
    hobbies,
    city,
    CAST(cluster AS TEXT) AS cluster
FROM users
WHERE cluster IS NOT NULL
  AND CAST(cluster AS TEXT) = ?1
"#;

pub async fn load_user(pool: &SqlitePool, user_id: &str) -> sqlx::Result<Option<UsersRow>> {
    sqlx::query_as::<_, UsersRow>(SQL_LOAD_USER)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Every user in `cluster`, in store order. No paging.
pub async fn list_users_in_cluster(
    pool: &SqlitePool,
    cluster: &str,
) -> sqlx::Result<Vec<UsersRow>> {
    sqlx::query_as::<_, UsersRow>(SQL_LIST_USERS_IN_CLUSTER)
        .bind(cluster)
        .fetch_all(pool)
        .await
}
