pub mod chat_repo;
pub mod schema;
pub mod user_repo;
