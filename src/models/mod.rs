pub mod chats;
pub mod events;
pub mod recommendations;
pub mod users;

pub use chats::{ChatRow, RequestStatus};
pub use events::EventRecord;
pub use recommendations::Recommendation;
pub use users::{Cluster, UserProfile, UsersRow};
