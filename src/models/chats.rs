use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ChatRow {
    pub chat_id: String,
    pub request_status: Option<String>,
}

/// State of a chat request between two users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Accepted,
    Other(String),
}

impl RequestStatus {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("pending") => Self::Pending,
            Some("accepted") => Self::Accepted,
            other => Self::Other(other.unwrap_or_default().to_string()),
        }
    }

    /// Pending or accepted: the two users are already connected or about to be.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::Accepted)
    }
}

impl ChatRow {
    pub fn status(&self) -> RequestStatus {
        RequestStatus::parse(self.request_status.as_deref())
    }
}
