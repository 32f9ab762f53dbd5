use anyhow::Context;
use std::collections::BTreeSet;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UsersRow {
    pub user_id: String,
    /// JSON array of strings
    pub hobbies: Option<String>,
    pub city: Option<String>,
    pub cluster: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cluster {
    Assigned(String),
    Unassigned,
}

impl From<Option<String>> for Cluster {
    fn from(raw: Option<String>) -> Self {
        match raw {
            Some(c) => Self::Assigned(c),
            None => Self::Unassigned,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserProfile {
    pub user_id: String,
    pub hobbies: BTreeSet<String>,
    pub city: Option<String>,
    pub cluster: Cluster,
}

impl TryFrom<UsersRow> for UserProfile {
    type Error = anyhow::Error;

    fn try_from(row: UsersRow) -> anyhow::Result<Self> {
        let hobbies = match row.hobbies.as_deref().map(str::trim) {
            None | Some("") => BTreeSet::new(),
            Some(raw) => serde_json::from_str::<Vec<String>>(raw)
                .with_context(|| format!("user {} has malformed hobbies", row.user_id))?
                .into_iter()
                .collect(),
        };

        let city = row.city.filter(|c| !c.is_empty());
        let cluster = Cluster::from(row.cluster);

        Ok(Self {
            user_id: row.user_id,
            hobbies,
            city,
            cluster,
        })
    }
}
