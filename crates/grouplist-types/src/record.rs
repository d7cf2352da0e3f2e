use serde::{Deserialize, Serialize};

/// Identifier of a single record.
pub type RecordId = i64;

/// Identifier shared by every record of a group (`listId` on the wire).
pub type GroupId = i64;

/// One input item as it comes out of the record store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(rename = "listId")]
    pub group_id: GroupId,
    #[serde(default)]
    pub name: Option<String>,
}

impl Record {
    pub fn new(id: RecordId, group_id: GroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            group_id,
            name: Some(name.into()),
        }
    }

    pub fn unnamed(id: RecordId, group_id: GroupId) -> Self {
        Self {
            id,
            group_id,
            name: None,
        }
    }

    /// A record is shown only when its name is present and not blank.
    pub fn is_displayable(&self) -> bool {
        self.name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }

    /// Name for display; only meaningful for displayable records.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}
