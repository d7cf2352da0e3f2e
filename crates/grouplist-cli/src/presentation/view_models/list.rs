use grouplist_types::{NodeKey, Rgb};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderViewModel {
    pub key: NodeKey,
    pub group_id: i64,
    pub item_count: usize,
    pub accent: Rgb,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowViewModel {
    pub key: NodeKey,
    pub index: usize,
    pub id: i64,
    pub name: String,
    pub accent: Rgb,
}

/// One header with the rows currently shown under it.
#[derive(Debug, Clone, Serialize)]
pub struct GroupViewModel {
    #[serde(flatten)]
    pub header: HeaderViewModel,
    pub rows: Vec<RowViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupListViewModel {
    pub groups: Vec<GroupViewModel>,
    pub total_items: usize,
    pub expanded_groups: usize,
}

/// One screen line of the interactive list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListLineViewModel {
    Header(HeaderViewModel),
    Row(RowViewModel),
}

impl ListLineViewModel {
    pub fn key(&self) -> NodeKey {
        match self {
            ListLineViewModel::Header(header) => header.key,
            ListLineViewModel::Row(row) => row.key,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBarViewModel {
    pub group_count: usize,
    pub item_count: usize,
    pub expanded_count: usize,
    /// Action Enter would perform on the selection, e.g. "Expand List ID: 2".
    pub hint: Option<String>,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl super::CreateView for GroupListViewModel {
    fn create_view<'a>(&'a self, color: bool) -> Box<dyn std::fmt::Display + 'a> {
        use crate::presentation::views::GroupListView;
        Box::new(GroupListView::new(self, color))
    }
}
