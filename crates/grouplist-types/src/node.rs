use crate::color::Rgb;
use crate::record::{GroupId, Record, RecordId};
use serde::{Serialize, Serializer};
use std::fmt;

// NOTE: Presentation sequence layout
//
// The engine emits a flat sequence: [Header(g1), Row, Row, .., Header(g2), Row, ..].
// A header is followed by exactly `item_count` rows of its own group, and
// headers are strictly ascending by group id. Renderers rely on this shape to
// find a header's rows without re-grouping.

/// Summary node preceding a group's rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderNode {
    pub group_id: GroupId,
    pub item_count: usize,
    pub accent: Rgb,
}

/// One displayable record inside its group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowNode {
    pub record: Record,
    /// 1-based position inside the group after sorting.
    pub display_index: usize,
    pub accent: Rgb,
    pub key: NodeKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PresentationNode {
    Header(HeaderNode),
    Row(RowNode),
}

impl PresentationNode {
    pub fn group_id(&self) -> GroupId {
        match self {
            PresentationNode::Header(header) => header.group_id,
            PresentationNode::Row(row) => row.record.group_id,
        }
    }

    pub fn key(&self) -> NodeKey {
        match self {
            PresentationNode::Header(header) => NodeKey::Header(header.group_id),
            PresentationNode::Row(row) => row.key,
        }
    }

    pub fn as_header(&self) -> Option<&HeaderNode> {
        match self {
            PresentationNode::Header(header) => Some(header),
            PresentationNode::Row(_) => None,
        }
    }

    pub fn as_row(&self) -> Option<&RowNode> {
        match self {
            PresentationNode::Row(row) => Some(row),
            PresentationNode::Header(_) => None,
        }
    }
}

/// Stable identity of a rendered node.
///
/// Derived from the group id (headers) or `(group id, record id)` (rows) so
/// that a virtualized list keeps its selection across re-sorts and toggles.
/// `occurrence` disambiguates repeated record ids inside one group and is 0
/// for the first (usually only) occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKey {
    Header(GroupId),
    Row {
        group_id: GroupId,
        id: RecordId,
        occurrence: u32,
    },
}

impl NodeKey {
    pub fn group_id(&self) -> GroupId {
        match self {
            NodeKey::Header(group_id) => *group_id,
            NodeKey::Row { group_id, .. } => *group_id,
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Header(group_id) => write!(f, "sticky-header-{}", group_id),
            NodeKey::Row {
                group_id,
                id,
                occurrence: 0,
            } => write!(f, "data-{}-{}", group_id, id),
            NodeKey::Row {
                group_id,
                id,
                occurrence,
            } => write!(f, "data-{}-{}#{}", group_id, id, occurrence),
        }
    }
}

impl Serialize for NodeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
