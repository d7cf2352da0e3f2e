use crate::palette::Palette;
use grouplist_types::{GroupId, HeaderNode, NodeKey, PresentationNode, Record, RecordId, RowNode};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// Literal that precedes the numeric part of a record name.
pub const SORT_PREFIX: &str = "Item ";

/// Numeric ordering key extracted from a record name.
///
/// `Unparsed` orders after every `Numeric` key, so names without a usable
/// number land at the end of their group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Numeric(i64),
    Unparsed,
}

impl SortKey {
    /// Integer following the first `"Item "` in `name`, if any.
    pub fn from_name(name: &str) -> Self {
        name.find(SORT_PREFIX)
            .map(|start| &name[start + SORT_PREFIX.len()..])
            .and_then(|suffix| suffix.parse::<i64>().ok())
            .map_or(SortKey::Unparsed, SortKey::Numeric)
    }
}

fn compare_rows(a: &Record, b: &Record) -> Ordering {
    let a_name = a.display_name();
    let b_name = b.display_name();
    SortKey::from_name(a_name)
        .cmp(&SortKey::from_name(b_name))
        .then_with(|| a_name.cmp(b_name))
        .then_with(|| a.id.cmp(&b.id))
}

/// Build the presentation sequence with the default palette.
pub fn build_nodes(records: &[Record]) -> Vec<PresentationNode> {
    build_nodes_with(records, &Palette::default())
}

/// Filter, group and order `records` into `[Header, Row.., Header, Row..]`.
///
/// Blank or unnamed records are dropped. Groups come out in ascending id
/// order; rows inside a group are ordered by [`SortKey`], then name, then id,
/// which makes the result independent of the input order.
pub fn build_nodes_with(records: &[Record], palette: &Palette) -> Vec<PresentationNode> {
    let mut groups: BTreeMap<GroupId, Vec<&Record>> = BTreeMap::new();
    for record in records.iter().filter(|r| r.is_displayable()) {
        groups.entry(record.group_id).or_default().push(record);
    }

    let mut nodes = Vec::with_capacity(groups.len() + groups.values().map(Vec::len).sum::<usize>());

    for (group_id, mut members) in groups {
        let accent = palette.accent_for(group_id);
        nodes.push(PresentationNode::Header(HeaderNode {
            group_id,
            item_count: members.len(),
            accent,
        }));

        members.sort_by(|a, b| compare_rows(a, b));

        let mut seen: HashMap<RecordId, u32> = HashMap::new();
        for (position, record) in members.into_iter().enumerate() {
            let occurrence = seen.entry(record.id).or_insert(0);
            let key = NodeKey::Row {
                group_id,
                id: record.id,
                occurrence: *occurrence,
            };
            *occurrence += 1;

            nodes.push(PresentationNode::Row(RowNode {
                record: record.clone(),
                display_index: position + 1,
                accent,
                key,
            }));
        }
    }

    nodes
}

/// Group ids in sequence order.
pub fn group_ids(nodes: &[PresentationNode]) -> Vec<GroupId> {
    nodes
        .iter()
        .filter_map(PresentationNode::as_header)
        .map(|header| header.group_id)
        .collect()
}

/// Number of row nodes in the sequence.
pub fn row_count(nodes: &[PresentationNode]) -> usize {
    nodes.iter().filter(|node| node.as_row().is_some()).count()
}
