use grouplist_engine::{
    ExpansionState, HeaderNode, PresentationNode, RowNode, VisibleNode, group_ids, row_count,
    visible_nodes,
};

use crate::presentation::formatters::{group_title, indicator_label};
use crate::presentation::view_models::{
    GroupListViewModel, GroupViewModel, HeaderViewModel, ListLineViewModel, RowViewModel,
    StatusBarViewModel,
};

fn present_header(header: &HeaderNode, expanded: bool) -> HeaderViewModel {
    HeaderViewModel {
        key: grouplist_engine::NodeKey::Header(header.group_id),
        group_id: header.group_id,
        item_count: header.item_count,
        accent: header.accent,
        expanded,
    }
}

fn present_row(row: &RowNode) -> RowViewModel {
    RowViewModel {
        key: row.key,
        index: row.display_index,
        id: row.record.id,
        name: row.record.display_name().to_string(),
        accent: row.accent,
    }
}

pub fn present_line(visible: &VisibleNode<'_>) -> ListLineViewModel {
    match visible.node {
        PresentationNode::Header(header) => {
            ListLineViewModel::Header(present_header(header, visible.expanded))
        }
        PresentationNode::Row(row) => ListLineViewModel::Row(present_row(row)),
    }
}

/// Everything a one-shot printout needs: headers in order, each with the
/// rows visible under the given expansion state.
pub fn present_group_list(
    nodes: &[PresentationNode],
    expansion: &ExpansionState,
) -> GroupListViewModel {
    let mut groups: Vec<GroupViewModel> = Vec::new();

    for visible in visible_nodes(nodes, expansion) {
        match visible.node {
            PresentationNode::Header(header) => groups.push(GroupViewModel {
                header: present_header(header, visible.expanded),
                rows: Vec::new(),
            }),
            PresentationNode::Row(row) => {
                if let Some(group) = groups.last_mut() {
                    group.rows.push(present_row(row));
                }
            }
        }
    }

    let expanded_groups = groups.iter().filter(|g| g.header.expanded).count();
    GroupListViewModel {
        groups,
        total_items: row_count(nodes),
        expanded_groups,
    }
}

pub fn present_status_bar(
    nodes: &[PresentationNode],
    expansion: &ExpansionState,
    selected: Option<&VisibleNode<'_>>,
) -> StatusBarViewModel {
    let groups = group_ids(nodes);
    let expanded_count = groups
        .iter()
        .filter(|g| expansion.is_expanded(**g))
        .count();

    let hint = selected.map(|visible| {
        let group_id = visible.node.group_id();
        let expanded = expansion.is_expanded(group_id);
        format!("{} {}", indicator_label(expanded), group_title(group_id))
    });

    StatusBarViewModel {
        group_count: groups.len(),
        item_count: row_count(nodes),
        expanded_count,
        hint,
    }
}
