use crate::expansion::ExpansionState;
use grouplist_types::{NodeKey, PresentationNode};
use std::ops::Range;

/// A node the renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleNode<'a> {
    pub node: &'a PresentationNode,
    /// For headers, whether the group is expanded. Always true for rows.
    pub expanded: bool,
}

impl VisibleNode<'_> {
    pub fn key(&self) -> NodeKey {
        self.node.key()
    }

    pub fn is_header(&self) -> bool {
        self.node.as_header().is_some()
    }
}

/// Project the presentation sequence onto what gets drawn.
///
/// Every header is kept. The rows following a header (up to the next header,
/// and matching its group) are kept only when that group is expanded. Header
/// counts are left untouched regardless of collapse state.
pub fn visible_nodes<'a>(
    nodes: &'a [PresentationNode],
    expansion: &ExpansionState,
) -> Vec<VisibleNode<'a>> {
    let mut visible = Vec::new();
    let mut open_group = None;

    for node in nodes {
        match node {
            PresentationNode::Header(header) => {
                let expanded = expansion.is_expanded(header.group_id);
                open_group = expanded.then_some(header.group_id);
                visible.push(VisibleNode { node, expanded });
            }
            PresentationNode::Row(row) => {
                if open_group == Some(row.record.group_id) {
                    visible.push(VisibleNode {
                        node,
                        expanded: true,
                    });
                }
            }
        }
    }

    visible
}

/// Index of the header to pin while the node at `top` is a row, i.e. the
/// group's header has scrolled above the viewport. `None` when `top` is a
/// header or out of range.
pub fn sticky_header(visible: &[VisibleNode<'_>], top: usize) -> Option<usize> {
    let first = visible.get(top)?;
    if first.is_header() {
        return None;
    }
    let group_id = first.node.group_id();
    visible[..top]
        .iter()
        .rposition(|v| v.is_header() && v.node.group_id() == group_id)
}

/// Part of the visible list that fits on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportSlice {
    /// Header drawn on the first line, above `rows`.
    pub pinned: Option<usize>,
    pub rows: Range<usize>,
}

/// Scroll window over the visible nodes. Only the nodes inside the window are
/// turned into widgets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    height: usize,
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self { offset: 0, height }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn resize(&mut self, height: usize) {
        self.height = height;
    }

    pub fn slice(&self, visible: &[VisibleNode<'_>]) -> ViewportSlice {
        let len = visible.len();
        if len == 0 || self.height == 0 {
            return ViewportSlice {
                pinned: None,
                rows: 0..0,
            };
        }

        let offset = self.offset.min(len - 1);
        let pinned = if self.height > 1 {
            sticky_header(visible, offset)
        } else {
            None
        };
        let capacity = self.height - usize::from(pinned.is_some());
        ViewportSlice {
            pinned,
            rows: offset..len.min(offset + capacity),
        }
    }

    /// Move the window the least amount needed to show `selected`.
    pub fn follow(&mut self, selected: usize, visible: &[VisibleNode<'_>]) {
        let len = visible.len();
        if len == 0 || self.height == 0 {
            self.offset = 0;
            return;
        }

        let selected = selected.min(len - 1);
        self.offset = self.offset.min(len - 1);
        if selected < self.offset {
            self.offset = selected;
            return;
        }

        self.offset = self.offset.max((selected + 1).saturating_sub(self.height));
        while !self.slice(visible).rows.contains(&selected) {
            self.offset += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::build_nodes;
    use grouplist_testing::fixtures::{preview_records, record};

    fn keys(visible: &[VisibleNode<'_>]) -> Vec<String> {
        visible.iter().map(|v| v.key().to_string()).collect()
    }

    #[test]
    fn test_collapsed_groups_show_only_headers() {
        let nodes = build_nodes(&preview_records());
        let visible = visible_nodes(&nodes, &ExpansionState::new());

        assert_eq!(
            keys(&visible),
            vec!["sticky-header-1", "sticky-header-2", "sticky-header-3"]
        );
        assert!(visible.iter().all(|v| !v.expanded));
    }

    #[test]
    fn test_expanded_group_shows_its_rows() {
        let nodes = build_nodes(&preview_records());
        let visible = visible_nodes(&nodes, &ExpansionState::seeded([1]));

        assert_eq!(
            keys(&visible),
            vec![
                "sticky-header-1",
                "data-1-102",
                "data-1-101",
                "sticky-header-2",
                "sticky-header-3",
            ]
        );
        assert!(visible[0].expanded);
        assert!(!visible[3].expanded);
    }

    #[test]
    fn test_unknown_group_toggle_only_flips_nothing_visible() {
        let nodes = build_nodes(&preview_records());
        let before = visible_nodes(&nodes, &ExpansionState::new());
        let after = visible_nodes(&nodes, &ExpansionState::new().toggle(7));

        assert_eq!(before, after);
    }

    #[test]
    fn test_collapse_keeps_item_count() {
        let nodes = build_nodes(&preview_records());
        let collapsed = visible_nodes(&nodes, &ExpansionState::new());
        let header = collapsed[2].node.as_header().unwrap();

        assert_eq!(header.group_id, 3);
        assert_eq!(header.item_count, 3);
    }

    #[test]
    fn test_sticky_header_tracks_owning_group() {
        let nodes = build_nodes(&preview_records());
        let visible = visible_nodes(&nodes, &ExpansionState::seeded([1, 3]));
        // 0:h1 1:r 2:r 3:h2 4:h3 5:r 6:r 7:r

        assert_eq!(sticky_header(&visible, 0), None);
        assert_eq!(sticky_header(&visible, 2), Some(0));
        assert_eq!(sticky_header(&visible, 3), None);
        assert_eq!(sticky_header(&visible, 6), Some(4));
        assert_eq!(sticky_header(&visible, 42), None);
    }

    #[test]
    fn test_viewport_slice_reserves_line_for_pinned_header() {
        let nodes = build_nodes(&preview_records());
        let visible = visible_nodes(&nodes, &ExpansionState::seeded([3]));
        // 0:h1 1:h2 2:h3 3:r 4:r 5:r

        let mut viewport = Viewport::new(3);
        assert_eq!(
            viewport.slice(&visible),
            ViewportSlice {
                pinned: None,
                rows: 0..3
            }
        );

        viewport.follow(5, &visible);
        let slice = viewport.slice(&visible);
        assert_eq!(slice.pinned, Some(2));
        assert!(slice.rows.contains(&5));
        assert_eq!(slice.rows.len(), 2);
    }

    #[test]
    fn test_viewport_follow_upwards() {
        let records: Vec<_> = (1..=20)
            .map(|n| record(n, 1, &format!("Item {}", n)))
            .collect();
        let nodes = build_nodes(&records);
        let visible = visible_nodes(&nodes, &ExpansionState::seeded([1]));

        let mut viewport = Viewport::new(5);
        viewport.follow(20, &visible);
        assert!(viewport.slice(&visible).rows.contains(&20));
        assert_eq!(viewport.slice(&visible).pinned, Some(0));

        viewport.follow(2, &visible);
        assert_eq!(viewport.offset(), 2);
        assert!(viewport.slice(&visible).rows.contains(&2));
    }

    #[test]
    fn test_viewport_clamps_after_collapse() {
        let records: Vec<_> = (1..=10)
            .map(|n| record(n, 1, &format!("Item {}", n)))
            .collect();
        let nodes = build_nodes(&records);
        let expanded = visible_nodes(&nodes, &ExpansionState::seeded([1]));
        let mut viewport = Viewport::new(4);
        viewport.follow(10, &expanded);

        let collapsed = visible_nodes(&nodes, &ExpansionState::new());
        assert_eq!(
            viewport.slice(&collapsed),
            ViewportSlice {
                pinned: None,
                rows: 0..1
            }
        );
        viewport.follow(0, &collapsed);
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn test_empty_viewport() {
        let mut viewport = Viewport::new(10);
        viewport.follow(3, &[]);
        assert_eq!(viewport.offset(), 0);
        assert_eq!(viewport.slice(&[]).rows, 0..0);

        let mut zero = Viewport::new(0);
        let nodes = build_nodes(&preview_records());
        let visible = visible_nodes(&nodes, &ExpansionState::new());
        zero.follow(2, &visible);
        assert_eq!(zero.slice(&visible).rows, 0..0);
    }
}
