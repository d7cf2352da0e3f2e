//! Grouping engine for grouplist.
//!
//! Turns a flat list of [`Record`]s into the ordered presentation sequence
//! (headers followed by their rows), assigns accent colors, tracks which
//! groups are expanded, and projects the sequence onto what a renderer
//! should actually draw.
//!
//! Everything here is synchronous and in-memory; no function performs I/O.

pub mod expansion;
pub mod grouping;
pub mod palette;
pub mod visibility;

pub use expansion::{ExpansionState, ExpansionStore};
pub use grouping::{SortKey, build_nodes, build_nodes_with, group_ids, row_count};
pub use palette::{NEUTRAL_ACCENT, Palette, accent_color};
pub use visibility::{Viewport, ViewportSlice, VisibleNode, sticky_header, visible_nodes};

pub use grouplist_types::{GroupId, HeaderNode, NodeKey, PresentationNode, Record, RowNode, Rgb};
