use std::time::{Duration, Instant};

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use grouplist_engine::{
    ExpansionState, ExpansionStore, NodeKey, PresentationNode, Viewport, VisibleNode, build_nodes,
    group_ids, visible_nodes,
};
use grouplist_store::LoadReport;

use crate::presentation::view_models::StatusBadge;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoadPhase {
    Loading,
    Ready,
    Failed,
}

pub(crate) struct Toast {
    pub badge: StatusBadge,
    pub expires_at: Instant,
}

/// UI state of the interactive list. The record data is owned here once the
/// load arrives; the expansion store is only mutated from the UI loop.
pub(crate) struct AppState {
    pub title: String,
    pub phase: LoadPhase,
    pub nodes: Vec<PresentationNode>,
    pub expansion: ExpansionStore,
    pub selected: Option<NodeKey>,
    pub viewport: Viewport,
    pub toast: Option<Toast>,
    /// Screen row of every drawn list line, rebuilt on each draw
    pub hit_map: Vec<(u16, NodeKey)>,
    pub should_quit: bool,
    expand_all: bool,
    toast_duration: Duration,
}

/// Index of `key` in `visible`. A row hidden by a collapse resolves to its
/// group's header.
pub(crate) fn position_of(visible: &[VisibleNode<'_>], key: Option<NodeKey>) -> Option<usize> {
    let key = key?;
    visible.iter().position(|v| v.key() == key).or_else(|| {
        let header = NodeKey::Header(key.group_id());
        visible.iter().position(|v| v.key() == header)
    })
}

impl AppState {
    pub fn new(title: String, initial: ExpansionState, expand_all: bool) -> Self {
        Self {
            title,
            phase: LoadPhase::Loading,
            nodes: Vec::new(),
            expansion: ExpansionStore::new(initial),
            selected: None,
            viewport: Viewport::default(),
            toast: None,
            hit_map: Vec::new(),
            should_quit: false,
            expand_all,
            toast_duration: Duration::from_millis(3500),
        }
    }

    pub fn with_toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }

    pub fn apply_load(&mut self, result: grouplist_store::Result<LoadReport>, now: Instant) {
        match result {
            Ok(report) => {
                self.nodes = build_nodes(&report.records);
                self.phase = LoadPhase::Ready;
                if self.expand_all {
                    for group_id in group_ids(&self.nodes) {
                        if !self.expansion.is_expanded(group_id) {
                            self.expansion.toggle(group_id);
                        }
                    }
                }
                tracing::debug!(
                    nodes = self.nodes.len(),
                    skipped = report.skipped,
                    "records ready"
                );
            }
            Err(err) => {
                self.nodes.clear();
                self.phase = LoadPhase::Failed;
                self.show_toast(StatusBadge::error(err.to_string()), now);
            }
        }
        self.select_first();
    }

    pub fn show_toast(&mut self, badge: StatusBadge, now: Instant) {
        self.toast = Some(Toast {
            badge,
            expires_at: now + self.toast_duration,
        });
    }

    /// Drop an expired toast. Returns true when the screen changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.toast {
            Some(toast) if now >= toast.expires_at => {
                self.toast = None;
                true
            }
            _ => false,
        }
    }

    pub fn visible(&self) -> Vec<VisibleNode<'_>> {
        visible_nodes(&self.nodes, self.expansion.state())
    }

    pub fn move_selection(&mut self, delta: isize) {
        let key = {
            let visible = self.visible();
            if visible.is_empty() {
                None
            } else {
                let current = position_of(&visible, self.selected).unwrap_or(0);
                let next = current.saturating_add_signed(delta).min(visible.len() - 1);
                Some(visible[next].key())
            }
        };
        self.selected = key;
    }

    pub fn select_first(&mut self) {
        self.selected = self.visible().first().map(VisibleNode::key);
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible().last().map(VisibleNode::key);
    }

    pub fn page(&mut self, direction: isize) {
        let step = self.viewport.height().saturating_sub(1).max(1);
        let step = isize::try_from(step).unwrap_or(isize::MAX);
        self.move_selection(step.saturating_mul(direction));
    }

    /// Toggle the group of the selection. The header keeps the selection so
    /// it stays on screen after a collapse.
    pub fn toggle_selected(&mut self) {
        let Some(key) = self.selected else {
            return;
        };
        let group_id = key.group_id();
        let expanded = self.expansion.toggle(group_id);
        self.selected = Some(NodeKey::Header(group_id));
        tracing::debug!(group_id, expanded, "toggled group");
    }

    /// Mouse click on screen row `y`. Headers toggle, rows are selected.
    pub fn click(&mut self, y: u16) -> bool {
        let Some(key) = self
            .hit_map
            .iter()
            .find(|(row, _)| *row == y)
            .map(|(_, key)| *key)
        else {
            return false;
        };

        self.selected = Some(key);
        if matches!(key, NodeKey::Header(_)) {
            self.toggle_selected();
        }
        true
    }

    /// Returns true when the key changed something on screen.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::PageDown => self.page(1),
            KeyCode::PageUp => self.page(-1),
            KeyCode::Home | KeyCode::Char('g') => self.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            _ => return false,
        }
        true
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.click(mouse.row),
            MouseEventKind::ScrollDown => {
                self.move_selection(1);
                true
            }
            MouseEventKind::ScrollUp => {
                self.move_selection(-1);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grouplist_testing::fixtures::preview_records;

    fn loaded(initial: ExpansionState) -> AppState {
        let mut state = AppState::new("test".to_string(), initial, false);
        state.apply_load(
            Ok(LoadReport {
                records: preview_records(),
                skipped: 0,
            }),
            Instant::now(),
        );
        state
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn row_key(group_id: i64, id: i64) -> NodeKey {
        NodeKey::Row {
            group_id,
            id,
            occurrence: 0,
        }
    }

    #[test]
    fn test_load_selects_first_header() {
        let state = loaded(ExpansionState::new());
        assert_eq!(state.phase, LoadPhase::Ready);
        assert_eq!(state.selected, Some(NodeKey::Header(1)));
        assert_eq!(state.visible().len(), 3);
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_enter_expands_and_rows_become_reachable() {
        let mut state = loaded(ExpansionState::new());
        let before = state.expansion.revision();

        assert!(state.handle_key(press(KeyCode::Enter)));
        assert!(state.expansion.is_expanded(1));
        assert_ne!(state.expansion.revision(), before);

        state.handle_key(press(KeyCode::Char('j')));
        assert_eq!(state.selected, Some(row_key(1, 102)));
        state.handle_key(press(KeyCode::Down));
        assert_eq!(state.selected, Some(row_key(1, 101)));
    }

    #[test]
    fn test_toggle_from_row_collapses_group_and_selects_header() {
        let mut state = loaded(ExpansionState::seeded([1]));
        state.selected = Some(row_key(1, 101));

        state.handle_key(press(KeyCode::Char(' ')));

        assert!(!state.expansion.is_expanded(1));
        assert_eq!(state.selected, Some(NodeKey::Header(1)));
        assert_eq!(position_of(&state.visible(), state.selected), Some(0));
    }

    #[test]
    fn test_selection_clamps_at_both_ends() {
        let mut state = loaded(ExpansionState::new());
        state.handle_key(press(KeyCode::Up));
        assert_eq!(state.selected, Some(NodeKey::Header(1)));

        state.handle_key(press(KeyCode::End));
        assert_eq!(state.selected, Some(NodeKey::Header(3)));
        state.handle_key(press(KeyCode::Down));
        assert_eq!(state.selected, Some(NodeKey::Header(3)));

        state.handle_key(press(KeyCode::Home));
        assert_eq!(state.selected, Some(NodeKey::Header(1)));
    }

    #[test]
    fn test_hidden_selection_resolves_to_header() {
        let state = loaded(ExpansionState::new());
        let visible = state.visible();
        assert_eq!(position_of(&visible, Some(row_key(2, 201))), Some(1));
        assert_eq!(position_of(&visible, None), None);
    }

    #[test]
    fn test_load_failure_shows_toast_once() {
        let mut state = AppState::new("test".to_string(), ExpansionState::new(), false)
            .with_toast_duration(Duration::from_millis(100));
        let now = Instant::now();
        let err = grouplist_store::Error::Decode("expected value at line 1 column 1".to_string());

        state.apply_load(Err(err), now);

        assert_eq!(state.phase, LoadPhase::Failed);
        assert!(state.nodes.is_empty());
        assert_eq!(state.selected, None);
        let toast = state.toast.as_ref().unwrap();
        assert_eq!(
            toast.badge.label,
            "Error processing data: expected value at line 1 column 1"
        );

        assert!(!state.tick(now + Duration::from_millis(50)));
        assert!(state.tick(now + Duration::from_millis(100)));
        assert!(state.toast.is_none());
        assert!(!state.tick(now + Duration::from_millis(200)));
    }

    #[test]
    fn test_expand_all_after_load() {
        let mut state = AppState::new("test".to_string(), ExpansionState::seeded([2]), true);
        state.apply_load(
            Ok(LoadReport {
                records: preview_records(),
                skipped: 0,
            }),
            Instant::now(),
        );

        assert_eq!(state.expansion.state().len(), 3);
        assert_eq!(state.visible().len(), 10);
    }

    #[test]
    fn test_click_header_toggles_and_row_selects() {
        let mut state = loaded(ExpansionState::new());
        state.hit_map = vec![
            (1, NodeKey::Header(1)),
            (2, NodeKey::Header(2)),
            (3, NodeKey::Header(3)),
        ];

        assert!(state.click(2));
        assert!(state.expansion.is_expanded(2));
        assert_eq!(state.selected, Some(NodeKey::Header(2)));

        state.hit_map = vec![(3, row_key(2, 202))];
        assert!(state.click(3));
        assert!(state.expansion.is_expanded(2));
        assert_eq!(state.selected, Some(row_key(2, 202)));

        assert!(!state.click(9));
    }

    #[test]
    fn test_quit_keys() {
        let mut state = loaded(ExpansionState::new());
        assert!(state.handle_key(press(KeyCode::Char('q'))));
        assert!(state.should_quit);

        let mut state = loaded(ExpansionState::new());
        state.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(state.should_quit);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut state = loaded(ExpansionState::new());
        assert!(!state.handle_key(press(KeyCode::Char('x'))));
        assert_eq!(state.selected, Some(NodeKey::Header(1)));
    }
}
