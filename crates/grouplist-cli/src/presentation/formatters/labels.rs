//! User-facing wording of list elements.

pub fn group_title(group_id: i64) -> String {
    format!("List ID: {}", group_id)
}

pub fn item_count_label(count: usize) -> String {
    format!("({} Items)", count)
}

pub fn id_label(id: i64) -> String {
    format!("ID: {}", id)
}

/// Arrow shown on a header: up when expanded, down when collapsed.
pub fn indicator(expanded: bool) -> &'static str {
    if expanded { "▲" } else { "▼" }
}

/// What activating the header will do.
pub fn indicator_label(expanded: bool) -> &'static str {
    if expanded { "Collapse" } else { "Expand" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(group_title(3), "List ID: 3");
        assert_eq!(item_count_label(1), "(1 Items)");
        assert_eq!(id_label(684), "ID: 684");
        assert_eq!(indicator(true), "▲");
        assert_eq!(indicator_label(false), "Expand");
    }
}
