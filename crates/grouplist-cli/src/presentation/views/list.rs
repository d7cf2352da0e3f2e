use std::fmt;

use crate::presentation::formatters::{
    console_accent, display_width, group_title, id_label, indicator, item_count_label,
};
use crate::presentation::view_models::{GroupListViewModel, GroupViewModel};

// --------------------------------------------------------
// Group List View
// --------------------------------------------------------

pub struct GroupListView<'a> {
    data: &'a GroupListViewModel,
    color: bool,
}

impl<'a> GroupListView<'a> {
    pub fn new(data: &'a GroupListViewModel, color: bool) -> Self {
        Self { data, color }
    }

    fn render_group(&self, f: &mut fmt::Formatter, group: &GroupViewModel) -> fmt::Result {
        let header = &group.header;
        if self.color {
            write!(f, "{} ", console_accent("  ", header.accent))?;
        }
        writeln!(
            f,
            "{} {} {}",
            indicator(header.expanded),
            group_title(header.group_id),
            item_count_label(header.item_count)
        )?;

        // Align the id column within the group
        let name_width = group
            .rows
            .iter()
            .map(|row| display_width(&row.name))
            .max()
            .unwrap_or(0);

        for row in &group.rows {
            let index = format!("{:>3}", row.index);
            let index = if self.color {
                console_accent(&index, row.accent)
            } else {
                index
            };
            let padding = " ".repeat(name_width - display_width(&row.name));
            writeln!(
                f,
                "    {}  {}{}  {}",
                index,
                row.name,
                padding,
                id_label(row.id)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for GroupListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.groups.is_empty() {
            return writeln!(f, "No valid items to display.");
        }

        for group in &self.data.groups {
            self.render_group(f, group)?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Groups: {}  Items: {}  Expanded: {}",
            self.data.groups.len(),
            self.data.total_items,
            self.data.expanded_groups
        )
    }
}
