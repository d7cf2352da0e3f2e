use anyhow::Result;
use grouplist_engine::{ExpansionState, build_nodes, group_ids};
use grouplist_store::{RecordSource, load};

use super::HandlerContext;
use crate::presentation::presenters::present_group_list;
use crate::presentation::view_models::{CommandResultViewModel, StatusBadge};

/// Load, group and print the list once.
///
/// A failed load prints the error once and an empty list; it is not an
/// error for the command.
pub fn handle(
    ctx: &HandlerContext,
    source: &RecordSource,
    expansion: ExpansionState,
    expand_all: bool,
) -> Result<()> {
    let (nodes, badge) = match load(source) {
        Ok(report) => {
            let badge = (report.skipped > 0).then(|| {
                StatusBadge::warning(format!(
                    "Skipped {} malformed record(s) in {}",
                    report.skipped, source
                ))
            });
            (build_nodes(&report.records), badge)
        }
        Err(err) => {
            tracing::debug!(kind = err.kind(), %source, "record load failed");
            (Vec::new(), Some(StatusBadge::error(err.to_string())))
        }
    };

    let expansion = if expand_all {
        ExpansionState::seeded(group_ids(&nodes))
    } else {
        expansion
    };

    let view_model = present_group_list(&nodes, &expansion);
    let result = match badge {
        Some(badge) => CommandResultViewModel::new(view_model).with_badge(badge),
        None => CommandResultViewModel::new(view_model),
    };
    ctx.render(result)
}
