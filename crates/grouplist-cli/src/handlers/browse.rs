use anyhow::Result;
use grouplist_engine::ExpansionState;
use grouplist_store::{RecordSource, spawn_load};
use is_terminal::IsTerminal;

use super::HandlerContext;
use crate::config::Config;
use crate::presentation::TuiRenderer;

/// `ctx` only matters when stdout is not a terminal and the list is printed.
pub fn handle(
    ctx: &HandlerContext,
    source: RecordSource,
    expansion: ExpansionState,
    expand_all: bool,
    config: &Config,
) -> Result<()> {
    // Without a terminal there is nothing to interact with
    if !std::io::stdout().is_terminal() {
        return super::list::handle(ctx, &source, expansion, expand_all);
    }

    let title = source.to_string();
    let rx = spawn_load(source);

    TuiRenderer::new(title, expansion, expand_all)
        .with_toast_duration(config.toast_duration())
        .with_tick_rate(config.tick_rate())
        .run(rx)
}
