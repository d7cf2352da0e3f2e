use anyhow::Result;
use grouplist_engine::ExpansionState;
use grouplist_store::RecordSource;

use super::HandlerContext;
use crate::config::Config;
use crate::types::OutputFormat;

/// Seven records over three groups; group 1 starts expanded.
const DEMO_DATA: &str = r#"[
  {"id": 101, "listId": 1, "name": "Item 10"},
  {"id": 102, "listId": 1, "name": "Item 2"},
  {"id": 201, "listId": 2, "name": "Item 20"},
  {"id": 202, "listId": 2, "name": "Item 1"},
  {"id": 301, "listId": 3, "name": "Item 592"},
  {"id": 302, "listId": 3, "name": "Item 6"},
  {"id": 303, "listId": 3, "name": "Item 619"}
]"#;

const DEMO_EXPANDED: [i64; 1] = [1];

pub fn handle(print: bool, format: OutputFormat, config: &Config) -> Result<()> {
    let source = RecordSource::Inline(DEMO_DATA.to_string());
    let expansion = ExpansionState::seeded(DEMO_EXPANDED);

    let ctx = HandlerContext::new(format);
    if print {
        super::list::handle(&ctx, &source, expansion, false)
    } else {
        super::browse::handle(&ctx, source, expansion, false, config)
    }
}
