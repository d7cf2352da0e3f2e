use anyhow::Result;
use std::path::Path;

use super::HandlerContext;
use crate::config::{Config, resolve_config_path};
use crate::presentation::presenters::present_config;
use crate::presentation::view_models::CommandResultViewModel;

pub fn handle(ctx: &HandlerContext, explicit_path: Option<&Path>, config: &Config) -> Result<()> {
    let path = resolve_config_path(explicit_path);
    let view_model = present_config(path.as_deref(), config.clone())?;
    ctx.render(CommandResultViewModel::new(view_model))
}
