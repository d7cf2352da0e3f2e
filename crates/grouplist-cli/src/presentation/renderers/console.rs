use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    /// Accent colors are used only when stdout is a terminal.
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            color: std::io::stdout().is_terminal(),
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        // Badges go to stderr so piped plain output stays the list only
        if let Some(badge) = &result.badge {
            if std::io::stderr().is_terminal() {
                eprintln!("{} {}", badge.icon(), badge.label.bold());
            } else {
                eprintln!("{}", badge.label);
            }
        }

        print!("{}", result.content.create_view(self.color));
        Ok(())
    }
}
