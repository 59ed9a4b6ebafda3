use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{ColorMode, CommandResultViewModel, CreateView};

pub struct ConsoleRenderer {
    json_mode: bool,
    color_mode: ColorMode,
}

impl ConsoleRenderer {
    /// Truecolor segments only when writing text to a terminal.
    pub fn new(json_mode: bool) -> Self {
        let color_mode = if !json_mode && std::io::stdout().is_terminal() {
            ColorMode::Truecolor
        } else {
            ColorMode::Plain
        };
        Self {
            json_mode,
            color_mode,
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

        if let Some(badge) = &result.badge {
            println!("{} {}", badge.icon(), badge.label.bold());
            println!();
        }

        print!("{}", result.content.create_view(self.color_mode));

        if !result.suggestions.is_empty() {
            println!("\n{}", "Tips:".yellow().bold());
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    print!(": {}", cmd.cyan());
                }
                println!();
            }
        }

        Ok(())
    }
}
