use clap::Subcommand;
use habitcycle_core::theme::{load_theme, save_theme, toggle_theme};
use habitcycle_core::{Config, Database, Theme};

use crate::common::CliResult;

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the current theme
    Show,
    /// Switch between dark and light
    Toggle,
    /// Set the theme
    Set {
        /// dark or light
        theme: Theme,
    },
}

pub fn run(action: ThemeAction) -> CliResult {
    let config = Config::load()?;
    let db = Database::open()?;
    let key = &config.storage.theme_key;

    let theme = match action {
        ThemeAction::Show => load_theme(&db, key)?,
        ThemeAction::Toggle => toggle_theme(&db, key)?,
        ThemeAction::Set { theme } => {
            save_theme(&db, key, theme)?;
            theme
        }
    };
    println!("{theme}");
    Ok(())
}
