use crate::config::toml_config::AppConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pp-quest")]
#[command(about = "Interactive menu of small programming exercises")]
pub struct CliConfig {
    /// Path to an optional TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Never clear the screen between menus
    #[arg(long)]
    pub no_clear: bool,

    /// Skip the "press Enter" pause after each item
    #[arg(long)]
    pub no_pause: bool,
}

impl CliConfig {
    /// Loads the settings file (or defaults) and applies command-line overrides.
    pub fn load_settings(&self) -> Result<AppConfig> {
        let mut settings = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if self.no_clear {
            settings.display.clear_screen = false;
        }
        if self.no_pause {
            settings.display.pause_after_item = false;
        }
        Ok(settings)
    }
}
