pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::console::BufferedConsole;
pub use config::AppConfig;
pub use core::menu::{MenuEngine, MenuSettings};
pub use utils::error::{QuestError, Result};
