use clap::Parser;
use pp_quest::utils::{logger, validation::Validate};
use pp_quest::{BufferedConsole, CliConfig, MenuEngine};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    logger::init_cli_logger(cli.verbose, &settings.log_level());
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let mut engine = MenuEngine::new(BufferedConsole::stdio(), settings.menu_settings());

    if let Err(e) = engine.run() {
        tracing::error!("Menu session failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    Ok(())
}
