use anyhow::Result;
use clap::Parser;

use marquee_cli::{
    cli::{Cli, Commands},
    commands, logging,
};
use marquee_config::MarqueeConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Precedence: defaults < config file < MARQUEE_* environment < flags
    let mut config = MarqueeConfig::load(cli.config.as_deref())?;
    cli.apply_to(&mut config);

    logging::init(cli.level_override(), &config.logging.level);
    tracing::debug!(?config, "Configuration resolved");

    match cli.command_or_default() {
        Commands::Serve { .. } => commands::serve::execute(config).await,
        Commands::InitDb => commands::init_db::execute(&config),
    }
}
