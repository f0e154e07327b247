use clap::{Parser, Subcommand, ValueEnum};
use marquee_config::MarqueeConfig;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages (default)
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(about = "marquee - movie catalog server backed by SQLite")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute (defaults to serve)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Set log level; overrides the config file and MARQUEE_LOG
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ~/.config/marquee/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite database file (overrides config file)
    #[arg(long, global = true)]
    pub db_path: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory of static front-end files
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Create the database schema and exit
    InitDb,
}

impl Cli {
    /// The subcommand to run, `serve` with no overrides when none was given
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve {
            host: None,
            port: None,
            static_dir: None,
        })
    }

    /// Explicit log level from flags, if any
    pub fn level_override(&self) -> Option<LevelFilter> {
        if self.verbose {
            return Some(LevelFilter::DEBUG);
        }
        self.log_level.map(LevelFilter::from)
    }

    /// Fold command-line overrides into the loaded configuration
    pub fn apply_to(&self, config: &mut MarqueeConfig) {
        if let Some(path) = &self.db_path {
            config.database.path = path.clone();
        }
        if let Some(Commands::Serve {
            host,
            port,
            static_dir,
        }) = &self.command
        {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
            if let Some(dir) = static_dir {
                config.server.static_dir = Some(dir.clone());
            }
        }
    }
}
