mod browser;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod roster;
mod session;
mod student;
mod ui;
mod workers;

use crate::browser::Field;
use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::session::messages::SessionMessage;
use crate::session::{
    SessionSettings, SettingsOverrides, run_headless_mode, run_tui_mode, setup_session,
};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Roster deployment to read from: production or local.
    /// Defaults to CLASS_ROSTER_ENVIRONMENT, then production.
    #[arg(long, global = true, value_name = "ENV", value_parser = parse_environment)]
    env: Option<Environment>,

    /// Command to execute (browse when omitted)
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Args, Debug, Default)]
struct BrowseArgs {
    /// Roster endpoint to fetch instead of the configured one
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Initial search term
    #[arg(long, value_name = "TERM")]
    search: Option<String>,

    /// Open in Show All mode instead of the slideshow
    #[arg(long, default_value_t = false)]
    all: bool,

    /// Paint the dark background
    #[arg(long, default_value_t = false)]
    with_background: bool,

    /// Skip the splash screen
    #[arg(long, default_value_t = false)]
    no_splash: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse the roster in the terminal UI
    Browse(BrowseArgs),

    /// Print the roster to stdout and exit
    List {
        /// Roster endpoint to fetch instead of the configured one
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Only print students whose name contains TERM
        #[arg(long, value_name = "TERM")]
        search: Option<String>,

        /// Field to leave out; repeatable. One of: name, image,
        /// personal-statement, personal-background, professional-background,
        /// academic-background, subject-background, primary-computer, courses
        #[arg(long, value_name = "FIELD")]
        hide: Vec<Field>,
    },
}

fn parse_environment(s: &str) -> Result<Environment, String> {
    s.parse::<Environment>()
        .map_err(|_| format!("unknown environment '{}', expected production or local", s))
}

/// Reads `~/.class-roster/config.json`; problems are reported and the defaults used.
fn load_config() -> Config {
    let loaded = get_config_path().and_then(|path| {
        log::debug!("Reading config from {}", path.display());
        Config::load_or_default(&path)
    });
    match loaded {
        Ok(config) => config,
        Err(e) => {
            SessionMessage::warn(format!("Ignoring config file: {}", e)).print();
            Config::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_from_env();

    let args = Args::parse();
    let environment = args.env.unwrap_or_else(|| {
        std::env::var("CLASS_ROSTER_ENVIRONMENT")
            .unwrap_or_default()
            .parse::<Environment>()
            .unwrap_or_default()
    });
    let config = load_config();

    match args.command.unwrap_or(Command::Browse(BrowseArgs::default())) {
        Command::Browse(browse) => {
            let overrides = SettingsOverrides {
                roster_url: browse.url,
                search_term: browse.search,
                show_all: browse.all,
                hidden_fields: Vec::new(),
            };
            let settings = SessionSettings::resolve(&config, environment, overrides);
            let session = setup_session(settings)?;
            run_tui_mode(session, browse.with_background, !browse.no_splash).await
        }
        Command::List { url, search, hide } => {
            let overrides = SettingsOverrides {
                roster_url: url,
                search_term: search,
                show_all: true,
                hidden_fields: hide,
            };
            let settings = SessionSettings::resolve(&config, environment, overrides);
            let session = setup_session(settings)?;
            run_headless_mode(session).await
        }
    }
}
