// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use eagleboard_api::BoardClient;
use eagleboard_core::APP_NAME;
use futures::{FutureExt, future::LocalBoxFuture};
use tracing_subscriber::EnvFilter;

use crate::cmd_board::CmdBoard;
use crate::cmd_event::{CmdEventList, CmdEventNew};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_info::CmdInfo;
use crate::cmd_tui::CmdTui;
use crate::config::parse_config;

/// Run the EagleBoard command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                eprintln!("{} {}", "Error:".red(), e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(2);
        }
    }
    Ok(())
}

/// Logs go to stderr, filtered by `RUST_LOG`. Only errors by default, so
/// nothing is drawn over the terminal UI.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Overrides the API base URL from the configuration
    pub api_url: Option<String>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("EagleBoard - the campus event bulletin board, in your terminal.")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to board
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/eagleboard/config.toml on Linux and \
MacOS, %LOCALAPPDATA%/eagleboard/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .arg(
                arg!(--"api-url" <URL> "Base URL of the event API")
                    .value_hint(ValueHint::Url)
                    .global(true),
            )
            .subcommand(CmdBoard::command())
            .subcommand(CmdTui::command())
            .subcommand(
                Command::new("event")
                    .alias("e")
                    .about("List and add events")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdEventNew::command())
                    .subcommand(CmdEventList::command()),
            )
            .subcommand(CmdEventNew::command())
            .subcommand(CmdInfo::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdBoard::NAME, matches)) => Board(CmdBoard::from(matches)),
            Some((CmdTui::NAME, matches)) => Tui(CmdTui::from(matches)),
            Some(("event", matches)) => match matches.subcommand() {
                Some((CmdEventNew::NAME, matches)) => EventNew(CmdEventNew::from(matches)),
                Some((CmdEventList::NAME, matches)) => EventList(CmdEventList::from(matches)),
                _ => unreachable!(),
            },
            Some((CmdEventNew::NAME, matches)) => EventNew(CmdEventNew::from(matches)),
            Some((CmdInfo::NAME, matches)) => Info(CmdInfo::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Board(CmdBoard),
            _ => unreachable!(),
        };

        // global args are visible from the top-level matches too
        let config = matches.get_one("config").cloned();
        let api_url = matches.get_one("api-url").cloned();
        Ok(Cli {
            config,
            api_url,
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config, self.api_url).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Print the board
    Board(CmdBoard),

    /// Interactive board
    Tui(CmdTui),

    /// Add an event
    EventNew(CmdEventNew),

    /// List events
    EventList(CmdEventList),

    /// Show the server banner
    Info(CmdInfo),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(
        self,
        config: Option<PathBuf>,
        api_url: Option<String>,
    ) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Board(a)     => Self::run_with(config, api_url, |b, c| a.run(b, c).boxed_local()).await,
            Tui(a)       => Self::run_with(config, api_url, |b, c| a.run(b, c).boxed_local()).await,
            EventNew(a)  => Self::run_with(config, api_url, |b, c| a.run(b, c).boxed_local()).await,
            EventList(a) => Self::run_with(config, api_url, |b, c| a.run(b, c).boxed_local()).await,
            Info(a)      => Self::run_with(config, api_url, |b, c| a.run(b, c).boxed_local()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(
        config: Option<PathBuf>,
        api_url: Option<String>,
        f: F,
    ) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(
            &'a mut eagleboard_core::Board,
            &'a BoardClient,
        ) -> LocalBoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let mut config = parse_config(config).await?;
        if let Some(url) = api_url {
            config.api.base_url = url;
            config.normalize()?;
        }

        let api = BoardClient::new(config.api.clone())?;
        let mut board = eagleboard_core::Board::new(&config);
        f(&mut board, &api).await
    }
}
