// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use eagleboard_api::BoardClient;
use eagleboard_core::Board;

use crate::arg::CommonArgs;
use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdInfo {
    pub output_format: OutputFormat,
}

impl CmdInfo {
    pub const NAME: &str = "info";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Check that the event server is reachable")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, _board: &mut Board, api: &BoardClient) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "fetching server info...");
        let info = api.info().await?;
        match self.output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&info)?),
            OutputFormat::Table => {
                println!("{} {}", "Server:".bold(), api.base_url());
                println!("{} {}", "Message:".bold(), info.message);
                if let Some(version) = &info.version {
                    println!("{} {}", "Version:".bold(), version);
                }
            }
        }
        Ok(())
    }
}
