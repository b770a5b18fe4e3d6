// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Commands that go straight into the terminal UI.

use std::error::Error;

use clap::{ArgMatches, Command};
use eagleboard_api::BoardClient;
use eagleboard_core::Board;

use crate::tui;

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdTui;

impl CmdTui {
    pub const NAME: &str = "tui";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ui")
            .about("Browse the board and add events interactively")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdTui
    }

    pub async fn run(self, board: &mut Board, api: &BoardClient) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "starting board tui...");
        tui::run_board(board, api).await
    }
}
