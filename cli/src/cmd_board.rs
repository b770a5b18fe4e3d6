// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use eagleboard_api::BoardClient;
use eagleboard_core::{Board, EMPTY_STATE_MESSAGE, EventCard};

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdBoard;

impl CmdBoard {
    pub const NAME: &str = "board";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("Print the event board, earliest event first")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdBoard
    }

    pub async fn run(self, board: &mut Board, api: &BoardClient) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "printing board...");
        board.load(api).await;
        print!("{}", render(board, &board.cards()));
        Ok(())
    }
}

/// Renders the board as plain text: header, optional error line, then the
/// cards or the empty-state message.
fn render(board: &Board, cards: &[EventCard]) -> String {
    let mut out = format!("📌 {}\n", "Campus Events".bold());

    if let Some(error) = board.load_error() {
        out.push_str(&format!("{} {}\n", "Error:".red(), error));
    }

    if cards.is_empty() {
        out.push_str(&format!("{}\n", EMPTY_STATE_MESSAGE.italic()));
        return out;
    }

    for card in cards {
        out.push('\n');
        out.push_str(&format!(" {} {}\n", "►".green(), card.title.bold()));
        out.push_str(&format!("   {}\n", card.when.cyan()));
        out.push_str(&format!("   {}\n", card.location));
        if !card.description.is_empty() {
            out.push_str(&format!("   {}\n", card.description));
        }
        if let Some(url) = &card.poster_url {
            out.push_str(&format!("   {}\n", url.dimmed()));
        }
    }
    out
}
