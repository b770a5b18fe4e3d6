// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line and terminal interface of EagleBoard.

mod arg;
mod cli;
mod cmd_board;
mod cmd_event;
mod cmd_generate_completion;
mod cmd_info;
mod cmd_tui;
mod config;
mod event_formatter;
mod table;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
