// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};

use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }

    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }
}

/// Fields of a new event, all optional on the command line.
#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn title() -> Arg {
        arg!(-t --title <TITLE> "Title of the event")
    }

    pub fn get_title(matches: &ArgMatches) -> Option<String> {
        matches.get_one("title").cloned()
    }

    pub fn description() -> Arg {
        arg!(-d --description <DESCRIPTION> "Description of the event")
    }

    pub fn get_description(matches: &ArgMatches) -> Option<String> {
        matches.get_one("description").cloned()
    }

    pub fn date() -> Arg {
        arg!(--date <DATE> "Local date and time of the event")
            .long_help("Local date and time of the event, e.g. \"2025-05-01 18:30\" or \"2025-05-01T18:30\"")
    }

    pub fn get_date(matches: &ArgMatches) -> Option<String> {
        matches.get_one("date").cloned()
    }

    pub fn location() -> Arg {
        arg!(-l --location <LOCATION> "Where the event takes place")
    }

    pub fn get_location(matches: &ArgMatches) -> Option<String> {
        matches.get_one("location").cloned()
    }

    pub fn poster() -> Arg {
        arg!(--poster <PATH> "Poster image to upload")
            .value_parser(value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    }

    pub fn get_poster(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one("poster").cloned()
    }
}
