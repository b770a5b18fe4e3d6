// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{ArgMatches, Command};
use colored::Colorize;
use eagleboard_api::{BoardClient, EventId, PosterFile};
use eagleboard_core::{Board, Draft, EMPTY_STATE_MESSAGE, SubmitOutcome};

use crate::arg::{CommonArgs, EventArgs};
use crate::event_formatter::{EventColumn, EventFormatter};
use crate::tui;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdEventNew {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub poster: Option<PathBuf>,

    pub tui: bool,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Add a new event")
            .long_about(
                "Add a new event. When any of title, description, date or location is missing, \
the event form opens with the given values filled in.",
            )
            .arg(EventArgs::title())
            .arg(EventArgs::description())
            .arg(EventArgs::date())
            .arg(EventArgs::location())
            .arg(EventArgs::poster())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let title = EventArgs::get_title(matches);
        let description = EventArgs::get_description(matches);
        let date = EventArgs::get_date(matches);
        let location = EventArgs::get_location(matches);

        let tui = title.is_none() || description.is_none() || date.is_none() || location.is_none();
        Self {
            title,
            description,
            date,
            location,
            poster: EventArgs::get_poster(matches),

            tui,
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, board: &mut Board, api: &BoardClient) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "adding new event...");
        let poster = match &self.poster {
            Some(path) => Some(PosterFile::from_path(path).await?),
            None => None,
        };

        board.open_modal();
        if let Some(draft) = board.modal_mut().edit() {
            self.fill(draft);
            if poster.is_some() {
                draft.set_poster(poster);
            }
        }

        let outcome = if self.tui {
            match tui::add_event(board, api, self.poster.as_deref()).await? {
                Some(outcome) => outcome,
                None => {
                    tracing::info!("user cancel the event creation");
                    return Ok(());
                }
            }
        } else {
            board.submit(api).await?
        };

        match outcome {
            SubmitOutcome::Created(Some(event)) => {
                print_created(board, &event.id, self.output_format, self.verbose);
            }
            SubmitOutcome::Created(None) => println!("{}", "Event created.".green()),
            SubmitOutcome::Failed(message) => return Err(message.into()),
        }
        Ok(())
    }

    /// Copies the fields given on the command line into the draft.
    fn fill(&self, draft: &mut Draft) {
        if let Some(title) = &self.title {
            draft.set_title(title);
        }
        if let Some(description) = &self.description {
            draft.set_description(description);
        }
        if let Some(date) = &self.date {
            draft.set_event_date(date);
        }
        if let Some(location) = &self.location {
            draft.set_location(location);
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEventList {
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List events, earliest first")
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, board: &mut Board, api: &BoardClient) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        board.load(api).await;
        if let Some(error) = board.load_error() {
            return Err(error.into());
        }

        let cards = board.cards();
        if cards.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", EMPTY_STATE_MESSAGE.italic());
            return Ok(());
        }

        let formatter = EventFormatter::new(columns(self.verbose)).with_output_format(self.output_format);
        println!("{}", formatter.format(&cards));
        Ok(())
    }
}

fn columns(verbose: bool) -> Vec<EventColumn> {
    if verbose {
        vec![
            EventColumn::id(),
            EventColumn::when(),
            EventColumn::title(),
            EventColumn::location(),
            EventColumn::poster(),
        ]
    } else {
        vec![
            EventColumn::when(),
            EventColumn::title(),
            EventColumn::location(),
        ]
    }
}

fn print_created(board: &Board, id: &EventId, output_format: OutputFormat, verbose: bool) {
    let cards: Vec<_> = board.cards().into_iter().filter(|c| &c.id == id).collect();
    if cards.is_empty() {
        // the refreshed list may not include it yet
        println!("{} {}", "Event created:".green(), id);
        return;
    }

    let formatter = EventFormatter::new(columns(verbose)).with_output_format(output_format);
    println!("{}", formatter.format(&cards));
}
