// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use eagleboard_api::format_timestamp;
use eagleboard_core::EventCard;
use serde::Serialize;

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::{OutputFormat, truncate_to_width};

const MAX_TITLE_WIDTH: usize = 40;

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(columns: Vec<EventColumn>) -> Self {
        Self {
            columns,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, cards: &'a [EventCard]) -> Display<'a> {
        Display {
            cards,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    cards: &'a [EventCard],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let rows: Vec<JsonEvent<'_>> = self.cards.iter().map(JsonEvent::from).collect();
                let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            OutputFormat::Table => write!(f, "{}", Table::new(&self.formatter.columns, self.cards)),
        }
    }
}

/// JSON keeps every field regardless of the selected columns.
#[derive(Debug, Serialize)]
struct JsonEvent<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    location: &'a str,
    event_date: String,
    poster_url: Option<&'a str>,
}

impl<'a> From<&'a EventCard> for JsonEvent<'a> {
    fn from(card: &'a EventCard) -> Self {
        Self {
            id: card.id.as_str(),
            title: &card.title,
            description: &card.description,
            location: &card.location,
            event_date: format_timestamp(&card.event_date),
            poster_url: card.poster_url.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColumn {
    Id,
    When,
    Title,
    Location,
    Poster,
}

impl EventColumn {
    pub fn id() -> Self {
        Self::Id
    }

    pub fn when() -> Self {
        Self::When
    }

    pub fn title() -> Self {
        Self::Title
    }

    pub fn location() -> Self {
        Self::Location
    }

    pub fn poster() -> Self {
        Self::Poster
    }
}

impl TableColumn<EventCard> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventColumn::Id => "ID",
            EventColumn::When => "When",
            EventColumn::Title => "Title",
            EventColumn::Location => "Location",
            EventColumn::Poster => "Poster",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a EventCard) -> Cow<'a, str> {
        match self {
            EventColumn::Id => data.id.as_str().into(),
            EventColumn::When => data.when.as_str().into(),
            EventColumn::Title => truncate_to_width(&data.title, MAX_TITLE_WIDTH).into(),
            EventColumn::Location => data.location.as_str().into(),
            EventColumn::Poster => data.poster_url.as_deref().unwrap_or("-").into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, _data: &EventCard) -> Option<Color> {
        match self {
            EventColumn::When => Some(Color::Cyan),
            EventColumn::Poster => Some(Color::BrightBlack),
            _ => None,
        }
    }
}
