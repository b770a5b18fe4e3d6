// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use eagleboard_core::{EMPTY_STATE_MESSAGE, EventCard, LoadStatus};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::tui::board_store::BoardStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_page::{SinglePage, instructions};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::event_modal::EventModalView;

const CARD_WIDTH: u16 = 40;
const CARD_HEIGHT: u16 = 7;
const MODAL_WIDTH: u16 = 72;

/// The board page: a grid of event cards with the add-event popup on top.
pub struct BoardView(SinglePage<BoardStore, BoardBody>);

impl BoardView {
    pub fn new() -> Self {
        let hints = instructions(&[
            ("Add Event", "<a>"),
            ("Reload", "<r>"),
            ("Scroll", "<Up/Down>"),
            ("Quit", "<q>"),
        ]);
        Self(SinglePage::new("EagleBoard", hints, BoardBody::new()))
    }

    /// Brings focus in line with the store after it changed outside a key
    /// handler, e.g. the modal closing after a successful submission.
    pub fn sync(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<BoardStore>) {
        self.0.inner_mut().sync(dispatcher, store);
    }
}

impl Component<BoardStore> for BoardView {
    fn render(&self, store: &RefCell<BoardStore>, area: Rect, buf: &mut Buffer) {
        self.0.render(store, area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<BoardStore>, area: Rect) -> Option<(u16, u16)> {
        self.0.get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<BoardStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        self.0.on_key(dispatcher, store, area, event)
    }
}

pub struct BoardBody {
    modal: EventModalView,
    modal_active: bool,
    /// First visible row of cards.
    scroll: usize,
}

impl BoardBody {
    fn new() -> Self {
        Self {
            modal: EventModalView::new(),
            modal_active: false,
            scroll: 0,
        }
    }

    fn sync(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<BoardStore>) {
        let open = store.borrow().board.modal().is_open();
        match (open, self.modal_active) {
            (true, false) => {
                self.modal.reset(dispatcher, store);
                self.modal.activate(dispatcher, store);
                self.modal_active = true;
            }
            (false, true) => {
                self.modal.deactivate(dispatcher, store);
                self.modal_active = false;
            }
            _ => {}
        }
    }

    fn split(store: &RefCell<BoardStore>, area: Rect) -> [Rect; 2] {
        let banner = u16::from(!matches!(store.borrow().board.status(), LoadStatus::Loaded));
        Layout::vertical([Constraint::Length(banner), Constraint::Fill(1)]).areas(area)
    }

    fn modal_area(&self, area: Rect) -> Rect {
        let width = area.width.min(MODAL_WIDTH);
        let height = area.height.min(self.modal.height());
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }

    fn max_scroll(store: &RefCell<BoardStore>, area: Rect) -> usize {
        let [_, grid] = Self::split(store, area);
        let (columns, visible_rows) = grid_shape(grid);
        let rows = store.borrow().board.events().len().div_ceil(columns);
        rows.saturating_sub(visible_rows)
    }
}

impl Component<BoardStore> for BoardBody {
    fn render(&self, store: &RefCell<BoardStore>, area: Rect, buf: &mut Buffer) {
        let [banner_area, grid_area] = Self::split(store, area);
        {
            let store = store.borrow();
            let board = &store.board;
            let banner = match board.status() {
                LoadStatus::Idle => Some(Line::from("Loading events...".italic())),
                LoadStatus::Failed(error) => {
                    Some(Line::from(format!("Could not load events: {error}").red()))
                }
                LoadStatus::Loaded => None,
            };
            if let Some(banner) = banner {
                Paragraph::new(banner).render(banner_area, buf);
            }

            let cards = board.cards();
            if cards.is_empty() {
                if board.status() != &LoadStatus::Idle {
                    render_empty_state(grid_area, buf);
                }
            } else {
                render_grid(&cards, self.scroll, grid_area, buf);
            }
        }

        if store.borrow().board.modal().is_open() {
            let modal_area = self.modal_area(area);
            Clear.render(modal_area, buf);
            self.modal.render(store, modal_area, buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<BoardStore>, area: Rect) -> Option<(u16, u16)> {
        if !self.modal_active {
            return None;
        }
        self.modal.get_cursor_position(store, self.modal_area(area))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<BoardStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if self.modal_active {
            let msg = self
                .modal
                .on_key(dispatcher, store, self.modal_area(area), event);
            self.sync(dispatcher, store);
            // the board underneath never sees keys while the popup is up
            return msg.or(Some(Message::Handled));
        }

        match event.code {
            KeyCode::Char('a') => {
                dispatcher.dispatch(Action::OpenModal);
                self.sync(dispatcher, store);
                Some(Message::CursorUpdated)
            }
            KeyCode::Char('r') => {
                dispatcher.dispatch(Action::Reload);
                Some(Message::Handled)
            }
            KeyCode::Char('q') => Some(Message::Exit),
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = (self.scroll + 1).min(Self::max_scroll(store, area));
                Some(Message::Handled)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                Some(Message::Handled)
            }
            _ => None,
        }
    }
}

/// Number of card columns and fully visible card rows that fit in `area`.
fn grid_shape(area: Rect) -> (usize, usize) {
    let columns = (area.width / CARD_WIDTH).max(1);
    let rows = area.height / CARD_HEIGHT;
    (usize::from(columns), usize::from(rows))
}

fn render_grid(cards: &[EventCard], scroll: usize, area: Rect, buf: &mut Buffer) {
    let (columns, visible_rows) = grid_shape(area);
    let card_width = area.width / columns as u16;

    for (i, card) in cards.iter().enumerate().skip(scroll * columns) {
        let row = i / columns - scroll;
        if row >= visible_rows {
            break;
        }

        let col = i % columns;
        let rect = Rect::new(
            area.x + col as u16 * card_width,
            area.y + row as u16 * CARD_HEIGHT,
            card_width,
            CARD_HEIGHT,
        );
        render_card(card, rect, buf);
    }
}

fn render_card(card: &EventCard, area: Rect, buf: &mut Buffer) {
    let block = Block::bordered()
        .border_set(border::ROUNDED)
        .title(Line::from(format!(" {} ", card.title).bold()));

    let mut lines = vec![
        Line::from(card.when.as_str().cyan()),
        Line::from(card.location.as_str()),
    ];
    if let Some(url) = &card.poster_url {
        lines.push(Line::from(url.as_str().dark_gray()));
    }
    // last, so a long description is what gets cut off
    lines.push(Line::from(card.description.as_str().italic()));

    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

fn render_empty_state(area: Rect, buf: &mut Buffer) {
    let [middle] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    Paragraph::new(EMPTY_STATE_MESSAGE.italic())
        .centered()
        .render(middle, buf);
}
