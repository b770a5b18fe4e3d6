// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use eagleboard_core::DraftField;
use ratatui::crossterm::event::KeyEvent;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::board_store::BoardStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, Form, FormItem, Input};
use crate::tui::component_page::{SinglePage, instructions};
use crate::tui::dispatcher::{Action, Dispatcher};

const STATUS_HEIGHT: u16 = 2;

/// The "Add Event" popup. `Esc` closes it without submitting.
pub struct EventModalView(SinglePage<BoardStore, ModalBody>);

impl EventModalView {
    pub fn new() -> Self {
        let hints = instructions(&[
            ("Next", "<Tab>"),
            ("Submit", "<Enter>"),
            ("Cancel", "<Esc>"),
        ]);
        Self(SinglePage::new("Add Event", hints, ModalBody::new()))
    }

    /// Height the popup wants, borders included.
    pub fn height(&self) -> u16 {
        self.0.inner().form.height() + STATUS_HEIGHT + 2
    }

    /// Puts focus back on the first field.
    pub fn reset(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<BoardStore>) {
        self.0.inner_mut().form.reset(dispatcher, store);
    }
}

impl Component<BoardStore> for EventModalView {
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
        match self.0.on_key(dispatcher, store, area, event) {
            Some(Message::Exit) => {
                dispatcher.dispatch(Action::CloseModal);
                Some(Message::Handled)
            }
            msg => msg,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<BoardStore>) {
        self.0.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<BoardStore>) {
        self.0.deactivate(dispatcher, store);
    }
}

pub struct ModalBody {
    form: Form<BoardStore, Box<dyn FormItem<BoardStore>>>,
}

impl ModalBody {
    fn new() -> Self {
        Self {
            form: Form::new(vec![
                Box::new(new_title()),
                Box::new(new_description()),
                Box::new(new_event_date()),
                Box::new(new_location()),
                Box::new(new_poster()),
            ]),
        }
    }

    fn split(&self, area: Rect) -> [Rect; 2] {
        Layout::vertical([Constraint::Length(self.form.height()), Constraint::Min(1)]).areas(area)
    }
}

impl Component<BoardStore> for ModalBody {
    fn render(&self, store: &RefCell<BoardStore>, area: Rect, buf: &mut Buffer) {
        let [form_area, status_area] = self.split(area);
        self.form.render(store, form_area, buf);

        let store = store.borrow();
        let modal = store.board.modal();
        let status = if modal.is_submitting() {
            Line::from("Submitting...".yellow().italic())
        } else if let Some(error) = modal.error() {
            Line::from(error.to_string().red())
        } else {
            Line::from("Poster is optional.".dark_gray())
        };
        Paragraph::new(status)
            .wrap(Wrap { trim: true })
            .render(status_area.inner(Margin::new(1, 0)), buf);
    }

    fn get_cursor_position(&self, store: &RefCell<BoardStore>, area: Rect) -> Option<(u16, u16)> {
        if store.borrow().board.modal().is_submitting() {
            return None;
        }

        let [form_area, _] = self.split(area);
        self.form.get_cursor_position(store, form_area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<BoardStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let [form_area, _] = self.split(area);
        self.form.on_key(dispatcher, store, form_area, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<BoardStore>) {
        self.form.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<BoardStore>) {
        self.form.deactivate(dispatcher, store);
    }
}

macro_rules! new_input {
    ($fn: ident, $title: expr, $acc: ident, $field: expr) => {
        fn $fn() -> Input<BoardStore, $acc> {
            Input::new($title)
        }

        struct $acc;

        impl Access<BoardStore, String> for $acc {
            fn get(store: &RefCell<BoardStore>) -> String {
                store
                    .borrow()
                    .board
                    .modal()
                    .draft()
                    .map(|d| d.get($field).to_string())
                    .unwrap_or_default()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
                dispatcher.dispatch(Action::UpdateField($field, value));
                true
            }
        }
    };
}

new_input!(new_title, DraftField::Title.label(), TitleAccess, DraftField::Title);
new_input!(
    new_description,
    DraftField::Description.label(),
    DescriptionAccess,
    DraftField::Description
);
new_input!(
    new_event_date,
    format!("{} (YYYY-MM-DD HH:MM)", DraftField::EventDate.label()),
    EventDateAccess,
    DraftField::EventDate
);
new_input!(
    new_location,
    DraftField::Location.label(),
    LocationAccess,
    DraftField::Location
);

fn new_poster() -> Input<BoardStore, PosterAccess> {
    Input::new("Poster (path to an image file)")
}

struct PosterAccess;

impl Access<BoardStore, String> for PosterAccess {
    fn get(store: &RefCell<BoardStore>) -> String {
        store.borrow().poster_path.clone()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
        dispatcher.dispatch(Action::UpdatePosterPath(value));
        true
    }
}
