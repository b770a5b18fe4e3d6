// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use eagleboard_core::{Board, DraftRetention};

use crate::tui::dispatcher::{Action, Dispatcher};

/// Work the key handlers cannot do themselves because it needs the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Reload,
    Submit,
}

#[derive(Debug)]
pub struct BoardStore {
    pub board: Board,

    /// Path of the poster image typed into the modal.
    pub poster_path: String,

    /// Set by key handlers, taken by the event loop.
    pub request: Option<Request>,
}

impl BoardStore {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            poster_path: String::new(),
            request: None,
        }
    }

    pub fn take_request(&mut self) -> Option<Request> {
        self.request.take()
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            let mut that = that.borrow_mut();
            match action {
                Action::OpenModal => that.board.open_modal(),
                Action::CloseModal => {
                    that.board.close_modal();
                    if !that.board.modal().is_open()
                        && that.board.draft_retention() == DraftRetention::Discard
                    {
                        that.poster_path.clear();
                    }
                }
                Action::UpdateField(field, v) => {
                    if let Some(draft) = that.board.modal_mut().edit() {
                        draft.set(*field, v.clone());
                    }
                }
                Action::UpdatePosterPath(v) => {
                    if that.board.modal_mut().edit().is_some() {
                        that.poster_path = v.clone();
                    }
                }
                Action::SubmitChanges => {
                    let modal = that.board.modal();
                    if modal.is_open() && !modal.is_submitting() {
                        that.request = Some(Request::Submit);
                    }
                }
                Action::Reload => that.request = Some(Request::Reload),
            }
        }));
        dispatcher.register(callback);
    }
}
