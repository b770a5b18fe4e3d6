// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, path::Path, rc::Rc};

use chrono::{Local, TimeZone};
use eagleboard_api::{EventSubmission, PosterFile};
use eagleboard_core::{Board, EventApi, SubmitOutcome};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;

use crate::tui::board_store::{BoardStore, Request};
use crate::tui::board_view::BoardView;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Browse the board until the user quits.
    Board,
    /// Leave as soon as the modal closes.
    AddEvent,
}

/// Shows the interactive board.
pub async fn run_board<A>(board: &mut Board, api: &A) -> Result<(), Box<dyn Error>>
where
    A: EventApi + ?Sized,
{
    board.load(api).await;
    run(board, api, Mode::Board, String::new()).await?;
    Ok(())
}

/// Opens the add-event modal over the board and returns once it closes.
/// `None` means the user cancelled.
pub async fn add_event<A>(
    board: &mut Board,
    api: &A,
    poster: Option<&Path>,
) -> Result<Option<SubmitOutcome>, Box<dyn Error>>
where
    A: EventApi + ?Sized,
{
    board.open_modal();
    board.load(api).await;
    let poster_path = poster.map(|p| p.display().to_string()).unwrap_or_default();
    run(board, api, Mode::AddEvent, poster_path).await
}

async fn run<A>(
    board: &mut Board,
    api: &A,
    mode: Mode,
    poster_path: String,
) -> Result<Option<SubmitOutcome>, Box<dyn Error>>
where
    A: EventApi + ?Sized,
{
    let mut store = BoardStore::new(board.clone());
    store.poster_path = poster_path;
    let store = Rc::new(RefCell::new(store));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        BoardStore::register_to(store.clone(), &mut dispatcher);
        let mut view = BoardView::new();
        view.sync(&mut dispatcher, &store);

        event_loop(&mut terminal, &mut view, &mut dispatcher, &store, api, mode).await
    }; // release dispatcher and view here to avoid borrow conflicts
    ratatui::restore();
    let outcome = result?;

    let owned_store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    *board = owned_store.board;
    Ok(outcome)
}

async fn event_loop<A>(
    terminal: &mut DefaultTerminal,
    view: &mut BoardView,
    dispatcher: &mut Dispatcher,
    store: &RefCell<BoardStore>,
    api: &A,
    mode: Mode,
) -> Result<Option<SubmitOutcome>, Box<dyn Error>>
where
    A: EventApi + ?Sized,
{
    loop {
        let area = draw(terminal, view, store)?;
        if mode == Mode::AddEvent && !store.borrow().board.modal().is_open() {
            tracing::info!("user cancel the event creation");
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(Message::Exit) = view.on_key(dispatcher, store, area, key) {
                    return Ok(None);
                }
            }
            _ => continue, // resize and friends only need a redraw
        }

        let request = store.borrow_mut().take_request();
        match request {
            Some(Request::Reload) => reload(store, api).await,
            Some(Request::Submit) => {
                let outcome = match start_submit(store, &Local) {
                    Some(submission) => {
                        draw(terminal, view, store)?; // busy label
                        Some(complete_submit(store, api, submission).await)
                    }
                    None => None,
                };
                view.sync(dispatcher, store);
                if mode == Mode::AddEvent && matches!(outcome, Some(SubmitOutcome::Created(_))) {
                    return Ok(outcome);
                }
            }
            None => {}
        }
    }
}

fn draw(
    terminal: &mut DefaultTerminal,
    view: &BoardView,
    store: &RefCell<BoardStore>,
) -> Result<Rect, Box<dyn Error>> {
    let completed = terminal.draw(|frame| {
        let area = frame.area();
        view.render(store, area, frame.buffer_mut());
        if let Some((x, y)) = view.get_cursor_position(store, area) {
            frame.set_cursor_position((x, y));
        }
    })?;
    Ok(completed.area)
}

/// Validates the draft and enters the busy state. `None` when validation
/// stopped it; the modal then shows why.
fn start_submit<Tz: TimeZone>(store: &RefCell<BoardStore>, tz: &Tz) -> Option<EventSubmission> {
    match store.borrow_mut().board.begin_submit_in(tz) {
        Ok(submission) => Some(submission),
        Err(e) => {
            tracing::debug!(error = %e, "submission not started");
            None
        }
    }
}

/// Attaches the poster, uploads, and on success refreshes the board once.
async fn complete_submit<A>(
    store: &RefCell<BoardStore>,
    api: &A,
    mut submission: EventSubmission,
) -> SubmitOutcome
where
    A: EventApi + ?Sized,
{
    // the path field is the source of truth for the poster
    let poster_path = store.borrow().poster_path.trim().to_string();
    submission.poster = None;
    if !poster_path.is_empty() {
        match PosterFile::from_path(Path::new(&poster_path)).await {
            Ok(poster) => submission.poster = Some(poster),
            Err(e) => {
                tracing::warn!(error = %e, path = %poster_path, "failed to read poster");
                let message = e.to_string();
                store.borrow_mut().board.modal_mut().fail(message.clone());
                return SubmitOutcome::Failed(message);
            }
        }
    }

    let result = api.create_event(submission).await;
    let outcome = store.borrow_mut().board.finish_submit(result);
    if matches!(outcome, SubmitOutcome::Created(_)) {
        store.borrow_mut().poster_path.clear();
        reload(store, api).await;
    }
    outcome
}

async fn reload<A>(store: &RefCell<BoardStore>, api: &A)
where
    A: EventApi + ?Sized,
{
    let result = api.list_events().await;
    store.borrow_mut().board.apply_loaded(result);
}
