// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc};

use postplan_core::{PostId, Scheduler};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::prelude::*;

use crate::tui::component::{Component, Message};
use crate::tui::component_page::{SinglePage, instructions};
use crate::tui::dispatcher::Dispatcher;
use crate::tui::post_editor::PostEditor;
use crate::tui::session_store::SessionStore;
use crate::tui::session_view::SessionView;

/// Runs the full session: the editor next to the list of scheduled posts.
pub fn run_session(scheduler: &mut Scheduler) -> Result<(), Box<dyn Error>> {
    let view = SessionView::new(&scheduler.config().platforms);
    let page = SinglePage::new(
        "postplan",
        instructions(&[
            ("Next", "Tab"),
            ("Schedule", "Enter"),
            ("Switch", "F2"),
            ("Delete", "d"),
            ("Exit", "Esc"),
        ]),
        view,
    );

    let result = run_app(scheduler, page);
    scheduler.discard_draft();
    result.map(|_| ())
}

/// Edits a single draft until it is scheduled or the page is left.
pub fn draft_post(scheduler: &mut Scheduler) -> Result<Option<PostId>, Box<dyn Error>> {
    let editor = PostEditor::new(&scheduler.config().platforms).exit_on_submit();
    let page = SinglePage::new(
        "New Post",
        instructions(&[
            ("Prev", "Up"),
            ("Next", "Down"),
            ("Toggle", "Space"),
            ("Schedule", "Enter"),
            ("Exit", "Esc"),
        ]),
        editor,
    );

    let result = run_app(scheduler, page);
    let id = result.as_ref().ok().and_then(|a| a.last().copied());
    if id.is_none() {
        scheduler.discard_draft();
    }
    result.map(|_| id)
}

fn run_app<C: Component<SessionStore>>(
    scheduler: &mut Scheduler,
    root: C,
) -> Result<Vec<PostId>, Box<dyn Error>> {
    with_store(scheduler, |store| {
        let mut terminal = ratatui::init();
        let result = {
            let mut dispatcher = Dispatcher::new();
            SessionStore::register_to(store.clone(), &mut dispatcher);
            let mut app = App::new(dispatcher, root, store);

            loop {
                if let Err(e) = app.draw(store, &mut terminal) {
                    break Err(e);
                }

                match app.read_event(store) {
                    Err(e) => break Err(e),
                    Ok(Some(Message::Exit)) => break Ok(()),
                    Ok(_) => {} // Render the next frame
                }
            }
        }; // release the dispatcher, it holds a store reference
        ratatui::restore();
        result
    })
}

/// Lends the session to a [`SessionStore`] and puts it back afterwards, also
/// when `f` fails. Returns the posts submitted through the store.
fn with_store(
    scheduler: &mut Scheduler,
    f: impl FnOnce(&Rc<RefCell<SessionStore>>) -> Result<(), Box<dyn Error>>,
) -> Result<Vec<PostId>, Box<dyn Error>> {
    let store = Rc::new(RefCell::new(SessionStore::new(scheduler.take())));
    let result = f(&store);

    let (owned, submitted) = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner()
        .into_parts();
    *scheduler = owned;
    result?;
    Ok(submitted)
}

struct App<C: Component<SessionStore>> {
    dispatcher: Dispatcher,
    root: C,
    area: Rect,
}

impl<C: Component<SessionStore>> App<C> {
    fn new(mut dispatcher: Dispatcher, mut root: C, store: &RefCell<SessionStore>) -> Self {
        root.activate(&mut dispatcher, store);
        Self {
            dispatcher,
            root,
            area: Rect::default(),
        }
    }

    fn draw(
        &mut self,
        store: &RefCell<SessionStore>,
        terminal: &mut DefaultTerminal,
    ) -> Result<(), Box<dyn Error>> {
        terminal.draw(|frame| {
            self.area = frame.area();
            self.root.render(store, self.area, frame.buffer_mut());
            if let Some(position) = self.root.get_cursor_position(store, self.area) {
                frame.set_cursor_position(position);
            }
        })?;
        Ok(())
    }

    fn read_event(
        &mut self,
        store: &RefCell<SessionStore>,
    ) -> Result<Option<Message>, Box<dyn Error>> {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(self.root.on_key(&mut self.dispatcher, store, self.area, key))
            }
            _ => Ok(None),
        }
    }
}
