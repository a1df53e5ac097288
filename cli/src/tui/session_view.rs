// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use postplan_core::Platform;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::Block;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher, Pane};
use crate::tui::post_editor::PostEditor;
use crate::tui::post_list::PostList;
use crate::tui::session_store::SessionStore;

/// The editor and the post list side by side. F2 or Ctrl-L switches panes.
pub struct SessionView {
    editor: PostEditor,
    list: PostList,
}

impl SessionView {
    pub fn new(platforms: &[Platform]) -> Self {
        Self {
            editor: PostEditor::new(platforms),
            list: PostList::new(),
        }
    }

    fn split(area: Rect) -> (Rect, Rect) {
        let [editor, list] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);
        (editor, list)
    }

    fn block(title: String, focused: bool) -> Block<'static> {
        let color = match focused {
            true => Color::Blue,
            false => Color::DarkGray,
        };
        Block::bordered()
            .title(title)
            .border_style(Style::new().fg(color))
    }

    fn switch(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<SessionStore>) {
        let focus = store.borrow().focus;
        match focus {
            Pane::Editor => {
                self.editor.deactivate(dispatcher, store);
                dispatcher.dispatch(Action::Focus(Pane::List));
            }
            Pane::List => {
                dispatcher.dispatch(Action::Focus(Pane::Editor));
                self.editor.activate(dispatcher, store);
            }
        }
    }
}

impl Component<SessionStore> for SessionView {
    fn render(&self, store: &RefCell<SessionStore>, area: Rect, buf: &mut Buffer) {
        let (editor_area, list_area) = Self::split(area);
        let (focus, count) = {
            let store = store.borrow();
            (store.focus, store.scheduler.list().len())
        };

        let block = Self::block(" New Post ".to_owned(), focus == Pane::Editor);
        let inner = block.inner(editor_area);
        block.render(editor_area, buf);
        self.editor.render(store, inner, buf);

        let block = Self::block(format!(" Scheduled ({count}) "), focus == Pane::List);
        let inner = block.inner(list_area);
        block.render(list_area, buf);
        self.list.render(store, inner, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<SessionStore>, area: Rect) -> Option<(u16, u16)> {
        if store.borrow().focus != Pane::Editor {
            return None;
        }

        let (editor_area, _) = Self::split(area);
        let inner = Block::bordered().inner(editor_area);
        self.editor.get_cursor_position(store, inner)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<SessionStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let switch = event.code == KeyCode::F(2)
            || (event.code == KeyCode::Char('l') && event.modifiers.contains(KeyModifiers::CONTROL));
        if switch {
            self.switch(dispatcher, store);
            return Some(Message::CursorUpdated);
        }

        let (editor_area, list_area) = Self::split(area);
        let focus = store.borrow().focus;
        match focus {
            Pane::Editor => {
                let inner = Block::bordered().inner(editor_area);
                self.editor.on_key(dispatcher, store, inner, event)
            }
            Pane::List => {
                let inner = Block::bordered().inner(list_area);
                self.list.on_key(dispatcher, store, inner, event)
            }
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<SessionStore>) {
        if store.borrow().focus == Pane::Editor {
            self.editor.activate(dispatcher, store);
        }
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<SessionStore>) {
        self.editor.deactivate(dispatcher, store);
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use postplan_core::{Config, Scheduler};

    use super::*;
    use crate::tui::testing::buffer_lines;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 24,
    };

    fn setup() -> (Rc<RefCell<SessionStore>>, Dispatcher, SessionView) {
        let scheduler = Scheduler::new(Config::default()).unwrap();
        let store = Rc::new(RefCell::new(SessionStore::new(scheduler)));
        let mut dispatcher = Dispatcher::new();
        SessionStore::register_to(store.clone(), &mut dispatcher);

        let mut view = SessionView::new(&Platform::ALL);
        view.activate(&mut dispatcher, &store);
        (store, dispatcher, view)
    }

    fn press(
        view: &mut SessionView,
        dispatcher: &mut Dispatcher,
        store: &RefCell<SessionStore>,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> Option<Message> {
        view.on_key(dispatcher, store, AREA, KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_render_both_panes() {
        let (store, _, view) = setup();
        let mut buf = Buffer::empty(AREA);
        view.render(&store, AREA, &mut buf);

        let lines = buffer_lines(&buf);
        assert!(lines[0].contains(" New Post "), "{:?}", lines[0]);
        assert!(lines[0].contains(" Scheduled (0) "), "{:?}", lines[0]);
        assert!(lines[1].contains("No posts scheduled"), "{:?}", lines[1]);
    }

    #[test]
    fn test_keys_follow_focus() {
        let (store, mut dispatcher, mut view) = setup();
        assert!(view.get_cursor_position(&store, AREA).is_some());

        press(&mut view, &mut dispatcher, &store, KeyCode::Char('d'), KeyModifiers::NONE);
        assert_eq!(store.borrow().scheduler.draft().title, "d");

        let msg = press(&mut view, &mut dispatcher, &store, KeyCode::F(2), KeyModifiers::NONE);
        assert_eq!(msg, Some(Message::CursorUpdated));
        assert_eq!(store.borrow().focus, Pane::List);
        assert_eq!(view.get_cursor_position(&store, AREA), None);

        // In the list, `d` removes instead of typing
        press(&mut view, &mut dispatcher, &store, KeyCode::Char('d'), KeyModifiers::NONE);
        assert_eq!(store.borrow().scheduler.draft().title, "d");

        press(&mut view, &mut dispatcher, &store, KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert_eq!(store.borrow().focus, Pane::Editor);
        press(&mut view, &mut dispatcher, &store, KeyCode::Char('e'), KeyModifiers::NONE);
        assert_eq!(store.borrow().scheduler.draft().title, "de");
    }
}
