// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, marker::PhantomData};

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::Block;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;

/// A full-screen frame around one component. Esc leaves the page.
pub struct SinglePage<S, C: Component<S>> {
    title: String,
    instructions: Line<'static>,
    inner: C,
    _phantom: PhantomData<S>,
}

impl<S, C: Component<S>> SinglePage<S, C> {
    pub fn new(title: impl ToString, instructions: Line<'static>, inner: C) -> Self {
        Self {
            title: title.to_string(),
            instructions,
            inner,
            _phantom: PhantomData,
        }
    }

    fn block(&self) -> Block<'_> {
        Block::bordered().border_set(border::ROUNDED)
    }
}

impl<S, C: Component<S>> Component<S> for SinglePage<S, C> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let title = Line::from(format!(" {} ", self.title).bold());
        let block = self
            .block()
            .title(title.centered())
            .title_bottom(self.instructions.clone().centered())
            .white();

        let inner_area = block.inner(area);
        block.render(area, buf);
        self.inner.render(store, inner_area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        let inner_area = self.block().inner(area);
        self.inner.get_cursor_position(store, inner_area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let inner_area = self.block().inner(area);
        if let Some(msg) = self.inner.on_key(dispatcher, store, inner_area, event) {
            return Some(msg);
        }

        match event.code {
            KeyCode::Esc => Some(Message::Exit),
            _ => None,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.inner.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.inner.deactivate(dispatcher, store);
    }
}

/// Renders `(label, key)` pairs as a bottom bar, e.g. ` Next <Tab>`.
pub fn instructions(pairs: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (label, key) in pairs {
        spans.push(format!(" {label} ").into());
        spans.push(format!("<{key}>").blue().bold());
    }
    spans.push(" ".into());
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use ratatui::crossterm::event::KeyModifiers;

    use super::*;
    use crate::tui::testing::buffer_lines;

    struct Blank;

    impl Component<()> for Blank {
        fn render(&self, _: &RefCell<()>, area: Rect, buf: &mut Buffer) {
            Line::from("body").render(area, buf);
        }

        fn get_cursor_position(&self, _: &RefCell<()>, area: Rect) -> Option<(u16, u16)> {
            Some((area.x, area.y))
        }
    }

    #[test]
    fn test_page_frames_inner_component() {
        let store = RefCell::new(());
        let page = SinglePage::new("Demo", instructions(&[("Exit", "Esc")]), Blank);

        let area = Rect::new(0, 0, 24, 4);
        let mut buf = Buffer::empty(area);
        page.render(&store, area, &mut buf);
        let lines = buffer_lines(&buf);
        assert!(lines[0].contains(" Demo "), "{:?}", lines[0]);
        assert!(lines[1].starts_with("│body"), "{:?}", lines[1]);
        assert!(lines[3].contains(" Exit <Esc> "), "{:?}", lines[3]);
        assert_eq!(page.get_cursor_position(&store, area), Some((1, 1)));
    }

    #[test]
    fn test_page_exits_on_esc() {
        let store = RefCell::new(());
        let mut dispatcher = Dispatcher::new();
        let mut page = SinglePage::new("Demo", instructions(&[]), Blank);

        let area = Rect::new(0, 0, 24, 4);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let other = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(page.on_key(&mut dispatcher, &store, area, esc), Some(Message::Exit));
        assert_eq!(page.on_key(&mut dispatcher, &store, area, other), None);
    }
}
