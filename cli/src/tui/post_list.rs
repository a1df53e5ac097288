// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use jiff::civil::DateTime;
use postplan_core::{SchedulePosition, ScheduledPost};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher, Pane};
use crate::tui::session_store::SessionStore;

const EMPTY_MESSAGE: &str = "No posts scheduled. Create your first post!";

/// The scheduled posts, newest last. Up and Down select, `d` or Delete removes.
#[derive(Debug, Default)]
pub struct PostList {
    /// Fixed clock, the wall clock if unset.
    now: Option<DateTime>,
}

impl PostList {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn with_now(now: DateTime) -> Self {
        Self { now: Some(now) }
    }

    fn now(&self) -> DateTime {
        self.now.unwrap_or_else(crate::util::now)
    }
}

impl Component<SessionStore> for PostList {
    fn render(&self, store: &RefCell<SessionStore>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let posts = store.scheduler.list();
        if posts.is_empty() {
            Paragraph::new(EMPTY_MESSAGE)
                .dark_gray()
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(area, buf);
            return;
        }

        let now = self.now();
        let items: Vec<ListItem> = posts
            .iter()
            .map(|post| {
                let image = post.image().and_then(|h| store.scheduler.images().resolve(h));
                post_item(post, image.map(|p| p.display().to_string()), now)
            })
            .collect();

        let focused = store.focus == Pane::List;
        let list = List::new(items).highlight_style(match focused {
            true => Style::new().add_modifier(Modifier::REVERSED),
            false => Style::new(),
        });
        let mut state = ListState::default().with_selected(Some(store.selected));
        StatefulWidget::render(list, area, buf, &mut state);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<SessionStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let (selected, id) = {
            let store = store.borrow();
            let id = store.scheduler.list().get(store.selected).map(|a| a.id());
            (store.selected, id)
        };

        match event.code {
            KeyCode::Up | KeyCode::Char('k') => {
                dispatcher.dispatch(Action::SelectPost(selected.saturating_sub(1)));
                Some(Message::Handled)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                dispatcher.dispatch(Action::SelectPost(selected + 1));
                Some(Message::Handled)
            }
            KeyCode::Delete | KeyCode::Char('d') => {
                if let Some(id) = id {
                    dispatcher.dispatch(Action::RemovePost(id));
                }
                Some(Message::Handled)
            }
            _ => None,
        }
    }
}

fn post_item(post: &ScheduledPost, image: Option<String>, now: DateTime) -> ListItem<'static> {
    let header = Line::from(vec![
        Span::raw(format!("#{} ", post.id())).dark_gray(),
        Span::raw(post.title().to_owned()).bold(),
        Span::raw(format!("  [{}]", post.platforms())).cyan(),
    ]);

    let schedule = Span::raw(format!("{} {}", post.date(), post.time()));
    let schedule = match post.scheduled_at().map(|at| SchedulePosition::of(at, now)) {
        Some(SchedulePosition::Past) => schedule.red(),
        Some(SchedulePosition::Today) => schedule.yellow(),
        Some(SchedulePosition::Upcoming) | None => schedule,
    };

    let mut lines = vec![header, Line::from(format!("  {}", post.content()))];
    if let Some(image) = image {
        lines.push(Line::from(format!("  image: {image}")).dark_gray());
    }
    lines.push(Line::from(vec!["  at ".into(), schedule]));
    lines.push(Line::default());
    ListItem::new(lines)
}
