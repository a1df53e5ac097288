// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, marker::PhantomData, rc::Rc};

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;
use crate::util::{
    byte_offset_of_grapheme, byte_range_of_grapheme_at, grapheme_count, unicode_width_of_graphemes,
};

/// Height of one form item: title, value, and a spacer line.
pub const ITEM_HEIGHT: u16 = 3;

pub struct Form<S, C: FormItem<S>> {
    items: Vec<C>,
    item_index: usize,
    _phantom: PhantomData<S>,
}

impl<S, C: FormItem<S>> Form<S, C> {
    pub fn new(items: Vec<C>) -> Self {
        Self {
            items,
            item_index: 0,
            _phantom: PhantomData,
        }
    }

    /// Rows needed to show every item.
    pub fn height(&self) -> u16 {
        ITEM_HEIGHT * self.items.len() as u16 + 2 // margin
    }

    /// Moves the focus back to the first item.
    pub fn reset(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.deactivate(dispatcher, store);
        self.item_index = 0;
        self.activate(dispatcher, store);
    }

    fn layout(&self) -> Layout {
        Layout::vertical(self.items.iter().map(|_| Constraint::Length(ITEM_HEIGHT))).margin(1)
    }

    fn navigate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>, offset: isize) {
        let Some(index) = self.item_index.checked_add_signed(offset) else {
            return;
        };
        if index >= self.items.len() {
            return;
        }

        if let Some(a) = self.items.get_mut(self.item_index) {
            a.deactivate(dispatcher, store);
        }
        self.item_index = index;
        if let Some(a) = self.items.get_mut(self.item_index) {
            a.activate(dispatcher, store);
        }
    }
}

impl<S, C: FormItem<S>> Component<S> for Form<S, C> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let areas = self.layout().split(area);
        let last = self.items.len().saturating_sub(1);
        for (i, (item, area)) in self.items.iter().zip(areas.iter()).enumerate() {
            item_render(i == last, item, store, *area, buf);
            item.render(store, item_inner(*area), buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        let areas = self.layout().split(area);
        let item = self.items.get(self.item_index)?;
        item.get_cursor_position(store, *areas.get(self.item_index)?)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let areas = self.layout().split(area);
        if let (Some(item), Some(subarea)) =
            (self.items.get_mut(self.item_index), areas.get(self.item_index))
            && let Some(msg) = item.on_key(dispatcher, store, *subarea, event)
        {
            return Some(msg);
        }

        match event.code {
            KeyCode::Up | KeyCode::BackTab if self.item_index > 0 => {
                self.navigate(dispatcher, store, -1);
                Some(Message::CursorUpdated)
            }
            KeyCode::Down | KeyCode::Tab if self.item_index + 1 < self.items.len() => {
                self.navigate(dispatcher, store, 1);
                Some(Message::CursorUpdated)
            }
            _ => None,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.activate(dispatcher, store);
        }
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.deactivate(dispatcher, store);
        }
    }
}

pub trait FormItem<S>: Component<S> {
    fn item_title(&self, store: &RefCell<S>) -> &str;
    fn item_state(&self, store: &RefCell<S>) -> FormItemState;

    /// Whether the last submit rejected this item's value.
    fn item_invalid(&self, _store: &RefCell<S>) -> bool {
        false
    }
}

impl<S> Component<S> for Box<dyn FormItem<S>> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        (**self).render(store, area, buf)
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        (**self).get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        (**self).on_key(dispatcher, store, area, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        (**self).activate(dispatcher, store)
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        (**self).deactivate(dispatcher, store)
    }
}

impl<S> FormItem<S> for Box<dyn FormItem<S>> {
    fn item_title(&self, store: &RefCell<S>) -> &str {
        (**self).item_title(store)
    }

    fn item_state(&self, store: &RefCell<S>) -> FormItemState {
        (**self).item_state(store)
    }

    fn item_invalid(&self, store: &RefCell<S>) -> bool {
        (**self).item_invalid(store)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormItemState {
    /// The item has the keyboard.
    Active,
    Inactive,
}

/// Reads a value from the store and writes it back through the dispatcher.
pub trait Access<S, T> {
    fn get(store: &RefCell<S>) -> T;
    fn set(dispatcher: &mut Dispatcher, value: T) -> bool;

    /// Whether the last submit rejected the value.
    fn invalid(_store: &RefCell<S>) -> bool {
        false
    }
}

/// A single-line text input.
#[derive(Debug)]
pub struct Input<S, A: Access<S, String>> {
    title: String,
    placeholder: Option<String>,
    active: bool,
    /// Cursor position, in grapheme clusters.
    character_index: usize,
    _phantom_s: PhantomData<S>,
    _phantom_a: PhantomData<A>,
}

impl<S, A: Access<S, String>> Input<S, A> {
    pub fn new(title: impl ToString) -> Self {
        Self {
            title: title.to_string(),
            placeholder: None,
            active: false,
            character_index: 0,
            _phantom_s: PhantomData,
            _phantom_a: PhantomData,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl ToString) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl<S, A: Access<S, String>> Component<S> for Input<S, A> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let v = A::get(store);
        match (&self.placeholder, v.is_empty()) {
            (Some(placeholder), true) => Paragraph::new(placeholder.as_str())
                .dark_gray()
                .render(area, buf),
            _ => Paragraph::new(v.as_str()).render(area, buf),
        }
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        if !self.active {
            return None;
        }

        let v = A::get(store);
        let width = unicode_width_of_graphemes(&v, self.character_index);
        let inner = item_inner(area);
        Some((inner.x + width as u16, inner.y))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        use KeyCode::*;
        if !self.active || !matches!(event.code, Left | Right | Home | End | Backspace | Char(_)) {
            return None;
        }

        let mut v = A::get(store);
        let len = grapheme_count(&v);
        self.character_index = self.character_index.min(len);
        match event.code {
            Left if self.character_index > 0 => self.character_index -= 1,
            Right if self.character_index < len => self.character_index += 1,
            Home => self.character_index = 0,
            End => self.character_index = len,
            Backspace if self.character_index > 0 => {
                if let Some(range) = byte_range_of_grapheme_at(&v, self.character_index - 1) {
                    v.replace_range(range, "");
                    if A::set(dispatcher, v) {
                        self.character_index -= 1;
                    }
                }
            }
            Char(c) => {
                let before = len;
                v.insert(byte_offset_of_grapheme(&v, self.character_index), c);
                // A combining mark joins the previous cluster
                let grown = grapheme_count(&v) > before;
                if A::set(dispatcher, v) && grown {
                    self.character_index += 1;
                }
            }
            _ => {}
        };

        Some(Message::CursorUpdated)
    }

    fn activate(&mut self, _dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.active = true;
        self.character_index = grapheme_count(&A::get(store));
    }

    fn deactivate(&mut self, _dispatcher: &mut Dispatcher, _store: &RefCell<S>) {
        self.active = false;
        self.character_index = 0;
    }
}

impl<S, A: Access<S, String>> FormItem<S> for Input<S, A> {
    fn item_title(&self, _store: &RefCell<S>) -> &str {
        &self.title
    }

    fn item_state(&self, _store: &RefCell<S>) -> FormItemState {
        match self.active {
            true => FormItemState::Active,
            false => FormItemState::Inactive,
        }
    }

    fn item_invalid(&self, store: &RefCell<S>) -> bool {
        A::invalid(store)
    }
}

/// Membership of a value in a set held by the store.
pub trait Toggle<S, T> {
    fn is_on(store: &RefCell<S>, value: &T) -> bool;
    fn toggle(dispatcher: &mut Dispatcher, value: T) -> bool;

    /// Whether the last submit rejected the selection.
    fn invalid(_store: &RefCell<S>) -> bool {
        false
    }
}

/// A row of independent checkboxes. Left and Right move, Space toggles.
#[derive(Debug)]
pub struct CheckboxGroup<S, T: Clone, A: Toggle<S, T>> {
    title: String,
    values: Vec<T>,
    options: Vec<String>,
    cursor: usize,
    active: bool,
    _phantom_s: PhantomData<S>,
    _phantom_a: PhantomData<A>,
}

impl<S, T: Clone, A: Toggle<S, T>> CheckboxGroup<S, T, A> {
    pub fn new(title: impl ToString, values: Vec<T>, options: Vec<String>) -> Self {
        Self {
            title: title.to_string(),
            values,
            options,
            cursor: 0,
            active: false,
            _phantom_s: PhantomData,
            _phantom_a: PhantomData,
        }
    }

    fn split(&self, area: Rect) -> Rc<[Rect]> {
        // 5 = checkbox [ ] (3) + space (1) + gap (1)
        let constraints = self
            .options
            .iter()
            .map(|s| Constraint::Length(5 + s.width() as u16));
        Layout::horizontal(constraints).split(area)
    }
}

impl<S, T: Clone, A: Toggle<S, T>> Component<S> for CheckboxGroup<S, T, A> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let areas = self.split(area);
        for ((value, label), area) in self.values.iter().zip(&self.options).zip(areas.iter()) {
            let icon = if A::is_on(store, value) { 'x' } else { ' ' };
            Paragraph::new(format!("[{icon}] {label}")).render(*area, buf);
        }
    }

    fn get_cursor_position(&self, _store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        if !self.active {
            return None;
        }
        self.split(item_inner(area))
            .get(self.cursor)
            .map(|area| (area.x + 1, area.y))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        _store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let len = self.values.len();
        if !self.active || len == 0 {
            return None;
        }

        match event.code {
            KeyCode::Left => {
                self.cursor = (self.cursor + len - 1) % len;
                Some(Message::CursorUpdated)
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1) % len;
                Some(Message::CursorUpdated)
            }
            KeyCode::Char(' ') => {
                if let Some(value) = self.values.get(self.cursor) {
                    A::toggle(dispatcher, value.clone());
                }
                Some(Message::Handled)
            }
            _ => None,
        }
    }

    fn activate(&mut self, _: &mut Dispatcher, _store: &RefCell<S>) {
        self.active = true;
    }

    fn deactivate(&mut self, _: &mut Dispatcher, _store: &RefCell<S>) {
        self.active = false;
    }
}

impl<S, T: Clone, A: Toggle<S, T>> FormItem<S> for CheckboxGroup<S, T, A> {
    fn item_title(&self, _store: &RefCell<S>) -> &str {
        &self.title
    }

    fn item_state(&self, _store: &RefCell<S>) -> FormItemState {
        match self.active {
            true => FormItemState::Active,
            false => FormItemState::Inactive,
        }
    }

    fn item_invalid(&self, store: &RefCell<S>) -> bool {
        A::invalid(store)
    }
}

const S_STEP_ACTIVE: &str = "◆";
const S_STEP_INACTIVE: &str = "◇";
const S_STEP_ERROR: &str = "▲";

const S_SIDER_CONNECTOR: &str = "│";
const S_SIDER_BOTTOM: &str = "└";

fn item_render<S>(
    is_last: bool,
    item: &impl FormItem<S>,
    store: &RefCell<S>,
    area: Rect,
    buf: &mut Buffer,
) {
    let state = item.item_state(store);
    let invalid = item.item_invalid(store);
    let color = match (state, invalid) {
        (FormItemState::Active, _) => Color::Blue,
        (FormItemState::Inactive, true) => Color::Red,
        (FormItemState::Inactive, false) => Color::Gray,
    };

    let area_title = Rect::new(area.x + 2, area.y, area.width.saturating_sub(2), 1);
    Clear.render(area_title, buf);
    Paragraph::new(item.item_title(store))
        .bold()
        .fg(color)
        .render(area_title, buf);

    if let Some(c) = buf.cell_mut((area.x, area.y)) {
        let symbol = match (state, invalid) {
            (FormItemState::Active, _) => S_STEP_ACTIVE,
            (FormItemState::Inactive, true) => S_STEP_ERROR,
            (FormItemState::Inactive, false) => S_STEP_INACTIVE,
        };
        c.set_symbol(symbol);
        c.set_fg(color);
    }

    for y in 1..area.height.saturating_sub(1) {
        if let Some(c) = buf.cell_mut((area.x, area.y + y)) {
            c.set_symbol(S_SIDER_CONNECTOR);
            c.set_fg(color);
        }
    }

    if let Some(c) = buf.cell_mut((area.x, area.y + area.height.saturating_sub(1))) {
        let symbol = if is_last {
            S_SIDER_BOTTOM
        } else {
            S_SIDER_CONNECTOR
        };
        c.set_symbol(symbol);
        c.set_fg(color);
    }
}

fn item_inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
