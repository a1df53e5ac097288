// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use postplan_core::{DraftField, Platform};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::component::{Component, Message};
use crate::tui::component_form::{
    Access, CheckboxGroup, Form, FormItem, FormItemState, Input, Toggle,
};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::session_store::SessionStore;

/// The draft form. Enter submits the draft.
pub struct PostEditor {
    form: Form<SessionStore, Box<dyn FormItem<SessionStore>>>,
    exit_on_submit: bool,
}

impl PostEditor {
    /// Creates an editor offering the given platforms.
    pub fn new(platforms: &[Platform]) -> Self {
        Self {
            form: Form::new(vec![
                Box::new(new_title()),
                Box::new(new_content()),
                Box::new(ImageInput::new()),
                Box::new(new_platforms(platforms)),
                Box::new(new_date().with_placeholder("YYYY-MM-DD")),
                Box::new(new_time().with_placeholder("HH:MM")),
            ]),
            exit_on_submit: false,
        }
    }

    /// Leaves the page after the first accepted submit.
    pub fn exit_on_submit(mut self) -> Self {
        self.exit_on_submit = true;
        self
    }

    fn split(&self, area: Rect) -> (Rect, Rect) {
        let [form, status] = Layout::vertical([
            Constraint::Length(self.form.height()),
            Constraint::Length(1),
        ])
        .areas(area);
        (form, status)
    }

    fn submit(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<SessionStore>) -> Message {
        // Leave the active field first so a pending image is attached
        self.form.deactivate(dispatcher, store);
        dispatcher.dispatch(Action::Submit);

        let accepted = store.borrow().scheduler.last_error().is_none();
        if accepted && self.exit_on_submit {
            return Message::Exit;
        }

        match accepted {
            true => self.form.reset(dispatcher, store),
            false => self.form.activate(dispatcher, store),
        }
        Message::CursorUpdated
    }
}

impl Component<SessionStore> for PostEditor {
    fn render(&self, store: &RefCell<SessionStore>, area: Rect, buf: &mut Buffer) {
        let (form, status) = self.split(area);
        self.form.render(store, form, buf);

        let status = Rect {
            x: status.x + 1,
            width: status.width.saturating_sub(2),
            ..status
        };
        status_line(&store.borrow()).render(status, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<SessionStore>, area: Rect) -> Option<(u16, u16)> {
        let (form, _) = self.split(area);
        self.form.get_cursor_position(store, form)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<SessionStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if event.code == KeyCode::Enter {
            return Some(self.submit(dispatcher, store));
        }

        let (form, _) = self.split(area);
        self.form.on_key(dispatcher, store, form, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<SessionStore>) {
        self.form.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<SessionStore>) {
        self.form.deactivate(dispatcher, store);
    }
}

fn status_line(store: &SessionStore) -> Paragraph<'static> {
    if let Some(err) = store.pending_error() {
        Paragraph::new(format!("✗ {err}")).red()
    } else if store.scheduler.validation().is_ok() {
        Paragraph::new("✓ Ready, press Enter to schedule").green()
    } else {
        Paragraph::new("Fill in every field, then press Enter").dark_gray()
    }
}

macro_rules! new_input {
    ($fn: ident, $title:expr, $acc: ident, $field: expr) => {
        fn $fn() -> Input<SessionStore, $acc> {
            Input::new($title)
        }

        struct $acc;

        impl Access<SessionStore, String> for $acc {
            fn get(store: &RefCell<SessionStore>) -> String {
                store.borrow().scheduler.draft().field($field).to_owned()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
                dispatcher.dispatch(Action::UpdateField($field, value));
                true
            }

            fn invalid(store: &RefCell<SessionStore>) -> bool {
                store.borrow().is_rejected($field)
            }
        }
    };
}

new_input!(new_title, "Title", TitleAccess, DraftField::Title);
new_input!(new_content, "Content", ContentAccess, DraftField::Content);
new_input!(new_date, "Date", DateAccess, DraftField::Date);
new_input!(new_time, "Time", TimeAccess, DraftField::Time);

struct ImagePathAccess;

impl Access<SessionStore, String> for ImagePathAccess {
    fn get(store: &RefCell<SessionStore>) -> String {
        store.borrow().image_path.clone()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
        dispatcher.dispatch(Action::UpdateImagePath(value));
        true
    }
}

/// The image path input. Leaving it attaches the typed file.
struct ImageInput {
    input: Input<SessionStore, ImagePathAccess>,
}

impl ImageInput {
    fn new() -> Self {
        Self {
            input: Input::new("Image (optional)").with_placeholder("path/to/image.png"),
        }
    }
}

impl Component<SessionStore> for ImageInput {
    fn render(&self, store: &RefCell<SessionStore>, area: Rect, buf: &mut Buffer) {
        self.input.render(store, area, buf);

        let attached = store.borrow().scheduler.draft().image.is_some();
        if attached && !self.input.is_active() && area.width > 2 {
            let mark = Rect::new(area.right() - 2, area.y, 2, 1);
            Paragraph::new("✓").green().render(mark, buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<SessionStore>, area: Rect) -> Option<(u16, u16)> {
        self.input.get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<SessionStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        self.input.on_key(dispatcher, store, area, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<SessionStore>) {
        self.input.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<SessionStore>) {
        self.input.deactivate(dispatcher, store);
        dispatcher.dispatch(Action::AttachImage);
    }
}

impl FormItem<SessionStore> for ImageInput {
    fn item_title(&self, store: &RefCell<SessionStore>) -> &str {
        self.input.item_title(store)
    }

    fn item_state(&self, store: &RefCell<SessionStore>) -> FormItemState {
        self.input.item_state(store)
    }
}

fn new_platforms(platforms: &[Platform]) -> CheckboxGroup<SessionStore, Platform, PlatformAccess> {
    let values = platforms.to_vec();
    let options = values.iter().map(|a| a.label().to_owned()).collect();
    CheckboxGroup::new("Platforms", values, options)
}

struct PlatformAccess;

impl Toggle<SessionStore, Platform> for PlatformAccess {
    fn is_on(store: &RefCell<SessionStore>, value: &Platform) -> bool {
        store.borrow().scheduler.draft().platforms.contains(*value)
    }

    fn toggle(dispatcher: &mut Dispatcher, value: Platform) -> bool {
        dispatcher.dispatch(Action::TogglePlatform(value));
        true
    }

    fn invalid(store: &RefCell<SessionStore>) -> bool {
        store.borrow().is_missing_platform()
    }
}
