// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use postplan_core::{DraftField, Platform, PostId};

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatching");
        for sub in &self.subscribers {
            (sub.borrow_mut())(&action);
        }
    }
}

/// Which half of the session has the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Editor,
    List,
}

#[derive(Debug, Clone)]
pub enum Action {
    UpdateField(DraftField, String),
    UpdateImagePath(String),
    AttachImage,
    TogglePlatform(Platform),
    Submit,
    Focus(Pane),
    SelectPost(usize),
    RemovePost(PostId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_reaches_every_subscriber() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = Dispatcher::new();
        for i in 0..2 {
            let seen = seen.clone();
            dispatcher.register(Rc::new(RefCell::new(move |action: &Action| {
                if let Action::SelectPost(n) = action {
                    seen.borrow_mut().push((i, *n));
                }
            })));
        }

        dispatcher.dispatch(Action::SelectPost(3));
        dispatcher.dispatch(Action::Submit);
        assert_eq!(*seen.borrow(), vec![(0, 3), (1, 3)]);
    }
}
