// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, path::Path, rc::Rc};

use postplan_core::{DraftField, PostId, Scheduler, ValidationError, ValidationIssue};

use crate::tui::dispatcher::{Action, Dispatcher, Pane};

/// View state of an interactive session around the [`Scheduler`].
#[derive(Debug)]
pub struct SessionStore {
    pub scheduler: Scheduler,

    /// The image path as typed, attached when the field is left or on submit.
    pub image_path: String,
    image_dirty: bool,

    pub focus: Pane,

    /// Index of the highlighted post in the list.
    pub selected: usize,

    /// Posts submitted through this store, in order.
    pub submitted: Vec<PostId>,
}

impl SessionStore {
    pub fn new(scheduler: Scheduler) -> Self {
        Self {
            scheduler,
            image_path: String::new(),
            image_dirty: false,
            focus: Pane::default(),
            selected: 0,
            submitted: Vec::new(),
        }
    }

    /// The scheduler and the posts submitted through this store.
    pub fn into_parts(self) -> (Scheduler, Vec<PostId>) {
        (self.scheduler, self.submitted)
    }

    /// The issues of a rejected submit that the draft still has.
    ///
    /// `None` until a submit is rejected, then follows the live validation of
    /// the draft so fixed fields stop being flagged.
    pub fn pending_error(&self) -> Option<ValidationError> {
        let last = self.scheduler.last_error()?;
        if last.issues.contains(&ValidationIssue::NoIdsLeft) {
            return Some(last.clone());
        }
        self.scheduler.validation().err()
    }

    /// Whether the draft was rejected because of `field` and still is invalid.
    pub fn is_rejected(&self, field: DraftField) -> bool {
        let Some(err) = self.pending_error() else {
            return false;
        };
        err.issues.iter().any(|issue| match issue {
            ValidationIssue::Missing(a) => *a == field,
            ValidationIssue::InvalidDate(_) => field == DraftField::Date,
            ValidationIssue::InvalidTime(_) => field == DraftField::Time,
            ValidationIssue::NoPlatform | ValidationIssue::NoIdsLeft => false,
        })
    }

    /// Whether the draft was rejected for lack of a platform and still has none.
    pub fn is_missing_platform(&self) -> bool {
        self.pending_error()
            .is_some_and(|e| e.issues.contains(&ValidationIssue::NoPlatform))
    }

    fn attach_pending_image(&mut self) {
        if !self.image_dirty {
            return;
        }
        self.image_dirty = false;

        let path = self.image_path.trim();
        let file = (!path.is_empty()).then(|| Path::new(path));
        if self.scheduler.attach_image(file) {
            tracing::debug!(path, "image attached");
        }
    }

    fn submit(&mut self) {
        self.attach_pending_image();
        match self.scheduler.submit() {
            Ok(post) => {
                tracing::debug!(id = %post.id(), title = post.title(), "post scheduled");
                self.submitted.push(post.id());
                self.image_path.clear();
            }
            Err(e) => tracing::debug!(error = %e, "submit rejected"),
        }
    }

    fn select(&mut self, index: usize) {
        let len = self.scheduler.list().len();
        self.selected = index.min(len.saturating_sub(1));
    }

    fn remove(&mut self, id: PostId) {
        if self.scheduler.remove(id).is_some() {
            tracing::debug!(%id, "post removed");
        }
        self.select(self.selected);
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            let mut that = that.borrow_mut();
            match action {
                Action::UpdateField(field, v) => that.scheduler.set_field(*field, v.clone()),
                Action::UpdateImagePath(v) => {
                    that.image_path = v.clone();
                    that.image_dirty = true;
                }
                Action::AttachImage => that.attach_pending_image(),
                Action::TogglePlatform(p) => {
                    that.scheduler.toggle_platform(*p);
                }
                Action::Submit => that.submit(),
                Action::Focus(pane) => that.focus = *pane,
                Action::SelectPost(i) => that.select(*i),
                Action::RemovePost(id) => that.remove(*id),
            }
        }));
        dispatcher.register(callback);
    }
}
