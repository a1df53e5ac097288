// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::Path;

use jiff::Timestamp;

use crate::{
    Config, DraftField, ImageRegistry, Platform, PostDraft, PostId, PostStore, ScheduledPost,
    ValidationError, ValidationIssue,
};

/// One scheduling session: a draft, the scheduled posts, and their images.
///
/// Every user event goes through here; rendering only reads.
#[derive(Debug)]
pub struct Scheduler {
    config: Config,
    draft: PostDraft,
    store: PostStore,
    images: ImageRegistry,
    last_error: Option<ValidationError>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self {
            config: Config::default(),
            draft: PostDraft::new(),
            store: PostStore::new(),
            images: ImageRegistry::new(None),
            last_error: None,
        }
    }
}

impl Scheduler {
    /// Creates an empty session with the given configuration.
    pub fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;
        let images = ImageRegistry::new(config.image_dir.clone());
        Ok(Self {
            config,
            draft: PostDraft::new(),
            store: PostStore::new(),
            images,
            last_error: None,
        })
    }

    /// Moves the session out, leaving an empty default one behind.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current draft.
    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    /// Assigns a free-text field of the draft.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    /// Toggles a platform on the draft.
    ///
    /// Platforms that are not enabled are ignored. Returns whether the platform
    /// is selected afterwards.
    pub fn toggle_platform(&mut self, platform: Platform) -> bool {
        if !self.config.is_enabled(platform) {
            tracing::warn!(%platform, "platform is not enabled, ignoring");
            return self.draft.platforms.contains(platform);
        }
        self.draft.toggle_platform(platform)
    }

    /// Attaches an image to the draft, if a file is given.
    pub fn attach_image(&mut self, file: Option<&Path>) -> bool {
        self.draft.attach_image(&mut self.images, file)
    }

    /// The live validation state of the draft.
    pub fn validation(&self) -> Result<(), ValidationError> {
        self.draft.validate(self.config.strict_datetime)
    }

    /// Submits the draft.
    ///
    /// On success the post is appended and the draft is reset. On failure the
    /// draft and the store are left unchanged and the error is kept as the
    /// session's inline indicator until the next submit.
    pub fn submit(&mut self) -> Result<&ScheduledPost, ValidationError> {
        if let Err(e) = self.validation() {
            tracing::debug!(error = %e, "draft rejected");
            self.last_error = Some(e.clone());
            return Err(e);
        }

        let Some(id) = self.store.allocate_id() else {
            let e = ValidationError {
                issues: vec![ValidationIssue::NoIdsLeft],
            };
            tracing::warn!(error = %e, "draft rejected");
            self.last_error = Some(e.clone());
            return Err(e);
        };

        self.last_error = None;
        let draft = self.draft.take();
        let post = ScheduledPost::from_draft(id, draft, Timestamp::now());
        Ok(self.store.append(post))
    }

    /// The error of the last rejected submit, cleared by a successful one.
    pub fn last_error(&self) -> Option<&ValidationError> {
        self.last_error.as_ref()
    }

    /// Removes a scheduled post and releases its image. No-op if absent.
    pub fn remove(&mut self, id: PostId) -> Option<ScheduledPost> {
        let post = self.store.remove(id)?;
        if let Some(handle) = post.image() {
            self.images.release(handle);
        }
        Some(post)
    }

    /// Throws the draft away, releasing its image.
    pub fn discard_draft(&mut self) {
        self.draft.reset(&mut self.images);
        self.last_error = None;
    }

    /// The scheduled posts, in submission order.
    pub fn list(&self) -> &[ScheduledPost] {
        self.store.list()
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    pub fn images(&self) -> &ImageRegistry {
        &self.images
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler() -> Scheduler {
        Scheduler::new(Config::default()).unwrap()
    }

    fn fill(s: &mut Scheduler, title: &str) {
        s.set_field(DraftField::Title, title);
        s.set_field(DraftField::Content, "content");
        s.set_field(DraftField::Date, "2024-06-01");
        s.set_field(DraftField::Time, "09:00");
        s.toggle_platform(Platform::Instagram);
    }

    #[test]
    fn disabled_platform_is_ignored() {
        let config = Config {
            platforms: vec![Platform::Facebook],
            ..Default::default()
        };
        let mut s = Scheduler::new(config).unwrap();
        assert!(!s.toggle_platform(Platform::LinkedIn));
        assert!(s.draft().platforms.is_empty());
        assert!(s.toggle_platform(Platform::Facebook));
    }

    #[test]
    fn rejected_submit_sets_last_error() {
        let mut s = scheduler();
        s.set_field(DraftField::Title, "only a title");
        let err = s.submit().unwrap_err();
        assert_eq!(s.last_error(), Some(&err));
        assert!(s.list().is_empty());
        assert_eq!(s.draft().title, "only a title");
    }

    #[test]
    fn exhausted_ids_reject_submit_without_reuse() {
        let mut s = scheduler();
        s.store = PostStore::starting_at(PostId::from(std::num::NonZeroU32::MAX));
        fill(&mut s, "last");
        let last = s.submit().unwrap().id();

        fill(&mut s, "one too many");
        let err = s.submit().unwrap_err();
        assert_eq!(err.issues, vec![ValidationIssue::NoIdsLeft]);
        assert_eq!(s.last_error(), Some(&err));
        assert_eq!(s.list().len(), 1);
        assert_eq!(s.list()[0].id(), last);
        assert_eq!(s.draft().title, "one too many");
    }

    #[test]
    fn successful_submit_clears_last_error() {
        let mut s = scheduler();
        assert!(s.submit().is_err());
        fill(&mut s, "post");
        assert!(s.submit().is_ok());
        assert!(s.last_error().is_none());
    }

    #[test]
    fn image_moves_into_post_and_is_released_on_remove() {
        let mut s = scheduler();
        fill(&mut s, "with image");
        s.attach_image(Some(Path::new("/tmp/a.png")));

        let post = s.submit().unwrap();
        let id = post.id();
        let handle = post.image().cloned().unwrap();
        assert_eq!(s.images().resolve(&handle), Some(Path::new("/tmp/a.png")));
        assert!(s.draft().image.is_none());

        s.remove(id).unwrap();
        assert!(s.images().resolve(&handle).is_none());
        assert!(s.images().is_empty());
    }

    #[test]
    fn discard_draft_releases_image() {
        let mut s = scheduler();
        fill(&mut s, "discarded");
        s.attach_image(Some(Path::new("/tmp/a.png")));
        s.discard_draft();
        assert!(s.draft().is_empty());
        assert!(s.images().is_empty());
    }

    #[test]
    fn take_leaves_empty_session() {
        let mut s = scheduler();
        fill(&mut s, "kept");
        s.submit().unwrap();

        let taken = s.take();
        assert_eq!(taken.list().len(), 1);
        assert!(s.list().is_empty());
        assert!(s.draft().is_empty());
    }

    #[test]
    fn strict_config_rejects_free_form_dates() {
        let config = Config {
            strict_datetime: true,
            ..Default::default()
        };
        let mut s = Scheduler::new(config).unwrap();
        fill(&mut s, "strict");
        s.set_field(DraftField::Date, "tomorrow");
        assert!(s.submit().is_err());
        assert!(s.list().is_empty());
    }
}
