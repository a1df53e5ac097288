// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};
use std::num::NonZeroU32;
use std::str::FromStr;

use jiff::Timestamp;
use jiff::civil::DateTime;

use crate::datetime::parse_schedule;
use crate::{ImageHandle, PlatformSet, PostDraft};

/// Identifier of a scheduled post, unique within a session.
///
/// Allocated from a monotonically increasing counter, never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct PostId(NonZeroU32);

impl PostId {
    /// The first identifier of a session.
    pub const FIRST: PostId = PostId(NonZeroU32::MIN);

    pub fn get(&self) -> u32 {
        self.0.get()
    }

    /// The identifier following this one, `None` once the counter is exhausted.
    pub(crate) fn next(self) -> Option<PostId> {
        self.0.checked_add(1).map(PostId)
    }
}

impl From<NonZeroU32> for PostId {
    fn from(value: NonZeroU32) -> Self {
        PostId(value)
    }
}

impl Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(PostId)
    }
}

/// An immutable record produced from a validated draft.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ScheduledPost {
    id: PostId,
    title: String,
    content: String,
    image: Option<ImageHandle>,
    date: String,
    time: String,
    platforms: PlatformSet,
    created_at: Timestamp,
}

impl ScheduledPost {
    /// Captures the draft's fields by value. Only called on validated drafts.
    pub(crate) fn from_draft(id: PostId, draft: PostDraft, created_at: Timestamp) -> Self {
        Self {
            id,
            title: draft.title,
            content: draft.content,
            image: draft.image,
            date: draft.date,
            time: draft.time,
            platforms: draft.platforms,
            created_at,
        }
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// The image captured from the draft, if any.
    pub fn image(&self) -> Option<&ImageHandle> {
        self.image.as_ref()
    }

    /// The scheduled date, as entered.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The scheduled time of day, as entered.
    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn platforms(&self) -> &PlatformSet {
        &self.platforms
    }

    /// When the post was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// The scheduled moment, if the date and time are in picker format.
    pub fn scheduled_at(&self) -> Option<DateTime> {
        parse_schedule(&self.date, &self.time)
    }
}
