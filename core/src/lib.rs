// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Draft social-media posts and keep an in-memory list of scheduled posts.
//!
//! A [`Scheduler`] owns one [`PostDraft`] and one [`PostStore`]. User events
//! mutate the draft; a successful submit turns it into an immutable
//! [`ScheduledPost`] appended to the store, and resets the draft.

mod config;
mod datetime;
mod draft;
mod error;
mod image;
mod platform;
mod post;
mod scheduler;
mod store;

pub use crate::config::{APP_NAME, Config};
pub use crate::datetime::{
    FORMAT_DATE, FORMAT_TIME, SchedulePosition, parse_date, parse_schedule, parse_time,
};
pub use crate::draft::{DraftField, PostDraft};
pub use crate::error::{ValidationError, ValidationIssue};
pub use crate::image::{ImageHandle, ImageRegistry};
pub use crate::platform::{Platform, PlatformSet, UnknownPlatform};
pub use crate::post::{PostId, ScheduledPost};
pub use crate::scheduler::Scheduler;
pub use crate::store::PostStore;
