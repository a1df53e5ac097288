// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use postplan_core::{PostDraft, ScheduledPost, Scheduler};

/// Asserts that a post carries exactly the values of a draft.
///
/// # Panics
///
/// Panics if any field differs.
pub fn assert_post_matches_draft(post: &ScheduledPost, draft: &PostDraft) {
    assert_eq!(post.title(), draft.title, "Title mismatch");
    assert_eq!(post.content(), draft.content, "Content mismatch");
    assert_eq!(post.date(), draft.date, "Date mismatch");
    assert_eq!(post.time(), draft.time, "Time mismatch");
    assert_eq!(post.platforms(), &draft.platforms, "Platforms mismatch");
    assert_eq!(post.image(), draft.image.as_ref(), "Image mismatch");
}

/// Asserts that the draft is back to its initial empty value.
///
/// # Panics
///
/// Panics if any field is set.
pub fn assert_draft_empty(draft: &PostDraft) {
    assert!(draft.title.is_empty(), "Title should be empty");
    assert!(draft.content.is_empty(), "Content should be empty");
    assert!(draft.date.is_empty(), "Date should be empty");
    assert!(draft.time.is_empty(), "Time should be empty");
    assert!(draft.image.is_none(), "Image should be none");
    assert!(draft.platforms.is_empty(), "Platforms should be empty");
    assert!(draft.is_empty());
}

/// Asserts the titles of the scheduled posts, in order.
///
/// # Panics
///
/// Panics if the titles differ.
pub fn assert_titles(scheduler: &Scheduler, expected: &[&str]) {
    let titles: Vec<&str> = scheduler.list().iter().map(ScheduledPost::title).collect();
    assert_eq!(titles, expected, "Scheduled post titles mismatch");
}
