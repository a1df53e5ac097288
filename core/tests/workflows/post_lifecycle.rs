// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Scheduling and removing posts within one session.

use postplan_core::{DraftField, Platform, PostId, ValidationIssue};

use crate::common::{
    DraftInput, assert_draft_empty, assert_post_matches_draft, assert_titles, fill_draft,
    launch_input, test_scheduler,
};

#[test]
fn launch_post_is_scheduled_and_draft_resets() {
    let mut scheduler = test_scheduler();
    fill_draft(&mut scheduler, &launch_input());
    let draft = scheduler.draft().clone();

    let post = scheduler.submit().expect("launch draft is valid").clone();
    assert_post_matches_draft(&post, &draft);
    assert_eq!(post.title(), "Launch");
    assert_eq!(post.content(), "We're live!");
    assert_eq!(post.date(), "2024-06-01");
    assert_eq!(post.time(), "09:00");
    assert_eq!(
        post.platforms().iter().collect::<Vec<_>>(),
        vec![Platform::TwitterX]
    );
    assert!(post.image().is_none());

    assert_eq!(scheduler.list(), std::slice::from_ref(&post));
    assert_draft_empty(scheduler.draft());
}

#[test]
fn empty_title_is_rejected_without_side_effects() {
    let mut scheduler = test_scheduler();
    fill_draft(
        &mut scheduler,
        &DraftInput {
            title: "",
            content: "x",
            date: "2024-06-01",
            time: "09:00",
            platforms: vec![Platform::Facebook],
        },
    );
    let before = scheduler.draft().clone();

    let err = scheduler.submit().unwrap_err();
    assert_eq!(err.issues, vec![ValidationIssue::Missing(DraftField::Title)]);
    assert!(scheduler.list().is_empty());
    assert_eq!(scheduler.draft(), &before);
}

#[test]
fn rejected_draft_can_be_corrected_and_resubmitted() {
    let mut scheduler = test_scheduler();
    let mut input = launch_input();
    input.platforms.clear();
    fill_draft(&mut scheduler, &input);

    let err = scheduler.submit().unwrap_err();
    assert_eq!(err.issues, vec![ValidationIssue::NoPlatform]);

    scheduler.toggle_platform(Platform::LinkedIn);
    scheduler.submit().expect("corrected draft is valid");
    assert_titles(&scheduler, &["Launch"]);
    assert!(scheduler.last_error().is_none());
}

#[test]
fn remove_middle_post_and_missing_post() {
    let mut scheduler = test_scheduler();
    let mut ids = Vec::new();
    for title in ["a", "b", "c"] {
        let mut input = launch_input();
        input.title = title;
        fill_draft(&mut scheduler, &input);
        ids.push(scheduler.submit().unwrap().id());
    }

    let missing: PostId = "999".parse().unwrap();
    assert!(scheduler.remove(missing).is_none());
    assert_titles(&scheduler, &["a", "b", "c"]);

    let removed = scheduler.remove(ids[1]).unwrap();
    assert_eq!(removed.title(), "b");
    assert_titles(&scheduler, &["a", "c"]);

    assert!(scheduler.remove(ids[1]).is_none());
    assert_titles(&scheduler, &["a", "c"]);
}

#[test]
fn ids_stay_stable_after_removal() {
    let mut scheduler = test_scheduler();
    let mut ids = Vec::new();
    for title in ["a", "b", "c"] {
        let mut input = launch_input();
        input.title = title;
        fill_draft(&mut scheduler, &input);
        ids.push(scheduler.submit().unwrap().id());
    }

    scheduler.remove(ids[0]);
    assert_eq!(scheduler.store().get(ids[2]).unwrap().title(), "c");

    fill_draft(&mut scheduler, &launch_input());
    let new_id = scheduler.submit().unwrap().id();
    assert!(!ids.contains(&new_id));
}
