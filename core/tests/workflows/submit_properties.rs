// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Properties of submit and toggle over many drafts.

use postplan_core::{DraftField, Platform};

use crate::common::{assert_draft_empty, fill_draft, launch_input, test_scheduler};

#[test]
fn any_missing_required_field_blocks_submit() {
    for field in DraftField::ALL {
        let mut scheduler = test_scheduler();
        fill_draft(&mut scheduler, &launch_input());
        scheduler.set_field(field, "");
        let before = scheduler.draft().clone();

        let err = scheduler.submit().unwrap_err();
        assert!(err.is_missing(field), "{field} should be reported");
        assert!(scheduler.list().is_empty(), "store changed for {field}");
        assert_eq!(scheduler.draft(), &before, "draft changed for {field}");
    }
}

#[test]
fn deselecting_last_platform_blocks_submit() {
    let mut scheduler = test_scheduler();
    fill_draft(&mut scheduler, &launch_input());
    scheduler.toggle_platform(Platform::TwitterX);
    assert!(scheduler.draft().platforms.is_empty());
    assert!(scheduler.submit().is_err());
    assert!(scheduler.list().is_empty());
}

#[test]
fn toggling_twice_restores_selection() {
    let mut scheduler = test_scheduler();
    scheduler.toggle_platform(Platform::Instagram);
    scheduler.toggle_platform(Platform::TwitterX);

    for platform in Platform::ALL {
        let prior = scheduler.draft().platforms.clone();
        scheduler.toggle_platform(platform);
        assert_ne!(scheduler.draft().platforms, prior);
        scheduler.toggle_platform(platform);
        assert_eq!(scheduler.draft().platforms, prior);
    }
}

#[test]
fn n_submits_yield_n_posts_in_order() {
    const N: usize = 25;
    let mut scheduler = test_scheduler();
    let titles: Vec<String> = (0..N).map(|i| format!("post {i}")).collect();

    for title in &titles {
        fill_draft(&mut scheduler, &launch_input());
        scheduler.set_field(DraftField::Title, title.clone());
        scheduler.submit().unwrap();
        assert_draft_empty(scheduler.draft());
    }

    assert_eq!(scheduler.list().len(), N);
    let got: Vec<&str> = scheduler.list().iter().map(|a| a.title()).collect();
    assert_eq!(got, titles.iter().map(String::as_str).collect::<Vec<_>>());

    let ids: Vec<u32> = scheduler.list().iter().map(|a| a.id().get()).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}
