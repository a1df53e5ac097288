// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Image handles from attach to release.

use std::path::Path;

use crate::common::{fill_draft, launch_input, test_scheduler};

#[test]
fn superseded_image_is_released() {
    let mut scheduler = test_scheduler();
    scheduler.attach_image(Some(Path::new("/tmp/first.png")));
    scheduler.attach_image(Some(Path::new("/tmp/second.png")));
    scheduler.attach_image(Some(Path::new("/tmp/third.png")));

    assert_eq!(scheduler.images().len(), 1);
    let handle = scheduler.draft().image.clone().unwrap();
    assert_eq!(
        scheduler.images().resolve(&handle),
        Some(Path::new("/tmp/third.png"))
    );
}

#[test]
fn image_survives_submit_and_is_shared_with_post() {
    let mut scheduler = test_scheduler();
    fill_draft(&mut scheduler, &launch_input());
    scheduler.attach_image(Some(Path::new("/tmp/launch.png")));
    let handle = scheduler.draft().image.clone().unwrap();

    let post = scheduler.submit().unwrap().clone();
    assert_eq!(post.image(), Some(&handle));
    assert_eq!(
        scheduler.images().resolve(&handle),
        Some(Path::new("/tmp/launch.png"))
    );
}

#[test]
fn live_handles_track_live_posts() {
    let mut scheduler = test_scheduler();
    let mut ids = Vec::new();
    for i in 0..3 {
        fill_draft(&mut scheduler, &launch_input());
        let path = format!("/tmp/{i}.png");
        scheduler.attach_image(Some(Path::new(&path)));
        ids.push(scheduler.submit().unwrap().id());
    }
    assert_eq!(scheduler.images().len(), 3);

    for (i, id) in ids.into_iter().enumerate() {
        scheduler.remove(id);
        assert_eq!(scheduler.images().len(), 2 - i);
    }
}

#[test]
fn rejected_submit_keeps_image() {
    let mut scheduler = test_scheduler();
    scheduler.attach_image(Some(Path::new("/tmp/keep.png")));
    assert!(scheduler.submit().is_err());
    assert!(scheduler.draft().image.is_some());
    assert_eq!(scheduler.images().len(), 1);
}
