// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Sessions shaped by configuration.

use std::path::{Path, PathBuf};

use postplan_core::{Config, DraftField, Platform, Scheduler, ValidationIssue};

use crate::common::{fill_draft, launch_input};

#[test]
fn config_from_toml_drives_session() {
    let config: Config = toml::from_str(
        r#"
platforms = ["Facebook", "Instagram"]
image_dir = "/srv/images"
strict_datetime = true
"#,
    )
    .unwrap();
    let mut scheduler = Scheduler::new(config).unwrap();

    // Twitter/X is not enabled, so the launch draft has no platform
    fill_draft(&mut scheduler, &launch_input());
    assert!(scheduler.draft().platforms.is_empty());

    scheduler.toggle_platform(Platform::Facebook);
    scheduler.attach_image(Some(Path::new("launch.png")));
    let post = scheduler.submit().unwrap().clone();

    let handle = post.image().unwrap();
    assert_eq!(
        scheduler.images().resolve(handle),
        Some(PathBuf::from("/srv/images/launch.png").as_path())
    );
}

#[test]
fn strict_datetime_reports_invalid_values() {
    let config = Config {
        strict_datetime: true,
        ..Default::default()
    };
    let mut scheduler = Scheduler::new(config).unwrap();
    fill_draft(&mut scheduler, &launch_input());
    scheduler.set_field(DraftField::Time, "noon");

    let err = scheduler.submit().unwrap_err();
    assert_eq!(
        err.issues,
        vec![ValidationIssue::InvalidTime("noon".to_string())]
    );
    assert_eq!(scheduler.last_error(), Some(&err));
}

#[test]
fn lenient_datetime_accepts_free_text() {
    let mut scheduler = Scheduler::new(Config::default()).unwrap();
    fill_draft(&mut scheduler, &launch_input());
    scheduler.set_field(DraftField::Date, "next friday");

    let post = scheduler.submit().unwrap();
    assert_eq!(post.date(), "next friday");
    assert!(post.scheduled_at().is_none());
}
