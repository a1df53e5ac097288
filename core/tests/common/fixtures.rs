// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use postplan_core::{Config, DraftField, Platform, Scheduler};

/// The values to type into a draft.
#[derive(Debug, Clone)]
pub struct DraftInput {
    pub title: &'static str,
    pub content: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub platforms: Vec<Platform>,
}

/// The "Launch" post used throughout the scenarios.
#[must_use]
pub fn launch_input() -> DraftInput {
    DraftInput {
        title: "Launch",
        content: "We're live!",
        date: "2024-06-01",
        time: "09:00",
        platforms: vec![Platform::TwitterX],
    }
}

/// Creates a scheduler with the default configuration.
#[must_use]
pub fn test_scheduler() -> Scheduler {
    Scheduler::new(Config::default()).expect("default config should be valid")
}

/// Types the input into the scheduler's draft, field by field.
pub fn fill_draft(scheduler: &mut Scheduler, input: &DraftInput) {
    scheduler.set_field(DraftField::Title, input.title);
    scheduler.set_field(DraftField::Content, input.content);
    scheduler.set_field(DraftField::Date, input.date);
    scheduler.set_field(DraftField::Time, input.time);
    for platform in &input.platforms {
        scheduler.toggle_platform(*platform);
    }
}
