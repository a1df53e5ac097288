// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};
use std::path::Path;
use std::str::FromStr;

use crate::datetime::{parse_date, parse_time};
use crate::{ImageHandle, ImageRegistry, Platform, PlatformSet, ValidationError, ValidationIssue};

/// The free-text fields of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    /// The post title.
    Title,
    /// The post body.
    Content,
    /// The scheduled date.
    Date,
    /// The scheduled time of day.
    Time,
}

impl DraftField {
    /// All fields, in form order.
    pub const ALL: [DraftField; 4] = [
        DraftField::Title,
        DraftField::Content,
        DraftField::Date,
        DraftField::Time,
    ];
}

impl AsRef<str> for DraftField {
    fn as_ref(&self) -> &str {
        match self {
            DraftField::Title => "title",
            DraftField::Content => "content",
            DraftField::Date => "date",
            DraftField::Time => "time",
        }
    }
}

impl Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl FromStr for DraftField {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|a| a.as_ref().eq_ignore_ascii_case(value.trim()))
            .ok_or(())
    }
}

/// The in-progress, not yet submitted post.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PostDraft {
    /// The post title.
    pub title: String,

    /// The post body.
    pub content: String,

    /// The attached image, if any.
    pub image: Option<ImageHandle>,

    /// The scheduled date, as entered.
    pub date: String,

    /// The scheduled time of day, as entered.
    pub time: String,

    /// The platforms the post is marked for.
    pub platforms: PlatformSet,
}

impl PostDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a free-text field. No validation happens until submit.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    /// The current value of a free-text field.
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Content => &self.content,
            DraftField::Date => &self.date,
            DraftField::Time => &self.time,
        }
    }

    fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Title => &mut self.title,
            DraftField::Content => &mut self.content,
            DraftField::Date => &mut self.date,
            DraftField::Time => &mut self.time,
        }
    }

    /// Deselects the platform if selected, otherwise selects it.
    ///
    /// Returns whether the platform is selected afterwards.
    pub fn toggle_platform(&mut self, platform: Platform) -> bool {
        self.platforms.toggle(platform)
    }

    /// Replaces the image with a new handle for `file`, if a file is given.
    ///
    /// The superseded handle is released. Returns whether the image changed.
    pub fn attach_image(&mut self, images: &mut ImageRegistry, file: Option<&Path>) -> bool {
        let Some(file) = file else {
            return false;
        };

        let handle = images.register(file);
        if let Some(old) = self.image.replace(handle) {
            images.release(&old);
        }
        true
    }

    /// Checks the submit predicate.
    ///
    /// With `strict`, the date and time must also parse as `YYYY-MM-DD` and `HH:MM`.
    pub fn validate(&self, strict: bool) -> Result<(), ValidationError> {
        let mut issues: Vec<ValidationIssue> = DraftField::ALL
            .into_iter()
            .filter(|a| self.field(*a).is_empty())
            .map(ValidationIssue::Missing)
            .collect();

        if self.platforms.is_empty() {
            issues.push(ValidationIssue::NoPlatform);
        }

        if strict {
            if !self.date.is_empty() && parse_date(&self.date).is_none() {
                issues.push(ValidationIssue::InvalidDate(self.date.clone()));
            }
            if !self.time.is_empty() && parse_time(&self.time).is_none() {
                issues.push(ValidationIssue::InvalidTime(self.time.clone()));
            }
        }

        match issues.is_empty() {
            true => Ok(()),
            false => Err(ValidationError { issues }),
        }
    }

    /// Whether every field holds its initial empty value.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Takes the current values out, leaving the draft empty.
    ///
    /// The image handle moves with the returned value and is not released.
    pub(crate) fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Discards the draft, releasing its image.
    pub fn reset(&mut self, images: &mut ImageRegistry) {
        if let Some(handle) = self.image.take() {
            images.release(&handle);
        }
        *self = Self::default();
    }
}
