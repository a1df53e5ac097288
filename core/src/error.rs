// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::DraftField;

/// A single reason a draft cannot be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    /// A required text field is empty.
    #[error("{0} is required")]
    Missing(DraftField),

    /// No platform is selected.
    #[error("at least one platform must be selected")]
    NoPlatform,

    /// The date is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The time is not a `HH:MM` time of day.
    #[error("invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),

    /// Every post identifier of the session has been handed out.
    #[error("no post identifiers left in this session")]
    NoIdsLeft,
}

/// The draft failed validation at submit time.
///
/// Always recoverable: the draft is left untouched so it can be corrected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Please fill all required fields: {}", IssueList(.issues))]
pub struct ValidationError {
    /// Every issue found, in form order.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    /// Whether the given field is reported as missing.
    pub fn is_missing(&self, field: DraftField) -> bool {
        self.issues
            .iter()
            .any(|a| matches!(a, ValidationIssue::Missing(f) if *f == field))
    }
}

struct IssueList<'a>(&'a [ValidationIssue]);

impl fmt::Display for IssueList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}
