// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use std::fmt::{self, Display};
use std::str::FromStr;

/// A social-media platform a post can be marked for.
///
/// Purely descriptive, no delivery to the platform ever happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Platform {
    /// Twitter, also known as X.
    #[cfg_attr(feature = "clap", clap(name = "twitter", alias = "x"))]
    #[serde(rename = "Twitter/X", alias = "twitter", alias = "x")]
    TwitterX,

    /// Facebook.
    #[cfg_attr(feature = "clap", clap(name = "facebook", alias = "fb"))]
    #[serde(rename = "Facebook", alias = "facebook", alias = "fb")]
    Facebook,

    /// Instagram.
    #[cfg_attr(feature = "clap", clap(name = "instagram", alias = "ig"))]
    #[serde(rename = "Instagram", alias = "instagram", alias = "ig")]
    Instagram,

    /// LinkedIn.
    #[cfg_attr(feature = "clap", clap(name = "linkedin"))]
    #[serde(rename = "LinkedIn", alias = "linkedin")]
    LinkedIn,
}

const LABEL_TWITTER_X: &str = "Twitter/X";
const LABEL_FACEBOOK: &str = "Facebook";
const LABEL_INSTAGRAM: &str = "Instagram";
const LABEL_LINKEDIN: &str = "LinkedIn";

impl Platform {
    /// All known platforms, in display order.
    pub const ALL: [Platform; 4] = [
        Platform::TwitterX,
        Platform::Facebook,
        Platform::Instagram,
        Platform::LinkedIn,
    ];

    /// The human-readable label of the platform.
    pub fn label(&self) -> &'static str {
        match self {
            Platform::TwitterX => LABEL_TWITTER_X,
            Platform::Facebook => LABEL_FACEBOOK,
            Platform::Instagram => LABEL_INSTAGRAM,
            Platform::LinkedIn => LABEL_LINKEDIN,
        }
    }
}

impl AsRef<str> for Platform {
    fn as_ref(&self) -> &str {
        self.label()
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string names no known platform.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform: {0}")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "twitter/x" | "twitter" | "x" => Ok(Platform::TwitterX),
            "facebook" | "fb" => Ok(Platform::Facebook),
            "instagram" | "ig" => Ok(Platform::Instagram),
            "linkedin" => Ok(Platform::LinkedIn),
            _ => Err(UnknownPlatform(value.to_string())),
        }
    }
}

/// The set of platforms selected for a post.
///
/// Kept in canonical order so that toggling a platform twice yields an equal set.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PlatformSet(BTreeSet<Platform>);

impl PlatformSet {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the platform if selected, otherwise selects it.
    ///
    /// Returns whether the platform is selected afterwards.
    pub fn toggle(&mut self, platform: Platform) -> bool {
        if self.0.remove(&platform) {
            false
        } else {
            self.0.insert(platform);
            true
        }
    }

    /// Whether the platform is selected.
    pub fn contains(&self, platform: Platform) -> bool {
        self.0.contains(&platform)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Iterates the selected platforms in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = Platform> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Platform> for PlatformSet {
    fn from_iter<I: IntoIterator<Item = Platform>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for PlatformSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, platform) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{platform}")?;
        }
        Ok(())
    }
}
