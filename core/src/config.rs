// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::Platform;

/// The name of the application.
pub const APP_NAME: &str = "postplan";

/// Configuration for a scheduling session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Platforms offered for selection.
    pub platforms: Vec<Platform>,

    /// Directory that relative image paths are resolved against.
    pub image_dir: Option<PathBuf>,

    /// If true, the date and time must also be in `YYYY-MM-DD` and `HH:MM` form.
    pub strict_datetime: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            platforms: Platform::ALL.to_vec(),
            image_dir: None,
            strict_datetime: false,
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        // Normalize image directory
        if let Some(dir) = &self.image_dir {
            self.image_dir = Some(
                expand_path(dir).map_err(|e| format!("Failed to expand image directory: {e}"))?,
            );
        }

        // Keep platform order canonical and drop duplicates
        self.platforms.sort();
        self.platforms.dedup();
        if self.platforms.is_empty() {
            tracing::warn!("no platforms enabled, posts can not be scheduled");
        }

        Ok(())
    }

    /// Whether the platform is offered for selection.
    pub fn is_enabled(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_home_env() {
        let home = get_home_dir().unwrap();
        let home_prefixes: &[&str] = if cfg!(unix) {
            &["~", "$HOME", "${HOME}"]
        } else {
            &[r"~", r"%UserProfile%"]
        };
        for prefix in home_prefixes {
            let result = expand_path(&PathBuf::from(format!("{prefix}/Pictures"))).unwrap();
            assert_eq!(result, home.join("Pictures"));
            assert!(result.is_absolute());
        }
    }

    #[test]
    fn test_expand_path_config() {
        let config_dir = get_config_dir().unwrap();
        let config_prefixes: &[&str] = if cfg!(unix) {
            &["$XDG_CONFIG_HOME", "${XDG_CONFIG_HOME}"]
        } else {
            &[r"%LOCALAPPDATA%"]
        };
        for prefix in config_prefixes {
            let result = expand_path(&PathBuf::from(format!("{prefix}/images"))).unwrap();
            assert_eq!(result, config_dir.join("images"));
            assert!(result.is_absolute());
        }
    }

    #[test]
    fn test_expand_path_absolute() {
        let absolute_path = PathBuf::from("/etc/passwd");
        let result = expand_path(&absolute_path).unwrap();
        assert_eq!(result, absolute_path);
    }

    #[test]
    fn test_expand_path_relative() {
        let relative_path = PathBuf::from("relative/path/to/file");
        let result = expand_path(&relative_path).unwrap();
        assert_eq!(result, relative_path);
    }

    #[test]
    fn test_default_enables_all_platforms() {
        let config = Config::default();
        for platform in Platform::ALL {
            assert!(config.is_enabled(platform));
        }
        assert!(!config.strict_datetime);
        assert!(config.image_dir.is_none());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: Config = toml::from_str(
            r#"
platforms = ["LinkedIn", "twitter"]
strict_datetime = true
"#,
        )
        .unwrap();
        assert_eq!(config.platforms, vec![Platform::LinkedIn, Platform::TwitterX]);
        assert!(config.strict_datetime);
        assert!(config.image_dir.is_none());
    }

    #[test]
    fn test_normalize_sorts_and_dedups_platforms() {
        let mut config = Config {
            platforms: vec![Platform::LinkedIn, Platform::TwitterX, Platform::LinkedIn],
            ..Default::default()
        };
        config.normalize().unwrap();
        assert_eq!(config.platforms, vec![Platform::TwitterX, Platform::LinkedIn]);
        assert!(!config.is_enabled(Platform::Facebook));
    }

    #[test]
    fn test_normalize_expands_image_dir() {
        let home = get_home_dir().unwrap();
        let mut config = Config {
            image_dir: Some(PathBuf::from("~/Pictures")),
            ..Default::default()
        };
        config.normalize().unwrap();
        assert_eq!(config.image_dir, Some(home.join("Pictures")));
    }
}
