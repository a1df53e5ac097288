// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// An opaque, session-scoped reference to a locally loaded image.
///
/// The handle itself carries no data; the path it refers to lives in the
/// [`ImageRegistry`] that issued it, until the handle is released.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ImageHandle(Uuid);

impl ImageHandle {
    /// The token identifying this handle within its registry.
    pub fn token(&self) -> &Uuid {
        &self.0
    }
}

impl Display for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image:{}", self.0.simple())
    }
}

/// Table of live image handles for one session.
#[derive(Debug, Default)]
pub struct ImageRegistry {
    base_dir: Option<PathBuf>,
    live: HashMap<ImageHandle, PathBuf>,
}

impl ImageRegistry {
    /// Creates a registry resolving relative paths against `base_dir`, if any.
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self {
            base_dir,
            live: HashMap::new(),
        }
    }

    /// Issues a new handle for the image at `path`.
    ///
    /// Nothing is read from disk; there is no size or type validation.
    pub fn register(&mut self, path: &Path) -> ImageHandle {
        let path = match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_owned(),
        };

        let handle = ImageHandle(Uuid::new_v4());
        tracing::debug!(%handle, path = %path.display(), "image registered");
        self.live.insert(handle.clone(), path);
        handle
    }

    /// The local path behind a live handle.
    pub fn resolve(&self, handle: &ImageHandle) -> Option<&Path> {
        self.live.get(handle).map(PathBuf::as_path)
    }

    /// Releases the handle. Returns whether it was live.
    pub fn release(&mut self, handle: &ImageHandle) -> bool {
        match self.live.remove(handle) {
            Some(path) => {
                tracing::debug!(%handle, path = %path.display(), "image released");
                true
            }
            None => {
                tracing::warn!(%handle, "releasing an unknown image handle");
                false
            }
        }
    }

    /// Number of live handles.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
