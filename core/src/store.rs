// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{PostId, ScheduledPost};

/// The ordered, in-memory list of scheduled posts for one session.
#[derive(Debug, Clone)]
pub struct PostStore {
    posts: Vec<ScheduledPost>,
    next_id: Option<PostId>,
}

impl Default for PostStore {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            next_id: Some(PostId::FIRST),
        }
    }
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the identifier for the next post, `None` once every
    /// identifier has been handed out.
    pub(crate) fn allocate_id(&mut self) -> Option<PostId> {
        let id = self.next_id?;
        self.next_id = id.next();
        Some(id)
    }

    #[cfg(test)]
    pub(crate) fn starting_at(id: PostId) -> Self {
        Self {
            posts: Vec::new(),
            next_id: Some(id),
        }
    }

    /// Adds a post to the end. No deduplication, no capacity bound.
    pub fn append(&mut self, post: ScheduledPost) -> &ScheduledPost {
        tracing::debug!(id = %post.id(), title = post.title(), "post appended");
        self.posts.push(post);
        &self.posts[self.posts.len() - 1]
    }

    /// Removes the post with the given id, returning it. No-op if absent.
    pub fn remove(&mut self, id: PostId) -> Option<ScheduledPost> {
        let index = self.posts.iter().position(|a| a.id() == id)?;
        let post = self.posts.remove(index);
        tracing::debug!(%id, "post removed");
        Some(post)
    }

    /// The post with the given id.
    pub fn get(&self, id: PostId) -> Option<&ScheduledPost> {
        self.posts.iter().find(|a| a.id() == id)
    }

    /// The current posts, in submission order.
    pub fn list(&self) -> &[ScheduledPost] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
