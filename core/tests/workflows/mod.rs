// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the postplan-core crate.
//!
//! These tests drive a whole session through the public API: filling a draft,
//! submitting it, and removing scheduled posts.

mod config_driven;
mod image_lifecycle;
mod post_lifecycle;
mod submit_properties;
