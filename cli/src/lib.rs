// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface for postplan.
//!
//! Without a subcommand an interactive session opens: a post form on the left
//! and the posts scheduled so far on the right.

mod cli;
mod cmd_generate_completion;
mod cmd_new;
mod cmd_platforms;
mod cmd_session;
mod config;
mod post_formatter;
mod table;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
