// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use postplan_core::Scheduler;

use crate::post_formatter::{PostFormatter, PostRow};
use crate::tui;
use crate::util::{ArgOutputFormat, now};

#[derive(Debug, Clone, Copy)]
pub struct CmdSession {
    pub output_format: ArgOutputFormat,
}

impl Default for CmdSession {
    fn default() -> Self {
        Self {
            output_format: ArgOutputFormat::Table,
        }
    }
}

impl CmdSession {
    pub const NAME: &str = "session";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Open the interactive session, the default command")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    /// Runs the session, then prints what was scheduled in it.
    pub async fn run(self, scheduler: &mut Scheduler) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "opening session...");
        tui::run_session(scheduler)?;

        let posts = scheduler.list();
        if posts.is_empty() && self.output_format == ArgOutputFormat::Table {
            println!("{}", "No posts scheduled.".dimmed());
            return Ok(());
        }

        let rows = PostRow::all(scheduler.images(), posts);
        let formatter = PostFormatter::new(now()).with_output_format(self.output_format);
        print!("{}", formatter.format(&rows));
        Ok(())
    }
}
