// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint, arg, value_parser};
use postplan_core::{DraftField, Platform, PostId, Scheduler};

use crate::post_formatter::{PostFormatter, PostRow};
use crate::tui;
use crate::util::{ArgOutputFormat, now};

#[derive(Debug, Clone)]
pub struct CmdNew {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<PathBuf>,
    pub platforms: Vec<Platform>,
    pub date: Option<String>,
    pub time: Option<String>,

    pub output_format: ArgOutputFormat,
}

impl CmdNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Schedule a new post, opens the editor when no field is given")
            .arg(arg_title())
            .arg(arg_content())
            .arg(arg_image())
            .arg(arg_platform())
            .arg(arg_date())
            .arg(arg_time())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            title: get_title(matches),
            content: get_content(matches),
            image: get_image(matches),
            platforms: get_platforms(matches),
            date: get_date(matches),
            time: get_time(matches),

            output_format: ArgOutputFormat::from(matches),
        }
    }

    /// Whether no field was given on the command line.
    pub fn is_interactive(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.image.is_none()
            && self.platforms.is_empty()
            && self.date.is_none()
            && self.time.is_none()
    }

    pub async fn run(self, scheduler: &mut Scheduler) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "scheduling new post...");

        let id = match self.is_interactive() {
            true => match tui::draft_post(scheduler)? {
                Some(id) => id,
                None => {
                    tracing::info!("user canceled the post draft");
                    return Ok(());
                }
            },
            false => self.submit(scheduler)?,
        };

        let post = scheduler.store().get(id).ok_or("Post not found")?;
        let rows = [PostRow::with(scheduler.images(), post)];
        let formatter = PostFormatter::new(now()).with_output_format(self.output_format);
        print!("{}", formatter.format(&rows));
        Ok(())
    }

    fn submit(&self, scheduler: &mut Scheduler) -> Result<PostId, Box<dyn Error>> {
        let fields = [
            (DraftField::Title, &self.title),
            (DraftField::Content, &self.content),
            (DraftField::Date, &self.date),
            (DraftField::Time, &self.time),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                scheduler.set_field(field, value.as_str());
            }
        }

        for &platform in &self.platforms {
            if !scheduler.config().is_enabled(platform) {
                return Err(format!("Platform {platform} is not enabled").into());
            }
            if !scheduler.draft().platforms.contains(platform) {
                scheduler.toggle_platform(platform);
            }
        }

        scheduler.attach_image(self.image.as_deref());
        let post = scheduler.submit()?;
        Ok(post.id())
    }
}

fn arg_title() -> Arg {
    arg!(-t --title <TITLE> "Title of the post")
}

fn get_title(matches: &ArgMatches) -> Option<String> {
    matches.get_one("title").cloned()
}

fn arg_content() -> Arg {
    arg!(--content <CONTENT> "Body of the post")
}

fn get_content(matches: &ArgMatches) -> Option<String> {
    matches.get_one("content").cloned()
}

fn arg_image() -> Arg {
    arg!(--image <IMAGE> "Path of an image to attach")
        .value_parser(value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn get_image(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one("image").cloned()
}

fn arg_platform() -> Arg {
    arg!(-p --platform <PLATFORM> "Platform to post to, may be repeated")
        .value_parser(value_parser!(Platform))
        .action(ArgAction::Append)
}

fn get_platforms(matches: &ArgMatches) -> Vec<Platform> {
    matches
        .get_many::<Platform>("platform")
        .map(|a| a.copied().collect())
        .unwrap_or_default()
}

fn arg_date() -> Arg {
    arg!(--date <DATE> "Scheduled date, YYYY-MM-DD")
}

fn get_date(matches: &ArgMatches) -> Option<String> {
    matches.get_one("date").cloned()
}

fn arg_time() -> Arg {
    arg!(--time <TIME> "Scheduled time of day, HH:MM")
}

fn get_time(matches: &ArgMatches) -> Option<String> {
    matches.get_one("time").cloned()
}
