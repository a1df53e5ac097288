// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt, path::Path};

use colored::Color;
use jiff::civil::DateTime;
use postplan_core::{ImageRegistry, SchedulePosition, ScheduledPost};

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::ArgOutputFormat;

/// A scheduled post with its image resolved against the session registry.
#[derive(Debug, Clone, Copy)]
pub struct PostRow<'a> {
    pub post: &'a ScheduledPost,
    pub image: Option<&'a Path>,
}

impl<'a> PostRow<'a> {
    pub fn with(images: &'a ImageRegistry, post: &'a ScheduledPost) -> Self {
        let image = post.image().and_then(|h| images.resolve(h));
        Self { post, image }
    }

    pub fn all(images: &'a ImageRegistry, posts: &'a [ScheduledPost]) -> Vec<Self> {
        posts.iter().map(|post| Self::with(images, post)).collect()
    }
}

#[derive(Debug)]
pub struct PostFormatter {
    columns: Vec<PostColumn>,
    format: ArgOutputFormat,
}

impl PostFormatter {
    pub fn new(now: DateTime) -> Self {
        Self {
            columns: vec![
                PostColumn::Id,
                PostColumn::Schedule(now),
                PostColumn::Platforms,
                PostColumn::Title,
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        if format == ArgOutputFormat::Json {
            self.columns.extend([PostColumn::Content, PostColumn::Image]);
        }
        self
    }

    pub fn format<'a>(&'a self, posts: &'a [PostRow<'a>]) -> Display<'a> {
        Display {
            posts,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    posts: &'a [PostRow<'a>],
    formatter: &'a PostFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            ArgOutputFormat::Json => {
                let records: Vec<serde_json::Map<String, serde_json::Value>> = self
                    .posts
                    .iter()
                    .map(|row| {
                        columns
                            .iter()
                            .map(|col| (json_key(col), col.format(row).into_owned().into()))
                            .collect()
                    })
                    .collect();
                let json = serde_json::to_string_pretty(&records).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            ArgOutputFormat::Table => write!(f, "{}", Table::new(columns, self.posts)),
        }
    }
}

fn json_key(col: &PostColumn) -> String {
    TableColumn::<PostRow<'_>>::name(col)
        .to_lowercase()
        .replace(' ', "_")
}

#[derive(Debug, Clone, Copy)]
pub enum PostColumn {
    Id,
    Title,
    Content,
    Platforms,
    Schedule(DateTime),
    Image,
}

impl<'r> TableColumn<PostRow<'r>> for PostColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            PostColumn::Id => "Id",
            PostColumn::Title => "Title",
            PostColumn::Content => "Content",
            PostColumn::Platforms => "Platforms",
            PostColumn::Schedule(_) => "Scheduled At",
            PostColumn::Image => "Image",
        }
        .into()
    }

    fn format<'a>(&self, row: &'a PostRow<'r>) -> Cow<'a, str> {
        match self {
            PostColumn::Id => format!("#{}", row.post.id()).into(),
            PostColumn::Title => row.post.title().into(),
            PostColumn::Content => row.post.content().into(),
            PostColumn::Platforms => row.post.platforms().to_string().into(),
            PostColumn::Schedule(_) => format!("{} {}", row.post.date(), row.post.time()).into(),
            PostColumn::Image => row
                .image
                .map(|p| p.display().to_string().into())
                .unwrap_or_default(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            PostColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, row: &PostRow<'r>) -> Option<Color> {
        match self {
            PostColumn::Schedule(now) => match row.post.scheduled_at() {
                Some(at) => match SchedulePosition::of(at, *now) {
                    SchedulePosition::Past => Some(Color::Red),
                    SchedulePosition::Today => Some(Color::Yellow),
                    SchedulePosition::Upcoming => None,
                },
                None => None,
            },
            _ => None,
        }
    }
}
