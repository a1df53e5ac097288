// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, error::Error, fmt};

use clap::{ArgMatches, Command, ValueEnum};
use colored::Color;
use postplan_core::{Config, Platform, Scheduler};

use crate::table::{Table, TableColumn};
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdPlatforms {
    pub output_format: ArgOutputFormat,
}

impl CmdPlatforms {
    pub const NAME: &str = "platforms";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the platforms a post can be marked for")
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, scheduler: &mut Scheduler) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing platforms...");
        print!("{}", self.format(scheduler.config()));
        Ok(())
    }

    fn format(self, config: &Config) -> PlatformsDisplay {
        let rows = Platform::ALL
            .into_iter()
            .map(|platform| PlatformRow {
                platform,
                enabled: config.is_enabled(platform),
            })
            .collect();
        PlatformsDisplay {
            rows,
            format: self.output_format,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PlatformRow {
    platform: Platform,
    enabled: bool,
}

impl PlatformRow {
    /// Names accepted on the command line, canonical first.
    fn names(&self) -> Vec<String> {
        self.platform
            .to_possible_value()
            .map(|v| v.get_name_and_aliases().map(str::to_owned).collect())
            .unwrap_or_default()
    }
}

struct PlatformsDisplay {
    rows: Vec<PlatformRow>,
    format: ArgOutputFormat,
}

impl fmt::Display for PlatformsDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.format {
            ArgOutputFormat::Json => {
                let records: Vec<_> = self
                    .rows
                    .iter()
                    .map(|row| {
                        serde_json::json!({
                            "platform": row.platform,
                            "names": row.names(),
                            "enabled": row.enabled,
                        })
                    })
                    .collect();
                let json = serde_json::to_string_pretty(&records).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            ArgOutputFormat::Table => {
                let columns = [PlatformColumn::Label, PlatformColumn::Names, PlatformColumn::Status];
                write!(f, "{}", Table::new(&columns, &self.rows).with_separator("  "))
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum PlatformColumn {
    Label,
    Names,
    Status,
}

impl TableColumn<PlatformRow> for PlatformColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            PlatformColumn::Label => "Platform",
            PlatformColumn::Names => "Names",
            PlatformColumn::Status => "Status",
        }
        .into()
    }

    fn format<'a>(&self, row: &'a PlatformRow) -> Cow<'a, str> {
        match self {
            PlatformColumn::Label => row.platform.label().into(),
            PlatformColumn::Names => row.names().join(", ").into(),
            PlatformColumn::Status => match row.enabled {
                true => "enabled",
                false => "disabled",
            }
            .into(),
        }
    }

    fn color(&self, row: &PlatformRow) -> Option<Color> {
        match (self, row.enabled) {
            (PlatformColumn::Status, true) => Some(Color::Green),
            (PlatformColumn::Status, false) => Some(Color::BrightBlack),
            _ => None,
        }
    }
}
