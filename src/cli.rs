use crate::week::WeekStart;
use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gwr")]
#[command(about = "Generate a numbered weekly report from a git reflog")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[arg(short, long, action = ArgAction::Count, global = true, help = "Increase log verbosity (-v, -vv)")]
    pub verbose: u8,

    #[arg(short, long, global = true, help = "Only log errors")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug, Default)]
pub struct CommonArgs {
    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(long, help = "Read this reflog file instead of <repo>/.git/logs/HEAD")]
    pub reflog: Option<PathBuf>,

    #[arg(long, help = "Only include entries by this exact author name")]
    pub author: Option<String>,

    #[arg(long = "types", value_delimiter = ',', help = "Extra commit-type labels to strip, after the built-in ones")]
    pub types: Vec<String>,

    #[arg(long, help = "Start at this date, duration or commit (Unix seconds, RFC3339, YYYY-MM-DD, '3 days ago', rev)")]
    pub since: Option<String>,

    #[arg(long, help = "End at this date, duration or commit (Unix seconds, RFC3339, YYYY-MM-DD, '3 days ago', rev)")]
    pub until: Option<String>,

    #[arg(long, help = "Do not limit the report to the current week")]
    pub all: bool,

    #[arg(long, value_enum, default_value_t = WeekStart::Monday, help = "First day of the week for the default window")]
    pub week_start: WeekStart,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the concatenated report
    Report {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,

        #[arg(long, help = "Also copy the report to the clipboard")]
        copy: bool,
    },
    /// List the matching reflog entries
    Commits {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::logging::setup_logging(crate::logging::LoggingConfig::from_verbosity(
            self.verbose,
            self.quiet,
        ))?;

        match self.command {
            Commands::Report { json, ndjson, copy } => {
                crate::report::exec_report(&self.common, json, ndjson, copy)
            }
            Commands::Commits { json, ndjson } => {
                crate::report::exec_commits(&self.common, json, ndjson)
            }
        }
    }
}
