use super::{build_report, output_json, output_ndjson, output_table, output_text, ReportOptions};
use crate::cli::CommonArgs;
use crate::clipboard::copy_to_clipboard;
use crate::error::{GwrError, Result};
use crate::git::{parse_date, read_reflog_file, GitRepo};
use crate::model::{CommitRecord, DateRange, Report};
use crate::week::{current_week, Clock, SystemClock};
use anyhow::Context;
use console::style;

pub fn exec_report(common: &CommonArgs, json: bool, ndjson: bool, copy: bool) -> anyhow::Result<()> {
    let report = load_report(common, &SystemClock)?;

    if json {
        output_json(&report)?;
    } else if ndjson {
        output_ndjson(&report.entries)?;
    } else {
        output_text(&report)?;
    }

    if copy {
        if report.is_empty() {
            eprintln!("{}", style("Nothing to copy").dim());
        } else {
            copy_to_clipboard(&report.text()).context("Failed to copy report to clipboard")?;
            eprintln!("{}", style("Report copied to clipboard").green());
        }
    }

    Ok(())
}

pub fn exec_commits(common: &CommonArgs, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let report = load_report(common, &SystemClock)?;
    let records: Vec<CommitRecord> = report.entries.iter().map(|e| e.record.clone()).collect();

    if json {
        output_json(&records)?;
    } else if ndjson {
        output_ndjson(&records)?;
    } else {
        output_table(&report)?;
    }

    Ok(())
}

/// Read the reflog named by `common` and run the report pipeline over it.
pub fn load_report<C: Clock + ?Sized>(common: &CommonArgs, clock: &C) -> anyhow::Result<Report> {
    let (text, repo) = read_source(common)?;
    let range = resolve_range(common, repo.as_ref(), clock).context("Failed to resolve date range")?;

    let options = ReportOptions {
        author: common.author.clone(),
        commit_types: common.types.clone(),
        range,
        week_start: common.week_start,
    };

    build_report(&text, &options, clock).context("Failed to generate report")
}

fn read_source(common: &CommonArgs) -> anyhow::Result<(String, Option<GitRepo>)> {
    match &common.reflog {
        Some(path) => {
            let text = read_reflog_file(path)
                .with_context(|| format!("Failed to read reflog {}", path.display()))?;
            // only needed to resolve revisions in --since/--until
            let repo = GitRepo::open(common.repo.as_ref())
                .inspect_err(|e| tracing::debug!("No repository for revision lookups: {e}"))
                .ok();
            Ok((text, repo))
        }
        None => {
            let repo = GitRepo::open(common.repo.as_ref()).context("Failed to open git repository")?;
            let text = repo.read_reflog().context("Failed to read git reflog")?;
            tracing::info!(path = %repo.reflog_path().display(), "read reflog");
            Ok((text, Some(repo)))
        }
    }
}

/// `None` leaves the pipeline on its default week. A bound the user leaves
/// out falls back to the current week unless `--all` is set.
fn resolve_range<C: Clock + ?Sized>(
    common: &CommonArgs,
    repo: Option<&GitRepo>,
    clock: &C,
) -> Result<Option<DateRange>> {
    if common.since.is_none() && common.until.is_none() {
        return Ok(common.all.then(DateRange::unbounded));
    }

    let week = if common.all {
        DateRange::unbounded()
    } else {
        current_week(clock, common.week_start)?
    };

    let since = match common.since.as_deref() {
        Some(input) => Some(resolve_bound(input, repo, clock)?),
        None => week.since,
    };
    let until = match common.until.as_deref() {
        Some(input) => Some(resolve_bound(input, repo, clock)?),
        None => week.until,
    };

    if let (Some(s), Some(u)) = (since, until) {
        if s > u {
            return Err(GwrError::InvalidDate(format!(
                "Invalid range: since ({}) is after until ({})",
                s, u
            )));
        }
    }

    Ok(Some(DateRange { since, until }))
}

fn resolve_bound<C: Clock + ?Sized>(input: &str, repo: Option<&GitRepo>, clock: &C) -> Result<i64> {
    match repo {
        Some(repo) => repo.resolve_bound(input, clock),
        None => parse_date(input, clock.now()).ok_or_else(|| {
            GwrError::InvalidDate(format!("Cannot resolve '{input}' without a git repository"))
        }),
    }
}
