use super::{commit_types, format_message, parse_reflog, should_include_commit};
use crate::error::Result;
use crate::model::{DateRange, Report, ReportEntry, SCHEMA_VERSION};
use crate::week::{current_week, Clock, WeekStart};
use chrono::Utc;

#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    pub author: Option<String>,
    /// Extra labels stripped after the built-in ones.
    pub commit_types: Vec<String>,
    /// `None` selects the clock's current week.
    pub range: Option<DateRange>,
    pub week_start: WeekStart,
}

/// Parse, filter, order and number the reflog entries.
pub fn build_report<C: Clock + ?Sized>(text: &str, options: &ReportOptions, clock: &C) -> Result<Report> {
    run(text, options, clock).inspect_err(|e| tracing::error!("Failed to generate report: {e}"))
}

/// The report as a single string with entries joined back to back.
pub fn generate_report<C: Clock + ?Sized>(text: &str, options: &ReportOptions, clock: &C) -> Result<String> {
    Ok(build_report(text, options, clock)?.text())
}

fn run<C: Clock + ?Sized>(text: &str, options: &ReportOptions, clock: &C) -> Result<Report> {
    let range = match options.range {
        Some(range) => range,
        None => current_week(clock, options.week_start)?,
    };
    let types = commit_types(options.commit_types.as_slice());

    let mut records: Vec<_> = parse_reflog(text)
        .into_iter()
        .filter(|r| should_include_commit(r, options.author.as_deref(), &range))
        .collect();
    // stable: equal timestamps keep reflog order
    records.sort_by_key(|r| r.timestamp);

    tracing::debug!(kept = records.len(), %range, "filtered reflog records");

    let entries = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| ReportEntry {
            index: i + 1,
            line: format_message(&record.message, types.as_slice(), i + 1),
            record,
        })
        .collect();

    Ok(Report {
        version: SCHEMA_VERSION,
        generated_at: clock.now().with_timezone(&Utc),
        range,
        entries,
    })
}
