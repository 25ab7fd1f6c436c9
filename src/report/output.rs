use crate::model::Report;
use crate::week::week_key;
use anyhow::Result;
use chrono::Local;
use console::style;
use serde::Serialize;
use std::collections::HashSet;

pub fn output_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn output_ndjson<T: Serialize>(items: &[T]) -> Result<()> {
    for item in items {
        println!("{}", serde_json::to_string(item)?);
    }
    Ok(())
}

pub fn output_text(report: &Report) -> Result<()> {
    if report.is_empty() {
        eprintln!("{}", style(format!("No commits found for {}", report.range)).yellow());
        return Ok(());
    }
    println!("{}", report.text());
    Ok(())
}

pub fn output_table(report: &Report) -> Result<()> {
    if report.is_empty() {
        eprintln!("{}", style(format!("No commits found for {}", report.range)).yellow());
        return Ok(());
    }

    println!(
        "{:>4} {:<16} {:<10} {:<20} {}",
        style("#").bold(),
        style("Date").bold(),
        style("Commit").bold(),
        style("Author").bold(),
        style("Message").bold()
    );
    println!("{}", "─".repeat(90));

    for entry in &report.entries {
        let record = &entry.record;
        let date = record
            .datetime()
            .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default();
        let short_hash: String = record.parent_commit_hash.chars().take(8).collect();
        println!(
            "{:>4} {:<16} {:<10} {:<20} {}",
            entry.index,
            style(date).dim(),
            style(short_hash).yellow(),
            truncate(&record.author_name, 20),
            record.message
        );
    }

    let authors: HashSet<_> = report.entries.iter().map(|e| &e.record.author_name).collect();
    println!();
    println!("Range: {}", style(report.range).dim());
    println!("Commits: {}", style(report.entries.len()).cyan());
    println!("Authors: {}", style(authors.len()).yellow());

    if let (Some(first), Some(last)) = (report.entries.first(), report.entries.last()) {
        println!(
            "Weeks: {} to {}",
            style(week_key(first.record.timestamp)).dim(),
            style(week_key(last.record.timestamp)).dim()
        );
    }

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
