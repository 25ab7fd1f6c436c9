use crate::model::CommitRecord;
use once_cell::sync::Lazy;
use regex::Regex;

// <old> <new> <name> <<email>> <seconds> <±hhmm> <message>; the name is one token
static RECORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\w+)[ \t]+(\w+)[ \t]+(\S+)[ \t]+<([^>]+)>[ \t]+([0-9]+)[ \t]+([+-][0-9]{4})(?:[ \t]+(.*))?$",
    )
    .expect("reflog record pattern is valid")
});

const COMMIT_LABEL: &str = "commit:";

/// Parse reflog text into records, one per matching line.
///
/// Lines that do not look like a reflog entry are skipped. Every iteration
/// consumes one line, so the scan always terminates.
pub fn parse_reflog(text: &str) -> Vec<CommitRecord> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for line in text.lines() {
        match parse_line(line) {
            Some(record) => records.push(record),
            None if line.trim().is_empty() => {}
            None => skipped += 1,
        }
    }

    tracing::debug!(parsed = records.len(), skipped, "parsed reflog");
    records
}

pub fn parse_line(line: &str) -> Option<CommitRecord> {
    let caps = RECORD.captures(line.trim_end_matches('\r'))?;
    let timestamp = caps[5].parse::<i64>().ok()?;
    let tail = caps.get(7).map_or("", |m| m.as_str());

    Some(CommitRecord {
        commit_hash: caps[1].to_string(),
        parent_commit_hash: caps[2].to_string(),
        author_name: caps[3].to_string(),
        author_email: caps[4].to_string(),
        timestamp,
        timezone_offset: caps[6].to_string(),
        message: clean_message(tail),
    })
}

fn clean_message(tail: &str) -> String {
    let tail = tail.trim();
    tail.strip_prefix(COMMIT_LABEL)
        .unwrap_or(tail)
        .trim()
        .to_string()
}
