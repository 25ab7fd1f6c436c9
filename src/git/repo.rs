use crate::error::{GwrError, Result};
use crate::week::Clock;
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use gix::{discover, Repository};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => std::env::current_dir()?,
        };

        let repo = discover(&repo_path)?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { repo, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<git dir>/logs/HEAD`
    pub fn reflog_path(&self) -> PathBuf {
        self.repo.git_dir().join("logs").join("HEAD")
    }

    pub fn read_reflog(&self) -> Result<String> {
        read_reflog_file(self.reflog_path())
    }

    /// Unix seconds for a `--since`/`--until` value: a date, a relative
    /// duration, or any revision git understands.
    pub fn resolve_bound<C: Clock + ?Sized>(&self, input: &str, clock: &C) -> Result<i64> {
        match parse_date(input, clock.now()) {
            Some(secs) => Ok(secs),
            None => self.revision_time(input),
        }
    }

    fn revision_time(&self, input: &str) -> Result<i64> {
        let id = self
            .repo
            .rev_parse_single(input)
            .map_err(|e| GwrError::Revision(format!("Invalid commit or date '{input}': {e}")))?;

        let commit = id
            .object()
            .map_err(|e| GwrError::Revision(format!("Cannot load '{input}': {e}")))?
            .try_into_commit()
            .map_err(|_| GwrError::Revision(format!("Not a commit: {input}")))?;

        let time = commit
            .time()
            .map_err(|e| GwrError::Revision(format!("Unreadable commit time for '{input}': {e}")))?;
        Ok(time.seconds)
    }
}

pub fn read_reflog_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(GwrError::MissingReflog(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    String::from_utf8(bytes).map_err(|e| {
        tracing::error!(path = %path.display(), "reflog is not valid UTF-8: {e}");
        GwrError::from(e)
    })
}

/// Dates that need no repository to resolve.
pub fn parse_date(input: &str, now: DateTime<Local>) -> Option<i64> {
    let input = input.trim();

    // Unix seconds, bare or git-style "@1700000000"
    if let Ok(secs) = input.strip_prefix('@').unwrap_or(input).parse::<i64>() {
        return Some(secs);
    }

    // RFC3339
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.timestamp());
    }

    // YYYY-MM-DD, local midnight
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .and_then(|midnight| Local.from_local_datetime(&midnight).earliest())
            .map(|dt| dt.timestamp());
    }

    // Relative duration (e.g., "3 days ago", "36h ago")
    let duration = parse_natural_duration(input)?;
    let delta = chrono::Duration::from_std(duration).ok()?;
    now.checked_sub_signed(delta).map(|dt| dt.timestamp())
}

fn parse_natural_duration(input: &str) -> Option<Duration> {
    let input = input.trim().to_lowercase();

    if let Some(days) = input.strip_suffix(" days ago") {
        if let Ok(n) = days.trim().parse::<u64>() {
            return n.checked_mul(86400).map(Duration::from_secs);
        }
    }

    if let Some(weeks) = input.strip_suffix(" weeks ago") {
        if let Ok(n) = weeks.trim().parse::<u64>() {
            return n.checked_mul(7 * 86400).map(Duration::from_secs);
        }
    }

    if let Some(months) = input.strip_suffix(" months ago") {
        if let Ok(n) = months.trim().parse::<u64>() {
            return n.checked_mul(30 * 86400).map(Duration::from_secs);
        }
    }

    input
        .strip_suffix("ago")
        .and_then(|span| humantime::parse_duration(span.trim()).ok())
}
