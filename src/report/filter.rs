use crate::model::{CommitRecord, DateRange};

/// Whether `record` belongs in the report.
///
/// An empty author counts as no author filter. The name match is exact and
/// case-sensitive. Both ends of `range` are inclusive.
pub fn should_include_commit(record: &CommitRecord, author: Option<&str>, range: &DateRange) -> bool {
    if let Some(name) = author.filter(|a| !a.is_empty()) {
        if record.author_name != name {
            return false;
        }
    }
    range.contains(record.timestamp)
}
