/// Conventional-commit labels that are always stripped, in checking order.
pub const BUILTIN_TYPES: [&str; 10] = [
    "feat", "fix", "refactor", "style", "docs", "perf", "test", "chore", "revert", "merge",
];

/// Built-in labels followed by the caller's extras.
pub fn commit_types<S: AsRef<str>>(extra: &[S]) -> Vec<String> {
    BUILTIN_TYPES
        .iter()
        .copied()
        .chain(extra.iter().map(|s| s.as_ref()))
        .map(str::to_string)
        .collect()
}

/// Remove leading `<type>:` labels, ignoring case.
///
/// Cascading: each label is tried against what the earlier labels left
/// behind, so `Merge: feat: x` loses both labels when `merge` precedes
/// `feat`. Passes over the list repeat until one strips nothing, so running
/// this on its own output is a no-op. Unlike a single ordered pass, a label
/// exposed by a later one is stripped too: `fix: feat: x` becomes `x`, not
/// `feat: x`.
pub fn strip_labels<S: AsRef<str>>(message: &str, types: &[S]) -> String {
    let mut message = message.trim();
    loop {
        let mut stripped = false;
        for ty in types {
            if let Some(rest) = strip_label(message, ty.as_ref()) {
                message = rest.trim();
                stripped = true;
            }
        }
        if !stripped {
            return message.to_string();
        }
    }
}

pub fn format_message<S: AsRef<str>>(message: &str, types: &[S], index: usize) -> String {
    format!("{index}:{}", strip_labels(message, types))
}

fn strip_label<'a>(message: &'a str, label: &str) -> Option<&'a str> {
    let mut chars = message.char_indices();
    for expected in label.chars().chain(std::iter::once(':')) {
        let (_, actual) = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    let end = chars.next().map_or(message.len(), |(i, _)| i);
    Some(&message[end..])
}
