pub mod exec;
pub mod filter;
pub mod format;
pub mod output;
pub mod parse;
pub mod pipeline;

pub use exec::{exec_commits, exec_report};
pub use filter::should_include_commit;
pub use format::{commit_types, format_message, strip_labels, BUILTIN_TYPES};
pub use output::{output_json, output_ndjson, output_table, output_text};
pub use parse::{parse_line, parse_reflog};
pub use pipeline::{build_report, generate_report, ReportOptions};
