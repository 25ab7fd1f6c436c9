mod repo;

pub use repo::{parse_date, read_reflog_file, GitRepo};
