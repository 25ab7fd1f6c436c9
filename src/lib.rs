pub mod cli;
pub mod clipboard;
pub mod error;
pub mod git;
pub mod logging;
pub mod model;
pub mod report;
pub mod week;

pub use model::{CommitRecord, DateRange, Report, ReportEntry};
pub use report::{build_report, generate_report, ReportOptions};
