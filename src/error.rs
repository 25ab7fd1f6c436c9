use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GwrError>;

#[derive(Error, Debug)]
pub enum GwrError {
    #[error("Git error: {0}")]
    Git(#[from] Box<gix::discover::Error>),
    #[error("Git revision error: {0}")]
    Revision(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Reflog is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
    #[error("No reflog found at {}", .0.display())]
    MissingReflog(PathBuf),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

// gix errors are large; keep them boxed
impl From<gix::discover::Error> for GwrError {
    fn from(err: gix::discover::Error) -> Self {
        GwrError::Git(Box::new(err))
    }
}

impl From<arboard::Error> for GwrError {
    fn from(err: arboard::Error) -> Self {
        GwrError::Clipboard(err.to_string())
    }
}
