use thiserror::Error;
use std::io;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("System API error: {0}")]
    SystemApi(String),
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report output: {0}")]
    Write(#[from] io::Error),
}
