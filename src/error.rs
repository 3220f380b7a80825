use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Failed to write demo output: {0}")]
    Io(#[from] io::Error),

    #[error("Drawn output is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, DemoError>;
