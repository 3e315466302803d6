//! Error types for xml2wiki operations.

use thiserror::Error;

/// Errors that can occur while reading markup or writing wiki text.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Input ended with {0} unclosed element(s)")]
    UnclosedElements(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
