use std::path::PathBuf;

use thiserror::Error;

use crate::resolver::FetchError;

/// Errors that abort a conversion run
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read input file {}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input file {} is not valid UTF-8", .path.display())]
    InputDecode {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("failed to fetch title for {url}")]
    Network {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("failed to write output file {}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}
