use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for image-cropper operations.
#[derive(Debug, Error)]
pub enum CropperError {
    #[error("{0}")]
    Usage(#[from] UsageError),

    #[error("Error: data is not valid.")]
    InvalidConfig(#[from] InvalidConfig),

    #[error("Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error: failed to read image `{}`: {source}", .path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Error: failed to write image `{}`: {source}", .path.display())]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Command-line usage problems, each tied to one fixed diagnostic line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("Error: missing command.")]
    MissingCommand,

    #[error("Error: missing argument.")]
    MissingArgument,

    #[error("Error: invalid argument.")]
    InvalidArgument,
}

/// A crop config that could not be turned into a rectangle.
///
/// Every parse failure collapses into this one value; the offending line is
/// only reported through `tracing` debug events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InvalidConfig;

impl fmt::Display for InvalidConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid crop config")
    }
}

impl std::error::Error for InvalidConfig {}
