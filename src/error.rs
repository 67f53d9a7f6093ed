use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort icon generation.
#[derive(Debug, Error)]
pub enum Error {
    /// The source image path does not exist.  Nothing has been written.
    #[error("source file `{}` not found", .0.display())]
    MissingSource(PathBuf),

    /// Decoding, resizing, compositing or saving failed.  Icons written for
    /// earlier table entries are left on disk.
    #[error("error processing image: {0}")]
    Processing(#[from] io::Error),
}

/// Result type returned by the generator.
pub type Result<T> = std::result::Result<T, Error>;
