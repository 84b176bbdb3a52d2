//! Error types for cpfiles.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur while expanding patterns and copying files, and the
//! [`Result`] type alias.
//!
//! # Error Categories
//!
//! | Category | Errors |
//! |----------|--------|
//! | Invocation | [`Error::TooFewPaths`] |
//! | Expansion | [`Error::InvalidPattern`], [`Error::Walk`] |
//! | Resolution | [`Error::UnsupportedFileType`], [`Error::StripTooDeep`], [`Error::DestinationProbe`], [`Error::CreateDirectory`] |
//! | Copying | [`Error::Copy`], [`Error::Io`] |
//! | Outcome | [`Error::NothingCopied`] |

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for cpfiles operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while expanding patterns and copying files.
///
/// All errors include relevant path information to aid debugging.
/// Every variant except [`Error::NothingCopied`] aborts the operation
/// at the first occurrence; nothing is retried.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Fewer than two path arguments were supplied
    #[error("at least two paths are required: one or more sources and a destination")]
    TooFewPaths,

    /// A source or exclude pattern failed to compile
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern as given
        pattern: String,
        /// Underlying globset error
        source: globset::Error,
    },

    /// Directory traversal failed while expanding a pattern
    #[error("failed to walk {root}: {source}")]
    Walk {
        /// The directory being walked
        root: PathBuf,
        /// Underlying walkdir error
        source: walkdir::Error,
    },

    /// Source is neither a regular file nor a directory
    #[error("source is neither a file nor a directory: {0}")]
    UnsupportedFileType(PathBuf),

    /// More leading segments requested than the path has
    #[error("cannot strip {requested} segments from {path} (path depth is {depth})")]
    StripTooDeep {
        /// The source path being transformed
        path: PathBuf,
        /// Number of segments requested to strip
        requested: usize,
        /// Actual depth of the path
        depth: usize,
    },

    /// Probing the destination in soft mode failed with something
    /// other than "not found"
    #[error("failed to probe destination {path}: {source}")]
    DestinationProbe {
        /// The destination path being probed
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Failed to create a destination directory
    #[error("failed to create directory {path}: {source}")]
    CreateDirectory {
        /// The directory that could not be created
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Failed to copy a file's content or permissions
    #[error("failed to copy {src} to {dst}: {source}")]
    Copy {
        /// Source file path
        src: PathBuf,
        /// Destination file path
        dst: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// No file was copied and the caller asked for that to be an error
    #[error("nothing copied")]
    NothingCopied,
}
