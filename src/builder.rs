//! Builder API for ergonomic copy operations.
//!
//! The builder pattern provides a fluent interface for assembling the
//! source patterns, destination, and options of one copy operation.
//! This is often more convenient than constructing [`CopyOptions`] and
//! an argument slice manually.
//!
//! # Examples
//!
//! ```no_run
//! use cpfiles::CopyBuilder;
//!
//! let stats = CopyBuilder::new("dist")
//!     .source("assets/**/*.css")
//!     .source("assets/**/*.js")
//!     .exclude("**/*.min.js")
//!     .strip(1)
//!     .run()?;
//! println!("copied {} files", stats.files_copied);
//! # Ok::<(), cpfiles::Error>(())
//! ```

use crate::copy::{CopyStats, run};
use crate::error::Result;
use crate::options::{CopyOptions, Strip};
use crate::utils::untildify;
use std::path::{Path, PathBuf};

/// A builder for configuring and executing one copy operation.
///
/// Sources are glob patterns or literal paths, added in order with
/// [`source`](CopyBuilder::source); the destination root is fixed at
/// construction.
#[derive(Debug, Clone)]
pub struct CopyBuilder {
    sources: Vec<String>,
    dest: PathBuf,
    options: CopyOptions,
}

impl CopyBuilder {
    /// Create a builder that copies into the given destination root.
    pub fn new<P: AsRef<Path>>(dest: P) -> Self {
        Self {
            sources: Vec::new(),
            dest: dest.as_ref().to_path_buf(),
            options: CopyOptions::default(),
        }
    }

    /// Add a source pattern or literal path.
    #[must_use]
    pub fn source<S: Into<String>>(mut self, pattern: S) -> Self {
        self.sources.push(pattern.into());
        self
    }

    /// Include dot-named files and directories in glob matches.
    #[must_use]
    pub fn include_hidden(mut self) -> Self {
        self.options = self.options.with_include_hidden();
        self
    }

    /// Add a glob pattern whose matches are excluded.
    #[must_use]
    pub fn exclude<S: Into<String>>(mut self, pattern: S) -> Self {
        self.options = self.options.with_exclude(pattern);
        self
    }

    /// Copy every file directly into the destination root, discarding
    /// directory structure.
    #[must_use]
    pub fn flat(mut self) -> Self {
        self.options = self.options.with_flat();
        self
    }

    /// Traverse symlinked directories during expansion.
    #[must_use]
    pub fn follow_symlinks(mut self) -> Self {
        self.options = self.options.with_follow_symlinks();
        self
    }

    /// Leave existing destination files untouched.
    #[must_use]
    pub fn soft(mut self) -> Self {
        self.options = self.options.with_soft();
        self
    }

    /// Strip the first `n` leading path segments from each source.
    #[must_use]
    pub fn strip(mut self, n: usize) -> Self {
        self.options = self.options.with_strip(Strip::Segments(n));
        self
    }

    /// Strip all leading path segments, keeping only base names.
    #[must_use]
    pub fn strip_all(mut self) -> Self {
        self.options = self.options.with_strip(Strip::All);
        self
    }

    /// Fail when the operation copies nothing.
    #[must_use]
    pub fn error_if_none_copied(mut self) -> Self {
        self.options = self.options.with_error_if_none_copied();
        self
    }

    /// Execute the copy operation.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TooFewPaths`](crate::Error::TooFewPaths)
    /// when no source was added, and otherwise with the first pipeline
    /// error encountered.
    pub fn run(self) -> Result<CopyStats> {
        let dest = untildify(&self.dest.to_string_lossy()).into_owned();
        run(&self.sources, Path::new(&dest), &self.options)
    }
}
