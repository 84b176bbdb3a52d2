//! Configuration options for copy operations.
//!
//! This module provides [`CopyOptions`] for configuring copy behavior and
//! [`Strip`] for controlling how many leading path segments are removed
//! before a source path is joined under the destination root.
//!
//! # Example
//!
//! ```
//! use cpfiles::{CopyOptions, Strip};
//!
//! // Create options with builder pattern
//! let options = CopyOptions::default()
//!     .with_exclude("**/*.tmp")
//!     .with_strip(Strip::Segments(1))
//!     .with_soft();
//! ```

/// How many leading path segments to remove from a source path before
/// computing its destination-relative location.
///
/// # Default
///
/// The default is `Segments(0)`, which keeps the full relative path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strip {
    /// Remove the first N leading segments (N may be 0).
    ///
    /// Fails if the path has fewer directory segments than N.
    Segments(usize),
    /// Remove all leading segments, keeping only the file's base name.
    All,
}

impl Default for Strip {
    fn default() -> Self {
        Self::Segments(0)
    }
}

/// Options for copy operations.
///
/// Use [`Default::default()`] to get the defaults (everything off),
/// then customize using the builder methods.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `include_hidden` | `false` | Glob matches skip dot-named paths |
/// | `exclude` | empty | No exclude patterns |
/// | `flat` | `false` | Keep directory structure |
/// | `follow_symlinks` | `false` | Do not traverse symlinked directories |
/// | `soft` | `false` | Overwrite existing destination files |
/// | `strip` | `Segments(0)` | Keep the full relative path |
/// | `error_if_none_copied` | `false` | Zero copies is not an error |
///
/// # Example
///
/// ```
/// use cpfiles::CopyOptions;
///
/// let options = CopyOptions::default()
///     .with_include_hidden()   // also match dotfiles
///     .with_flat();            // discard directory structure
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::struct_excessive_bools)]
pub struct CopyOptions {
    /// Include files and directories whose name begins with a dot when
    /// expanding glob patterns (default: false)
    ///
    /// Literal, non-glob source paths always pass through regardless
    /// of this setting.
    pub include_hidden: bool,

    /// Glob patterns whose matches are dropped from the expansion
    pub exclude: Vec<String>,

    /// Discard all directory structure, keeping only base names (default: false)
    ///
    /// Takes precedence over any numeric `strip` value.
    pub flat: bool,

    /// Traverse symbolic-link directories as if they were real
    /// directories (default: false)
    ///
    /// The same underlying file may then appear under multiple
    /// expanded paths.
    pub follow_symlinks: bool,

    /// Leave existing destination files untouched instead of
    /// overwriting them (default: false)
    pub soft: bool,

    /// Leading-segment removal applied to each source path
    pub strip: Strip,

    /// Report an error when the whole operation copies nothing (default: false)
    pub error_if_none_copied: bool,
}

impl CopyOptions {
    /// Include dot-named files and directories in glob matches
    #[must_use]
    pub fn with_include_hidden(mut self) -> Self {
        self.include_hidden = true;
        self
    }

    /// Add a glob pattern whose matches are excluded from the copy
    #[must_use]
    pub fn with_exclude<S: Into<String>>(mut self, pattern: S) -> Self {
        self.exclude.push(pattern.into());
        self
    }

    /// Discard directory structure, copying every file directly into
    /// the destination root
    #[must_use]
    pub fn with_flat(mut self) -> Self {
        self.flat = true;
        self
    }

    /// Traverse symlinked directories during pattern expansion
    #[must_use]
    pub fn with_follow_symlinks(mut self) -> Self {
        self.follow_symlinks = true;
        self
    }

    /// Leave existing destination files untouched
    #[must_use]
    pub fn with_soft(mut self) -> Self {
        self.soft = true;
        self
    }

    /// Set the leading-segment removal mode
    #[must_use]
    pub fn with_strip(mut self, strip: Strip) -> Self {
        self.strip = strip;
        self
    }

    /// Fail the operation when no file ends up being copied
    #[must_use]
    pub fn with_error_if_none_copied(mut self) -> Self {
        self.error_if_none_copied = true;
        self
    }

    /// The strip mode actually applied: `flat` forces [`Strip::All`]
    /// regardless of any numeric value.
    pub(crate) fn effective_strip(&self) -> Strip {
        if self.flat { Strip::All } else { self.strip }
    }
}
