//! Pattern expansion: turning source arguments into concrete paths.
//!
//! Each source argument is either a literal path or a glob pattern.
//! Literal paths pass straight through (when they exist). Patterns are
//! split into a literal walk root and a relative sub-pattern; the root
//! is walked with [`walkdir`] and entries are matched against the
//! sub-pattern compiled with [`globset`].
//!
//! Hidden entries (name beginning with `.`) below the walk root are
//! pruned from glob matches unless [`CopyOptions::include_hidden`] is
//! set. Literal paths are never subject to that rule. Exclude patterns
//! apply to every candidate, literal or matched.

use crate::error::{Error, Result};
use crate::options::CopyOptions;
use crate::utils::has_glob_meta;
use globset::{GlobBuilder, GlobMatcher};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Compile the exclude patterns once for the whole run.
///
/// A malformed pattern aborts the operation with
/// [`Error::InvalidPattern`].
pub(crate) fn compile_excludes(patterns: &[String]) -> Result<Vec<GlobMatcher>> {
    patterns
        .iter()
        .map(|pattern| compile_glob(pattern))
        .collect()
}

fn compile_glob(pattern: &str) -> Result<GlobMatcher> {
    // `*` must not cross path separators; `**` recurses.
    let glob = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
    Ok(glob.compile_matcher())
}

/// Expand one source argument into concrete filesystem paths.
///
/// The result is deterministic for a given filesystem state (directory
/// entries are visited in file-name order). A pattern with zero matches
/// expands to an empty sequence; that is not an error here.
pub(crate) fn expand_source(
    source: &str,
    options: &CopyOptions,
    excludes: &[GlobMatcher],
) -> Result<Vec<PathBuf>> {
    let mut paths = if has_glob_meta(source) {
        expand_pattern(source, options)?
    } else {
        expand_literal(source)?
    };

    paths.retain(|path| {
        let keep = !excludes.iter().any(|matcher| matcher.is_match(path));
        if !keep {
            debug!(path = %path.display(), "dropped by exclude pattern");
        }
        keep
    });

    for path in &paths {
        debug!(path = %path.display(), "expanded path");
    }
    Ok(paths)
}

/// A literal, non-glob path: passes through when it exists, expands to
/// nothing when it does not.
fn expand_literal(source: &str) -> Result<Vec<PathBuf>> {
    match fs::metadata(source) {
        Ok(_) => Ok(vec![PathBuf::from(source)]),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

fn expand_pattern(pattern: &str, options: &CopyOptions) -> Result<Vec<PathBuf>> {
    let (root, rest) = split_pattern(pattern);
    let walk_root = if root.is_empty() {
        Path::new(".")
    } else {
        Path::new(&root)
    };

    // A missing walk root means the pattern simply matches nothing.
    match fs::metadata(walk_root) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    }

    let matcher = compile_glob(&rest)?;
    let include_hidden = options.include_hidden;

    let walker = WalkDir::new(walk_root)
        .follow_links(options.follow_symlinks)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| {
            entry.depth() == 0 || include_hidden || !is_hidden_name(entry.file_name())
        });

    let mut paths = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| Error::Walk {
            root: walk_root.to_path_buf(),
            source,
        })?;
        if entry.depth() == 0 {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(walk_root) else {
            continue;
        };
        if matcher.is_match(rel) {
            paths.push(if root.is_empty() {
                rel.to_path_buf()
            } else {
                Path::new(&root).join(rel)
            });
        }
    }
    Ok(paths)
}

/// Split a pattern at the first segment containing a glob
/// metacharacter, returning the literal prefix (possibly empty) and
/// the remaining sub-pattern.
fn split_pattern(pattern: &str) -> (String, String) {
    let segments: Vec<&str> = pattern.split('/').collect();
    let split_at = segments
        .iter()
        .position(|segment| has_glob_meta(segment))
        .unwrap_or(segments.len());
    (
        segments[..split_at].join("/"),
        segments[split_at..].join("/"),
    )
}

fn is_hidden_name(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}
