//! Target resolution: deciding where (and whether) a path gets copied.
//!
//! Given one concrete source path, this stage looks up its metadata,
//! applies the leading-segment strip transform, joins the result under
//! the destination root, applies the soft-overwrite policy, and
//! materializes the destination's parent directories. Directories are
//! skipped here; their files arrive individually via recursive glob
//! expansion.

use crate::error::{Error, Result};
use crate::options::{CopyOptions, Strip};
use std::fs::{self, Metadata};
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// One file ready to be copied. Only ever refers to a regular file.
#[derive(Debug)]
pub(crate) struct CopyItem {
    pub src: PathBuf,
    pub src_meta: Metadata,
    pub dst: PathBuf,
}

/// Outcome of resolving one expanded path.
#[derive(Debug)]
pub(crate) enum Resolution {
    /// Copy this file.
    Item(CopyItem),
    /// The path is a directory; nothing to do.
    SkipDir,
    /// Soft mode and the destination already exists.
    SkipExisting,
}

/// Resolve one source path against the destination root.
///
/// Creates any missing destination parent directories as a side
/// effect, so the copy stage can assume the parent exists.
pub(crate) fn resolve(src: &Path, dest_root: &Path, options: &CopyOptions) -> Result<Resolution> {
    let src_meta = fs::metadata(src)?;

    if src_meta.is_dir() {
        debug!(path = %src.display(), "skipping, is directory");
        return Ok(Resolution::SkipDir);
    }
    if !src_meta.is_file() {
        return Err(Error::UnsupportedFileType(src.to_path_buf()));
    }

    let rel = strip_path(src, options.effective_strip())?;
    let dst = dest_root.join(rel);

    if options.soft {
        match fs::metadata(&dst) {
            Ok(_) => {
                debug!(path = %dst.display(), "skipping, destination exists");
                return Ok(Resolution::SkipExisting);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(Error::DestinationProbe { path: dst, source });
            }
        }
    }

    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::CreateDirectory {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    Ok(Resolution::Item(CopyItem {
        src: src.to_path_buf(),
        src_meta,
        dst,
    }))
}

/// Apply the strip transform to a source path, producing the
/// destination-relative path.
///
/// Depth counts directory segments: `input/a.txt` has depth 1, so
/// stripping 1 segment yields `a.txt` and stripping 2 fails.
fn strip_path(path: &Path, strip: Strip) -> Result<PathBuf> {
    // Root and `.` components never count as strippable segments.
    let segments: Vec<_> = path
        .components()
        .filter(|c| matches!(c, Component::Normal(_) | Component::ParentDir))
        .collect();

    let kept = match strip {
        Strip::Segments(0) => segments.as_slice(),
        Strip::All => &segments[segments.len().saturating_sub(1)..],
        Strip::Segments(n) => {
            let depth = segments.len().saturating_sub(1);
            if depth < n {
                return Err(Error::StripTooDeep {
                    path: path.to_path_buf(),
                    requested: n,
                    depth,
                });
            }
            &segments[n..]
        }
    };

    Ok(kept.iter().copied().collect())
}
