//! The copy pipeline: expansion, resolution, and streamed byte copy.
//!
//! [`copy_files`] is the main entry point. All arguments but the last
//! are glob patterns or literal paths; the last is the destination
//! root. Each expanded path flows through resolution (stat, strip
//! transform, soft check, parent creation) and then a streamed copy
//! that preserves the source's permission mode. The first error
//! anywhere aborts the whole operation.

use crate::error::{Error, Result};
use crate::expand::{compile_excludes, expand_source};
use crate::options::CopyOptions;
use crate::resolve::{CopyItem, Resolution, resolve};
use crate::utils::untildify;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;
use tracing::debug;

/// Statistics from a completed copy operation.
///
/// Accumulated as the pipeline runs and returned once at the end; the
/// nothing-copied check reads `files_copied` exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    /// Number of files copied
    pub files_copied: u64,
    /// Number of files left untouched by soft mode
    pub files_skipped: u64,
    /// Total bytes written to the destination
    pub bytes_copied: u64,
}

/// Copy files matching the source arguments into the destination root.
///
/// All arguments but the last are glob patterns or literal paths; the
/// last is the destination directory. A leading `~` in any argument is
/// expanded to the home directory.
///
/// # Example
///
/// ```no_run
/// use cpfiles::{CopyOptions, copy_files};
///
/// let options = CopyOptions::default().with_exclude("**/*.tmp");
/// let stats = copy_files(&["src/**/*.txt", "backup"], &options)?;
/// println!("copied {} files", stats.files_copied);
/// # Ok::<(), cpfiles::Error>(())
/// ```
///
/// # Errors
///
/// Fails fast with [`Error::TooFewPaths`] when fewer than two
/// arguments are given. Any expansion, resolution, or copy failure
/// aborts the run with the first error encountered. When
/// `error_if_none_copied` is set and no file was copied, returns
/// [`Error::NothingCopied`].
pub fn copy_files<S: AsRef<str>>(paths: &[S], options: &CopyOptions) -> Result<CopyStats> {
    let Some((dest, sources)) = paths.split_last() else {
        return Err(Error::TooFewPaths);
    };
    if sources.is_empty() {
        return Err(Error::TooFewPaths);
    }
    let dest = untildify(dest.as_ref()).into_owned();
    run(sources, Path::new(&dest), options)
}

/// Back-compatibility shorthand: copy with only a numeric strip value,
/// every other option at its default.
///
/// `copy_files_up(paths, 0)` is equivalent to calling [`copy_files`]
/// with [`CopyOptions::default()`].
pub fn copy_files_up<S: AsRef<str>>(paths: &[S], up: usize) -> Result<CopyStats> {
    let options = CopyOptions::default().with_strip(crate::Strip::Segments(up));
    copy_files(paths, &options)
}

/// Run the pipeline over already-split sources and destination root.
pub(crate) fn run<S: AsRef<str>>(
    sources: &[S],
    dest_root: &Path,
    options: &CopyOptions,
) -> Result<CopyStats> {
    if sources.is_empty() {
        return Err(Error::TooFewPaths);
    }

    let excludes = compile_excludes(&options.exclude)?;
    let mut stats = CopyStats::default();

    for source in sources {
        let source = untildify(source.as_ref());
        debug!(source = %source, "received");
        for path in expand_source(&source, options, &excludes)? {
            match resolve(&path, dest_root, options)? {
                Resolution::Item(item) => {
                    stats.bytes_copied += copy_item(&item)?;
                    stats.files_copied += 1;
                }
                Resolution::SkipExisting => stats.files_skipped += 1,
                Resolution::SkipDir => {}
            }
        }
    }

    if options.error_if_none_copied && stats.files_copied == 0 {
        return Err(Error::NothingCopied);
    }
    Ok(stats)
}

/// Stream one file's bytes to its destination and carry over the
/// permission mode. The parent directory already exists.
fn copy_item(item: &CopyItem) -> Result<u64> {
    debug!(from = %item.src.display(), to = %item.dst.display(), "copying");
    copy_contents(item).map_err(|source| Error::Copy {
        src: item.src.clone(),
        dst: item.dst.clone(),
        source,
    })
}

fn copy_contents(item: &CopyItem) -> io::Result<u64> {
    let src_file = File::open(&item.src)?;
    let dst_file = File::create(&item.dst)?;
    let bytes = io::copy(&mut BufReader::new(src_file), &mut &dst_file)?;
    fs::set_permissions(&item.dst, item.src_meta.permissions())?;
    Ok(bytes)
}
