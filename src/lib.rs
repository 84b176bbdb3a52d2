//! # cpfiles
//!
//! Copy files matching glob patterns into a destination directory tree.
//!
//! ## Core Features
//!
//! - **Glob expansion**: `*` and `**` patterns expanded against the
//!   filesystem, with exclude patterns and optional dotfile matching
//! - **Path transforms**: strip a fixed number of leading segments, or
//!   flatten everything into the destination root
//! - **Soft mode**: leave already-existing destination files untouched
//! - **Mode preserving**: destination files keep the source's
//!   permission bits
//! - **Streamed copy**: bounded memory use regardless of file size
//! - **Fail fast**: the first error anywhere aborts the whole operation
//!
//! ## Quick Start
//!
//! ```no_run
//! use cpfiles::{CopyOptions, copy_files};
//!
//! // Copy all .txt files under src/ into backup/, keeping structure
//! let stats = copy_files(&["src/**/*.txt", "backup"], &CopyOptions::default())?;
//! println!("copied {} files ({} bytes)", stats.files_copied, stats.bytes_copied);
//! # Ok::<(), cpfiles::Error>(())
//! ```
//!
//! ### Builder API
//!
//! ```no_run
//! use cpfiles::CopyBuilder;
//!
//! let stats = CopyBuilder::new("dist")
//!     .source("assets/**/*.css")
//!     .exclude("**/*.draft.css")
//!     .strip(1)
//!     .soft()
//!     .run()?;
//! # Ok::<(), cpfiles::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! Each source argument flows through four stages: `~` expansion,
//! pattern expansion against the filesystem, target resolution (strip
//! transform, soft check, parent directory creation), and the streamed
//! byte copy. Skips are intentional in exactly two places: directories
//! encountered during resolution, and pre-existing destinations in
//! soft mode. Everything else is first-error-wins.
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/Deserialize for [`CopyOptions`] |

mod builder;
mod copy;
mod error;
mod expand;
mod options;
mod resolve;
mod utils;

pub use builder::CopyBuilder;
pub use copy::{CopyStats, copy_files, copy_files_up};
pub use error::{Error, Result};
pub use options::{CopyOptions, Strip};
