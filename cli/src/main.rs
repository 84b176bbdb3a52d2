//! cpf - Copy Files
//!
//! Copy files matching glob patterns into a destination directory.

use clap::Parser;
use cpfiles::{CopyOptions, Strip, copy_files};
use tracing_subscriber::filter::LevelFilter;

/// cpf - copy files matching glob patterns
///
/// All PATHS but the last are glob patterns or literal paths; the last
/// is the destination directory.
///
/// Usage:
///   cpf SOURCE... DIRECTORY
///   cpf -u 1 'src/**/*.txt' out
#[derive(Parser, Debug)]
#[command(name = "cpf", version, about, long_about = None)]
struct Args {
    /// Source patterns followed by the destination directory
    #[arg(required = true)]
    paths: Vec<String>,

    /// Include files and directories beginning with a dot (.)
    #[arg(short = 'a', long)]
    all: bool,

    /// Pattern or glob to exclude (may be given multiple times)
    #[arg(short = 'e', long = "exclude", value_name = "GLOB")]
    exclude: Vec<String>,

    /// Throw an error if nothing is copied
    #[arg(short = 'E', long = "error")]
    error: bool,

    /// Flatten the output
    #[arg(short = 'f', long)]
    flat: bool,

    /// Follow symbolic links
    #[arg(short = 'F', long)]
    follow: bool,

    /// Do not overwrite destination files if they exist
    #[arg(short = 's', long)]
    soft: bool,

    /// Slice a number of leading segments off the source paths
    #[arg(short = 'u', long, value_name = "N", default_value_t = 0)]
    up: usize,

    /// Print more information to the console
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Args {
    fn to_options(&self) -> CopyOptions {
        let mut options = CopyOptions::default().with_strip(Strip::Segments(self.up));
        if self.all {
            options = options.with_include_hidden();
        }
        for pattern in &self.exclude {
            options = options.with_exclude(pattern);
        }
        if self.error {
            options = options.with_error_if_none_copied();
        }
        if self.flat {
            options = options.with_flat();
        }
        if self.follow {
            options = options.with_follow_symlinks();
        }
        if self.soft {
            options = options.with_soft();
        }
        options
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(LevelFilter::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    let stats = copy_files(&args.paths, &args.to_options())?;
    if args.verbose {
        eprintln!(
            "copied {} files ({} bytes), skipped {}",
            stats.files_copied, stats.bytes_copied, stats.files_skipped
        );
    }
    Ok(())
}
