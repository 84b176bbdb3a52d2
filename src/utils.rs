//! Small path helpers shared across the pipeline.

use std::borrow::Cow;

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a leading tilde are returned unchanged. Expansion of
/// `~otheruser` is not attempted; such paths pass through as-is.
pub(crate) fn untildify(path: &str) -> Cow<'_, str> {
    shellexpand::tilde(path)
}

/// Whether a path string contains glob metacharacters.
///
/// Paths without metacharacters are treated as literal paths and are
/// never filtered by the hidden-file rule.
pub(crate) fn has_glob_meta(s: &str) -> bool {
    s.contains(['*', '?', '[', '{'])
}
