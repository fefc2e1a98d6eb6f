//! Active-file recovery.
//!
//! Runs after every collection mutation and decides which file the editor
//! should show. The file *name* is authoritative for identity; the
//! remembered *index* is only a position hint for when the name is gone.

use crate::files::FileRecord;

/// Recompute the active file against the current visible sequence.
///
/// In order:
/// 1. On a whole-project load, a record flagged `selected` wins.
/// 2. A visible file matching the previous name keeps the selection, with
///    its index refreshed; identity survives reorders and renames of
///    other files.
/// 3. Otherwise fall back by position to the nearest remaining file to the
///    left of the remembered index (covers deletion of the active file).
/// 4. An empty visible sequence yields `("", 0)`: no active file, which
///    is a valid terminal state.
pub(crate) fn recover(
    visible: &[FileRecord],
    previous_name: &str,
    previous_index: usize,
    just_loaded: bool,
) -> (String, usize) {
    if just_loaded
        && let Some(idx) = visible.iter().position(|f| f.selected)
    {
        return (visible[idx].name.clone(), idx);
    }

    if !previous_name.is_empty()
        && let Some(idx) = visible.iter().position(|f| f.name == previous_name)
    {
        return (previous_name.to_string(), idx);
    }

    if visible.is_empty() {
        return (String::new(), 0);
    }

    let idx = previous_index.saturating_sub(1).min(visible.len() - 1);
    (visible[idx].name.clone(), idx)
}
