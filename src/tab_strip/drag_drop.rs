//! Drag-reorder session: target-slot computation and the drop command.
//!
//! A session exists only between drag-start and drag-end/drop. The proposed
//! target is stored as an *insertion slot* ("insert before visible position
//! s") and converted to the `move after` form (`target = slot - 1`) when
//! the drop command is issued. Slots equal to the dragged index or the
//! dragged index plus one are identity moves and are never proposed.

use sandtab_config::Config;

use super::state::TabStrip;
use super::{PointerPos, TabRect};
use crate::files::FileRecord;

/// In-flight drag gesture.
///
/// `dragged_index` lives inside an `Option<DragSession>`: index 0 is a real
/// value, never a "no drag in progress" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub(super) dragged_index: usize,
    pub(super) target_slot: Option<usize>,
}

impl DragSession {
    /// Visible index of the file being dragged.
    pub fn dragged_index(&self) -> usize {
        self.dragged_index
    }

    /// Proposed insertion slot, if a valid target is established.
    pub fn target_slot(&self) -> Option<usize> {
        self.target_slot
    }
}

impl TabStrip {
    /// Begin a drag session on the tab at `index`.
    ///
    /// Rejected while another session is active, when the file is pinned,
    /// when the index is stale, or when too few files are visible for a
    /// reorder to mean anything.
    pub(super) fn drag_start(&mut self, visible: &[FileRecord], config: &Config, index: usize) {
        if self.drag.is_some() {
            return;
        }
        if visible.len() < config.min_reorder_files {
            log::debug!(
                "Reordering disabled with {} visible files (minimum {})",
                visible.len(),
                config.min_reorder_files
            );
            return;
        }
        let Some(file) = visible.get(index) else {
            return;
        };
        if file.name == config.pinned_file {
            log::debug!("'{}' is pinned and not draggable", file.name);
            return;
        }
        log::debug!("Drag started on '{}' (index {})", file.name, index);
        self.drag = Some(DragSession {
            dragged_index: index,
            target_slot: None,
        });
    }

    /// Update the proposed target from the pointer position over a
    /// candidate tab.
    ///
    /// Half-splits the candidate bounds at the horizontal midpoint: left
    /// half proposes inserting before the candidate, right half after.
    pub(super) fn drag_over(
        &mut self,
        visible: &[FileRecord],
        config: &Config,
        index: usize,
        pointer_x: f32,
        bounds: TabRect,
    ) {
        let Some(session) = self.drag.as_mut() else {
            return;
        };

        // Dragging over self, over the pinned tab, or over a stale index
        // establishes no target.
        if index == session.dragged_index {
            session.target_slot = None;
            return;
        }
        match visible.get(index) {
            Some(file) if file.name != config.pinned_file => {}
            _ => {
                session.target_slot = None;
                return;
            }
        }

        let slot = if pointer_x < bounds.center_x() {
            index
        } else {
            index + 1
        };

        // Slot 0 cannot be expressed as an after-target; nothing may be
        // placed in front of the first tab.
        if slot == 0 || slot == session.dragged_index || slot == session.dragged_index + 1 {
            session.target_slot = None;
            return;
        }

        if session.target_slot != Some(slot) {
            log::debug!("Drop target slot {}", slot);
            session.target_slot = Some(slot);
        }
    }

    /// Handle a leave event from a candidate tab.
    ///
    /// Leave events bubble up from child elements of the tab; the target is
    /// cleared only when the pointer has truly exited the tab bounds.
    pub(super) fn drag_leave(&mut self, index: usize, pointer: PointerPos, bounds: TabRect) {
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        if bounds.contains(pointer) {
            return;
        }
        log::debug!("Pointer left candidate {}", index);
        session.target_slot = None;
    }

    /// Complete the session on a drop.
    ///
    /// Returns the `(source, target)` pair for the reorder command, or
    /// `None` when no session or no valid target exists; a degenerate drop
    /// is silently ignored. The session is cleared either way.
    pub(super) fn drop_session(&mut self) -> Option<(usize, usize)> {
        let session = self.drag.take()?;
        let slot = session.target_slot?;
        debug_assert!(slot >= 1);
        log::debug!(
            "Dropped index {} into slot {} (move after {})",
            session.dragged_index,
            slot,
            slot - 1
        );
        Some((session.dragged_index, slot - 1))
    }

    /// Abandon the session without issuing a command: gesture cancelled,
    /// pointer capture lost, or the collection changed under the drag.
    pub fn cancel_drag(&mut self) {
        if self.drag.take().is_some() {
            log::debug!("Drag session cancelled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab_strip::{TabEvent, TabStripAction};

    fn visible(names: &[&str]) -> Vec<FileRecord> {
        names.iter().copied().map(FileRecord::new).collect()
    }

    /// Tab i occupies x in [100*i, 100*(i+1)), full-height strip.
    fn tab_bounds(index: usize) -> TabRect {
        let left = 100.0 * index as f32;
        TabRect::new(left, 0.0, left + 100.0, 30.0)
    }

    fn left_half_of(index: usize) -> f32 {
        100.0 * index as f32 + 10.0
    }

    fn right_half_of(index: usize) -> f32 {
        100.0 * index as f32 + 90.0
    }

    fn dragging(files: &[FileRecord], config: &Config, index: usize) -> TabStrip {
        let mut strip = TabStrip::new();
        strip.handle_event(files, config, TabEvent::DragStart { index });
        assert!(strip.is_dragging());
        strip
    }

    #[test]
    fn drag_start_records_source_without_target() {
        let files = visible(&["index.html", "a.js", "b.js"]);
        let strip = dragging(&files, &Config::default(), 1);
        let session = strip.drag_session().unwrap();
        assert_eq!(session.dragged_index(), 1);
        assert_eq!(session.target_slot(), None);
    }

    #[test]
    fn pinned_file_never_acquires_a_drag() {
        let files = visible(&["index.html", "a.js", "b.js"]);
        let mut strip = TabStrip::new();
        strip.handle_event(&files, &Config::default(), TabEvent::DragStart { index: 0 });
        assert!(!strip.is_dragging());
    }

    #[test]
    fn reordering_disabled_with_two_files() {
        // Pinned plus one other: nowhere meaningful to move anything.
        let files = visible(&["index.html", "a.js"]);
        let mut strip = TabStrip::new();
        strip.handle_event(&files, &Config::default(), TabEvent::DragStart { index: 1 });
        assert!(!strip.is_dragging());
    }

    #[test]
    fn second_drag_start_is_ignored() {
        let files = visible(&["index.html", "a.js", "b.js"]);
        let mut strip = dragging(&files, &Config::default(), 1);
        strip.handle_event(&files, &Config::default(), TabEvent::DragStart { index: 2 });
        assert_eq!(strip.drag_session().unwrap().dragged_index(), 1);
    }

    #[test]
    fn left_half_proposes_insert_before_candidate() {
        let files = visible(&["index.html", "a.js", "b.js", "c.js"]);
        let config = Config::default();
        let mut strip = dragging(&files, &config, 3);
        strip.handle_event(
            &files,
            &config,
            TabEvent::DragOver {
                index: 1,
                pointer_x: left_half_of(1),
                bounds: tab_bounds(1),
            },
        );
        assert_eq!(strip.drag_session().unwrap().target_slot(), Some(1));
    }

    #[test]
    fn right_half_proposes_insert_after_candidate() {
        let files = visible(&["index.html", "a.js", "b.js", "c.js"]);
        let config = Config::default();
        let mut strip = dragging(&files, &config, 3);
        strip.handle_event(
            &files,
            &config,
            TabEvent::DragOver {
                index: 1,
                pointer_x: right_half_of(1),
                bounds: tab_bounds(1),
            },
        );
        assert_eq!(strip.drag_session().unwrap().target_slot(), Some(2));
    }

    #[test]
    fn dragging_over_self_clears_the_target() {
        let files = visible(&["index.html", "a.js", "b.js", "c.js"]);
        let config = Config::default();
        let mut strip = dragging(&files, &config, 1);
        strip.handle_event(
            &files,
            &config,
            TabEvent::DragOver {
                index: 3,
                pointer_x: right_half_of(3),
                bounds: tab_bounds(3),
            },
        );
        assert!(strip.drag_session().unwrap().target_slot().is_some());

        strip.handle_event(
            &files,
            &config,
            TabEvent::DragOver {
                index: 1,
                pointer_x: left_half_of(1),
                bounds: tab_bounds(1),
            },
        );
        assert_eq!(strip.drag_session().unwrap().target_slot(), None);
    }

    #[test]
    fn adjacent_slots_are_suppressed() {
        let files = visible(&["index.html", "a.js", "b.js", "c.js"]);
        let config = Config::default();
        let mut strip = dragging(&files, &config, 2);

        // Right half of the left neighbour: slot == dragged index.
        strip.handle_event(
            &files,
            &config,
            TabEvent::DragOver {
                index: 1,
                pointer_x: right_half_of(1),
                bounds: tab_bounds(1),
            },
        );
        assert_eq!(strip.drag_session().unwrap().target_slot(), None);

        // Left half of the right neighbour: slot == dragged index + 1.
        strip.handle_event(
            &files,
            &config,
            TabEvent::DragOver {
                index: 3,
                pointer_x: left_half_of(3),
                bounds: tab_bounds(3),
            },
        );
        assert_eq!(strip.drag_session().unwrap().target_slot(), None);
    }

    #[test]
    fn pinned_candidate_establishes_no_target() {
        let files = visible(&["index.html", "a.js", "b.js", "c.js"]);
        let config = Config::default();
        let mut strip = dragging(&files, &config, 3);
        strip.handle_event(
            &files,
            &config,
            TabEvent::DragOver {
                index: 0,
                pointer_x: right_half_of(0),
                bounds: tab_bounds(0),
            },
        );
        assert_eq!(strip.drag_session().unwrap().target_slot(), None);
    }

    #[test]
    fn bubbled_leave_keeps_the_target() {
        let files = visible(&["index.html", "a.js", "b.js", "c.js"]);
        let config = Config::default();
        let mut strip = dragging(&files, &config, 3);
        strip.handle_event(
            &files,
            &config,
            TabEvent::DragOver {
                index: 1,
                pointer_x: left_half_of(1),
                bounds: tab_bounds(1),
            },
        );

        // Pointer still inside the candidate: a leave bubbled from a child.
        strip.handle_event(
            &files,
            &config,
            TabEvent::DragLeave {
                index: 1,
                pointer: PointerPos { x: 150.0, y: 15.0 },
                bounds: tab_bounds(1),
            },
        );
        assert_eq!(strip.drag_session().unwrap().target_slot(), Some(1));

        // Pointer truly outside: the target clears.
        strip.handle_event(
            &files,
            &config,
            TabEvent::DragLeave {
                index: 1,
                pointer: PointerPos { x: 450.0, y: 15.0 },
                bounds: tab_bounds(1),
            },
        );
        assert_eq!(strip.drag_session().unwrap().target_slot(), None);
    }

    #[test]
    fn drop_converts_slot_to_after_target() {
        let files = visible(&["index.html", "a.js", "b.js", "c.js"]);
        let config = Config::default();
        let mut strip = dragging(&files, &config, 3);
        strip.handle_event(
            &files,
            &config,
            TabEvent::DragOver {
                index: 1,
                pointer_x: left_half_of(1),
                bounds: tab_bounds(1),
            },
        );
        let action = strip.handle_event(&files, &config, TabEvent::Drop);
        assert_eq!(action, TabStripAction::Reorder { source: 3, target: 0 });
        assert!(!strip.is_dragging());
    }

    #[test]
    fn drop_without_target_is_a_no_op() {
        let files = visible(&["index.html", "a.js", "b.js"]);
        let config = Config::default();
        let mut strip = dragging(&files, &config, 1);
        let action = strip.handle_event(&files, &config, TabEvent::Drop);
        assert_eq!(action, TabStripAction::None);
        assert!(!strip.is_dragging());
    }

    #[test]
    fn drop_without_session_is_a_no_op() {
        let files = visible(&["index.html", "a.js", "b.js"]);
        let mut strip = TabStrip::new();
        let action = strip.handle_event(&files, &Config::default(), TabEvent::Drop);
        assert_eq!(action, TabStripAction::None);
    }

    #[test]
    fn dragging_the_first_reorderable_tab_still_drops() {
        // Index 1 is the lowest draggable index; a session on it must not
        // be mistaken for "no drag in progress".
        let files = visible(&["index.html", "a.js", "b.js", "c.js"]);
        let config = Config::default();
        let mut strip = dragging(&files, &config, 1);
        strip.handle_event(
            &files,
            &config,
            TabEvent::DragOver {
                index: 3,
                pointer_x: right_half_of(3),
                bounds: tab_bounds(3),
            },
        );
        let action = strip.handle_event(&files, &config, TabEvent::Drop);
        assert_eq!(action, TabStripAction::Reorder { source: 1, target: 3 });
    }

    #[test]
    fn drag_end_clears_without_command() {
        let files = visible(&["index.html", "a.js", "b.js", "c.js"]);
        let config = Config::default();
        let mut strip = dragging(&files, &config, 1);
        strip.handle_event(
            &files,
            &config,
            TabEvent::DragOver {
                index: 3,
                pointer_x: right_half_of(3),
                bounds: tab_bounds(3),
            },
        );
        let action = strip.handle_event(&files, &config, TabEvent::DragEnd);
        assert_eq!(action, TabStripAction::None);
        assert!(!strip.is_dragging());
    }
}
