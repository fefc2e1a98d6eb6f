//! `TabStrip` struct definition, activation, and event dispatch.

use sandtab_config::Config;

use super::drag_drop::DragSession;
use super::{TabEvent, TabStripAction, active};
use crate::files::FileRecord;

/// Tab strip state: active-file bookkeeping plus the transient interaction
/// state (hover affordance, drag session).
///
/// The active file is tracked by name *and* index. The name is authoritative
/// for identity; the index is a position memory consulted only when the name
/// no longer resolves.
pub struct TabStrip {
    /// Name of the active file; empty means no file is displayed.
    pub(super) active_file_name: String,
    /// Position of the active file in the visible sequence (recovery hint).
    pub(super) active_file_index: usize,
    /// Visible index currently hovered, revealing the drag handle.
    pub(super) hover_index: Option<usize>,
    /// In-flight drag session, if any.
    pub(super) drag: Option<DragSession>,
}

impl TabStrip {
    pub fn new() -> Self {
        Self {
            active_file_name: String::new(),
            active_file_index: 0,
            hover_index: None,
            drag: None,
        }
    }

    /// Name of the active file; empty when no file is active.
    pub fn active_file_name(&self) -> &str {
        &self.active_file_name
    }

    /// Position of the active file in the visible sequence.
    pub fn active_file_index(&self) -> usize {
        self.active_file_index
    }

    /// Whether a drag session is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The in-flight drag session, if any.
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Currently hovered visible index, if any.
    pub fn hover_index(&self) -> Option<usize> {
        self.hover_index
    }

    /// Whether the render layer should show the drag handle on this tab.
    pub fn drag_handle_visible(
        &self,
        visible: &[FileRecord],
        config: &Config,
        index: usize,
    ) -> bool {
        config.drag_handle
            && !self.is_dragging()
            && self.hover_index == Some(index)
            && visible.len() >= config.min_reorder_files
            && visible
                .get(index)
                .is_some_and(|f| f.name != config.pinned_file)
    }

    /// Process one platform event against the current visible sequence and
    /// return the command it produced, if any.
    ///
    /// Each call completes synchronously; the session and active-file state
    /// are read and written within this single invocation.
    pub fn handle_event(
        &mut self,
        visible: &[FileRecord],
        config: &Config,
        event: TabEvent,
    ) -> TabStripAction {
        match event {
            TabEvent::Activate { index } => self.activate(visible, index),
            TabEvent::HoverEnter { index } => {
                self.hover_index = Some(index);
                TabStripAction::None
            }
            TabEvent::HoverLeave { index } => {
                if self.hover_index == Some(index) {
                    self.hover_index = None;
                }
                TabStripAction::None
            }
            TabEvent::DragStart { index } => {
                self.drag_start(visible, config, index);
                TabStripAction::None
            }
            TabEvent::DragOver {
                index,
                pointer_x,
                bounds,
            } => {
                self.drag_over(visible, config, index, pointer_x, bounds);
                TabStripAction::None
            }
            TabEvent::DragLeave {
                index,
                pointer,
                bounds,
            } => {
                self.drag_leave(index, pointer, bounds);
                TabStripAction::None
            }
            TabEvent::Drop => match self.drop_session() {
                Some((source, target)) => TabStripAction::Reorder { source, target },
                None => TabStripAction::None,
            },
            TabEvent::DragEnd => {
                self.cancel_drag();
                TabStripAction::None
            }
        }
    }

    /// Repair the active-file selection after a collection change.
    ///
    /// Returns true when the active *name* changed, i.e. when the editor
    /// binding needs a push.
    pub fn recover_active(&mut self, visible: &[FileRecord], just_loaded: bool) -> bool {
        let (name, index) = active::recover(
            visible,
            &self.active_file_name,
            self.active_file_index,
            just_loaded,
        );
        let changed = name != self.active_file_name;
        if changed {
            log::debug!(
                "Active file '{}' -> '{}' (index {})",
                self.active_file_name,
                name,
                index
            );
        }
        self.active_file_name = name;
        self.active_file_index = index;
        changed
    }

    fn activate(&mut self, visible: &[FileRecord], index: usize) -> TabStripAction {
        let Some(file) = visible.get(index) else {
            return TabStripAction::None;
        };
        self.active_file_index = index;
        if self.active_file_name == file.name {
            return TabStripAction::None;
        }
        self.active_file_name = file.name.clone();
        log::debug!("Activated '{}' (index {})", file.name, index);
        TabStripAction::FocusFile {
            name: file.name.clone(),
        }
    }
}

impl Default for TabStrip {
    fn default() -> Self {
        Self::new()
    }
}
