//! Tab strip state machine.
//!
//! Owns the active-file bookkeeping and the drag-reorder session for the
//! file tabs. The rendering layer is external: a thin adapter maps platform
//! pointer/drag events onto [`TabEvent`] and feeds them through
//! [`TabStrip::handle_event`], which returns a [`TabStripAction`] command
//! for the bridge to apply.
//!
//! ## Module layout
//!
//! - [`state`]: `TabStrip` struct, activation, hover tracking, dispatch.
//! - [`active`]: active-file recovery after collection mutations.
//! - [`drag_drop`]: drag session and target-slot computation.

mod active;
mod drag_drop;
mod state;

pub use drag_drop::DragSession;
pub use state::TabStrip;

/// Pointer position in the tab bar's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPos {
    pub x: f32,
    pub y: f32,
}

/// On-screen bounds of one tab, reported by the render layer with each
/// drag event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabRect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl TabRect {
    pub fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Horizontal midpoint, the half-split line for drop-target
    /// computation.
    pub fn center_x(&self) -> f32 {
        (self.min_x + self.max_x) / 2.0
    }

    /// Whether the pointer is inside these bounds. Used to distinguish a
    /// true exit from a leave event bubbled up from a child element.
    pub fn contains(&self, pointer: PointerPos) -> bool {
        pointer.x >= self.min_x
            && pointer.x < self.max_x
            && pointer.y >= self.min_y
            && pointer.y < self.max_y
    }
}

/// Platform events, already translated to visible-sequence indices by the
/// render adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum TabEvent {
    /// The user clicked the tab at this visible index.
    Activate { index: usize },
    /// Pointer entered the tab (reveals the drag-handle affordance).
    HoverEnter { index: usize },
    /// Pointer left the tab.
    HoverLeave { index: usize },
    /// A drag gesture started on the tab at this visible index.
    DragStart { index: usize },
    /// The drag pointer is over a candidate tab.
    DragOver {
        index: usize,
        pointer_x: f32,
        bounds: TabRect,
    },
    /// A leave event fired while dragging over a candidate tab. May be a
    /// bubbled leave from a child element; `bounds` and `pointer` decide.
    DragLeave {
        index: usize,
        pointer: PointerPos,
        bounds: TabRect,
    },
    /// The dragged tab was dropped.
    Drop,
    /// The gesture ended without a drop (cancelled, pointer capture lost).
    DragEnd,
}

/// Command produced by a transition, applied by the bridge.
#[derive(Debug, Clone, PartialEq)]
pub enum TabStripAction {
    /// Nothing to do.
    None,
    /// The active file changed; rebind the editor and redraw.
    FocusFile { name: String },
    /// Move the visible file at `source` to immediately after the visible
    /// file at `target`: the single atomic reorder command.
    Reorder { source: usize, target: usize },
}
