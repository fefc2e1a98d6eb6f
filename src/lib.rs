//! File-tab management core for the sandtab code playground.
//!
//! Tracks an ordered collection of editable source files, decides which one
//! is active (bound to the attached editor), and turns pointer-drag gestures
//! into atomic reorder commands. The rendering layer is external: it feeds
//! [`tab_strip::TabEvent`]s in and consumes the resulting state plus a
//! redraw flag.
//!
//! Everything runs on a single UI thread. State transitions complete
//! synchronously inside one event handler; change notifications and pointer
//! events are processed strictly in delivery order.

/// Crate version (root crate version, for use by embedding shells).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod bridge;
pub mod editor;
pub mod files;
pub mod tab_strip;

pub mod config {
    //! Configuration re-exports from the `sandtab-config` sub-crate.
    pub use sandtab_config::{Config, ConfigError};
}

pub use bridge::ProjectBridge;
pub use editor::{EditorBinding, EditorRegistry, EditorSink, SharedEditor};
pub use files::{FileKey, FileRecord, FilesChanged, FilesError, ProjectFiles};
pub use tab_strip::{PointerPos, TabEvent, TabRect, TabStrip, TabStripAction};
