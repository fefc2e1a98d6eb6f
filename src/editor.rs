//! Editor collaborator seam.
//!
//! The tab core pushes exactly one thing into the editor: the name of the
//! active file. The editor is otherwise opaque, so the seam is a one-method
//! trait plus a shared handle. Binding can be direct (the embedding shell
//! injects a handle) or by identifier, resolved against an
//! [`EditorRegistry`] on the next paint cycle, since the referenced editor
//! element may not exist yet at binding time.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Consumer of the active filename. One-way sync, core → editor.
pub trait EditorSink {
    fn set_filename(&mut self, filename: &str);
}

/// Shared handle to an editor. Single UI thread by construction; the mutex
/// is a shared-mutation cell, not a cross-thread lock.
pub type SharedEditor = Arc<Mutex<dyn EditorSink>>;

/// Registry of editors addressable by identifier, maintained by the
/// embedding shell.
#[derive(Default)]
pub struct EditorRegistry {
    editors: HashMap<String, SharedEditor>,
}

impl EditorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) an editor under an identifier.
    pub fn register(&mut self, id: impl Into<String>, editor: SharedEditor) {
        let id = id.into();
        log::debug!("Registered editor '{}'", id);
        self.editors.insert(id, editor);
    }

    /// Remove an editor, returning its handle if it was registered.
    pub fn unregister(&mut self, id: &str) -> Option<SharedEditor> {
        self.editors.remove(id)
    }

    /// Look up an editor handle by identifier.
    pub fn get(&self, id: &str) -> Option<SharedEditor> {
        self.editors.get(id).cloned()
    }
}

/// Binding state between the bridge and its editor collaborator.
///
/// `Pending` holds an identifier awaiting resolution. A failed resolution
/// parks the binding in `Failed`; it is never retried automatically, and
/// only a later explicit rebind completes it.
#[derive(Clone, Default)]
pub enum EditorBinding {
    /// No editor supplied.
    #[default]
    Unbound,
    /// An identifier was supplied; resolution is deferred to the next paint
    /// cycle.
    Pending(String),
    /// A live editor handle; active-file changes are pushed to it.
    Bound(SharedEditor),
    /// Resolution of the contained identifier yielded no editor.
    Failed(String),
}

impl EditorBinding {
    /// Whether pushes currently reach an editor.
    pub fn is_bound(&self) -> bool {
        matches!(self, EditorBinding::Bound(_))
    }

    /// Whether resolution is still outstanding.
    pub fn is_pending(&self) -> bool {
        matches!(self, EditorBinding::Pending(_))
    }

    /// Resolve a pending identifier against the registry.
    ///
    /// A miss moves the binding to `Failed` and is tolerated: no push
    /// happens until a successful rebind. Bound, unbound, and failed
    /// bindings are left untouched.
    pub fn resolve(&mut self, registry: &EditorRegistry) {
        let EditorBinding::Pending(id) = self else {
            return;
        };
        let id = std::mem::take(id);
        *self = match registry.get(&id) {
            Some(editor) => {
                log::debug!("Editor '{}' resolved", id);
                EditorBinding::Bound(editor)
            }
            None => {
                log::warn!("Editor '{}' not found; binding stays unset", id);
                EditorBinding::Failed(id)
            }
        };
    }

    /// Push a filename into the bound editor, if any.
    pub fn push_filename(&self, filename: &str) {
        if let EditorBinding::Bound(editor) = self {
            editor.lock().set_filename(filename);
        }
    }
}

impl std::fmt::Debug for EditorBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditorBinding::Unbound => write!(f, "Unbound"),
            EditorBinding::Pending(id) => write!(f, "Pending({id:?})"),
            EditorBinding::Bound(_) => write!(f, "Bound"),
            EditorBinding::Failed(id) => write!(f, "Failed({id:?})"),
        }
    }
}
