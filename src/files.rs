//! Project file collection: the ordered set of source files behind the tab
//! strip.
//!
//! [`ProjectFiles`] is the single writer for file order and file metadata.
//! Every mutation enqueues a [`FilesChanged`] notification; the bridge
//! drains them in delivery order and repairs the active-file selection.
//! The tab core itself never creates or destroys records, it only reorders
//! and reads them.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

/// One editable source file as the tab strip sees it.
///
/// `name` is the identity: unique among the files of a project. `label` is
/// display text only and falls back to the name. Hidden files are excluded
/// from the visible tab set and from drag targeting. `selected` is a hint
/// honoured only when a whole project is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub selected: bool,
}

impl FileRecord {
    /// Create a visible, unselected record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            hidden: false,
            selected: false,
        }
    }

    /// Builder-style display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builder-style hidden flag.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Builder-style selected hint.
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    /// Text shown on the tab: the label when present, otherwise the name.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// Identifier accepted by [`ProjectFiles::move_file_after`]: a file name, or
/// a position in the visible sequence (the form drag commands use).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKey {
    Name(String),
    Index(usize),
}

impl From<&str> for FileKey {
    fn from(name: &str) -> Self {
        FileKey::Name(name.to_string())
    }
}

impl From<usize> for FileKey {
    fn from(index: usize) -> Self {
        FileKey::Index(index)
    }
}

/// Change notification, fired after any collection mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilesChanged {
    /// True when a whole new project was loaded, false for an incremental
    /// edit (create/delete/rename/reorder/visibility).
    pub project_loaded: bool,
}

/// Errors from collection mutations. The tab core treats a rejected reorder
/// as a no-op; the file-menu UI decides how to surface the rest.
#[derive(Debug, Error)]
pub enum FilesError {
    #[error("a file named '{0}' already exists")]
    DuplicateName(String),

    #[error("no file named '{0}'")]
    UnknownFile(String),

    #[error("visible file index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("'{0}' is the pinned file and cannot be moved, renamed, hidden, or removed")]
    PinnedFile(String),

    #[error("project is missing the pinned file '{0}'")]
    MissingPinned(String),

    #[error("invalid project manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

static NEXT_PROJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Ordered collection of file records plus the change-notification queue.
///
/// Single writer: all order and metadata mutations go through these
/// methods, which keep the collection internally consistent (unique names,
/// pinned file present, no gaps) and enqueue exactly one [`FilesChanged`]
/// per actual mutation.
pub struct ProjectFiles {
    /// Identity of this project instance, used by the bridge to enforce
    /// exactly-one-attachment.
    id: u64,
    /// Name of the pinned (required) file.
    pinned: String,
    /// All files in this project, in tab order.
    files: Vec<FileRecord>,
    /// Pending change notifications, oldest first.
    events: VecDeque<FilesChanged>,
}

impl ProjectFiles {
    /// Create a project containing only the pinned file.
    pub fn new(pinned: impl Into<String>) -> Self {
        let pinned = pinned.into();
        Self {
            id: NEXT_PROJECT_ID.fetch_add(1, Ordering::Relaxed),
            files: vec![FileRecord::new(&pinned)],
            pinned,
            events: VecDeque::new(),
        }
    }

    /// Identity of this project instance.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Name of the pinned file.
    pub fn pinned_file(&self) -> &str {
        &self.pinned
    }

    /// All files, in order.
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    /// The visible file sequence: files with `hidden == false`, in
    /// collection order. Recomputed on every call, never cached across a
    /// mutation.
    pub fn visible_files(&self) -> Vec<FileRecord> {
        self.files.iter().filter(|f| !f.hidden).cloned().collect()
    }

    /// Number of visible files.
    pub fn visible_count(&self) -> usize {
        self.files.iter().filter(|f| !f.hidden).count()
    }

    /// Position of a file in the visible sequence.
    pub fn visible_position(&self, name: &str) -> Option<usize> {
        self.files
            .iter()
            .filter(|f| !f.hidden)
            .position(|f| f.name == name)
    }

    /// Replace the whole collection, as when a new project is opened.
    ///
    /// Validates unique names and pinned-file presence before touching the
    /// current state; on error the collection is unchanged.
    pub fn load_project(&mut self, records: Vec<FileRecord>) -> Result<(), FilesError> {
        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.name == record.name) {
                return Err(FilesError::DuplicateName(record.name.clone()));
            }
        }
        if !records.iter().any(|r| r.name == self.pinned) {
            return Err(FilesError::MissingPinned(self.pinned.clone()));
        }

        log::info!("Loaded project with {} files", records.len());
        self.files = records;
        self.emit(true);
        Ok(())
    }

    /// Load a project from a JSON manifest: an array of file records.
    pub fn load_manifest(&mut self, json: &str) -> Result<(), FilesError> {
        let records: Vec<FileRecord> = serde_json::from_str(json)?;
        self.load_project(records)
    }

    /// Serialize the collection as a JSON manifest.
    pub fn to_manifest(&self) -> Result<String, FilesError> {
        Ok(serde_json::to_string_pretty(&self.files)?)
    }

    /// Append a new file to the end of the collection.
    pub fn add_file(&mut self, record: FileRecord) -> Result<(), FilesError> {
        if self.files.iter().any(|f| f.name == record.name) {
            return Err(FilesError::DuplicateName(record.name));
        }
        log::debug!("Added file '{}' (total: {})", record.name, self.files.len() + 1);
        self.files.push(record);
        self.emit(false);
        Ok(())
    }

    /// Remove a file. The pinned file cannot be removed.
    pub fn remove_file(&mut self, name: &str) -> Result<(), FilesError> {
        if name == self.pinned {
            return Err(FilesError::PinnedFile(name.to_string()));
        }
        let idx = self
            .files
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| FilesError::UnknownFile(name.to_string()))?;
        self.files.remove(idx);
        log::debug!("Removed file '{}' (index {})", name, idx);
        self.emit(false);
        Ok(())
    }

    /// Rename a file, keeping its position. The pinned file keeps its name.
    pub fn rename_file(&mut self, old: &str, new: impl Into<String>) -> Result<(), FilesError> {
        let new = new.into();
        if old == self.pinned {
            return Err(FilesError::PinnedFile(old.to_string()));
        }
        if self.files.iter().any(|f| f.name == new) {
            return Err(FilesError::DuplicateName(new));
        }
        let file = self
            .files
            .iter_mut()
            .find(|f| f.name == old)
            .ok_or_else(|| FilesError::UnknownFile(old.to_string()))?;
        log::debug!("Renamed file '{}' -> '{}'", old, new);
        file.name = new;
        self.emit(false);
        Ok(())
    }

    /// Show or hide a file. The pinned file is always visible. Setting the
    /// flag to its current value is not a mutation and fires no event.
    pub fn set_hidden(&mut self, name: &str, hidden: bool) -> Result<(), FilesError> {
        if name == self.pinned && hidden {
            return Err(FilesError::PinnedFile(name.to_string()));
        }
        let file = self
            .files
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| FilesError::UnknownFile(name.to_string()))?;
        if file.hidden == hidden {
            return Ok(());
        }
        file.hidden = hidden;
        log::debug!("File '{}' hidden = {}", name, hidden);
        self.emit(false);
        Ok(())
    }

    /// Move `source` to the position immediately after `target`.
    ///
    /// This is the single atomic reorder command. An identity move (source
    /// already immediately after target, or source == target) performs no
    /// mutation and fires no event.
    pub fn move_file_after(&mut self, source: FileKey, target: FileKey) -> Result<(), FilesError> {
        let source_idx = self.resolve(&source)?;
        let target_idx = self.resolve(&target)?;

        if self.files[source_idx].name == self.pinned {
            return Err(FilesError::PinnedFile(self.pinned.clone()));
        }

        if source_idx == target_idx || source_idx == target_idx + 1 {
            log::debug!(
                "Identity move of '{}' ignored",
                self.files[source_idx].name
            );
            return Ok(());
        }

        let record = self.files.remove(source_idx);
        let insert_at = if source_idx < target_idx {
            target_idx
        } else {
            target_idx + 1
        };
        log::debug!(
            "Moved file '{}' from index {} to {}",
            record.name,
            source_idx,
            insert_at
        );
        self.files.insert(insert_at, record);
        self.emit(false);
        Ok(())
    }

    /// Take the oldest pending change notification, if any.
    pub fn pop_event(&mut self) -> Option<FilesChanged> {
        self.events.pop_front()
    }

    /// Whether any change notifications are waiting to be drained.
    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    fn emit(&mut self, project_loaded: bool) {
        self.events.push_back(FilesChanged { project_loaded });
    }

    /// Resolve a key to an index into the raw (hidden-inclusive) sequence.
    /// Index keys address the visible sequence, the form drag commands use.
    fn resolve(&self, key: &FileKey) -> Result<usize, FilesError> {
        match key {
            FileKey::Name(name) => self
                .files
                .iter()
                .position(|f| &f.name == name)
                .ok_or_else(|| FilesError::UnknownFile(name.clone())),
            FileKey::Index(visible_idx) => self
                .files
                .iter()
                .enumerate()
                .filter(|(_, f)| !f.hidden)
                .map(|(raw, _)| raw)
                .nth(*visible_idx)
                .ok_or(FilesError::IndexOutOfRange {
                    index: *visible_idx,
                    len: self.visible_count(),
                }),
        }
    }
}
