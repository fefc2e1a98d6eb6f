//! Bridge between the project file collection, the tab strip, and the
//! editor collaborator.
//!
//! The bridge attaches to exactly one [`ProjectFiles`] at a time, drains
//! its change notifications in delivery order, repairs the active-file
//! selection after each one, applies the commands the tab strip produces,
//! and pushes the active filename into the bound editor. The render layer
//! polls [`ProjectBridge::take_needs_redraw`] once per paint cycle.

use sandtab_config::Config;

use crate::editor::{EditorBinding, EditorRegistry, SharedEditor};
use crate::files::{FileKey, ProjectFiles};
use crate::tab_strip::{TabEvent, TabStrip, TabStripAction};

pub struct ProjectBridge {
    config: Config,
    tab_strip: TabStrip,
    /// Id of the attached project; exactly one attachment at a time.
    attached: Option<u64>,
    editor: EditorBinding,
    needs_redraw: bool,
}

impl ProjectBridge {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            tab_strip: TabStrip::new(),
            attached: None,
            editor: EditorBinding::Unbound,
            needs_redraw: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The tab strip state, for the render layer.
    pub fn tab_strip(&self) -> &TabStrip {
        &self.tab_strip
    }

    /// Name of the active file; empty when no file is active.
    pub fn active_file_name(&self) -> &str {
        self.tab_strip.active_file_name()
    }

    pub fn is_attached_to(&self, project: &ProjectFiles) -> bool {
        self.attached == Some(project.id())
    }

    /// Attach to a project, replacing any previous attachment.
    ///
    /// Notifications queued on the new project before attachment describe
    /// states this bridge never observed; they are discarded and covered by
    /// the initial recovery, which honours `selected` hints the same way a
    /// project-load notification does.
    pub fn attach(&mut self, project: &mut ProjectFiles) {
        if let Some(old) = self.attached.take() {
            log::debug!("Detached from project {}", old);
        }
        self.tab_strip = TabStrip::new();
        self.attached = Some(project.id());
        log::info!(
            "Attached to project {} ({} files)",
            project.id(),
            project.files().len()
        );

        while project.pop_event().is_some() {}
        let visible = project.visible_files();
        if self.tab_strip.recover_active(&visible, true) {
            self.editor.push_filename(self.tab_strip.active_file_name());
        }
        self.needs_redraw = true;
    }

    /// Drop the current attachment. Pending notifications on the project
    /// are left for its next subscriber.
    pub fn detach(&mut self) {
        if let Some(id) = self.attached.take() {
            log::info!("Detached from project {}", id);
        }
        self.tab_strip.cancel_drag();
    }

    /// Drain pending change notifications, strictly in delivery order.
    ///
    /// Each notification first cancels any in-flight drag session, whose
    /// indices refer to the pre-mutation order, then repairs the active
    /// file and pushes the filename to the editor when it changed.
    pub fn pump(&mut self, project: &mut ProjectFiles) {
        if self.attached != Some(project.id()) {
            log::warn!("Ignoring events from unattached project {}", project.id());
            return;
        }
        while let Some(event) = project.pop_event() {
            self.tab_strip.cancel_drag();
            let visible = project.visible_files();
            if self.tab_strip.recover_active(&visible, event.project_loaded) {
                self.editor.push_filename(self.tab_strip.active_file_name());
            }
            self.needs_redraw = true;
        }
    }

    /// Feed one platform event through the tab strip and apply the
    /// resulting command.
    ///
    /// A reorder command becomes a single atomic `move_file_after` call;
    /// its notification is delivered before this method returns, mirroring
    /// the synchronous dispatch of the collection's events.
    pub fn handle_tab_event(&mut self, project: &mut ProjectFiles, event: TabEvent) {
        if self.attached != Some(project.id()) {
            log::warn!("Ignoring tab event for unattached project {}", project.id());
            return;
        }

        let drag_related = matches!(
            &event,
            TabEvent::DragStart { .. }
                | TabEvent::DragOver { .. }
                | TabEvent::DragLeave { .. }
                | TabEvent::Drop
                | TabEvent::DragEnd
        );

        let visible = project.visible_files();
        let action = self.tab_strip.handle_event(&visible, &self.config, event);

        if drag_related || action != TabStripAction::None {
            self.needs_redraw = true;
        }

        match action {
            TabStripAction::None => {}
            TabStripAction::FocusFile { name } => {
                self.editor.push_filename(&name);
            }
            TabStripAction::Reorder { source, target } => {
                if let Err(err) =
                    project.move_file_after(FileKey::Index(source), FileKey::Index(target))
                {
                    log::warn!("Reorder rejected: {err}");
                }
            }
        }

        self.pump(project);
    }

    /// Bind a directly-injected editor handle and push the current active
    /// filename into it.
    pub fn bind_editor(&mut self, editor: SharedEditor) {
        self.editor = EditorBinding::Bound(editor);
        self.editor.push_filename(self.tab_strip.active_file_name());
    }

    /// Bind an editor by identifier. Resolution is deferred to the next
    /// paint cycle via [`ProjectBridge::resolve_editor`].
    pub fn bind_editor_by_id(&mut self, id: impl Into<String>) {
        let id = id.into();
        log::debug!("Editor binding pending: '{}'", id);
        self.editor = EditorBinding::Pending(id);
    }

    /// Attempt to resolve a pending editor identifier. On success the
    /// current active filename is pushed; a miss parks the binding until an
    /// explicit rebind.
    pub fn resolve_editor(&mut self, registry: &EditorRegistry) {
        let was_bound = self.editor.is_bound();
        self.editor.resolve(registry);
        if !was_bound && self.editor.is_bound() {
            self.editor.push_filename(self.tab_strip.active_file_name());
        }
    }

    pub fn editor_binding(&self) -> &EditorBinding {
        &self.editor
    }

    /// Whether the render layer should repaint, clearing the flag.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}
