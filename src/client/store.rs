//! Normalized workspace store with pure reducers.

use crate::directory::domain::WorkspaceId;
use crate::project::domain::{ProjectId, TaskId};
use crate::project::services::{ProjectView, TaskView, WorkspaceView};

/// In-memory mirror of the user's workspace collections.
///
/// Storage is normalized: each workspace appears exactly once in the
/// ordered list, and the selection is held as an identifier resolved on
/// read. Reducers are pure state transitions with no I/O.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceStore {
    workspaces: Vec<WorkspaceView>,
    current: Option<WorkspaceId>,
    remembered: Option<WorkspaceId>,
    loading: bool,
    loaded: bool,
}

impl WorkspaceStore {
    /// Creates an empty store.
    ///
    /// `remembered` is the workspace selection persisted from a previous
    /// session; it is restored on the first successful load when still
    /// present among the results.
    #[must_use]
    pub const fn new(remembered: Option<WorkspaceId>) -> Self {
        Self {
            workspaces: Vec::new(),
            current: None,
            remembered,
            loading: false,
            loaded: false,
        }
    }

    /// Returns the full workspace list.
    #[must_use]
    pub fn workspaces(&self) -> &[WorkspaceView] {
        &self.workspaces
    }

    /// Returns the selected workspace, resolved from the list.
    #[must_use]
    pub fn current_workspace(&self) -> Option<&WorkspaceView> {
        let current = self.current.as_ref()?;
        self.workspaces
            .iter()
            .find(|view| view.workspace.id() == current)
    }

    /// Returns the selection to persist for the next session.
    #[must_use]
    pub const fn selection(&self) -> Option<&WorkspaceId> {
        self.current.as_ref()
    }

    /// Returns `true` while the initial load is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns `true` once the initial load has finished.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub(crate) fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Replaces the collection with fetched results and restores the
    /// remembered selection when still present, else selects the first
    /// workspace.
    pub(crate) fn finish_load(&mut self, workspaces: Vec<WorkspaceView>) {
        self.workspaces = workspaces;
        let remembered = self.remembered.take();
        self.current = remembered
            .filter(|id| self.contains(id))
            .or_else(|| self.first_id());
        self.loading = false;
        self.loaded = true;
    }

    /// Selects a workspace by identifier; ignored when absent.
    pub fn set_current(&mut self, id: &WorkspaceId) {
        if self.contains(id) {
            self.current = Some(id.clone());
        }
    }

    /// Adds a workspace and selects it.
    pub fn add_workspace(&mut self, view: WorkspaceView) {
        let id = view.workspace.id().clone();
        self.workspaces.push(view);
        self.current = Some(id);
    }

    /// Replaces a workspace by identifier; ignored when absent.
    pub fn update_workspace(&mut self, view: WorkspaceView) {
        if let Some(entry) = self.workspace_mut(view.workspace.id()) {
            *entry = view;
        }
    }

    /// Removes a workspace. Removing the selected workspace falls back
    /// to the first remaining one, or clears the selection entirely.
    pub fn remove_workspace(&mut self, id: &WorkspaceId) {
        self.workspaces.retain(|view| view.workspace.id() != id);
        if self.current.as_ref() == Some(id) {
            self.current = self.first_id();
        }
    }

    /// Adds a project to the selected workspace; a no-op without a
    /// selection.
    pub fn add_project(&mut self, project: ProjectView) {
        if let Some(view) = self.current_workspace_mut() {
            view.projects.push(project);
        }
    }

    /// Replaces a project in the selected workspace by identifier.
    pub fn update_project(&mut self, project: ProjectView) {
        if let Some(view) = self.current_workspace_mut() {
            if let Some(entry) = view
                .projects
                .iter_mut()
                .find(|entry| entry.project.id() == project.project.id())
            {
                *entry = project;
            }
        }
    }

    /// Removes a project from the selected workspace.
    pub fn remove_project(&mut self, id: ProjectId) {
        if let Some(view) = self.current_workspace_mut() {
            view.projects.retain(|entry| entry.project.id() != id);
        }
    }

    /// Adds a task to the named project of the selected workspace.
    pub fn add_task(&mut self, project: ProjectId, task: TaskView) {
        if let Some(entry) = self.project_mut(project) {
            entry.tasks.push(task);
        }
    }

    /// Replaces a task in the named project by identifier.
    pub fn update_task(&mut self, project: ProjectId, task: TaskView) {
        if let Some(entry) = self.project_mut(project) {
            if let Some(slot) = entry
                .tasks
                .iter_mut()
                .find(|slot| slot.task.id() == task.task.id())
            {
                *slot = task;
            }
        }
    }

    /// Removes the listed tasks from the named project.
    pub fn remove_tasks(&mut self, project: ProjectId, task_ids: &[TaskId]) {
        if let Some(entry) = self.project_mut(project) {
            entry.tasks.retain(|slot| !task_ids.contains(&slot.task.id()));
        }
    }

    fn contains(&self, id: &WorkspaceId) -> bool {
        self.workspaces.iter().any(|view| view.workspace.id() == id)
    }

    fn first_id(&self) -> Option<WorkspaceId> {
        self.workspaces
            .first()
            .map(|view| view.workspace.id().clone())
    }

    fn workspace_mut(&mut self, id: &WorkspaceId) -> Option<&mut WorkspaceView> {
        self.workspaces
            .iter_mut()
            .find(|view| view.workspace.id() == id)
    }

    fn current_workspace_mut(&mut self) -> Option<&mut WorkspaceView> {
        let current = self.current.clone()?;
        self.workspace_mut(&current)
    }

    fn project_mut(&mut self, id: ProjectId) -> Option<&mut ProjectView> {
        self.current_workspace_mut()?
            .projects
            .iter_mut()
            .find(|entry| entry.project.id() == id)
    }
}
