use std::sync::Arc;

use tracing::error;
use wenote_core::{
    NewNote, NewTag, Note, NoteFlag, NoteUpdate, Notebook, Tag, TagUpdate, View, ViewState,
};

use crate::{
    error::Result,
    http::ApiClient,
    ui::{ConfirmPrompt, Confirmer},
};

pub const MOVE_TO_TRASH_PROMPT: &str = "Move this note to the trash?";
pub const PERMANENT_DELETE_PROMPT: &str =
    "Permanently delete this note? It cannot be recovered afterwards!";
pub const EMPTY_TRASH_PROMPT: &str =
    "Permanently delete every note in the trash? They cannot be recovered afterwards!";

fn batch_delete_prompt(count: usize) -> String {
    format!(
        "Permanently delete the {} selected notes? They cannot be recovered afterwards!",
        count
    )
}

/// Client-side copy of the notes list, its reference data (notebooks and
/// tags) and the view that selects it.
///
/// Reads report failures to the user and keep the previous state. Mutations
/// report and return the error so callers can react. Batch operations answer
/// with a plain `bool`. Every successful mutation re-fetches what it may have
/// changed.
pub struct NotesState {
    api: ApiClient,
    confirmer: Arc<dyn Confirmer>,
    notes: Vec<Note>,
    notebooks: Vec<Notebook>,
    tags: Vec<Tag>,
    is_loading: bool,
    view: ViewState,
}

impl NotesState {
    pub fn new(api: ApiClient, confirmer: Arc<dyn Confirmer>, page_size: u32) -> Self {
        Self {
            api,
            confirmer,
            notes: vec![],
            notebooks: vec![],
            tags: vec![],
            is_loading: false,
            view: ViewState::new(page_size),
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn notebooks(&self) -> &[Notebook] {
        &self.notebooks
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    /// For front-ends that set several filters before a single
    /// [`fetch_notes`](Self::fetch_notes).
    pub fn view_state_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn current_view(&self) -> View {
        self.view.view()
    }

    pub fn filter_tag(&self) -> Option<u64> {
        self.view.filter_tag()
    }

    pub fn search_query(&self) -> &str {
        self.view.search()
    }

    pub fn total(&self) -> u64 {
        self.view.total()
    }

    pub fn find_note(&self, id: u64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Loads notebooks and tags together. On failure the previous lists stay.
    pub async fn fetch_initial_data(&mut self) {
        match futures::try_join!(self.api.list_notebooks(), self.api.list_tags()) {
            Ok((notebooks, tags)) => {
                self.notebooks = notebooks.list;
                self.tags = tags.list;
            }
            Err(e) => error!("Failed to fetch notebooks and tags: {}", e),
        }
    }

    /// Loads the current page of the current view.
    pub async fn fetch_notes(&mut self) {
        self.is_loading = true;

        let query = self.view.query();
        let result = if self.view.is_trash() {
            self.api.list_trash(&query).await
        } else {
            self.api.list_notes(&query).await
        };

        match result {
            Ok(page) => {
                self.notes = page.list;
                self.view.set_total(page.total);
            }
            Err(e) => {
                error!("Failed to fetch notes: {}", e);
                self.api.notifier().error("Failed to load notes");
            }
        }

        self.is_loading = false;
    }

    async fn refresh_all(&mut self) {
        self.fetch_notes().await;
        self.fetch_initial_data().await;
    }

    /// Creates an empty note in `notebook_id`, or in the default notebook
    /// when none is given, and returns it once the lists are refreshed.
    pub async fn create_note(&mut self, notebook_id: Option<u64>) -> Result<Note> {
        match self.create_empty_note(notebook_id).await {
            Ok(note) => {
                self.refresh_all().await;
                Ok(note)
            }
            Err(e) => {
                error!("Failed to create note: {}", e);
                self.api.notifier().error("Failed to create note");
                Err(e)
            }
        }
    }

    async fn create_empty_note(&self, notebook_id: Option<u64>) -> Result<Note> {
        let notebook_id = match notebook_id {
            Some(id) => id,
            None => self.api.default_notebook().await?.id,
        };

        self.api.create_note(&NewNote::empty(notebook_id)).await
    }

    /// Saves title, content, notebook, flags and tags of `note`.
    pub async fn update_note(&mut self, note: &Note) -> Result<()> {
        match self.api.update_note(note.id, &NoteUpdate::from(note)).await {
            Ok(_) => {
                self.api.notifier().success("Saved");
                self.refresh_all().await;
                Ok(())
            }
            Err(e) => {
                error!("Failed to update note: {}", e);
                self.api.notifier().error("Failed to save");
                Err(e)
            }
        }
    }

    /// Moves the note to the trash, or erases it for good when the trash is
    /// the current view. Returns `Ok(false)` if the user backs out.
    pub async fn delete_note(&mut self, id: u64) -> Result<bool> {
        let in_trash = self.view.is_trash();
        let prompt = if in_trash {
            ConfirmPrompt::warning(PERMANENT_DELETE_PROMPT)
        } else {
            ConfirmPrompt::info(MOVE_TO_TRASH_PROMPT)
        };

        if !self.confirmer.confirm(&prompt) {
            return Ok(false);
        }

        match self.api.delete_note(id).await {
            Ok(()) => {
                self.api.notifier().success(if in_trash {
                    "Permanently deleted"
                } else {
                    "Moved to trash"
                });
                self.refresh_all().await;
                Ok(true)
            }
            Err(e) => {
                error!("Failed to delete note: {}", e);
                self.api.notifier().error("Failed to delete");
                Err(e)
            }
        }
    }

    pub async fn restore_note(&mut self, id: u64) -> Result<()> {
        match self.api.restore_note(id).await {
            Ok(_) => {
                self.api.notifier().success("Restored");
                self.refresh_all().await;
                Ok(())
            }
            Err(e) => {
                error!("Failed to restore note: {}", e);
                self.api.notifier().error("Failed to restore");
                Err(e)
            }
        }
    }

    /// Flips `flag` on a note of the current page. Unknown ids are ignored.
    pub async fn toggle_flag(&mut self, id: u64, flag: NoteFlag) -> Result<()> {
        let Some(note) = self.find_note(id) else {
            return Ok(());
        };
        let update = flag.update(!note.flag(flag));

        match self.api.update_note(id, &update).await {
            Ok(_) => {
                self.fetch_notes().await;
                Ok(())
            }
            Err(e) => {
                error!("Failed to toggle {}: {}", flag, e);
                self.api.notifier().error("Operation failed");
                Err(e)
            }
        }
    }

    pub async fn create_notebook(&mut self, name: &str) -> Result<Notebook> {
        match self.api.create_notebook(name).await {
            Ok(notebook) => {
                self.api.notifier().success("Notebook created");
                self.fetch_initial_data().await;
                Ok(notebook)
            }
            Err(e) => {
                error!("Failed to create notebook: {}", e);
                self.api.notifier().error("Failed to create");
                Err(e)
            }
        }
    }

    pub async fn update_notebook(&mut self, id: u64, name: &str) -> Result<()> {
        match self.api.update_notebook(id, name).await {
            Ok(_) => {
                self.api.notifier().success("Notebook updated");
                self.fetch_initial_data().await;
                Ok(())
            }
            Err(e) => {
                error!("Failed to update notebook: {}", e);
                self.api.notifier().error("Failed to update");
                Err(e)
            }
        }
    }

    /// Deletes a notebook; its notes end up in the default notebook. If it
    /// was being viewed the view falls back to all active notes.
    pub async fn delete_notebook(&mut self, id: u64) -> Result<()> {
        match self.api.delete_notebook(id).await {
            Ok(()) => {
                self.api.notifier().success("Notebook deleted");
                if self.view.view() == View::Notebook(id) {
                    self.view.set_view(View::Active);
                }
                self.fetch_initial_data().await;
                self.fetch_notes().await;
                Ok(())
            }
            Err(e) => {
                error!("Failed to delete notebook: {}", e);
                self.api.notifier().error("Failed to delete");
                Err(e)
            }
        }
    }

    pub async fn create_tag(&mut self, name: &str, color: &str) -> Result<Tag> {
        let tag = NewTag {
            name: name.to_string(),
            color: color.to_string(),
        };

        match self.api.create_tag(&tag).await {
            Ok(tag) => {
                self.api.notifier().success("Tag created");
                self.fetch_initial_data().await;
                Ok(tag)
            }
            Err(e) => {
                error!("Failed to create tag: {}", e);
                self.api.notifier().error("Failed to create");
                Err(e)
            }
        }
    }

    /// Renames or recolours a tag. Notes are re-fetched as well since they
    /// embed their tags.
    pub async fn update_tag(&mut self, id: u64, update: &TagUpdate) -> Result<()> {
        match self.api.update_tag(id, update).await {
            Ok(_) => {
                self.api.notifier().success("Tag updated");
                self.fetch_initial_data().await;
                self.fetch_notes().await;
                Ok(())
            }
            Err(e) => {
                error!("Failed to update tag: {}", e);
                self.api.notifier().error("Failed to update");
                Err(e)
            }
        }
    }

    pub async fn delete_tag(&mut self, id: u64) -> Result<()> {
        match self.api.delete_tag(id).await {
            Ok(()) => {
                self.api.notifier().success("Tag deleted");
                self.fetch_initial_data().await;
                Ok(())
            }
            Err(e) => {
                error!("Failed to delete tag: {}", e);
                self.api.notifier().error("Failed to delete");
                Err(e)
            }
        }
    }

    /// Permanently deletes `ids` after confirmation.
    pub async fn batch_delete(&mut self, ids: &[u64]) -> bool {
        if !self
            .confirmer
            .confirm(&ConfirmPrompt::warning(batch_delete_prompt(ids.len())))
        {
            return false;
        }

        match self.api.batch_delete(ids.to_vec()).await {
            Ok(_) => {
                self.api.notifier().success("Permanently deleted");
                self.refresh_all().await;
                true
            }
            Err(e) => {
                error!("Failed to batch delete: {}", e);
                self.api.notifier().error("Failed to delete");
                false
            }
        }
    }

    pub async fn batch_restore(&mut self, ids: &[u64]) -> bool {
        match self.api.batch_restore(ids.to_vec()).await {
            Ok(_) => {
                self.api
                    .notifier()
                    .success(&format!("Restored {} notes", ids.len()));
                self.refresh_all().await;
                true
            }
            Err(e) => {
                error!("Failed to batch restore: {}", e);
                self.api.notifier().error("Failed to restore");
                false
            }
        }
    }

    pub async fn batch_move(&mut self, ids: &[u64], notebook_id: u64) -> bool {
        match self.api.batch_move(ids.to_vec(), notebook_id).await {
            Ok(_) => {
                self.api
                    .notifier()
                    .success(&format!("Moved {} notes", ids.len()));
                self.refresh_all().await;
                true
            }
            Err(e) => {
                error!("Failed to batch move: {}", e);
                self.api.notifier().error("Failed to move");
                false
            }
        }
    }

    /// Permanently deletes everything in the trash after confirmation.
    pub async fn empty_trash(&mut self) -> bool {
        if !self
            .confirmer
            .confirm(&ConfirmPrompt::warning(EMPTY_TRASH_PROMPT))
        {
            return false;
        }

        match self.api.empty_trash().await {
            Ok(_) => {
                self.api.notifier().success("Trash emptied");
                self.refresh_all().await;
                true
            }
            Err(e) => {
                error!("Failed to empty trash: {}", e);
                self.api.notifier().error("Failed to empty trash");
                false
            }
        }
    }

    pub async fn set_view(&mut self, view: View) {
        self.view.set_view(view);
        self.fetch_notes().await;
    }

    pub async fn set_search(&mut self, query: &str) {
        self.view.set_search(query);
        self.fetch_notes().await;
    }

    /// Filters by `tag_id`; selecting the active filter again clears it.
    pub async fn set_filter_tag(&mut self, tag_id: u64) {
        self.view.toggle_filter_tag(tag_id);
        self.fetch_notes().await;
    }

    pub async fn go_to_page(&mut self, page: u32) {
        self.view.set_page(page);
        self.fetch_notes().await;
    }
}
