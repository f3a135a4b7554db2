use wenote_core::{
    AiSummary, BatchMove, BatchResult, NewNote, Note, NoteIds, NoteList, NoteQuery, NoteTags,
    NoteUpdate,
};

use crate::{error::Result, http::ApiClient};

impl ApiClient {
    /// `GET /notes`
    pub async fn list_notes(&self, query: &NoteQuery) -> Result<NoteList> {
        self.get_query("/notes", query).await
    }

    /// `GET /notes/trash`
    pub async fn list_trash(&self, query: &NoteQuery) -> Result<NoteList> {
        self.get_query("/notes/trash", query).await
    }

    pub async fn get_note(&self, id: u64) -> Result<Note> {
        self.get(&format!("/notes/{}", id)).await
    }

    pub async fn create_note(&self, note: &NewNote) -> Result<Note> {
        self.post("/notes", note).await
    }

    pub async fn update_note(&self, id: u64, update: &NoteUpdate) -> Result<Note> {
        self.patch(&format!("/notes/{}", id), update).await
    }

    /// Moves an active note to the trash. Notes already in the trash are
    /// reported as not found.
    pub async fn delete_note(&self, id: u64) -> Result<()> {
        self.delete(&format!("/notes/{}", id)).await
    }

    pub async fn restore_note(&self, id: u64) -> Result<Note> {
        self.post_empty(&format!("/notes/{}/restore", id)).await
    }

    /// Replaces the note's tags with `tag_ids`.
    pub async fn set_note_tags(&self, id: u64, tag_ids: Vec<u64>) -> Result<Note> {
        self.put(&format!("/notes/{}/tags", id), &NoteTags { tag_ids })
            .await
    }

    /// Turns the AI suggested tag names into real tags on the note.
    pub async fn apply_suggested_tags(&self, id: u64) -> Result<()> {
        self.put_empty(&format!("/notes/{}/tags/apply-suggestions", id))
            .await
    }

    /// Runs the summary and tag suggestion pass synchronously.
    pub async fn generate_summary(&self, id: u64) -> Result<AiSummary> {
        self.post_empty(&format!("/notes/{}/ai/generate", id)).await
    }

    /// Permanently deletes the given notes.
    pub async fn batch_delete(&self, note_ids: Vec<u64>) -> Result<BatchResult> {
        self.post("/notes/batch/delete", &NoteIds { note_ids }).await
    }

    pub async fn batch_restore(&self, note_ids: Vec<u64>) -> Result<BatchResult> {
        self.post("/notes/batch/restore", &NoteIds { note_ids })
            .await
    }

    pub async fn batch_move(&self, note_ids: Vec<u64>, notebook_id: u64) -> Result<BatchResult> {
        self.post(
            "/notes/batch/move",
            &BatchMove {
                note_ids,
                notebook_id,
            },
        )
        .await
    }

    /// `DELETE /notes/trash`
    pub async fn empty_trash(&self) -> Result<BatchResult> {
        self.delete("/notes/trash").await
    }
}
