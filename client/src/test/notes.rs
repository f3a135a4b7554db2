use serde_json::json;
use wenote_core::{NoteFlag, TagUpdate, View};

use super::{note_json, TestApp};
use crate::{
    state::notes::{EMPTY_TRASH_PROMPT, MOVE_TO_TRASH_PROMPT, PERMANENT_DELETE_PROMPT},
    ui::Tone,
};

fn page_of(notes: &[(u64, u64, &str)], total: u64) -> serde_json::Value {
    let list: Vec<_> = notes
        .iter()
        .map(|(id, nb, title)| note_json(*id, *nb, title))
        .collect();
    json!({"list": list, "total": total, "page": 1, "size": 20})
}

fn query_of(t: &TestApp, path: &str) -> Vec<(String, String)> {
    let requests = t.backend.requests_to("GET", path);
    let mut query: Vec<_> = requests
        .last()
        .unwrap()
        .query
        .clone()
        .into_iter()
        .collect();
    query.sort();
    query
}

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut pairs: Vec<_> = items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    pairs.sort();
    pairs
}

#[tokio::test]
async fn test_combined_filters_build_one_query() {
    let mut t = TestApp::new().await;
    t.backend.respond(
        "GET",
        "/notes",
        page_of(
            &[(1, 3, "plan a"), (2, 3, "plan b"), (3, 3, "plan c"), (4, 3, "plan d")],
            4,
        ),
    );

    t.app.notes.set_view(View::Notebook(3)).await;
    t.app.notes.set_search("plan").await;
    t.app.notes.set_filter_tag(7).await;

    assert_eq!(
        query_of(&t, "/notes"),
        pairs(&[
            ("page", "1"),
            ("page_size", "20"),
            ("keyword", "plan"),
            ("notebook_id", "3"),
            ("tag_id", "7"),
        ])
    );
    assert_eq!(t.app.notes.total(), 4);
    assert_eq!(t.app.notes.notes().len(), 4);
    assert!(!t.app.notes.is_loading());
}

#[tokio::test]
async fn test_each_setter_fetches_once_from_page_one() {
    let mut t = TestApp::new().await;
    t.backend
        .respond("GET", "/notes", page_of(&[(1, 1, "a")], 95));

    t.app.notes.go_to_page(3).await;
    assert_eq!(t.app.notes.view_state().page(), 3);
    assert_eq!(t.app.notes.view_state().page_count(), 5);

    t.backend.clear_requests();
    t.app.notes.set_search("draft").await;
    assert_eq!(t.backend.requests_to("GET", "/notes").len(), 1);
    assert_eq!(t.app.notes.view_state().page(), 1);

    t.app.notes.go_to_page(2).await;
    t.backend.clear_requests();
    t.app.notes.set_view(View::Starred).await;
    assert_eq!(t.backend.requests_to("GET", "/notes").len(), 1);
    assert_eq!(
        query_of(&t, "/notes"),
        pairs(&[
            ("page", "1"),
            ("page_size", "20"),
            ("keyword", "draft"),
            ("is_starred", "true"),
        ])
    );

    t.app.notes.go_to_page(2).await;
    t.backend.clear_requests();
    t.app.notes.set_filter_tag(4).await;
    assert_eq!(t.backend.requests_to("GET", "/notes").len(), 1);
    assert_eq!(t.app.notes.view_state().page(), 1);
}

#[tokio::test]
async fn test_selecting_active_tag_clears_filter() {
    let mut t = TestApp::new().await;

    t.app.notes.set_filter_tag(7).await;
    assert_eq!(t.app.notes.filter_tag(), Some(7));

    t.app.notes.set_filter_tag(7).await;
    assert_eq!(t.app.notes.filter_tag(), None);
    assert!(!query_of(&t, "/notes")
        .iter()
        .any(|(k, _)| k == "tag_id"));

    t.app.notes.set_filter_tag(7).await;
    t.app.notes.set_filter_tag(8).await;
    assert_eq!(t.app.notes.filter_tag(), Some(8));
}

#[tokio::test]
async fn test_trash_view_uses_trash_endpoint() {
    let mut t = TestApp::new().await;
    t.backend
        .respond("GET", "/notes/trash", page_of(&[(5, 1, "old")], 1));

    t.app.notes.set_view(View::Trash).await;

    assert_eq!(t.backend.requests_to("GET", "/notes/trash").len(), 1);
    assert!(t.backend.requests_to("GET", "/notes").is_empty());
    assert_eq!(t.app.notes.notes()[0].id, 5);
}

#[tokio::test]
async fn test_failed_fetch_keeps_previous_notes() {
    let mut t = TestApp::new().await;
    t.backend
        .respond("GET", "/notes", page_of(&[(1, 1, "kept")], 1));
    t.app.notes.fetch_notes().await;

    t.backend.fail("GET", "/notes", 500, "database down");
    t.app.notes.fetch_notes().await;

    assert_eq!(t.app.notes.notes()[0].title, "kept");
    assert_eq!(t.app.notes.total(), 1);
    assert!(!t.app.notes.is_loading());
    assert_eq!(
        t.notifier.errors(),
        vec!["database down", "Failed to load notes"]
    );
}

#[tokio::test]
async fn test_initial_data_loads_notebooks_and_tags() {
    let mut t = TestApp::new().await;
    t.backend.respond(
        "GET",
        "/notebooks",
        json!({"list": [{"id": 1, "name": "Default", "is_default": true}]}),
    );
    t.backend.respond(
        "GET",
        "/tags",
        json!({"list": [{"id": 2, "name": "work", "color": "#3B82F6"}]}),
    );

    t.app.notes.fetch_initial_data().await;
    assert_eq!(t.app.notes.notebooks().len(), 1);
    assert_eq!(t.app.notes.tags()[0].name, "work");

    // A failing half leaves both lists alone
    t.backend.fail("GET", "/tags", 500, "boom");
    t.backend.respond("GET", "/notebooks", json!({"list": []}));
    t.app.notes.fetch_initial_data().await;
    assert_eq!(t.app.notes.notebooks().len(), 1);
    assert_eq!(t.app.notes.tags().len(), 1);
}

#[tokio::test]
async fn test_create_note_uses_default_notebook() {
    let mut t = TestApp::new().await;
    t.backend.respond(
        "GET",
        "/notebooks/default",
        json!({"id": 5, "name": "Default", "is_default": true}),
    );
    t.backend.respond("POST", "/notes", note_json(100, 5, ""));

    let note = t.app.notes.create_note(None).await.unwrap();

    assert_eq!(note.id, 100);
    assert_eq!(note.notebook_id, 5);
    let created = t.backend.requests_to("POST", "/notes");
    assert_eq!(
        created[0].body,
        Some(json!({"title": "", "content": "", "notebook_id": 5}))
    );
    // Lists are refreshed before the note is handed back
    assert_eq!(t.backend.requests_to("GET", "/notes").len(), 1);
    assert_eq!(t.backend.requests_to("GET", "/notebooks").len(), 1);
}

#[tokio::test]
async fn test_create_note_in_given_notebook() {
    let mut t = TestApp::new().await;
    t.backend.respond("POST", "/notes", note_json(101, 8, ""));

    let note = t.app.notes.create_note(Some(8)).await.unwrap();

    assert_eq!(note.notebook_id, 8);
    assert!(t.backend.requests_to("GET", "/notebooks/default").is_empty());
}

#[tokio::test]
async fn test_create_note_failure_is_reported() {
    let mut t = TestApp::new().await;
    t.backend.fail("POST", "/notes", 400, "Notebook not found");

    assert!(t.app.notes.create_note(Some(99)).await.is_err());

    assert_eq!(
        t.notifier.errors(),
        vec!["Notebook not found", "Failed to create note"]
    );
    assert!(t.backend.requests_to("GET", "/notes").is_empty());
}

#[tokio::test]
async fn test_update_note_sends_full_note() {
    let mut t = TestApp::new().await;
    t.backend
        .respond("GET", "/notes", page_of(&[(1, 2, "before")], 1));
    t.app.notes.fetch_notes().await;
    t.backend.respond("PATCH", "/notes/1", note_json(1, 2, "after"));

    let mut note = t.app.notes.notes()[0].clone();
    note.title = "after".to_string();
    t.app.notes.update_note(&note).await.unwrap();

    let body = t.backend.requests_to("PATCH", "/notes/1")[0]
        .body
        .clone()
        .unwrap();
    assert_eq!(body["title"], "after");
    assert_eq!(body["notebook_id"], 2);
    assert_eq!(body["tag_ids"], json!([]));
    assert_eq!(t.notifier.successes(), vec!["Saved"]);
}

#[tokio::test]
async fn test_delete_moves_to_trash_after_confirmation() {
    let mut t = TestApp::new().await;

    assert!(t.app.notes.delete_note(3).await.unwrap());

    let prompts = t.confirmer.prompts();
    assert_eq!(prompts[0].message, MOVE_TO_TRASH_PROMPT);
    assert_eq!(prompts[0].tone, Tone::Info);
    assert_eq!(t.backend.requests_to("DELETE", "/notes/3").len(), 1);
    assert_eq!(t.notifier.successes(), vec!["Moved to trash"]);
}

#[tokio::test]
async fn test_delete_in_trash_is_permanent() {
    let mut t = TestApp::new().await;
    t.app.notes.set_view(View::Trash).await;

    assert!(t.app.notes.delete_note(3).await.unwrap());

    let prompts = t.confirmer.prompts();
    assert_eq!(prompts[0].message, PERMANENT_DELETE_PROMPT);
    assert_eq!(prompts[0].tone, Tone::Warning);
    assert_eq!(t.notifier.successes(), vec!["Permanently deleted"]);
}

#[tokio::test]
async fn test_cancelled_delete_sends_nothing() {
    let mut t = TestApp::new().await;
    t.confirmer.answer(false);

    assert!(!t.app.notes.delete_note(3).await.unwrap());

    assert!(t.backend.requests_to("DELETE", "/notes/3").is_empty());
    assert!(t.notifier.messages().is_empty());
}

#[tokio::test]
async fn test_restore_note() {
    let mut t = TestApp::new().await;
    t.backend
        .respond("POST", "/notes/4/restore", note_json(4, 1, "back"));

    t.app.notes.restore_note(4).await.unwrap();

    assert_eq!(t.notifier.successes(), vec!["Restored"]);
    assert_eq!(t.backend.requests_to("GET", "/tags").len(), 1);
}

#[tokio::test]
async fn test_toggle_flag_flips_current_value() {
    let mut t = TestApp::new().await;
    let mut starred = note_json(1, 1, "s");
    starred["is_starred"] = json!(true);
    t.backend.respond(
        "GET",
        "/notes",
        json!({"list": [starred, note_json(2, 1, "p")], "total": 2}),
    );
    t.app.notes.fetch_notes().await;
    t.backend.respond("PATCH", "/notes/1", note_json(1, 1, "s"));
    t.backend.respond("PATCH", "/notes/2", note_json(2, 1, "p"));

    t.app.notes.toggle_flag(1, NoteFlag::Starred).await.unwrap();
    t.app.notes.toggle_flag(2, NoteFlag::Pinned).await.unwrap();

    assert_eq!(
        t.backend.requests_to("PATCH", "/notes/1")[0].body,
        Some(json!({"is_starred": false}))
    );
    assert_eq!(
        t.backend.requests_to("PATCH", "/notes/2")[0].body,
        Some(json!({"is_pinned": true}))
    );
}

#[tokio::test]
async fn test_toggle_flag_ignores_unknown_note() {
    let mut t = TestApp::new().await;

    t.app.notes.toggle_flag(42, NoteFlag::Starred).await.unwrap();

    assert!(t.backend.requests_to("PATCH", "/notes/42").is_empty());
}

#[tokio::test]
async fn test_deleting_viewed_notebook_resets_view() {
    let mut t = TestApp::new().await;
    t.app.notes.set_view(View::Notebook(6)).await;

    t.app.notes.delete_notebook(6).await.unwrap();

    assert_eq!(t.app.notes.current_view(), View::Active);
    assert!(!query_of(&t, "/notes")
        .iter()
        .any(|(k, _)| k == "notebook_id"));
}

#[tokio::test]
async fn test_deleting_other_notebook_keeps_view() {
    let mut t = TestApp::new().await;
    t.app.notes.set_view(View::Notebook(6)).await;

    t.app.notes.delete_notebook(7).await.unwrap();

    assert_eq!(t.app.notes.current_view(), View::Notebook(6));
}

#[tokio::test]
async fn test_notebook_and_tag_mutations_refresh_lists() {
    let mut t = TestApp::new().await;
    t.backend
        .respond("POST", "/notebooks", json!({"id": 9, "name": "Ideas"}));
    t.backend
        .respond("POST", "/tags", json!({"id": 4, "name": "urgent", "color": "#EF4444"}));
    t.backend
        .respond("PATCH", "/tags/4", json!({"id": 4, "name": "later"}));

    let notebook = t.app.notes.create_notebook("Ideas").await.unwrap();
    assert_eq!(notebook.id, 9);
    assert_eq!(
        t.backend.requests_to("POST", "/notebooks")[0].body,
        Some(json!({"name": "Ideas"}))
    );

    let tag = t.app.notes.create_tag("urgent", "#EF4444").await.unwrap();
    assert_eq!(tag.id, 4);

    t.backend.clear_requests();
    let update = TagUpdate {
        name: Some("later".to_string()),
        color: None,
    };
    t.app.notes.update_tag(4, &update).await.unwrap();
    // Notes embed their tags, so they are reloaded too
    assert_eq!(t.backend.requests_to("GET", "/tags").len(), 1);
    assert_eq!(t.backend.requests_to("GET", "/notes").len(), 1);
}

#[tokio::test]
async fn test_failed_tag_delete_returns_error() {
    let mut t = TestApp::new().await;
    t.backend.fail("DELETE", "/tags/4", 404, "Tag not found");

    assert!(t.app.notes.delete_tag(4).await.is_err());
    assert_eq!(t.notifier.errors(), vec!["Tag not found", "Failed to delete"]);
}

#[tokio::test]
async fn test_batch_operations_answer_with_bool() {
    let mut t = TestApp::new().await;
    t.backend
        .respond("POST", "/notes/batch/restore", json!({"restored_count": 2}));
    t.backend
        .respond("POST", "/notes/batch/delete", json!({"deleted_count": 2}));
    t.backend.fail("POST", "/notes/batch/move", 400, "Notebook not found");

    assert!(t.app.notes.batch_restore(&[1, 2]).await);
    assert!(t.app.notes.batch_delete(&[1, 2]).await);
    assert!(!t.app.notes.batch_move(&[1, 2], 99).await);

    assert_eq!(
        t.backend.requests_to("POST", "/notes/batch/restore")[0].body,
        Some(json!({"note_ids": [1, 2]}))
    );
    assert_eq!(
        t.backend.requests_to("POST", "/notes/batch/move")[0].body,
        Some(json!({"note_ids": [1, 2], "notebook_id": 99}))
    );
    assert_eq!(
        t.notifier.successes(),
        vec!["Restored 2 notes", "Permanently deleted"]
    );
}

#[tokio::test]
async fn test_batch_delete_needs_confirmation() {
    let mut t = TestApp::new().await;
    t.confirmer.answer(false);

    assert!(!t.app.notes.batch_delete(&[1, 2, 3]).await);

    assert!(t.confirmer.prompts()[0].message.contains("3 selected notes"));
    assert!(t.backend.requests_to("POST", "/notes/batch/delete").is_empty());
}

#[tokio::test]
async fn test_empty_trash() {
    let mut t = TestApp::new().await;
    t.backend
        .respond("DELETE", "/notes/trash", json!({"deleted_count": 7}));

    assert!(t.app.notes.empty_trash().await);

    let prompt = &t.confirmer.prompts()[0];
    assert_eq!(prompt.message, EMPTY_TRASH_PROMPT);
    assert_eq!(prompt.tone, Tone::Warning);
    assert_eq!(t.notifier.successes(), vec!["Trash emptied"]);

    t.confirmer.answer(false);
    t.backend.clear_requests();
    assert!(!t.app.notes.empty_trash().await);
    assert!(t.backend.requests().is_empty());
}

#[tokio::test]
async fn test_apply_suggested_tags_accepts_empty_reply() {
    let t = TestApp::new().await;
    t.backend
        .respond("PUT", "/notes/4/tags/apply-suggestions", json!(null));

    t.app.api.apply_suggested_tags(4).await.unwrap();

    assert_eq!(
        t.backend
            .requests_to("PUT", "/notes/4/tags/apply-suggestions")
            .len(),
        1
    );
}

#[tokio::test]
async fn test_generate_summary_returns_suggested_names() {
    let t = TestApp::new().await;
    t.backend.respond(
        "POST",
        "/notes/4/ai/generate",
        json!({"summary": "Plans for the week", "tags": ["a", "planning"]}),
    );

    let result = t.app.api.generate_summary(4).await.unwrap();

    assert_eq!(result.summary, "Plans for the week");
    assert_eq!(result.tags, vec!["a", "planning"]);
}
