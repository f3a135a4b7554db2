use wenote_client::App;
use wenote_core::{Note, NoteFlag, Tag, View};

use crate::{
    args::{NoteCommand, NoteListArgs, NoteNewArgs},
    editor::{Editor, NoteTemplate},
    formatters::Printer,
};

pub async fn note_cmd(
    app: &mut App,
    printer: &mut Printer,
    subcommand: NoteCommand,
) -> anyhow::Result<()> {
    match subcommand {
        NoteCommand::List(args) => list_notes(app, printer, args).await?,
        NoteCommand::New(args) => new_note(app, printer, args).await?,
        NoteCommand::Edit(args) => {
            let mut note = app.api.get_note(args.id).await?;

            let template = if args.title.is_none() && args.content.is_none() {
                Editor::open(&NoteTemplate::from_note(&note))?
            } else {
                let mut template = NoteTemplate::from_note(&note);
                if let Some(title) = args.title {
                    template.title = title;
                }
                if let Some(content) = args.content {
                    template.content = content;
                }
                template
            };

            apply_template(app, &mut note, template).await?;
            app.notes.update_note(&note).await?;
        }
        NoteCommand::Delete(args) => {
            // The prompt and the reported outcome follow the view
            app.notes.view_state_mut().set_view(View::Active);

            for id in args.ids {
                let note = app.api.get_note(id).await?;
                if note.is_trashed() {
                    anyhow::bail!(
                        "Note {} is already in the trash. Run `wenote trash purge {}` to delete it permanently.",
                        id,
                        id
                    );
                }

                if !app.notes.delete_note(id).await? {
                    println!("Cancelled.");
                    break;
                }
            }
        }
        NoteCommand::Restore(args) => {
            for id in args.ids {
                app.notes.restore_note(id).await?;
            }
        }
        NoteCommand::Star(args) => toggle(app, printer, args.id, NoteFlag::Starred).await?,
        NoteCommand::Pin(args) => toggle(app, printer, args.id, NoteFlag::Pinned).await?,
        NoteCommand::Tag(args) => {
            let note = app.api.set_note_tags(args.id, args.tag).await?;
            let names: Vec<_> = note.tags.iter().map(|t| t.name.as_str()).collect();
            printer.done(&format!("Tags: {}", names.join(", ")), &note)?;
        }
        NoteCommand::Move(args) => {
            app.notes.batch_move(&args.ids, args.notebook).await;
        }
    };

    Ok(())
}

async fn list_notes(app: &mut App, printer: &mut Printer, args: NoteListArgs) -> anyhow::Result<()> {
    let view = app.notes.view_state_mut();
    view.set_view(args.view);
    view.set_search(args.term.unwrap_or_default());
    if let Some(tag) = args.tag {
        view.toggle_filter_tag(tag);
    }
    view.set_page(args.page);

    app.notes.fetch_notes().await;

    printer.notes(app.notes.notes(), app.notes.view_state())
}

async fn new_note(app: &mut App, printer: &mut Printer, args: NoteNewArgs) -> anyhow::Result<()> {
    let mut template = NoteTemplate {
        title: args.title.unwrap_or_default(),
        notebook_id: args.notebook,
        tags: vec![],
        content: args.content.join(" "),
    };

    if args.edit {
        template = Editor::open(&template)?;
    }

    let mut note = app.notes.create_note(template.notebook_id).await?;

    if !template.title.is_empty() || !template.content.is_empty() || !template.tags.is_empty() {
        apply_template(app, &mut note, template).await?;
        app.notes.update_note(&note).await?;
    }

    printer.done(&format!("Note created ({})", note.id), &note)
}

async fn toggle(app: &mut App, printer: &mut Printer, id: u64, flag: NoteFlag) -> anyhow::Result<()> {
    let note = app.api.get_note(id).await?;
    let value = !note.flag(flag);
    let note = app.api.update_note(id, &flag.update(value)).await?;

    let message = match (flag, value) {
        (NoteFlag::Starred, true) => "Starred",
        (NoteFlag::Starred, false) => "Unstarred",
        (NoteFlag::Pinned, true) => "Pinned",
        (NoteFlag::Pinned, false) => "Unpinned",
    };
    printer.done(message, &note)
}

/// Copies the edited fields onto `note`. Tag names that do not exist yet are
/// created.
async fn apply_template(app: &mut App, note: &mut Note, template: NoteTemplate) -> anyhow::Result<()> {
    note.title = template.title;
    note.content = template.content;
    if let Some(notebook_id) = template.notebook_id {
        note.notebook_id = notebook_id;
    }

    if template.tags.is_empty() {
        note.tags.clear();
        return Ok(());
    }

    app.notes.fetch_initial_data().await;

    let mut tags = Vec::with_capacity(template.tags.len());
    for name in template.tags {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }

        let existing = find_tag(app.notes.tags(), name).cloned();
        let tag = match existing {
            Some(tag) => tag,
            None => app.notes.create_tag(name, "").await?,
        };
        if !tags.iter().any(|t: &Tag| t.id == tag.id) {
            tags.push(tag);
        }
    }
    note.tags = tags;

    Ok(())
}

fn find_tag<'a>(tags: &'a [Tag], name: &str) -> Option<&'a Tag> {
    tags.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
