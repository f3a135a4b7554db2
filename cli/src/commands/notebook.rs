use wenote_client::App;

use crate::{args::NotebookCommand, formatters::Printer};

pub async fn notebook_cmd(
    app: &mut App,
    printer: &mut Printer,
    subcommand: NotebookCommand,
) -> anyhow::Result<()> {
    match subcommand {
        NotebookCommand::List => {
            app.notes.fetch_initial_data().await;
            printer.notebooks(app.notes.notebooks())?;
        }
        NotebookCommand::New { name } => {
            let notebook = app.notes.create_notebook(&name).await?;
            printer.done(&format!("Notebook created ({})", notebook.id), &notebook)?;
        }
        NotebookCommand::Rename { id, name } => {
            app.notes.update_notebook(id, &name).await?;
        }
        NotebookCommand::Delete { id } => {
            app.notes.delete_notebook(id).await?;
        }
    }

    Ok(())
}
