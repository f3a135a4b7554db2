use wenote_client::App;
use wenote_core::View;

use crate::{args::TrashCommand, formatters::Printer};

pub async fn trash_cmd(
    app: &mut App,
    printer: &mut Printer,
    subcommand: TrashCommand,
) -> anyhow::Result<()> {
    // Every trash operation happens from the trash view
    app.notes.view_state_mut().set_view(View::Trash);

    match subcommand {
        TrashCommand::List { page } => {
            app.notes.view_state_mut().set_page(page);
            app.notes.fetch_notes().await;
            printer.notes(app.notes.notes(), app.notes.view_state())?;
        }
        TrashCommand::Empty => {
            app.notes.empty_trash().await;
        }
        TrashCommand::Restore(args) => {
            app.notes.batch_restore(&args.ids).await;
        }
        TrashCommand::Purge(args) => {
            app.notes.batch_delete(&args.ids).await;
        }
    }

    Ok(())
}
