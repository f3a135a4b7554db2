use anyhow::bail;
use wenote_client::App;
use wenote_core::TagUpdate;

use crate::{args::TagCommand, formatters::Printer};

pub async fn tag_cmd(
    app: &mut App,
    printer: &mut Printer,
    subcommand: TagCommand,
) -> anyhow::Result<()> {
    match subcommand {
        TagCommand::List => {
            app.notes.fetch_initial_data().await;
            printer.tags(app.notes.tags())?;
        }
        TagCommand::New { name, color } => {
            let tag = app
                .notes
                .create_tag(&name, color.as_deref().unwrap_or_default())
                .await?;
            printer.done(&format!("Tag created ({})", tag.id), &tag)?;
        }
        TagCommand::Edit { id, name, color } => {
            let update = TagUpdate { name, color };
            if update == TagUpdate::default() {
                bail!("Nothing to update, pass --name and/or --color");
            }
            app.notes.update_tag(id, &update).await?;
        }
        TagCommand::Delete { id } => {
            app.notes.delete_tag(id).await?;
        }
    }

    Ok(())
}
