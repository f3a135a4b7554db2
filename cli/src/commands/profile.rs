use anyhow::bail;
use wenote_client::App;
use wenote_core::ProfileUpdate;

use crate::{args::ProfileCommand, formatters::Printer, terminal::read_line};

pub async fn profile_cmd(
    app: &mut App,
    printer: &mut Printer,
    subcommand: ProfileCommand,
) -> anyhow::Result<()> {
    match subcommand {
        ProfileCommand::Show => super::auth::whoami_cmd(app, printer).await?,
        ProfileCommand::Update(args) => {
            let update = ProfileUpdate {
                nickname: args.nickname,
                email: args.email,
                bio: args.bio,
                avatar_style: args.avatar_style,
                avatar_color: args.avatar_color,
            };
            if update.is_empty() {
                bail!("Nothing to update");
            }

            let user = app.user.update_profile(&update).await?;
            printer.user(&user)?;
        }
        ProfileCommand::Password { current, new } => {
            let current = match current {
                Some(current) => current,
                None => read_line("Current password")?,
            };
            let new = match new {
                Some(new) => new,
                None => read_line("New password")?,
            };

            app.user.change_password(&current, &new).await?;
            printer.done("Password changed", &())?;
        }
    }

    Ok(())
}
