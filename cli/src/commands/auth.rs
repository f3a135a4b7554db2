use anyhow::bail;
use wenote_client::App;
use wenote_core::Credentials;

use crate::{args::CredentialArgs, formatters::Printer, terminal::read_line};

fn credentials(args: CredentialArgs) -> anyhow::Result<Credentials> {
    let password = match args.password {
        Some(password) => password,
        None => read_line("Password")?,
    };

    Ok(Credentials {
        username: args.username,
        password,
    })
}

pub async fn login_cmd(
    app: &mut App,
    printer: &mut Printer,
    args: CredentialArgs,
) -> anyhow::Result<()> {
    app.user.login(&credentials(args)?).await?;

    match app.user.user() {
        Some(user) => {
            let message = format!("Signed in as {}", user.display_name());
            printer.done(&message, user)
        }
        None => printer.done("Signed in", &()),
    }
}

pub async fn register_cmd(
    app: &mut App,
    printer: &mut Printer,
    args: CredentialArgs,
) -> anyhow::Result<()> {
    let user = app.api.register(&credentials(args)?).await?;

    let message = format!(
        "Account {} created. Run `wenote login {}` to sign in.",
        user.username, user.username
    );
    printer.done(&message, &user)
}

pub fn logout_cmd(app: &mut App, printer: &mut Printer) -> anyhow::Result<()> {
    app.user.logout();
    printer.done("Signed out", &())
}

pub async fn whoami_cmd(app: &mut App, printer: &mut Printer) -> anyhow::Result<()> {
    if !app.user.is_signed_in() {
        bail!("Not signed in. Run `wenote login <username>` first.");
    }

    app.user.fetch_user().await;

    match app.user.user() {
        Some(user) => printer.user(user),
        None => bail!("Could not load the signed-in user"),
    }
}
