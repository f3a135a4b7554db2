#![deny(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::process::ExitCode;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use app_config::AppConfig;
use args::{CliArgs, Command, NoteCommand};
use clap::{CommandFactory, Parser};
use commands::{
    auth::{login_cmd, logout_cmd, register_cmd, whoami_cmd},
    config::config_cmd,
    note::note_cmd,
    notebook::notebook_cmd,
    profile::profile_cmd,
    stats::stats_cmd,
    streak::streak_cmd,
    tag::tag_cmd,
    trash::trash_cmd,
};
use formatters::Printer;
use profile::{get_profile_config_path, get_profile_data_dir, get_profile_name, Profile};
use terminal::{LoginHint, TerminalConfirmer, TerminalNotifier};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wenote_client::{App, FileTokenStore, Level, Notifier, Ui};

mod app_config;
mod args;
mod commands;
mod editor;
mod formatters;
mod profile;
mod terminal;

#[cfg(test)]
mod test;

/// Counts reported errors so the exit status reflects failures that the
/// client only notified about.
struct CountingNotifier {
    inner: TerminalNotifier,
    errors: AtomicUsize,
}

impl CountingNotifier {
    fn errors(&self) -> usize {
        self.errors.load(Ordering::SeqCst)
    }
}

impl Notifier for CountingNotifier {
    fn notify(&self, level: Level, message: &str) {
        if level == Level::Error {
            self.errors.fetch_add(1, Ordering::SeqCst);
        }
        self.inner.notify(level, message);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    setup_tracing(args.verbose);

    let notifier = Arc::new(CountingNotifier {
        inner: TerminalNotifier,
        errors: AtomicUsize::new(0),
    });

    match run(args, notifier.clone()).await {
        Ok(()) if notifier.errors() == 0 => ExitCode::SUCCESS,
        Ok(()) => ExitCode::FAILURE,
        Err(e) => {
            // Client errors were already shown through the notifier
            if notifier.errors() == 0 {
                eprintln!("Error: {:#}", e);
            } else {
                tracing::debug!("{:?}", e);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: CliArgs, notifier: Arc<CountingNotifier>) -> anyhow::Result<()> {
    let Some(command) = args.command else {
        CliArgs::command().print_help()?;
        return Ok(());
    };

    let profile_name = get_profile_name(&args.config.profile);
    let profile_path = get_profile_config_path(&profile_name);
    let data_dir = get_profile_data_dir(&profile_name);
    let profile = Profile::from_path(&profile_path)?;
    let config = AppConfig::from_args(
        &args.config,
        &profile_name,
        &profile_path,
        &data_dir,
        profile.as_ref(),
    );

    let command = match command {
        Command::Config => return config_cmd(&config),
        Command::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut CliArgs::command(),
                "wenote",
                &mut std::io::stdout(),
            );
            return Ok(());
        }
        other => other,
    };

    let ui = Ui {
        notifier,
        confirmer: Arc::new(TerminalConfirmer::new(args.yes)),
        navigator: Arc::new(LoginHint),
    };
    let tokens = Arc::new(FileTokenStore::in_dir(&data_dir));
    let mut app = App::new(&config.app_options(), tokens, ui)?;
    let mut printer = Printer::new(args.output);

    match command {
        Command::Config | Command::Completions { .. } => {}
        Command::Login(args) => login_cmd(&mut app, &mut printer, args).await?,
        Command::Register(args) => register_cmd(&mut app, &mut printer, args).await?,
        Command::Logout => logout_cmd(&mut app, &mut printer)?,
        Command::Whoami => whoami_cmd(&mut app, &mut printer).await?,
        Command::Note(subcommand) => note_cmd(&mut app, &mut printer, subcommand).await?,
        Command::Down(args) => {
            note_cmd(&mut app, &mut printer, NoteCommand::New(args)).await?
        }
        Command::Trash(subcommand) => trash_cmd(&mut app, &mut printer, subcommand).await?,
        Command::Notebook(subcommand) => notebook_cmd(&mut app, &mut printer, subcommand).await?,
        Command::Tag(subcommand) => tag_cmd(&mut app, &mut printer, subcommand).await?,
        Command::Profile(subcommand) => profile_cmd(&mut app, &mut printer, subcommand).await?,
        Command::Streak(subcommand) => streak_cmd(&mut app, &mut printer, subcommand).await?,
        Command::Stats(args) => stats_cmd(&app, &mut printer, args).await?,
    }

    Ok(())
}

fn setup_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{crate_name}={level},wenote_client={level}",
                    crate_name = env!("CARGO_CRATE_NAME"),
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
