use wenote_client::App;

use crate::{args::StreakCommand, formatters::Printer};

pub async fn streak_cmd(
    app: &mut App,
    printer: &mut Printer,
    subcommand: StreakCommand,
) -> anyhow::Result<()> {
    let store = &mut app.gamification;

    match subcommand {
        StreakCommand::Status => {
            store.fetch_status().await?;

            let unlocked = store.pending_notifications().to_vec();
            printer.streak(&store.streak_display(), &store.goal_progress(), &unlocked)?;

            // Shown once; the server stops reporting them after this
            for achievement in &unlocked {
                store.dismiss_notification(&achievement.id).await?;
            }
        }
        StreakCommand::Goal { chars } => {
            store.set_daily_goal(chars).await?;
            let progress = store.goal_progress();
            printer.done(&format!("Daily goal set to {} chars", progress.target), &progress)?;
        }
        StreakCommand::Achievements { locked } => {
            store.fetch_achievements().await?;
            let list = if locked {
                store.locked_achievements()
            } else {
                store.achievements().iter().collect()
            };
            printer.achievements(&list)?;
        }
        StreakCommand::Report { period } => {
            let report = store.fetch_report(period).await?;
            printer.report(&report)?;
        }
    }

    Ok(())
}
