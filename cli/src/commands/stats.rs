use wenote_client::App;

use crate::{args::StatsArgs, formatters::Printer};

pub async fn stats_cmd(app: &App, printer: &mut Printer, args: StatsArgs) -> anyhow::Result<()> {
    let (overview, trend, tags, notebooks) = tokio::try_join!(
        app.api.stats_overview(),
        app.api.stats_trend(args.days),
        app.api.stats_tags(args.limit),
        app.api.stats_notebooks(),
    )?;

    printer.stats(&overview, &trend, &tags, &notebooks)
}
