use baystars_net_wins::{
    api::StatClient,
    chrono_util::current_season_year,
    opts::{init_logger, CommonOpts},
    pipeline::scrape_current_year,
};
use clap::Parser;

/// Scrapes the season in progress into `current_year_data.json`.
#[derive(Parser)]
struct Opts {
    #[command(flatten)]
    common: CommonOpts,
    /// Defaults to the current year
    #[arg(long)]
    year: Option<i32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();
    let opts = Opts::parse();

    let paths = opts.common.paths();
    let layout = opts.common.layout()?;
    let client = StatClient::new(opts.common.source_config())?;
    let year = opts.year.unwrap_or_else(current_season_year);
    scrape_current_year(&client, year, &layout, &paths).await?;
    Ok(())
}
