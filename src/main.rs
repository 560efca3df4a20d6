use baystars_net_wins::{
    api::StatClient,
    chrono_util::current_season_year,
    opts::{init_logger, CommonOpts},
    pipeline::scrape_years_to_file,
};
use clap::Parser;

/// Scrapes every season from `--start-year` up to the current one into a single file.
#[derive(Parser)]
struct Opts {
    #[command(flatten)]
    common: CommonOpts,
    #[arg(long, default_value_t = 2020)]
    start_year: i32,
    /// Defaults to the current year
    #[arg(long)]
    end_year: Option<i32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();
    let opts = Opts::parse();

    let paths = opts.common.paths();
    let layout = opts.common.layout()?;
    let client = StatClient::new(opts.common.source_config())?;
    let end_year = opts.end_year.unwrap_or_else(current_season_year);
    scrape_years_to_file(
        &client,
        opts.start_year..=end_year,
        &layout,
        &paths.all_years_file(),
    )
    .await?;
    Ok(())
}
