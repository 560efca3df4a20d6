use baystars_net_wins::{
    api::StatClient,
    opts::{init_logger, CommonOpts},
    pipeline::scrape_years_to_file,
};
use clap::Parser;

/// Scrapes the finished seasons into `historical_data.json`.
#[derive(Parser)]
struct Opts {
    #[command(flatten)]
    common: CommonOpts,
    #[arg(long, default_value_t = 2020)]
    start_year: i32,
    #[arg(long, default_value_t = 2024)]
    end_year: i32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();
    let opts = Opts::parse();

    let paths = opts.common.paths();
    let layout = opts.common.layout()?;
    let client = StatClient::new(opts.common.source_config())?;
    scrape_years_to_file(
        &client,
        opts.start_year..=opts.end_year,
        &layout,
        &paths.historical_file(),
    )
    .await?;
    Ok(())
}
