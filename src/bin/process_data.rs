use baystars_net_wins::{
    chrono_util::current_season_year,
    opts::{init_logger, CommonOpts},
    pipeline::process_data,
};
use clap::Parser;
use log::warn;

/// Builds `processed_data.json` and the chart script from the saved seasons.
#[derive(Parser)]
struct Opts {
    #[command(flatten)]
    common: CommonOpts,
}

fn main() -> anyhow::Result<()> {
    init_logger();
    let opts = Opts::parse();

    if process_data(&opts.common.paths(), current_season_year())?.is_none() {
        warn!("Nothing was processed.");
    }
    Ok(())
}
