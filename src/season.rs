use std::{
    ops::RangeInclusive,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::{error, info, warn};
use scraper::Html;

use crate::{
    api::StatClient,
    fs_json_util::{read_json_if_exists, write_json},
    layout::SourceLayout,
    parser::table::extract_season,
    schema::{SeasonTable, Year},
};

/// Files read and written by a run.
#[derive(Clone, Debug)]
pub struct DataPaths {
    pub data_dir: PathBuf,
    pub web_dir: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            web_dir: PathBuf::from("web"),
        }
    }
}

impl DataPaths {
    pub fn historical_file(&self) -> PathBuf {
        self.data_dir.join("historical_data.json")
    }
    pub fn current_year_file(&self) -> PathBuf {
        self.data_dir.join("current_year_data.json")
    }
    pub fn all_years_file(&self) -> PathBuf {
        self.data_dir.join("baystars_net_wins.json")
    }
    pub fn processed_file(&self) -> PathBuf {
        self.data_dir.join("processed_data.json")
    }
    pub fn plot_data_file(&self) -> PathBuf {
        self.web_dir.join("js").join("plot_data.js")
    }
}

/// Downloads and extracts every season in `years`, one after another.
///
/// A season whose page could not be downloaded is left out of the result.
/// A season whose page has no results table is kept with no games.
pub async fn scrape_years(
    client: &StatClient,
    years: RangeInclusive<i32>,
    layout: &SourceLayout,
) -> anyhow::Result<SeasonTable> {
    let years = years
        .map(Year::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let mut table = SeasonTable::new();
    for year in years {
        let html = match client.fetch_season_page(year).await {
            Ok(html) => html,
            Err(e) => {
                error!("Failed to fetch the results of {year}: {e:#}");
                continue;
            }
        };
        let extraction = extract_season(&Html::parse_document(&html), layout);
        info!("{year}: {} games", extraction.games.len());
        if !extraction.record_failures.is_empty() {
            warn!(
                "{year}: {} games have zeros in place of the record",
                extraction.record_failures.len()
            );
        }
        table.insert(year, extraction.games);
    }
    Ok(table)
}

/// Adds `newer` to `older`.  A season present in both is taken from `newer` as a whole.
pub fn merge(older: &mut SeasonTable, newer: SeasonTable) {
    older.extend(newer);
}

fn load_if_exists(path: &Path, what: &str) -> anyhow::Result<Option<SeasonTable>> {
    let res = read_json_if_exists::<_, SeasonTable>(path)?;
    match res {
        Some(_) => info!("Loaded {what} from {path:?}."),
        None => warn!("{what} was not found at {path:?}."),
    }
    Ok(res)
}

/// Reads the historical seasons and the current season, the latter taking precedence.
///
/// Returns `None` if neither file has any season.
pub fn load_season_table(paths: &DataPaths) -> anyhow::Result<Option<SeasonTable>> {
    let mut table = SeasonTable::new();
    if let Some(historical) = load_if_exists(&paths.historical_file(), "Historical data")? {
        merge(&mut table, historical);
    }
    if let Some(current) = load_if_exists(&paths.current_year_file(), "Current year data")? {
        merge(&mut table, current);
    }
    if table.is_empty() {
        error!("No season data could be loaded.");
        return Ok(None);
    }
    Ok(Some(table))
}

pub fn save_season_table(path: &Path, table: &SeasonTable) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs_err::create_dir_all(dir)?;
    }
    write_json(path, table).with_context(|| format!("Failed to save seasons to {path:?}"))?;
    info!("Saved {} seasons to {path:?}.", table.len());
    Ok(())
}
