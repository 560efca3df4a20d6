use std::{ops::RangeInclusive, path::Path};

use log::{error, info};

use crate::{
    api::StatClient,
    chart::write_plot_data,
    fs_json_util::write_json,
    layout::SourceLayout,
    reshape::{reshape, ProcessedData},
    schema::{SeasonTable, Year},
    season::{load_season_table, save_season_table, scrape_years, DataPaths},
};

/// Scrapes `years` and saves them, whether or not every season was fetched.
pub async fn scrape_years_to_file(
    client: &StatClient,
    years: RangeInclusive<i32>,
    layout: &SourceLayout,
    path: &Path,
) -> anyhow::Result<SeasonTable> {
    let table = scrape_years(client, years, layout).await?;
    save_season_table(path, &table)?;
    Ok(table)
}

/// Scrapes the season of `year` alone.
///
/// Nothing is written if the page could not be fetched, so that the previous
/// file stays usable.
pub async fn scrape_current_year(
    client: &StatClient,
    year: i32,
    layout: &SourceLayout,
    paths: &DataPaths,
) -> anyhow::Result<Option<SeasonTable>> {
    let table = scrape_years(client, year..=year, layout).await?;
    if !table.contains_key(&Year::try_from(year)?) {
        error!("The results of {year} could not be fetched; keeping the saved data.");
        return Ok(None);
    }
    save_season_table(&paths.current_year_file(), &table)?;
    Ok(Some(table))
}

/// Builds `processed_data.json` and the chart from the saved seasons.
///
/// Returns `None` without writing anything if there are no saved seasons.
pub fn process_data(paths: &DataPaths, current_year: i32) -> anyhow::Result<Option<ProcessedData>> {
    let Some(table) = load_season_table(paths)? else {
        return Ok(None);
    };
    let processed = reshape(&table, current_year);
    let output = paths.processed_file();
    if let Some(dir) = output.parent() {
        fs_err::create_dir_all(dir)?;
    }
    write_json(&output, &processed)?;
    info!("Saved processed data to {output:?}.");
    write_plot_data(&paths.plot_data_file(), &processed)?;
    Ok(Some(processed))
}

#[cfg(test)]
mod tests {
    use super::process_data;
    use crate::{
        reshape::ProcessedData,
        schema::{Game, GameDate, HomeAway, Record, SeasonTable},
        season::{save_season_table, DataPaths},
    };

    fn temp_paths() -> (tempfile::TempDir, DataPaths) {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths {
            data_dir: dir.path().join("data"),
            web_dir: dir.path().join("web"),
        };
        (dir, paths)
    }

    #[test]
    fn writes_processed_data_and_chart() {
        let (_dir, paths) = temp_paths();
        let game = Game::builder()
            .date(GameDate::new(7, 7))
            .opponent("ヤクルト".to_owned().into())
            .location("神宮".to_owned().into())
            .home_away(HomeAway::Away)
            .pitcher("濵口".to_owned().into())
            .result("●".to_owned().into())
            .score("0-1".to_owned().into())
            .record(Record::new(40, 41, 2, -1))
            .build();
        let mut historical = SeasonTable::new();
        historical.insert("2022".parse().unwrap(), vec![game.clone()]);
        save_season_table(&paths.historical_file(), &historical).unwrap();
        let mut current = SeasonTable::new();
        current.insert("2023".parse().unwrap(), vec![game.clone(), game]);
        save_season_table(&paths.current_year_file(), &current).unwrap();

        let processed = process_data(&paths, 2023).unwrap().unwrap();
        let saved: ProcessedData =
            serde_json::from_str(&fs_err::read_to_string(paths.processed_file()).unwrap())
                .unwrap();
        assert_eq!(saved, processed);
        assert_eq!(saved.len(), 2);
        assert!(saved.values().map(|season| season.is_current_year).eq([false, true]));
        assert!(paths.plot_data_file().exists());
    }

    #[test]
    fn nothing_to_process() {
        let (_dir, paths) = temp_paths();
        assert_eq!(process_data(&paths, 2025).unwrap(), None);
        assert!(!paths.processed_file().exists());
        assert!(!paths.plot_data_file().exists());
    }
}
