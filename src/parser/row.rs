use log::warn;
use thiserror::Error;

use crate::{
    layout::{ColumnRole, SourceLayout},
    parser::record::{parse_record, RecordParseError},
    schema::{DateParseError, Game, GameDate, HomeAway, Record},
};

/// Text of a single table row.
#[derive(Clone, Debug)]
pub struct RowCells {
    /// Trimmed text of each data cell, from left to right.
    pub cells: Vec<String>,
    /// All the text of the row, including cells that are not data cells.
    pub text: String,
}

impl RowCells {
    pub fn new(cells: Vec<String>, text: String) -> Self {
        Self { cells, text }
    }

    pub fn from_cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        let text = cells.concat();
        Self { cells, text }
    }

    fn get(&self, layout: &SourceLayout, role: ColumnRole) -> Result<&str, RowError> {
        let index = layout.column(role);
        self.cells
            .get(index)
            .map(|cell| cell.as_str())
            .ok_or(RowError::MissingCell {
                role,
                index,
                len: self.cells.len(),
            })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SkipReason {
    Cancelled,
    TooFewCells(usize),
    NotYetPlayed,
    MalformedDate,
}

#[derive(PartialEq, Eq, Debug, Error)]
pub enum RowError {
    #[error("Column {role} is at {index}, but the row has only {len} cells")]
    MissingCell {
        role: ColumnRole,
        index: usize,
        len: usize,
    },
    #[error("Invalid date: {0}")]
    Date(#[from] DateParseError),
}

#[derive(Debug)]
pub enum RowOutcome {
    Game {
        game: Game,
        /// Set when the record cell could not be read and zeros were used instead.
        record_failure: Option<RecordParseError>,
    },
    Skipped(SkipReason),
}

pub fn extract_game(row: &RowCells, layout: &SourceLayout) -> Result<RowOutcome, RowError> {
    if row.text.contains(layout.cancelled_marker.as_str()) {
        return Ok(RowOutcome::Skipped(SkipReason::Cancelled));
    }
    if row.cells.len() < layout.min_cells {
        return Ok(RowOutcome::Skipped(SkipReason::TooFewCells(row.cells.len())));
    }

    let result = row.get(layout, ColumnRole::Result)?;
    if result.is_empty() {
        return Ok(RowOutcome::Skipped(SkipReason::NotYetPlayed));
    }

    let date = match row.get(layout, ColumnRole::Date)?.parse::<GameDate>() {
        Ok(date) => date,
        Err(DateParseError::MissingDay(_)) => {
            return Ok(RowOutcome::Skipped(SkipReason::MalformedDate))
        }
        Err(e) => return Err(e.into()),
    };

    let home_away = if row
        .get(layout, ColumnRole::HomeAway)?
        .contains(layout.home_marker)
    {
        HomeAway::Home
    } else {
        HomeAway::Away
    };

    let record_text = row.get(layout, ColumnRole::Record)?;
    let (record, record_failure) = match parse_record(record_text) {
        Ok(record) => (record, None),
        Err(e) => {
            warn!("Failed to parse the record, using zeros instead: {e}");
            (Record::default(), Some(e))
        }
    };

    let game = Game::builder()
        .date(date)
        .opponent(row.get(layout, ColumnRole::Opponent)?.to_owned().into())
        .location(row.get(layout, ColumnRole::Location)?.to_owned().into())
        .home_away(home_away)
        .pitcher(row.get(layout, ColumnRole::Pitcher)?.to_owned().into())
        .result(result.to_owned().into())
        .score(row.get(layout, ColumnRole::Score)?.to_owned().into())
        .record(record)
        .build();
    Ok(RowOutcome::Game {
        game,
        record_failure,
    })
}

#[cfg(test)]
mod tests {
    use super::{extract_game, RowCells, RowError, RowOutcome, SkipReason};
    use crate::{
        layout::{ColumnRole, SourceLayout},
        parser::record::RecordParseError,
        schema::{Game, GameDate, HomeAway, Record},
    };

    /// A 22-cell row laid out like the results page.
    fn game_cells(
        date: &str,
        opponent: &str,
        home_away: &str,
        result: &str,
        record: &str,
    ) -> Vec<String> {
        let mut cells = vec![String::new(); 22];
        cells[0] = date.to_owned();
        cells[1] = "(火)".to_owned();
        cells[2] = opponent.to_owned();
        cells[3] = "横浜".to_owned();
        cells[4] = home_away.to_owned();
        cells[7] = "東".to_owned();
        cells[17] = result.to_owned();
        cells[18] = "3-2".to_owned();
        cells[21] = record.to_owned();
        cells
    }

    fn extract(cells: Vec<String>) -> Result<RowOutcome, RowError> {
        extract_game(&RowCells::from_cells(cells), &SourceLayout::default())
    }

    fn expect_game(
        outcome: Result<RowOutcome, RowError>,
    ) -> (Game, Option<RecordParseError>) {
        match outcome {
            Ok(RowOutcome::Game {
                game,
                record_failure,
            }) => (game, record_failure),
            other => panic!("Expected a game, found {other:?}"),
        }
    }

    #[test]
    fn regular_game() {
        let (game, record_failure) =
            expect_game(extract(game_cells("4/2", "巨人", "Ｈ", "○", "1 - 0 +1")));
        assert_eq!(record_failure, None);
        assert_eq!(game.date(), GameDate::new(4, 2));
        assert_eq!(game.opponent().to_string(), "巨人");
        assert_eq!(game.location().to_string(), "横浜");
        assert_eq!(game.home_away(), HomeAway::Home);
        assert_eq!(game.pitcher().to_string(), "東");
        assert_eq!(game.result().to_string(), "○");
        assert_eq!(game.score().to_string(), "3-2");
        assert_eq!(game.record(), Record::new(1, 0, 0, 1));
    }

    #[test]
    fn away_game() {
        let (game, _) = expect_game(extract(game_cells("4/3", "阪神", "Ｖ", "●", "9(1)10 -1")));
        assert_eq!(game.home_away(), HomeAway::Away);
        assert_eq!(game.record(), Record::new(9, 10, 1, -1));
    }

    #[test]
    fn cancelled_game_is_skipped() {
        let mut cells = game_cells("4/4", "中日", "Ｈ", "○", "1 - 0 +1");
        cells[10] = "雨天中止".to_owned();
        assert!(matches!(
            extract(cells),
            Ok(RowOutcome::Skipped(SkipReason::Cancelled))
        ));
        let row = RowCells::new(vec!["中止".to_owned()], "4/4 中止".to_owned());
        assert!(matches!(
            extract_game(&row, &SourceLayout::default()),
            Ok(RowOutcome::Skipped(SkipReason::Cancelled))
        ));
    }

    #[test]
    fn short_row_is_skipped() {
        assert!(matches!(
            extract(vec!["日付".to_owned(); 14]),
            Ok(RowOutcome::Skipped(SkipReason::TooFewCells(14)))
        ));
    }

    #[test]
    fn unplayed_game_is_skipped() {
        assert!(matches!(
            extract(game_cells("9/30", "広島", "Ｈ", "", "")),
            Ok(RowOutcome::Skipped(SkipReason::NotYetPlayed))
        ));
    }

    #[test]
    fn date_without_day_is_skipped() {
        assert!(matches!(
            extract(game_cells("未定", "広島", "Ｈ", "○", "1 - 0 +1")),
            Ok(RowOutcome::Skipped(SkipReason::MalformedDate))
        ));
    }

    #[test]
    fn non_numeric_date_is_an_error() {
        assert!(matches!(
            extract(game_cells("4/x", "広島", "Ｈ", "○", "1 - 0 +1")),
            Err(RowError::Date(_))
        ));
    }

    #[test]
    fn row_shorter_than_layout_is_an_error() {
        let mut cells = game_cells("4/2", "巨人", "Ｈ", "○", "1 - 0 +1");
        cells.truncate(19);
        assert_eq!(
            extract(cells).unwrap_err(),
            RowError::MissingCell {
                role: ColumnRole::Record,
                index: 21,
                len: 19,
            }
        );
    }

    #[test]
    fn bad_record_gives_zeros() {
        let (game, record_failure) =
            expect_game(extract(game_cells("5/1", "ヤクルト", "Ｖ", "△", "-")));
        assert_eq!(game.record(), Record::default());
        assert_eq!(
            record_failure,
            Some(RecordParseError::UnknownFormat("-".to_owned()))
        );
    }

    #[test]
    fn custom_layout() {
        let mut layout = SourceLayout::default();
        layout.min_cells = 3;
        layout.columns[ColumnRole::Date] = 0;
        layout.columns[ColumnRole::Opponent] = 1;
        layout.columns[ColumnRole::Location] = 1;
        layout.columns[ColumnRole::HomeAway] = 1;
        layout.columns[ColumnRole::Pitcher] = 1;
        layout.columns[ColumnRole::Result] = 2;
        layout.columns[ColumnRole::Score] = 2;
        layout.columns[ColumnRole::Record] = 3;
        let row = RowCells::from_cells(["6/1", "Ｈ巨人", "○", "30 - 20 +10"]);
        let (game, _) = expect_game(extract_game(&row, &layout));
        assert_eq!(game.date(), GameDate::new(6, 1));
        assert_eq!(game.home_away(), HomeAway::Home);
        assert_eq!(game.record(), Record::new(30, 20, 0, 10));
    }
}
