use itertools::Itertools;
use log::{debug, error, warn};
use scraper::{ElementRef, Html, Selector};

use crate::{
    layout::SourceLayout,
    parser::{
        record::RecordParseError,
        row::{extract_game, RowCells, RowError, RowOutcome, SkipReason},
    },
    schema::Game,
};

/// Games found on a single season page, along with what was left out and why.
///
/// Row numbers count every `tr` of the results table from zero, header rows
/// included.
#[derive(Debug, Default)]
pub struct SeasonExtraction {
    pub games: Vec<Game>,
    pub table_found: bool,
    pub skipped: Vec<(usize, SkipReason)>,
    pub row_errors: Vec<(usize, RowError)>,
    /// Index into `games` of each game whose record was replaced with zeros.
    pub record_failures: Vec<(usize, RecordParseError)>,
}

pub fn extract_season(html: &Html, layout: &SourceLayout) -> SeasonExtraction {
    let mut res = SeasonExtraction::default();

    let table_selector = match Selector::parse(&layout.table_selector) {
        Ok(selector) => selector,
        Err(e) => {
            error!("Invalid table selector {:?}: {e}", layout.table_selector);
            return res;
        }
    };
    let Some(table) = html.select(&table_selector).next() else {
        error!("Results table ({}) was not found", layout.table_selector);
        return res;
    };
    res.table_found = true;

    for (row_number, tr) in table.select(selector!("tr")).enumerate() {
        if is_header_row(tr, layout) {
            continue;
        }
        match extract_game(&row_cells(tr), layout) {
            Ok(RowOutcome::Game {
                game,
                record_failure,
            }) => {
                if let Some(e) = record_failure {
                    res.record_failures.push((res.games.len(), e));
                }
                res.games.push(game);
            }
            Ok(RowOutcome::Skipped(reason)) => {
                debug!("Skipped row {row_number}: {reason:?}");
                res.skipped.push((row_number, reason));
            }
            Err(e) => {
                warn!("Skipped row {row_number} due to an error: {e}");
                res.row_errors.push((row_number, e));
            }
        }
    }
    res
}

pub fn extract_season_from_str(html: &str, layout: &SourceLayout) -> SeasonExtraction {
    extract_season(&Html::parse_document(html), layout)
}

fn is_header_row(tr: ElementRef, layout: &SourceLayout) -> bool {
    tr.value()
        .classes()
        .any(|class| layout.header_row_classes.iter().any(|c| c == class))
}

fn row_cells(tr: ElementRef) -> RowCells {
    let cells = tr
        .select(selector!("td"))
        .map(|td| td.text().collect::<String>().trim().to_owned())
        .collect_vec();
    RowCells::new(cells, tr.text().collect())
}
