use std::num::ParseIntError;

use regex::Captures;
use thiserror::Error;

use crate::schema::Record;

#[derive(PartialEq, Eq, Debug, Error)]
pub enum RecordParseError {
    #[error("Unknown record format: {0:?}")]
    UnknownFormat(String),
    #[error("Number out of range in record {text:?}: {source}")]
    OutOfRange {
        text: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parses the cumulative record printed on each game row.
///
/// Two forms are printed by the source:
/// - `9(1)10 -1`: 9 wins, 1 draw, 10 losses, net -1.  Used once a draw occurred.
/// - `1 - 0 +1`: 1 win, 0 losses, net +1.
///
/// The numbers are returned as printed.
pub fn parse_record(text: &str) -> Result<Record, RecordParseError> {
    let digits = to_ascii_digits(text);
    let out_of_range = |source| RecordParseError::OutOfRange {
        text: text.to_owned(),
        source,
    };
    let number = |captures: &Captures, i: usize| captures[i].parse::<u32>().map_err(out_of_range);
    let net_wins = |captures: &Captures, i: usize| captures[i].parse::<i32>().map_err(out_of_range);

    if let Some(captures) = regex!(r"([0-9]+)\(([0-9]+)\)([0-9]+)\s*([+-]?[0-9]+)").captures(&digits) {
        let wins = number(&captures, 1)?;
        let draws = number(&captures, 2)?;
        let losses = number(&captures, 3)?;
        return Ok(Record::new(wins, losses, draws, net_wins(&captures, 4)?));
    }
    if let Some(captures) = regex!(r"([0-9]+)\s*-\s*([0-9]+)\s*([+-]?[0-9]+)").captures(&digits) {
        let wins = number(&captures, 1)?;
        let losses = number(&captures, 2)?;
        return Ok(Record::new(wins, losses, 0, net_wins(&captures, 3)?));
    }
    Err(RecordParseError::UnknownFormat(text.to_owned()))
}

/// Replaces full-width digits with ASCII ones.
fn to_ascii_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '０'..='９' => char::from_u32(c as u32 - '０' as u32 + '0' as u32).unwrap_or(c),
            _ => c,
        })
        .collect()
}
