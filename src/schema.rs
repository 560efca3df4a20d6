use std::{collections::BTreeMap, num::ParseIntError, str::FromStr};

use derive_more::{AsRef, Display, From};
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use thiserror::Error;
use typed_builder::TypedBuilder;

/// Games of each season, in the order they were played.
pub type SeasonTable = BTreeMap<Year, Vec<Game>>;

#[derive(Clone, PartialEq, Eq, Debug, TypedBuilder, Getters, CopyGetters, Serialize, Deserialize)]
pub struct Game {
    #[getset(get_copy = "pub")]
    date: GameDate,
    #[getset(get = "pub")]
    opponent: TeamName,
    #[getset(get = "pub")]
    location: Stadium,
    #[getset(get_copy = "pub")]
    home_away: HomeAway,
    #[getset(get = "pub")]
    pitcher: PitcherName,
    #[getset(get = "pub")]
    result: ResultMark,
    #[getset(get = "pub")]
    score: Score,
    #[serde(flatten)]
    #[getset(get_copy = "pub")]
    record: Record,
}

/// Cumulative standing of the team right after a game.
///
/// `net_wins` is taken as printed by the source and is never derived from
/// `wins` and `losses`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, CopyGetters, Serialize, Deserialize)]
#[getset(get_copy = "pub")]
pub struct Record {
    wins: u32,
    losses: u32,
    draws: u32,
    net_wins: i32,
}
impl Record {
    pub fn new(wins: u32, losses: u32, draws: u32, net_wins: i32) -> Self {
        Self {
            wins,
            losses,
            draws,
            net_wins,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum HomeAway {
    #[serde(rename = "H")]
    Home,
    #[serde(rename = "V")]
    Away,
}

#[derive(Clone, PartialEq, Eq, Debug, From, AsRef, Display, Serialize, Deserialize)]
#[as_ref(forward)]
pub struct TeamName(String);

#[derive(Clone, PartialEq, Eq, Debug, From, AsRef, Display, Serialize, Deserialize)]
#[as_ref(forward)]
pub struct Stadium(String);

#[derive(Clone, PartialEq, Eq, Debug, From, AsRef, Display, Serialize, Deserialize)]
#[as_ref(forward)]
pub struct PitcherName(String);

/// Outcome marker as displayed by the source, e.g. `○`, `●` or `△`.
#[derive(Clone, PartialEq, Eq, Debug, From, AsRef, Display, Serialize, Deserialize)]
#[as_ref(forward)]
pub struct ResultMark(String);

#[derive(Clone, PartialEq, Eq, Debug, From, AsRef, Display, Serialize, Deserialize)]
#[as_ref(forward)]
pub struct Score(String);

/// Month and day of a game.  The year is given by the key of [`SeasonTable`].
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, CopyGetters, SerializeDisplay, DeserializeFromStr,
)]
#[getset(get_copy = "pub")]
pub struct GameDate {
    month: u8,
    day: u8,
}
impl GameDate {
    pub fn new(month: u8, day: u8) -> Self {
        Self { month, day }
    }
}
impl std::fmt::Display for GameDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.month, self.day)
    }
}

#[derive(PartialEq, Eq, Debug, Error)]
pub enum DateParseError {
    #[error("Date has no day part: {0:?}")]
    MissingDay(String),
    #[error("Date part is not a number: {text:?} ({source})")]
    InvalidNumber {
        text: String,
        #[source]
        source: ParseIntError,
    },
}

impl FromStr for GameDate {
    type Err = DateParseError;

    /// Accepts `M/D`.  Anything after a second slash is ignored, as is
    /// surrounding whitespace of each part.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        let (Some(month), Some(day)) = (parts.next(), parts.next()) else {
            return Err(DateParseError::MissingDay(s.to_owned()));
        };
        let number = |text: &str| {
            text.trim()
                .parse::<u8>()
                .map_err(|source| DateParseError::InvalidNumber {
                    text: text.to_owned(),
                    source,
                })
        };
        Ok(Self {
            month: number(month)?,
            day: number(day)?,
        })
    }
}

/// A season, written with four digits.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Display, SerializeDisplay, DeserializeFromStr,
)]
pub struct Year(i32);
impl Year {
    pub fn get(self) -> i32 {
        self.0
    }
}
impl TryFrom<i32> for Year {
    type Error = YearError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1000..=9999 => Ok(Self(value)),
            _ => Err(YearError::OutOfRange(value)),
        }
    }
}

#[derive(PartialEq, Eq, Debug, Error)]
pub enum YearError {
    #[error("Year must have four digits: {0}")]
    OutOfRange(i32),
    #[error("Year is not a number: {0:?}")]
    NotANumber(String),
}

impl FromStr for Year {
    type Err = YearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(YearError::NotANumber(s.to_owned()));
        }
        s.parse::<i32>()
            .map_err(|_| YearError::NotANumber(s.to_owned()))?
            .try_into()
    }
}
