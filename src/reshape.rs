use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::schema::{GameDate, ResultMark, Score, SeasonTable, TeamName, Year};

pub type ProcessedData = BTreeMap<Year, ProcessedSeason>;

/// A season as parallel arrays, one element per game.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ProcessedSeason {
    pub game_numbers: Vec<usize>,
    pub net_wins: Vec<i32>,
    pub dates: Vec<GameDate>,
    pub opponents: Vec<TeamName>,
    pub results: Vec<ResultMark>,
    pub scores: Vec<Score>,
    pub is_current_year: bool,
}

pub fn reshape(table: &SeasonTable, current_year: i32) -> ProcessedData {
    table
        .iter()
        .map(|(&year, games)| {
            let season = ProcessedSeason {
                game_numbers: (1..=games.len()).collect(),
                net_wins: games
                    .iter()
                    .map(|game| game.record().net_wins())
                    .collect_vec(),
                dates: games.iter().map(|game| game.date()).collect_vec(),
                opponents: games.iter().map(|game| game.opponent().clone()).collect_vec(),
                results: games.iter().map(|game| game.result().clone()).collect_vec(),
                scores: games.iter().map(|game| game.score().clone()).collect_vec(),
                is_current_year: year.get() == current_year,
            };
            (year, season)
        })
        .collect()
}
