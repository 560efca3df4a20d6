//! Where things are on the results page.
//!
//! The page is a wide table whose columns are only identified by position.
//! Every position the extractor relies on is kept here so that a change in the
//! page layout only needs a new layout file instead of new code.

use std::{fmt::Debug, path::PathBuf};

use enum_map::{enum_map, Enum, EnumMap};
use log::info;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::fs_json_util::read_toml;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Enum, EnumIter, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ColumnRole {
    Date,
    Opponent,
    Location,
    HomeAway,
    Pitcher,
    Result,
    Score,
    Record,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceLayout {
    /// Selector of the results table.  The first match is used.
    pub table_selector: String,
    /// Rows having any of these classes are headers and never hold a game.
    pub header_row_classes: Vec<String>,
    /// Rows whose text contains this marker are called-off games.
    pub cancelled_marker: String,
    /// The home/away cell contains this character for home games.
    pub home_marker: char,
    /// Rows with fewer cells are not game rows.
    pub min_cells: usize,
    pub columns: EnumMap<ColumnRole, usize>,
}

impl Default for SourceLayout {
    fn default() -> Self {
        Self {
            table_selector: "table.Base".to_owned(),
            header_row_classes: vec!["Index".to_owned(), "Index2".to_owned()],
            cancelled_marker: "中止".to_owned(),
            home_marker: 'Ｈ',
            min_cells: 15,
            columns: enum_map! {
                ColumnRole::Date => 0,
                ColumnRole::Opponent => 2,
                ColumnRole::Location => 3,
                ColumnRole::HomeAway => 4,
                ColumnRole::Pitcher => 7,
                ColumnRole::Result => 17,
                ColumnRole::Score => 18,
                ColumnRole::Record => 21,
            },
        }
    }
}

impl SourceLayout {
    pub fn column(&self, role: ColumnRole) -> usize {
        self.columns[role]
    }

    /// Loads the layout from a TOML file, or the built-in layout if `path` is `None`.
    ///
    /// Keys missing from the file keep their built-in values, except for
    /// `columns` which has to list every role when present.
    pub fn load<P: Into<PathBuf> + Debug>(path: Option<P>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let path = path.into();
                let layout = read_toml(&path)?;
                info!("Loaded source layout from {path:?}.");
                Ok(layout)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use strum::IntoEnumIterator;

    use super::{ColumnRole, SourceLayout};

    #[test]
    fn default_positions() {
        let layout = SourceLayout::default();
        let positions = ColumnRole::iter()
            .map(|role| layout.column(role))
            .collect::<Vec<_>>();
        assert_eq!(positions, [0, 2, 3, 4, 7, 17, 18, 21]);
    }

    #[test]
    fn load_partial_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
min_cells = 10
cancelled_marker = "ノーゲーム"

[columns]
date = 1
opponent = 2
location = 3
home_away = 4
pitcher = 5
result = 6
score = 7
record = 8
"#
        )
        .unwrap();
        let layout = SourceLayout::load(Some(file.path())).unwrap();
        assert_eq!(layout.min_cells, 10);
        assert_eq!(layout.cancelled_marker, "ノーゲーム");
        assert_eq!(layout.column(ColumnRole::Date), 1);
        assert_eq!(layout.column(ColumnRole::Record), 8);
        assert_eq!(layout.table_selector, "table.Base");
        assert_eq!(layout.home_marker, 'Ｈ');
    }

    #[test]
    fn load_without_path_is_default() {
        let layout = SourceLayout::load(None::<&str>).unwrap();
        assert_eq!(layout.column(ColumnRole::Result), 17);
        assert_eq!(layout.header_row_classes, ["Index", "Index2"]);
    }
}
