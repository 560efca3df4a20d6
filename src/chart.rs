//! The plotly figure loaded by the web page as `plotData`.

use std::{io::Write, path::Path};

use anyhow::Context;
use fs_err::File;
use itertools::{izip, Itertools};
use log::info;
use serde_json::{json, Value};

use crate::{
    reshape::{ProcessedData, ProcessedSeason},
    schema::Year,
};

fn season_color(year: Year) -> &'static str {
    match year.get() {
        2020 => "#1f77b4",
        2021 => "#ff7f0e",
        2022 => "#2ca02c",
        2023 => "#d62728",
        2024 => "#9467bd",
        2025 => "#8c564b",
        _ => "#000000",
    }
}

fn hover_texts(year: Year, season: &ProcessedSeason) -> Vec<String> {
    izip!(
        &season.dates,
        &season.opponents,
        &season.results,
        &season.scores,
        &season.net_wins
    )
    .map(|(date, opponent, result, score, net_wins)| {
        format!("{year}年 {date}<br>対戦: {opponent}<br>結果: {result} {score}<br>貯金: {net_wins}")
    })
    .collect_vec()
}

fn trace(year: Year, season: &ProcessedSeason) -> Value {
    let (line_width, marker_size) = if season.is_current_year {
        (3, 10)
    } else {
        (2, 6)
    };
    json!({
        "type": "scatter",
        "x": season.game_numbers,
        "y": season.net_wins,
        "mode": "lines+markers",
        "name": format!("{year}年"),
        "line": { "color": season_color(year), "width": line_width, "dash": "solid" },
        "marker": { "size": marker_size },
        "hovertext": hover_texts(year, season),
        "hoverinfo": "text",
    })
}

pub fn figure(data: &ProcessedData) -> Value {
    let grid = json!({ "showgrid": true, "gridwidth": 1, "gridcolor": "LightGray" });
    let mut yaxis = grid.clone();
    yaxis["title"] = json!({ "text": "貯金数" });
    yaxis["zeroline"] = json!(true);
    yaxis["zerolinewidth"] = json!(2);
    yaxis["zerolinecolor"] = json!("Gray");
    let mut xaxis = grid;
    xaxis["title"] = json!({ "text": "試合数" });

    json!({
        "data": data.iter().map(|(&year, season)| trace(year, season)).collect_vec(),
        "layout": {
            "title": { "text": "横浜DeNAベイスターズ 貯金数推移 (2020-現在)" },
            "xaxis": xaxis,
            "yaxis": yaxis,
            "hovermode": "closest",
            "legend": { "yanchor": "top", "y": 0.99, "xanchor": "left", "x": 0.01 },
            "template": "plotly_white",
            "font": { "family": "Meiryo, sans-serif", "size": 14 },
        },
    })
}

/// Writes the figure as a script assigning it to `plotData`.
pub fn write_plot_data(path: &Path, data: &ProcessedData) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs_err::create_dir_all(dir)?;
    }
    let run = || {
        let mut file = File::create(path)?;
        writeln!(file, "const plotData = {};", figure(data))?;
        anyhow::Ok(())
    };
    run().with_context(|| format!("Failed to write the chart to {path:?}"))?;
    info!("Saved the chart to {path:?}.");
    Ok(())
}
