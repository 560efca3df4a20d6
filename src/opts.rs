use std::path::PathBuf;

use crate::{api::SourceConfig, layout::SourceLayout, season::DataPaths};

/// Options shared by every binary.  All of them have working defaults.
#[derive(Clone, Debug, clap::Args)]
pub struct CommonOpts {
    /// Directory of the JSON files
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
    /// Directory of the web page; the chart goes to `js/plot_data.js` under it
    #[arg(long, default_value = "web")]
    pub web_dir: PathBuf,
    /// TOML file overriding where things are on the results page
    #[arg(long)]
    pub layout: Option<PathBuf>,
    /// Team code of the source site
    #[arg(long)]
    pub team_code: Option<String>,
}

impl CommonOpts {
    pub fn paths(&self) -> DataPaths {
        DataPaths {
            data_dir: self.data_dir.clone(),
            web_dir: self.web_dir.clone(),
        }
    }

    pub fn layout(&self) -> anyhow::Result<SourceLayout> {
        SourceLayout::load(self.layout.as_ref())
    }

    pub fn source_config(&self) -> SourceConfig {
        let mut config = SourceConfig::default();
        if let Some(team_code) = &self.team_code {
            config.team_code = team_code.clone();
        }
        config
    }
}

pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
