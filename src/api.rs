use std::collections::BTreeMap;

use anyhow::{bail, Context};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::schema::Year;

/// Where and how the season pages are requested.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub base_url: Url,
    pub team_code: String,
    /// Value of the `y` parameter for years that are not requested by their own number.
    /// The latest season, for example, is only served under `y=0`.
    pub year_param_overrides: BTreeMap<i32, i32>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://nf3.sakura.ne.jp/php/stat_disp/stat_disp.php")
                .expect("Invalid built-in URL"),
            team_code: "DB".to_owned(),
            year_param_overrides: [(2025, 0)].into_iter().collect(),
        }
    }
}

impl SourceConfig {
    pub fn year_param(&self, year: Year) -> i32 {
        self.year_param_overrides
            .get(&year.get())
            .copied()
            .unwrap_or(year.get())
    }

    pub fn season_url(&self, year: Year) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("y", &self.year_param(year).to_string())
            .append_pair("leg", "0")
            .append_pair("tm", &self.team_code)
            .append_pair("mon", "0")
            .append_pair("vst", "all");
        url
    }
}

pub struct StatClient {
    client: reqwest::Client,
    config: SourceConfig,
}

impl StatClient {
    pub fn new(config: SourceConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Downloads the results page of `year`.
    ///
    /// The body is always decoded as UTF-8, whatever the response headers say.
    pub async fn fetch_season_page(&self, year: Year) -> anyhow::Result<String> {
        let url = self.config.season_url(year);
        info!("Fetching the results of {year}...");
        debug!("GET {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to request {url}"))?;
        let status = response.status();
        if !status.is_success() {
            bail!("Server returned {status} for {url}");
        }
        let body = response.bytes().await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::SourceConfig;
    use crate::schema::Year;

    fn year(value: i32) -> Year {
        value.try_into().unwrap()
    }

    #[test]
    fn year_param_overrides() {
        let config = SourceConfig::default();
        assert_eq!(config.year_param(year(2024)), 2024);
        assert_eq!(config.year_param(year(2025)), 0);

        let mut config = config;
        config.year_param_overrides.insert(2026, 0);
        config.year_param_overrides.remove(&2025);
        assert_eq!(config.year_param(year(2025)), 2025);
        assert_eq!(config.year_param(year(2026)), 0);
    }

    #[test]
    fn season_url() {
        let config = SourceConfig::default();
        assert_eq!(
            config.season_url(year(2021)).as_str(),
            "https://nf3.sakura.ne.jp/php/stat_disp/stat_disp.php?y=2021&leg=0&tm=DB&mon=0&vst=all"
        );
        assert_eq!(
            config.season_url(year(2025)).query(),
            Some("y=0&leg=0&tm=DB&mon=0&vst=all")
        );
    }
}
