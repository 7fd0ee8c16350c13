use anyhow::{anyhow, Result};
use serde::Deserialize;

use crate::window::TimeWindow;

/// Metric identifier for spot prices in the v4 data API.
pub const MARKET_PRICE: &str = "price";

/// Thin client for the OpenElectricity v4 API. Holds a single reqwest client
/// for the process lifetime; safe to clone and share across handlers.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl Client {
    pub fn new(api_key: String, base_url: String) -> Result<Self> {
        let http = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self {
            http,
            api_key,
            base_url,
        })
    }

    pub async fn get_market(
        &self,
        network_code: &str,
        metrics: &[&str],
        interval: &str,
        window: &TimeWindow,
        primary_grouping: &str,
    ) -> Result<TimeSeriesResponse> {
        let url = format!("{}/data/network/{}", self.base_url, network_code);
        let metrics = metrics.join(",");
        let date_start = window.start.format("%Y-%m-%dT%H:%M:%S").to_string();
        let date_end = window.end.format("%Y-%m-%dT%H:%M:%S").to_string();

        tracing::debug!("OpenElectricity request: {url} [{date_start} .. {date_end}]");
        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(&[
                ("metrics", metrics.as_str()),
                ("interval", interval),
                ("date_start", date_start.as_str()),
                ("date_end", date_end.as_str()),
                ("primary_grouping", primary_grouping),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(anyhow!(
                "OpenElectricity API returned status {}",
                resp.status()
            ));
        }

        let market: TimeSeriesResponse = resp.json().await?;
        tracing::trace!("Market response contains {} series", market.data.len());
        Ok(market)
    }
}

#[derive(Debug, Deserialize)]
pub struct TimeSeriesResponse {
    #[serde(default)]
    pub data: Vec<TimeSeries>,
}

#[derive(Debug, Deserialize)]
pub struct TimeSeries {
    pub metric: String,
    #[serde(default)]
    pub results: Vec<TimeSeriesResult>,
}

#[derive(Debug, Deserialize)]
pub struct TimeSeriesResult {
    #[serde(default)]
    pub columns: ResultColumns,
    #[serde(default)]
    pub data: Vec<TimeSeriesPoint>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResultColumns {
    pub network_region: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TimeSeriesPoint {
    pub timestamp: String,
    pub value: Option<f64>,
}
