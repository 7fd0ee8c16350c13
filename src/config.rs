use anyhow::{ensure, Context, Result};

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub api_key: String,
    pub api_url: String,
    pub network_region: String,
    pub lookback_minutes: i64,
    pub settlement_lag_minutes: i64,
    pub max_points: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid port number")?,
            api_key: std::env::var("OPENELECTRICITY_API_KEY")
                .context("OPENELECTRICITY_API_KEY must be set")?,
            api_url: std::env::var("OPENELECTRICITY_API_URL")
                .unwrap_or_else(|_| "https://api.openelectricity.org.au/v4".to_string()),
            network_region: std::env::var("NETWORK_REGION")
                .unwrap_or_else(|_| "NSW1".to_string()),
            lookback_minutes: std::env::var("LOOKBACK_MINUTES")
                .unwrap_or_else(|_| "45".to_string())
                .parse()
                .context("LOOKBACK_MINUTES must be a number of minutes")?,
            settlement_lag_minutes: std::env::var("SETTLEMENT_LAG_MINUTES")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("SETTLEMENT_LAG_MINUTES must be a number of minutes")?,
            max_points: std::env::var("MAX_POINTS")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .context("MAX_POINTS must be a whole number")?,
        };

        ensure!(
            config.lookback_minutes > 0,
            "LOOKBACK_MINUTES must be positive"
        );
        ensure!(
            config.settlement_lag_minutes >= 0,
            "SETTLEMENT_LAG_MINUTES must not be negative"
        );
        ensure!(config.max_points >= 1, "MAX_POINTS must be at least 1");

        Ok(config)
    }
}
