use chrono::NaiveDateTime;
use serde::Serialize;

use crate::openelectricity::TimeSeriesResponse;

const UNITS: &str = "$ / MWh";

#[derive(Debug, Serialize)]
pub struct AveragePrice {
    pub network_region: String,
    pub interval: String,
    pub points_used: usize,
    pub price_points: Vec<f64>,
    pub average_price: f64,
    pub average_price_with_network_charge: f64,
    pub units: String,
}

/// Collect the numeric price points for one metric and region, oldest first.
///
/// Upstream order is assumed chronological with the most recent point last.
/// That assumption is not trusted blindly: when every surviving point carries
/// a parseable timestamp the points are re-sorted by it, otherwise the
/// response's nested order is kept as-is.
pub fn extract_prices(
    response: &TimeSeriesResponse,
    target_metric: &str,
    target_region: &str,
) -> Vec<f64> {
    let mut points: Vec<(Option<NaiveDateTime>, f64)> = Vec::new();

    for series in &response.data {
        if !series.metric.eq_ignore_ascii_case(target_metric) {
            continue;
        }
        for result in &series.results {
            let region = result.columns.network_region.as_deref().unwrap_or("");
            // An empty region column means the result is not split by region.
            if !region.is_empty() && !region.eq_ignore_ascii_case(target_region) {
                continue;
            }
            for point in &result.data {
                let Some(value) = point.value else { continue };
                points.push((parse_timestamp(&point.timestamp), value));
            }
        }
    }

    if points.iter().all(|(ts, _)| ts.is_some()) {
        points.sort_by(|a, b| a.0.cmp(&b.0));
    }

    points.into_iter().map(|(_, value)| value).collect()
}

fn parse_timestamp(timestamp: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S").ok()
}

/// Average the trailing `max_points` values and add the network charge.
/// `values` must be non-empty.
pub fn assemble(
    values: &[f64],
    max_points: usize,
    network_charge: f64,
    region: &str,
    interval: &str,
) -> AveragePrice {
    let points_used = max_points.min(values.len());
    let last_values = &values[values.len() - points_used..];
    let average_price = last_values.iter().sum::<f64>() / last_values.len() as f64;

    AveragePrice {
        network_region: region.to_string(),
        interval: interval.to_string(),
        points_used: last_values.len(),
        price_points: last_values.to_vec(),
        average_price,
        average_price_with_network_charge: average_price + network_charge,
        units: UNITS.to_string(),
    }
}
