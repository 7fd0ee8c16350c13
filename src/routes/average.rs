use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use chrono_tz::Australia::Sydney;
use http::StatusCode;
use serde::Serialize;
use tracing::warn;

use crate::{network_charge, openelectricity::MARKET_PRICE, prices, window, AppState};

const NETWORK_CODE: &str = "NEM";
const INTERVAL: &str = "5m";

#[derive(Serialize)]
struct ErrorDetail {
    detail: String,
}

fn bad_gateway(detail: String) -> Response {
    (StatusCode::BAD_GATEWAY, Json(ErrorDetail { detail })).into_response()
}

pub async fn handler(State(state): State<AppState>) -> Response {
    let window = window::market_window(
        state.config.lookback_minutes,
        state.config.settlement_lag_minutes,
    );

    let market = match state
        .oe
        .get_market(NETWORK_CODE, &[MARKET_PRICE], INTERVAL, &window, "network_region")
        .await
    {
        Ok(market) => market,
        Err(e) => {
            warn!("Market request failed: {e}");
            return bad_gateway(format!("Upstream request failed: {e}"));
        }
    };

    let values = prices::extract_prices(&market, MARKET_PRICE, &state.config.network_region);
    if values.is_empty() {
        return bad_gateway("Upstream response did not contain any price points".to_string());
    }

    let charge = network_charge::network_charge_at(Utc::now().with_timezone(&Sydney));
    let result = prices::assemble(
        &values,
        state.config.max_points,
        charge,
        &state.config.network_region,
        INTERVAL,
    );

    Json(result).into_response()
}
