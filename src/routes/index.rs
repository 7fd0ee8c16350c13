use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct Welcome {
    pub message: String,
}

pub async fn handler(State(state): State<AppState>) -> Json<Welcome> {
    Json(Welcome {
        message: format!(
            "Use /average-price to fetch the latest {} average price",
            state.config.network_region
        ),
    })
}
