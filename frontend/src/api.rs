use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use shared::{BatchPredictionResponse, PredictionPayload, SinglePredictionResponse};

// Fixed deployment address of the prediction service.
const API_BASE: &str = "http://localhost:8000";

/// Classification + regression outcome for one point-in-time reading.
/// `rul` only carries meaning when `failure_type` is not `No_Failure`.
#[derive(Debug, Clone, PartialEq)]
pub struct SinglePrediction {
    pub failure_type: String,
    pub rul: Option<f64>,
}

/// Scores the payload against the single-prediction endpoint and maps the
/// service's snake_case response into the internal result shape.
pub async fn predict_single(payload: &PredictionPayload) -> Result<SinglePrediction, String> {
    let response: SinglePredictionResponse = post_json("/predict", payload).await?;
    Ok(SinglePrediction {
        failure_type: response.failure_type,
        rul: response.rul,
    })
}

/// Queries all failures and the aggregate RUL expected within the payload's
/// `time_period_days` window. The response is passed through as-is.
pub async fn predict_batch(payload: &PredictionPayload) -> Result<BatchPredictionResponse, String> {
    post_json("/predict-all-failures-and-ruls", payload).await
}

// No retries, timeouts, or cancellation here; the caller's lifecycle gate is
// the only protection against overlapping requests.
async fn post_json<T: DeserializeOwned>(
    path: &str,
    payload: &PredictionPayload,
) -> Result<T, String> {
    if let Ok(body) = serde_json::to_string(payload) {
        log::debug!("POST {}{}: {}", API_BASE, path, body);
    }

    let response = Request::post(&format!("{}{}", API_BASE, path))
        .json(payload)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(format!("Server error: {} - {}", status, body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
