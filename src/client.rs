use crate::errors::AppError;
use crate::models::{CustomerProfile, PredictionResult};

/// Client for the churn prediction service.
///
/// One instance per form; cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct PredictionClient {
    client: reqwest::Client,
    base_url: String,
}

impl PredictionClient {
    /// Creates a new `PredictionClient`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Origin of the prediction service, e.g. `http://127.0.0.1:8000`.
    ///
    /// No request timeout is configured here; delivery failures surface
    /// through the transport's own defaults.
    pub fn new(base_url: String) -> Result<Self, AppError> {
        let client = reqwest::Client::builder().build().map_err(|e| {
            AppError::NetworkError(format!("Failed to create prediction client: {}", e))
        })?;

        Ok(Self { client, base_url })
    }

    /// Posts the profile to `/predict` and returns the parsed outcome.
    ///
    /// Exactly one attempt per call; any retry is a new user action. The
    /// result is trusted as delivered, with no range checks on top.
    pub async fn predict(&self, profile: &CustomerProfile) -> Result<PredictionResult, AppError> {
        let url = format!("{}/predict", self.base_url);
        tracing::info!("Requesting churn prediction: {}", url);

        let response = self
            .client
            .post(&url)
            .json(profile)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Prediction request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.ok().filter(|body| !body.is_empty());
            tracing::error!(
                "Prediction service returned {}: {}",
                status,
                detail.as_deref().unwrap_or("<no body>")
            );
            return Err(AppError::ServerError {
                status: status.as_u16(),
                detail,
            });
        }

        // A success status with an unreadable body still counts against the
        // service, not the network.
        let result: PredictionResult = response.json().await.map_err(|e| AppError::ServerError {
            status: status.as_u16(),
            detail: Some(format!("Failed to parse prediction response: {}", e)),
        })?;

        tracing::info!(
            "Prediction received: {:?} ({:.4})",
            result.churn_prediction,
            result.probability
        );
        Ok(result)
    }
}
