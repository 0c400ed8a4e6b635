use serde::Deserialize;

/// Default origin of the prediction service.
pub const DEFAULT_PREDICT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub predict_base_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let predict_base_url = std::env::var("PREDICT_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PREDICT_BASE_URL.to_string());
        let predict_base_url = predict_base_url.trim().trim_end_matches('/').to_string();

        let parsed = url::Url::parse(&predict_base_url)
            .map_err(|e| anyhow::anyhow!("PREDICT_BASE_URL is not a valid URL: {}", e))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!("PREDICT_BASE_URL must start with http:// or https://");
        }

        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Prediction base URL: {}", predict_base_url);

        Ok(Self { predict_base_url })
    }
}
