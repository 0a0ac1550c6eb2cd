use anyhow::{Context, Result};
use fullprice_core::error::FullPriceError;
use fullprice_schemas::impact::MetricKey;
use serde::Deserialize;
use std::fs;

/// What to compare. Either both product ids arrive on the command line, or
/// a YAML request file supplies them (and optionally narrows the metrics).
#[derive(Debug, Deserialize)]
pub struct ComparisonRequest {
    pub product_a: String,
    pub product_b: String,
    #[serde(default)]
    pub metrics: Option<Vec<MetricKey>>,
}

impl ComparisonRequest {
    pub fn resolve(
        product_a: Option<String>,
        product_b: Option<String>,
        request_path: Option<&str>,
    ) -> Result<Self> {
        if let Some(path) = request_path {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read request file '{}'", path))?;
            let request: ComparisonRequest = serde_yaml::from_str(&raw)
                .with_context(|| format!("Failed to parse request file '{}'", path))?;
            return Ok(request);
        }

        match (product_a, product_b) {
            (Some(a), Some(b)) => Ok(Self {
                product_a: a,
                product_b: b,
                metrics: None,
            }),
            _ => Err(FullPriceError::ConfigError(
                "compare needs --product-a and --product-b, or a --request file".to_string(),
            )
            .into()),
        }
    }

    /// The metrics to chart; defaults to all five.
    pub fn metrics(&self) -> Vec<MetricKey> {
        self.metrics
            .clone()
            .unwrap_or_else(|| MetricKey::ALL.to_vec())
    }
}
