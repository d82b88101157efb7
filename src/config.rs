use crate::analyzer::rating_distribution::DEFAULT_BINS;
use crate::analyzer::RatingBinner;
use crate::model::CustomerSelector;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub reviews_path: String,
    pub summary_path: String,
    /// Absent means "all customers".
    #[serde(default)]
    pub customer: Option<String>,
    #[serde(default = "default_rating_bins")]
    pub rating_bins: usize,
    /// Declared rating domain; observed range is used when absent.
    #[serde(default)]
    pub rating_range: Option<(f64, f64)>,
}

fn default_rating_bins() -> usize {
    DEFAULT_BINS
}

impl AppConfig {
    pub fn selector(&self) -> CustomerSelector {
        self.customer.clone().into()
    }

    pub fn binner(&self) -> RatingBinner {
        RatingBinner::new(self.rating_bins, self.rating_range)
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
