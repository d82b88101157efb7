use crate::model::{Review, Sentiment};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One point of the score-over-time series. Carries the fields a renderer
/// shows on hover alongside the plotted value.
#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub date: DateTime<Utc>,
    pub score: f64,
    pub customer_name: String,
    pub sentiment: Sentiment,
    pub suggestion: String,
    pub review_text: String,
}

/// Projects filtered reviews into a chronological score series. Stable sort:
/// equal dates keep their original insertion order. Only global date order is
/// guaranteed; per-customer grouping for multi-series display is left to the
/// renderer.
pub fn project_trend(reviews: &[Review]) -> Vec<TrendPoint> {
    let mut points: Vec<TrendPoint> = reviews
        .iter()
        .map(|r| TrendPoint {
            date: r.date,
            score: r.score,
            customer_name: r.customer_name.clone(),
            sentiment: r.sentiment.clone(),
            suggestion: r.suggestion.clone(),
            review_text: r.review_text.clone(),
        })
        .collect();
    points.sort_by_key(|p| p.date);
    points
}
