// Analyzer module: one submodule per derived view.

pub mod cross_tab;
pub mod monthly_sentiment;
pub mod rating_distribution;
pub mod suggestion_frequency;
pub mod trend;

pub use cross_tab::{sentiment_suggestion_counts, CrossTabRow};
pub use monthly_sentiment::{monthly_sentiment_counts, MonthlySentimentRow};
pub use rating_distribution::{RatingBinRow, RatingBinner};
pub use suggestion_frequency::{suggestion_frequency, SuggestionCount};
pub use trend::{project_trend, TrendPoint};
