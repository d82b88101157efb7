// Full recomputation of every derived view for one selector.
use crate::analyzer::{
    monthly_sentiment_counts, project_trend, sentiment_suggestion_counts, suggestion_frequency,
    CrossTabRow, MonthlySentimentRow, RatingBinRow, RatingBinner, SuggestionCount, TrendPoint,
};
use crate::filter::{filter_reviews, filter_summary};
use crate::loader::RecordStore;
use crate::model::{CustomerSelector, SummaryTable};
use serde::Serialize;
use tracing::info;

/// Every derived table for one selector, computed in a single pass.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub selector: CustomerSelector,
    pub trend: Vec<TrendPoint>,
    pub monthly_sentiment: Vec<MonthlySentimentRow>,
    pub suggestion_frequency: Vec<SuggestionCount>,
    pub rating_distribution: Vec<RatingBinRow>,
    pub cross_tab: Vec<CrossTabRow>,
    pub summary: SummaryTable,
}

/// Runs the whole pipeline. Stateless: a selector change means re-running
/// everything against the store, so results are always fresh.
pub struct Pipeline {
    binner: RatingBinner,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { binner: RatingBinner::default() }
    }

    pub fn with_binner(binner: RatingBinner) -> Self {
        Self { binner }
    }

    pub fn run(&self, store: &RecordStore, selector: &CustomerSelector) -> AnalysisReport {
        let reviews = filter_reviews(store.reviews(), selector);
        info!("analyzing {} of {} reviews", reviews.len(), store.reviews().len());

        AnalysisReport {
            selector: selector.clone(),
            trend: project_trend(&reviews),
            monthly_sentiment: monthly_sentiment_counts(&reviews),
            suggestion_frequency: suggestion_frequency(&reviews),
            rating_distribution: self.binner.bin(&reviews),
            cross_tab: sentiment_suggestion_counts(&reviews),
            summary: filter_summary(store.summary(), selector),
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{read_reviews, read_summary};

    const REVIEWS_CSV: &str = "\
FirstName,Date,Rating,score,sentiment,suggestions,Review
Alice,2024-01-05,5,0.9,positive,keep it up,Great job
Alice,2024-01-20,4,0.6,positive,keep it up,Solid
Alice,2024-02-02,1,-0.8,negative,reduce price,Too pricey
Bob,2024-01-11,2,-0.3,negative,reduce price,Meh
Bob,2024-03-07,3,0.1,neutral,faster service,Fine
";

    const SUMMARY_CSV: &str = "\
FirstName,avg_rating
Alice,3.3
Bob,2.5
";

    fn store() -> RecordStore {
        RecordStore::from_parts(
            read_reviews(REVIEWS_CSV.as_bytes(), "reviews.csv").unwrap(),
            read_summary(SUMMARY_CSV.as_bytes(), "summary.csv").unwrap(),
        )
    }

    #[test]
    fn every_counting_view_sums_to_filtered_input() {
        let store = store();
        let selector = CustomerSelector::Customer("Alice".into());
        let report = Pipeline::new().run(&store, &selector);
        let filtered = 3;
        assert_eq!(report.trend.len(), filtered);
        let sums = [
            report.monthly_sentiment.iter().map(|r| r.count).sum::<usize>(),
            report.suggestion_frequency.iter().map(|r| r.count).sum::<usize>(),
            report.rating_distribution.iter().map(|r| r.count).sum::<usize>(),
            report.cross_tab.iter().map(|r| r.count).sum::<usize>(),
        ];
        assert_eq!(sums, [filtered; 4]);
    }

    #[test]
    fn identical_runs_are_byte_identical() {
        let store = store();
        let selector = CustomerSelector::All;
        let pipeline = Pipeline::new();
        let first = serde_json::to_string(&pipeline.run(&store, &selector)).unwrap();
        let second = serde_json::to_string(&pipeline.run(&store, &selector)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_customer_is_empty_everywhere_not_an_error() {
        let store = store();
        let report = Pipeline::new().run(&store, &CustomerSelector::Customer("Zed".into()));
        assert!(report.trend.is_empty());
        assert!(report.monthly_sentiment.is_empty());
        assert!(report.suggestion_frequency.is_empty());
        assert!(report.rating_distribution.is_empty());
        assert!(report.cross_tab.is_empty());
        assert!(report.summary.rows.is_empty());
        assert_eq!(report.summary.columns, vec!["FirstName", "avg_rating"]);
    }

    #[test]
    fn summary_is_scoped_to_the_selector() {
        let store = store();
        let report = Pipeline::new().run(&store, &CustomerSelector::Customer("Bob".into()));
        assert_eq!(report.summary.rows.len(), 1);
        assert_eq!(report.summary.rows[0].customer_name, "Bob");
    }

    #[test]
    fn trend_is_chronological_across_customers() {
        let store = store();
        let report = Pipeline::new().run(&store, &CustomerSelector::All);
        assert!(report.trend.windows(2).all(|w| w[0].date <= w[1].date));
    }
}
