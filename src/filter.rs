// Customer scoping for both source tables
use crate::model::{CustomerSelector, Review, SummaryTable};

/// Narrows a review collection to the selected customer, preserving the
/// original relative order. `All` passes everything through; zero matches
/// is a legal empty result, not an error.
pub fn filter_reviews(reviews: &[Review], selector: &CustomerSelector) -> Vec<Review> {
    reviews
        .iter()
        .filter(|r| selector.matches(&r.customer_name))
        .cloned()
        .collect()
}

/// Same contract over the summary table. Column order is kept so the
/// renderer can show the table exactly as loaded.
pub fn filter_summary(table: &SummaryTable, selector: &CustomerSelector) -> SummaryTable {
    SummaryTable {
        columns: table.columns.clone(),
        rows: table
            .rows
            .iter()
            .filter(|r| selector.matches(&r.customer_name))
            .cloned()
            .collect(),
    }
}
