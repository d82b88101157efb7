use crate::model::{Review, Sentiment};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossTabRow {
    pub sentiment: Sentiment,
    pub suggestion: String,
    pub count: usize,
}

/// Counts (sentiment, suggestion) co-occurrences. Output is ordered by the
/// canonical sentiment order, then by descending count within a sentiment;
/// equal counts keep first-seen order. Counts always sum to the input size.
pub fn sentiment_suggestion_counts(reviews: &[Review]) -> Vec<CrossTabRow> {
    let mut index: HashMap<(Sentiment, &str), usize> = HashMap::new();
    let mut rows: Vec<CrossTabRow> = Vec::new();
    for review in reviews {
        let key = (review.sentiment.clone(), review.suggestion.as_str());
        match index.get(&key) {
            Some(&i) => rows[i].count += 1,
            None => {
                index.insert(key, rows.len());
                rows.push(CrossTabRow {
                    sentiment: review.sentiment.clone(),
                    suggestion: review.suggestion.clone(),
                    count: 1,
                });
            }
        }
    }
    // stable sort keeps first-seen order among equal counts
    rows.sort_by(|a, b| a.sentiment.cmp(&b.sentiment).then(b.count.cmp(&a.count)));
    rows
}
