use crate::model::Review;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionCount {
    pub suggestion: String,
    pub count: usize,
}

/// Counts exact suggestion values. Output is ordered by descending count;
/// ties keep first-seen order. Counts always sum to the input size.
pub fn suggestion_frequency(reviews: &[Review]) -> Vec<SuggestionCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<SuggestionCount> = Vec::new();
    for review in reviews {
        match index.get(review.suggestion.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(review.suggestion.as_str(), counts.len());
                counts.push(SuggestionCount { suggestion: review.suggestion.clone(), count: 1 });
            }
        }
    }
    // stable sort keeps first-seen order among equal counts
    counts.sort_by_key(|c| Reverse(c.count));
    counts
}
