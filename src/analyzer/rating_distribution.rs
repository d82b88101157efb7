use crate::model::{Review, Sentiment};
use serde::Serialize;
use std::collections::BTreeMap;

pub const DEFAULT_BINS: usize = 10;

/// Count of one sentiment within one rating interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingBinRow {
    pub lower: f64,
    pub upper: f64,
    pub sentiment: Sentiment,
    pub count: usize,
}

/// Equal-width rating histogram split by sentiment.
///
/// Bins are half-open `[lower, upper)` with a closed final edge: a rating on
/// an interior boundary counts in the bin it is the lower edge of, and the
/// domain maximum counts in the last bin. The range is observed from the data
/// unless declared up front; ratings outside a declared range are clamped
/// into the edge bins so counts still sum to the input size.
#[derive(Debug, Clone)]
pub struct RatingBinner {
    bins: usize,
    range: Option<(f64, f64)>,
}

impl Default for RatingBinner {
    fn default() -> Self {
        Self { bins: DEFAULT_BINS, range: None }
    }
}

impl RatingBinner {
    pub fn new(bins: usize, range: Option<(f64, f64)>) -> Self {
        Self { bins: bins.max(1), range }
    }

    pub fn bin(&self, reviews: &[Review]) -> Vec<RatingBinRow> {
        let Some((min, max)) = self.domain(reviews) else {
            return Vec::new();
        };

        if max <= min {
            // degenerate domain collapses to a single bin
            let mut groups: BTreeMap<Sentiment, usize> = BTreeMap::new();
            for review in reviews {
                *groups.entry(review.sentiment.clone()).or_insert(0) += 1;
            }
            return groups
                .into_iter()
                .map(|(sentiment, count)| RatingBinRow { lower: min, upper: max, sentiment, count })
                .collect();
        }

        let width = (max - min) / self.bins as f64;
        let mut groups: Vec<BTreeMap<Sentiment, usize>> = vec![BTreeMap::new(); self.bins];
        for review in reviews {
            let clamped = review.rating.clamp(min, max);
            let index = (((clamped - min) / width) as usize).min(self.bins - 1);
            *groups[index].entry(review.sentiment.clone()).or_insert(0) += 1;
        }

        let mut rows = Vec::new();
        for (i, sentiments) in groups.into_iter().enumerate() {
            let lower = min + i as f64 * width;
            let upper = if i + 1 == self.bins { max } else { min + (i + 1) as f64 * width };
            for (sentiment, count) in sentiments {
                rows.push(RatingBinRow { lower, upper, sentiment, count });
            }
        }
        rows
    }

    fn domain(&self, reviews: &[Review]) -> Option<(f64, f64)> {
        if let Some(range) = self.range {
            return Some(range);
        }
        reviews.iter().fold(None, |acc, r| match acc {
            None => Some((r.rating, r.rating)),
            Some((lo, hi)) => Some((lo.min(r.rating), hi.max(r.rating))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn review(rating: f64, sentiment: Sentiment) -> Review {
        Review {
            customer_name: "x".to_string(),
            date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            rating,
            score: 0.0,
            sentiment,
            suggestion: "none".to_string(),
            review_text: String::new(),
        }
    }

    #[test]
    fn boundary_value_is_lower_edge_of_its_bin() {
        // domain [0, 10], 10 bins of width 1; rating 3.0 sits on the 3..4 edge
        let binner = RatingBinner::new(10, Some((0.0, 10.0)));
        let rows = binner.bin(&[review(3.0, Sentiment::Neutral)]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].lower, 3.0);
        assert_eq!(rows[0].upper, 4.0);
    }

    #[test]
    fn domain_maximum_lands_in_last_bin() {
        let binner = RatingBinner::new(10, Some((0.0, 10.0)));
        let rows = binner.bin(&[review(10.0, Sentiment::Positive)]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].lower, 9.0);
        assert_eq!(rows[0].upper, 10.0);
    }

    #[test]
    fn counts_sum_to_input_size() {
        let reviews = vec![
            review(1.0, Sentiment::Negative),
            review(2.5, Sentiment::Neutral),
            review(4.0, Sentiment::Positive),
            review(5.0, Sentiment::Positive),
            review(5.0, Sentiment::Negative),
        ];
        let rows = RatingBinner::default().bin(&reviews);
        let total: usize = rows.iter().map(|r| r.count).sum();
        assert_eq!(total, reviews.len());
    }

    #[test]
    fn identical_ratings_collapse_to_one_bin() {
        let reviews = vec![review(4.0, Sentiment::Positive), review(4.0, Sentiment::Negative)];
        let rows = RatingBinner::default().bin(&reviews);
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.lower == 4.0 && r.upper == 4.0));
        let total: usize = rows.iter().map(|r| r.count).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn empty_input_empty_output() {
        assert!(RatingBinner::default().bin(&[]).is_empty());
    }
}
