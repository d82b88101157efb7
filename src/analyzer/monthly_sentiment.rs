use crate::model::{Review, Sentiment};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Count of one sentiment within one calendar month. The month is keyed by
/// its last day, matching the month-end bucket boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySentimentRow {
    pub month: NaiveDate,
    pub sentiment: Sentiment,
    pub count: usize,
}

/// Buckets reviews by calendar month and sentiment. Output is ordered by
/// ascending month, then by the canonical sentiment order within a month.
/// Counts always sum to the input size.
pub fn monthly_sentiment_counts(reviews: &[Review]) -> Vec<MonthlySentimentRow> {
    let mut groups: BTreeMap<(NaiveDate, Sentiment), usize> = BTreeMap::new();
    for review in reviews {
        let bucket = month_end(review.date.date_naive());
        *groups.entry((bucket, review.sentiment.clone())).or_insert(0) += 1;
    }
    groups
        .into_iter()
        .map(|((month, sentiment), count)| MonthlySentimentRow { month, sentiment, count })
        .collect()
}

/// Last day of the month `date` falls in.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = (date.year(), date.month());
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    // valid by construction: month arithmetic stays in range
    first_of_next.and_then(|d| d.pred_opt()).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn review(customer: &str, year: i32, month: u32, day: u32, sentiment: Sentiment) -> Review {
        Review {
            customer_name: customer.to_string(),
            date: Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).unwrap(),
            rating: 4.0,
            score: 0.5,
            sentiment,
            suggestion: "none".to_string(),
            review_text: String::new(),
        }
    }

    #[test]
    fn month_end_boundaries() {
        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        assert_eq!(month_end(d(2024, 1, 15)), d(2024, 1, 31));
        assert_eq!(month_end(d(2024, 2, 1)), d(2024, 2, 29));
        assert_eq!(month_end(d(2023, 12, 31)), d(2023, 12, 31));
    }

    #[test]
    fn alice_same_month_two_rows() {
        let reviews = vec![
            review("Alice", 2024, 3, 2, Sentiment::Positive),
            review("Alice", 2024, 3, 14, Sentiment::Positive),
            review("Alice", 2024, 3, 28, Sentiment::Negative),
        ];
        let rows = monthly_sentiment_counts(&reviews);
        let march_end = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        assert_eq!(
            rows,
            vec![
                MonthlySentimentRow { month: march_end, sentiment: Sentiment::Positive, count: 2 },
                MonthlySentimentRow { month: march_end, sentiment: Sentiment::Negative, count: 1 },
            ]
        );
    }

    #[test]
    fn months_are_ascending_and_counts_sum_to_input() {
        let reviews = vec![
            review("a", 2024, 5, 1, Sentiment::Neutral),
            review("b", 2024, 1, 9, Sentiment::Positive),
            review("c", 2024, 5, 30, Sentiment::Neutral),
            review("d", 2024, 3, 15, Sentiment::Negative),
        ];
        let rows = monthly_sentiment_counts(&reviews);
        assert!(rows.windows(2).all(|w| w[0].month <= w[1].month));
        let total: usize = rows.iter().map(|r| r.count).sum();
        assert_eq!(total, reviews.len());
    }

    #[test]
    fn empty_input_empty_output() {
        assert!(monthly_sentiment_counts(&[]).is_empty());
    }
}
