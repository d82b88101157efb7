// CSV ingestion: reviews table and summary table, loaded once, validated up front
use crate::model::{LoadError, ParseError, Review, Sentiment, SummaryRow, SummaryTable};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use tracing::{info, warn};

/// Immutable holder for the two source tables. Built once per analysis
/// session; nothing in the pipeline mutates it afterwards.
pub struct RecordStore {
    reviews: Vec<Review>,
    summary: SummaryTable,
}

impl RecordStore {
    /// Loads both CSV sources, failing fast on any missing column or
    /// unparseable `Date`/`Rating`/`score` value.
    pub fn load(reviews_path: &str, summary_path: &str) -> Result<RecordStore, LoadError> {
        let reviews_file = open(reviews_path)?;
        let reviews = read_reviews(reviews_file, reviews_path)?;

        let summary_file = open(summary_path)?;
        let summary = read_summary(summary_file, summary_path)?;

        info!(
            "loaded {} reviews and {} summary rows",
            reviews.len(),
            summary.rows.len()
        );
        Ok(RecordStore { reviews, summary })
    }

    /// Builds a store from already-validated collections, for callers that
    /// load from somewhere other than CSV files.
    pub fn from_parts(reviews: Vec<Review>, summary: SummaryTable) -> RecordStore {
        RecordStore { reviews, summary }
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn summary(&self) -> &SummaryTable {
        &self.summary
    }
}

fn open(path: &str) -> Result<File, LoadError> {
    File::open(path).map_err(|e| LoadError::Unreadable { path: path.to_string(), source: e })
}

pub(crate) fn read_reviews<R: Read>(reader: R, path: &str) -> Result<Vec<Review>, LoadError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|e| LoadError::Csv { path: path.to_string(), source: e })?
        .clone();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| LoadError::MissingColumn {
                path: path.to_string(),
                column: name.to_string(),
            })
    };
    let c_name = column("FirstName")?;
    let c_date = column("Date")?;
    let c_rating = column("Rating")?;
    let c_score = column("score")?;
    let c_sentiment = column("sentiment")?;
    let c_suggestion = column("suggestions")?;
    let c_review = column("Review")?;

    let mut reviews = Vec::new();
    let mut warned_labels: HashSet<String> = HashSet::new();

    for (i, record) in rdr.records().enumerate() {
        let record =
            record.map_err(|e| LoadError::Csv { path: path.to_string(), source: e })?;
        // header occupies line 1
        let row = i + 2;
        let parse_err = |source: ParseError| LoadError::Parse {
            path: path.to_string(),
            row,
            source,
        };

        let customer_name = record.get(c_name).unwrap_or("").trim().to_string();
        if customer_name.is_empty() {
            return Err(parse_err(ParseError::Empty("FirstName".to_string())));
        }

        let date = parse_date(record.get(c_date).unwrap_or("")).map_err(parse_err)?;
        let rating =
            parse_number(record.get(c_rating).unwrap_or(""), "Rating").map_err(parse_err)?;
        let score =
            parse_number(record.get(c_score).unwrap_or(""), "score").map_err(parse_err)?;

        let sentiment = Sentiment::parse(record.get(c_sentiment).unwrap_or(""));
        if !sentiment.is_recognized() && warned_labels.insert(sentiment.as_label().to_string()) {
            warn!(
                "unrecognized sentiment `{}` in {} (first seen at row {})",
                sentiment.as_label(),
                path,
                row
            );
        }

        reviews.push(Review {
            customer_name,
            date,
            rating,
            score,
            sentiment,
            suggestion: record.get(c_suggestion).unwrap_or("").trim().to_string(),
            review_text: record.get(c_review).unwrap_or("").to_string(),
        });
    }

    Ok(reviews)
}

pub(crate) fn read_summary<R: Read>(reader: R, path: &str) -> Result<SummaryTable, LoadError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|e| LoadError::Csv { path: path.to_string(), source: e })?
        .clone();

    let c_name = headers
        .iter()
        .position(|h| h == "FirstName")
        .ok_or_else(|| LoadError::MissingColumn {
            path: path.to_string(),
            column: "FirstName".to_string(),
        })?;
    let columns: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record =
            record.map_err(|e| LoadError::Csv { path: path.to_string(), source: e })?;
        rows.push(SummaryRow {
            customer_name: record.get(c_name).unwrap_or("").trim().to_string(),
            values: record.iter().map(|v| v.to_string()).collect(),
        });
    }

    Ok(SummaryTable { columns, rows })
}

/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, or bare `YYYY-MM-DD`.
pub(crate) fn parse_date(raw: &str) -> Result<DateTime<Utc>, ParseError> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&dt));
    }
    if let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&d.and_time(NaiveTime::MIN)));
    }
    Err(ParseError::Date(trimmed.to_string()))
}

fn parse_number(raw: &str, column: &str) -> Result<f64, ParseError> {
    let trimmed = raw.trim();
    trimmed.parse::<f64>().map_err(|_| ParseError::Number {
        column: column.to_string(),
        value: trimmed.to_string(),
    })
}
