// Core structs: Review, SummaryTable, selectors, errors
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// One customer review event, fully validated at load time.
#[derive(Debug, Clone)]
pub struct Review {
    pub customer_name: String,
    pub date: DateTime<Utc>,
    pub rating: f64,
    pub score: f64,
    pub sentiment: Sentiment,
    pub suggestion: String,
    pub review_text: String,
}

/// Closed sentiment enumeration. Labels outside the closed set are kept
/// verbatim in `Other` and flagged with a warning at load time, never
/// coerced or dropped.
///
/// The derived variant order is the deterministic sentiment order used by
/// every component that sorts by sentiment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Other(String),
}

impl Sentiment {
    pub fn parse(label: &str) -> Sentiment {
        let trimmed = label.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            "neutral" => Sentiment::Neutral,
            _ => Sentiment::Other(trimmed.to_string()),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Sentiment::Other(_))
    }

    pub fn as_label(&self) -> &str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Other(label) => label,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_label())
    }
}

impl Serialize for Sentiment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_label())
    }
}

/// One row of the precomputed summary table. Everything beyond the customer
/// name is opaque to the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub customer_name: String,
    pub values: Vec<String>,
}

/// Summary rows plus the source column order, so a renderer can reproduce
/// the table exactly as loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTable {
    pub columns: Vec<String>,
    pub rows: Vec<SummaryRow>,
}

/// Customer scoping applied uniformly across the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CustomerSelector {
    All,
    Customer(String),
}

impl CustomerSelector {
    pub fn matches(&self, customer_name: &str) -> bool {
        match self {
            CustomerSelector::All => true,
            CustomerSelector::Customer(name) => name == customer_name,
        }
    }
}

impl From<Option<String>> for CustomerSelector {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(name) => CustomerSelector::Customer(name),
            None => CustomerSelector::All,
        }
    }
}

/// Fatal load-time failures. Analysis never starts once one of these is hit.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed csv in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("{path}: missing required column `{column}`")]
    MissingColumn { path: String, column: String },
    #[error("{path}, row {row}: {source}")]
    Parse {
        path: String,
        row: usize,
        #[source]
        source: ParseError,
    },
}

/// A single field that failed to parse. The whole table load fails rather
/// than silently dropping the row.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unparseable date `{0}`")]
    Date(String),
    #[error("unparseable number `{value}` in column `{column}`")]
    Number { column: String, value: String },
    #[error("empty value in column `{0}`")]
    Empty(String),
}
