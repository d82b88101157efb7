// Thin text renderer for the analysis report, plus the published color map.
// All data-shape logic lives in the pipeline; this only formats rows.
use crate::model::{CustomerSelector, Sentiment};
use crate::pipeline::AnalysisReport;
use std::fmt::Write;

/// Fixed sentiment-to-color lookup published for renderers, kept exactly as
/// shipped in the upstream dashboard.
pub const SENTIMENT_COLORS: [(&str, &str); 3] =
    [("positive", "blue"), ("negative", "green"), ("neutral", "red")];

pub fn color_for(sentiment: &Sentiment) -> Option<&'static str> {
    SENTIMENT_COLORS
        .iter()
        .find(|(label, _)| *label == sentiment.as_label())
        .map(|(_, color)| *color)
}

pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let selected = match &report.selector {
        CustomerSelector::All => "All",
        CustomerSelector::Customer(name) => name.as_str(),
    };
    let _ = writeln!(out, "Customer Review Analytics — selected customer: {selected}");

    let _ = writeln!(out, "\n1. Customer Sentiment Trend Over Time");
    render_trend(&mut out, report);

    let _ = writeln!(out, "\n2. Monthly Sentiment Summary");
    for row in &report.monthly_sentiment {
        let _ = writeln!(out, "  {}  {:<8}  {}", row.month, row.sentiment, row.count);
    }

    let _ = writeln!(out, "\n3. Suggestions Frequency");
    for row in &report.suggestion_frequency {
        let _ = writeln!(out, "  {:<30}  {}", row.suggestion, row.count);
    }

    let _ = writeln!(out, "\n4. Rating Distribution");
    for row in &report.rating_distribution {
        let _ = writeln!(
            out,
            "  [{:.2}, {:.2}]  {:<8}  {}",
            row.lower, row.upper, row.sentiment, row.count
        );
    }

    let _ = writeln!(out, "\n5. Relation Between Sentiment and Suggestions");
    for row in &report.cross_tab {
        let _ = writeln!(out, "  {:<8}  {:<30}  {}", row.sentiment, row.suggestion, row.count);
    }

    let _ = writeln!(out, "\nOverall sentiment");
    let _ = writeln!(out, "  {}", report.summary.columns.join(", "));
    for row in &report.summary.rows {
        let _ = writeln!(out, "  {}", row.values.join(", "));
    }

    out
}

/// One series per customer when all customers are selected, mirroring the
/// per-customer coloring of the source chart; a single flat series otherwise.
fn render_trend(out: &mut String, report: &AnalysisReport) {
    if report.selector == CustomerSelector::All {
        let mut customers: Vec<&str> = Vec::new();
        for point in &report.trend {
            if !customers.contains(&point.customer_name.as_str()) {
                customers.push(point.customer_name.as_str());
            }
        }
        for customer in customers {
            let _ = writeln!(out, "  {customer}:");
            for point in report.trend.iter().filter(|p| p.customer_name == customer) {
                let _ = writeln!(
                    out,
                    "    {}  score {:+.2}  {}",
                    point.date.format("%Y-%m-%d"),
                    point.score,
                    point.sentiment
                );
            }
        }
    } else {
        for point in &report.trend {
            let _ = writeln!(
                out,
                "  {}  score {:+.2}  {}",
                point.date.format("%Y-%m-%d"),
                point.score,
                point.sentiment
            );
        }
    }
}
