//! Output formatting for ranking results (table, JSON, markdown).

use crate::amazon::models::{DeliveryEstimate, RankingResult};
use crate::config::OutputFormat;

/// Formats a ranking result for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats the three winners.
    pub fn format_result(&self, result: &RankingResult) -> String {
        match self.format {
            OutputFormat::Json => self.json_result(result),
            OutputFormat::Table => self.table_result(result),
            OutputFormat::Markdown => self.markdown_result(result),
        }
    }

    // JSON formatting

    fn json_result(&self, result: &RankingResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    // Table formatting

    fn table_result(&self, result: &RankingResult) -> String {
        let mut lines = Vec::new();

        match &result.cheapest {
            Some(pick) => {
                lines.push("Cheapest Product:".to_string());
                lines.push(format!("\tTitle: {}", pick.title.as_deref().unwrap_or("N/A")));
                lines.push(format!("\tURL: {}", pick.url));
                lines.push(format!("\tPrice: ${:.2}", pick.price));
            }
            None => lines.push("Cheapest Product: None".to_string()),
        }

        match &result.highest_rated {
            Some(pick) => {
                lines.push("Highest Rated Product:".to_string());
                lines.push(format!("\tTitle: {}", pick.title.as_deref().unwrap_or("N/A")));
                lines.push(format!("\tURL: {}", pick.url));
                lines.push(format!("\tRating: {}", pick.rating));
            }
            None => lines.push("Highest Rated Product: None".to_string()),
        }

        match &result.soonest {
            Some(pick) => {
                lines.push("Soonest Available Product:".to_string());
                lines.push(format!("\tTitle: {}", pick.title.as_deref().unwrap_or("N/A")));
                lines.push(format!("\tURL: {}", pick.url));
                lines.push(format!("\tDate: {}", pick.estimate.date.format("%b %d")));
                if let Some(range) = Self::format_window(&pick.estimate) {
                    lines.push(format!("\tTime Range: {}", range));
                }
            }
            None => lines.push("Soonest Available Product: None".to_string()),
        }

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_result(&self, result: &RankingResult) -> String {
        let mut lines = Vec::new();

        lines.push("## Cheapest Product".to_string());
        match &result.cheapest {
            Some(pick) => {
                lines.push(format!("- **Title:** {}", pick.title.as_deref().unwrap_or("N/A")));
                lines.push(format!("- **URL:** [View on Amazon]({})", pick.url));
                lines.push(format!("- **Price:** ${:.2}", pick.price));
            }
            None => lines.push("None".to_string()),
        }

        lines.push(String::new());
        lines.push("## Highest Rated Product".to_string());
        match &result.highest_rated {
            Some(pick) => {
                lines.push(format!("- **Title:** {}", pick.title.as_deref().unwrap_or("N/A")));
                lines.push(format!("- **URL:** [View on Amazon]({})", pick.url));
                lines.push(format!("- **Rating:** {}", pick.rating));
            }
            None => lines.push("None".to_string()),
        }

        lines.push(String::new());
        lines.push("## Soonest Available Product".to_string());
        match &result.soonest {
            Some(pick) => {
                lines.push(format!("- **Title:** {}", pick.title.as_deref().unwrap_or("N/A")));
                lines.push(format!("- **URL:** [View on Amazon]({})", pick.url));
                lines.push(format!("- **Date:** {}", pick.estimate.date.format("%b %d")));
                if let Some(range) = Self::format_window(&pick.estimate) {
                    lines.push(format!("- **Time Range:** {}", range));
                }
            }
            None => lines.push("None".to_string()),
        }

        lines.join("\n")
    }

    /// Renders the time window as "05 AM - 10 AM", if present.
    fn format_window(estimate: &DeliveryEstimate) -> Option<String> {
        estimate
            .window
            .map(|w| format!("{} - {}", w.start.format("%I %p"), w.end.format("%I %p")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amazon::models::{DeliveryPick, PricedPick, RatedPick};
    use chrono::{NaiveDate, NaiveTime};

    fn make_result() -> RankingResult {
        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        RankingResult {
            cheapest: Some(PricedPick {
                title: Some("Budget Mouse".to_string()),
                url: "https://www.amazon.com/dp/B001".to_string(),
                price: 12.49,
            }),
            highest_rated: Some(RatedPick {
                title: Some("Premium Mouse".to_string()),
                url: "https://www.amazon.com/dp/B002".to_string(),
                rating: 4.8,
            }),
            soonest: Some(DeliveryPick {
                title: Some("Fast Mouse".to_string()),
                url: "https://www.amazon.com/dp/B003".to_string(),
                estimate: DeliveryEstimate::with_window(
                    date,
                    NaiveTime::from_hms_opt(5, 0, 0).unwrap(),
                    NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                ),
            }),
        }
    }

    #[test]
    fn test_table_all_winners() {
        let formatter = Formatter::new(OutputFormat::Table);
        let output = formatter.format_result(&make_result());

        assert!(output.contains("Cheapest Product:"));
        assert!(output.contains("\tTitle: Budget Mouse"));
        assert!(output.contains("\tPrice: $12.49"));
        assert!(output.contains("Highest Rated Product:"));
        assert!(output.contains("\tRating: 4.8"));
        assert!(output.contains("Soonest Available Product:"));
        assert!(output.contains("\tDate: Jul 01"));
        assert!(output.contains("\tTime Range: 05 AM - 10 AM"));
    }

    #[test]
    fn test_table_empty_result() {
        let formatter = Formatter::new(OutputFormat::Table);
        let output = formatter.format_result(&RankingResult::default());

        assert!(output.contains("Cheapest Product: None"));
        assert!(output.contains("Highest Rated Product: None"));
        assert!(output.contains("Soonest Available Product: None"));
    }

    #[test]
    fn test_table_no_window_omits_time_range() {
        let mut result = make_result();
        result.soonest.as_mut().unwrap().estimate.window = None;

        let formatter = Formatter::new(OutputFormat::Table);
        let output = formatter.format_result(&result);

        assert!(output.contains("\tDate: Jul 01"));
        assert!(!output.contains("Time Range"));
    }

    #[test]
    fn test_table_missing_title() {
        let mut result = make_result();
        result.cheapest.as_mut().unwrap().title = None;

        let formatter = Formatter::new(OutputFormat::Table);
        let output = formatter.format_result(&result);

        assert!(output.contains("\tTitle: N/A"));
    }

    #[test]
    fn test_table_pm_window() {
        let mut result = make_result();
        result.soonest.as_mut().unwrap().estimate = DeliveryEstimate::with_window(
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
        );

        let formatter = Formatter::new(OutputFormat::Table);
        let output = formatter.format_result(&result);

        assert!(output.contains("\tTime Range: 02 PM - 06 PM"));
    }

    #[test]
    fn test_json_result() {
        let formatter = Formatter::new(OutputFormat::Json);
        let output = formatter.format_result(&make_result());

        assert!(output.contains("Budget Mouse"));
        assert!(output.contains("12.49"));
        assert!(output.contains("4.8"));
        assert!(output.contains("2024-07-01"));

        // Must stay machine-parseable
        let parsed: RankingResult = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.cheapest.unwrap().price, 12.49);
    }

    #[test]
    fn test_json_empty_result() {
        let formatter = Formatter::new(OutputFormat::Json);
        let output = formatter.format_result(&RankingResult::default());

        let parsed: RankingResult = serde_json::from_str(&output).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_markdown_result() {
        let formatter = Formatter::new(OutputFormat::Markdown);
        let output = formatter.format_result(&make_result());

        assert!(output.contains("## Cheapest Product"));
        assert!(output.contains("- **Title:** Budget Mouse"));
        assert!(output.contains("- **Price:** $12.49"));
        assert!(output.contains("## Highest Rated Product"));
        assert!(output.contains("- **Rating:** 4.8"));
        assert!(output.contains("## Soonest Available Product"));
        assert!(output.contains("- **Date:** Jul 01"));
        assert!(output.contains("- **Time Range:** 05 AM - 10 AM"));
    }

    #[test]
    fn test_markdown_empty_result() {
        let formatter = Formatter::new(OutputFormat::Markdown);
        let output = formatter.format_result(&RankingResult::default());

        assert!(output.contains("## Cheapest Product"));
        assert!(output.contains("None"));
    }
}
