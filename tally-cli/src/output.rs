use anyhow::{Context, Result};
use tally_core::{ImportSummary, ParsedEntry};

use crate::config::OutputFormat;

pub fn render(entries: &[ParsedEntry], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(entries).context("serialize entries"),
        OutputFormat::Table => Ok(table(entries)),
        OutputFormat::Summary => Ok(summary(&ImportSummary::from_entries(entries))),
    }
}

fn table(entries: &[ParsedEntry]) -> String {
    let mut out = String::new();
    for e in entries {
        let line = match e {
            ParsedEntry::Account(a) => format!(
                "{} | {:<11} | {:>12.2} | {} ({:?}/{:?})",
                a.date, "Account", a.value, a.name, a.wealth_type, a.wealth_category
            ),
            other => {
                // Every non-account variant carries a transaction
                let Some(t) = other.transaction() else { continue };
                format!(
                    "{} | {:<11} | {:>12.2} | {} [{} / {}]",
                    t.date,
                    format!("{:?}", other.entry_type()),
                    t.amount,
                    t.merchant_or_source,
                    t.bucket.as_str(),
                    t.sub_category
                )
            }
        };
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&summary(&ImportSummary::from_entries(entries)));
    out
}

fn summary(s: &ImportSummary) -> String {
    let headline = s
        .message()
        .unwrap_or_else(|| "No importable data found".to_string());
    format!(
        "{}\n  expenses: {}  incomes: {}  transfers: {}  bill payments: {}  accounts: {}",
        headline, s.expenses, s.incomes, s.transfers, s.bill_payments, s.accounts
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tally_core::{Bucket, Transaction};

    fn entries() -> Vec<ParsedEntry> {
        let d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        vec![ParsedEntry::Expense(Transaction::new(
            500.0,
            "Zomato order",
            d,
            Bucket::Wants,
            "Zomato",
            "raw",
        ))]
    }

    #[test]
    fn test_table_lines() {
        let out = render(&entries(), OutputFormat::Table).unwrap();
        let first = out.lines().next().unwrap();
        assert!(first.starts_with("2024-01-01 | Expense"));
        assert!(first.contains("500.00"));
        assert!(first.contains("[Wants / Zomato]"));
        assert!(out.contains("Imported 1 transactions"));
    }

    #[test]
    fn test_summary_of_nothing() {
        let out = render(&[], OutputFormat::Summary).unwrap();
        assert!(out.starts_with("No importable data found"));
    }

    #[test]
    fn test_json_is_array() {
        let out = render(&entries(), OutputFormat::Json).unwrap();
        assert!(out.trim_start().starts_with('['));
        assert!(out.contains("\"entryType\": \"Expense\""));
    }
}
