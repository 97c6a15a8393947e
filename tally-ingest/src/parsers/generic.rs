//! Fallback extraction for text with no recognizable header.
//!
//! Handles headerless CSV rows as well as freeform lines such as
//!   12/05/2024 Starbucks Coffee 450
//!   Paid Rs. 450 to Swiggy on 12/05/2024
//! A single-field row is split on whitespace before the date/amount search.
//!
//! There is no transfer detection here: SMS lines mention "to a/c" or
//! "from A/c" on ordinary spends and credits, so every row is an expense or
//! an income categorized through the taxonomy.

use anyhow::{Context, Result};
use tally_core::ParsedEntry;
use tally_finance::is_received;
use tracing::debug;

use super::{RowFacts, categorize_transaction, raw_row};
use crate::amount::magnitude;
use crate::date::{looks_like_date, normalize_date};
use crate::tokenizer::Row;
use crate::types::{Direction, ImportContext};

const DEFAULT_DESCRIPTION: &str = "Imported Item";

/// Currency markers glued to the figure in SMS text, e.g. "Rs.450"
const CURRENCY_PREFIXES: &[&str] = &["rs.", "rs", "inr", "₹"];

pub fn parse_generic(rows: &[Row], ctx: &ImportContext<'_>) -> Vec<ParsedEntry> {
    let mut out = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        match extract_row(row, ctx) {
            Ok(entry) => out.push(entry),
            Err(e) => debug!("skipping line {}: {:#}", i + 1, e),
        }
    }
    out
}

fn extract_row(row: &[String], ctx: &ImportContext<'_>) -> Result<ParsedEntry> {
    let freeform = row.len() == 1;
    let cells: Vec<&str> = if freeform {
        row[0].split_whitespace().map(strip_currency).collect()
    } else {
        row.iter().map(String::as_str).collect()
    };

    let date_idx = cells.iter().position(|c| looks_like_date(c));
    let date = date_idx
        .map(|i| normalize_date(cells[i], ctx.today))
        .unwrap_or(ctx.today);

    let (amount_idx, amount) = cells
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != date_idx)
        .find_map(|(i, c)| magnitude(c).map(|v| (i, v)))
        .context("no non-zero amount")?;

    let rest = cells
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != date_idx && *i != amount_idx)
        .map(|(_, c)| *c);

    let description = if freeform {
        rest.collect::<Vec<_>>().join(" ")
    } else {
        rest.into_iter()
            .find(|c| c.chars().count() > 2)
            .unwrap_or_default()
            .to_string()
    };
    let description = if description.chars().count() > 2 {
        description
    } else {
        DEFAULT_DESCRIPTION.to_string()
    };

    let direction = if is_received(&[description.as_str()]) {
        Direction::Income
    } else {
        Direction::Expense
    };

    Ok(categorize_transaction(
        RowFacts {
            direction,
            amount,
            description: &description,
            type_text: "",
            date,
            raw_content: raw_row(row),
            account_hint: None,
        },
        ctx,
    ))
}

fn strip_currency(token: &str) -> &str {
    let lower = token.to_ascii_lowercase();
    CURRENCY_PREFIXES
        .iter()
        .find(|p| lower.starts_with(**p) && token[p.len()..].starts_with(|c: char| c.is_ascii_digit()))
        .map_or(token, |p| &token[p.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tally_core::{Bucket, IncomeType, Taxonomy};

    use crate::tokenizer::tokenize;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 19).unwrap()
    }

    fn run(text: &str) -> Vec<ParsedEntry> {
        let taxonomy = Taxonomy::default();
        let ctx = ImportContext::new(&taxonomy, today());
        parse_generic(&tokenize(text), &ctx)
    }

    #[test]
    fn test_freeform_line() {
        let entries = run("12/05/2024 Starbucks Coffee 450");
        assert_eq!(entries.len(), 1);
        let ParsedEntry::Expense(t) = &entries[0] else {
            panic!("expected expense, got {:?}", entries[0]);
        };
        assert_eq!(t.date, NaiveDate::from_ymd_opt(2024, 5, 12).unwrap());
        assert_eq!(t.amount, 450.0);
        assert_eq!(t.merchant_or_source, "Starbucks Coffee");
        assert_eq!(t.bucket, Bucket::Wants);
        assert_eq!(t.sub_category, "Coffee");
    }

    #[test]
    fn test_headerless_csv_rows() {
        let entries = run("2024-02-01,Swiggy dinner,640\n2024-02-02,ok,Metro card recharge,120");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].transaction().unwrap().merchant_or_source, "Swiggy dinner");
        // "ok" is too short to be a description
        assert_eq!(entries[1].transaction().unwrap().merchant_or_source, "Metro card recharge");
    }

    #[test]
    fn test_received_line_is_income() {
        let entries = run("Received Rs 2500 from Rahul on 03-04-2024");
        let ParsedEntry::Income(t) = &entries[0] else {
            panic!("expected income, got {:?}", entries[0]);
        };
        assert_eq!(t.amount, 2500.0);
        assert_eq!(t.date, NaiveDate::from_ymd_opt(2024, 4, 3).unwrap());
    }

    #[test]
    fn test_missing_date_defaults_to_today() {
        let entries = run("Pizza,350");
        assert_eq!(entries[0].date(), today());
    }

    #[test]
    fn test_missing_description_defaults() {
        let entries = run("2024-01-01,99");
        assert_eq!(entries[0].transaction().unwrap().merchant_or_source, "Imported Item");
    }

    #[test]
    fn test_lines_without_amount_are_dropped() {
        let entries = run("Hello there\n2024-01-01,Nothing to see\n2024-01-02,Tea,30");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].magnitude(), 30.0);
    }

    #[test]
    fn test_account_mentions_keep_direction() {
        let entries = run("Salary Rs 50000 credited to a/c XX1234 on 01-05-2024");
        let ParsedEntry::Income(t) = &entries[0] else {
            panic!("expected income, got {:?}", entries[0]);
        };
        assert_eq!(t.amount, 50000.0);
        assert_eq!(t.income_type, Some(IncomeType::Salary));
        assert_eq!(t.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());

        let entries = run("Rs 450 debited from A/c XX1234 on 12-05-2024 at Swiggy");
        let ParsedEntry::Expense(t) = &entries[0] else {
            panic!("expected expense, got {:?}", entries[0]);
        };
        assert_eq!(t.amount, 450.0);
        assert_eq!(t.sub_category, "Swiggy");

        let entries = run("2024-01-05,Self transfer to HDFC,5000");
        assert!(matches!(&entries[0], ParsedEntry::Expense(t) if t.amount == 5000.0));
    }

    #[test]
    fn test_card_payment_line_is_expense() {
        let entries = run("12-05-2024 Card payment HDFC 9000");
        let ParsedEntry::Expense(t) = &entries[0] else {
            panic!("expected expense, got {:?}", entries[0]);
        };
        assert_eq!(t.amount, 9000.0);
        assert_eq!(t.bucket, Bucket::Uncategorized);
        assert_eq!(t.sub_category, "Bill Payment");
    }

    #[test]
    fn test_currency_prefix_glued_to_amount() {
        let entries = run("Paid Rs.450 to Swiggy on 12/05/2024");
        assert_eq!(entries[0].magnitude(), 450.0);
        assert_eq!(entries[0].transaction().unwrap().merchant_or_source, "Paid to Swiggy on");

        let entries = run("INR1200 spent at Metro");
        assert_eq!(entries[0].magnitude(), 1200.0);
    }

    #[test]
    fn test_strip_currency() {
        assert_eq!(strip_currency("Rs.450"), "450");
        assert_eq!(strip_currency("rs450"), "450");
        assert_eq!(strip_currency("₹99"), "99");
        assert_eq!(strip_currency("Rs."), "Rs.");
        assert_eq!(strip_currency("Rstu"), "Rstu");
    }
}
