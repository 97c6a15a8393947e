//! Header-driven extraction.
//!
//! Expected input after tokenizing, e.g.:
//!   Date,Description,Debit,Credit,Balance
//!   01-01-2024,Zomato order,500,0,12000
//!
//! Each data row is handled on its own. A row that cannot be turned into an
//! entry is logged and dropped; the rest of the batch carries on.

use anyhow::{Result, bail, ensure};
use tally_core::{AccountSnapshot, ParsedEntry};
use tally_finance::{is_account_marker, is_received, wealth_class};
use tracing::debug;

use super::columns::ColumnMap;
use super::{RowFacts, classify_transaction, raw_row};
use crate::amount::clean_amount;
use crate::date::normalize_date;
use crate::tokenizer::Row;
use crate::types::{Direction, ImportContext};

/// Extract entries from the rows following `header`.
pub fn parse_structured(header: &[String], rows: &[Row], ctx: &ImportContext<'_>) -> Vec<ParsedEntry> {
    let columns = ColumnMap::resolve(header);
    debug!(?columns, "resolved statement columns");

    let mut out = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        match extract_row(row, &columns, ctx) {
            Ok(entry) => out.push(entry),
            Err(e) => debug!("skipping data row {}: {:#}", i + 1, e),
        }
    }
    out
}

fn cell(row: &[String], idx: Option<usize>) -> &str {
    idx.and_then(|i| row.get(i))
        .map(String::as_str)
        .unwrap_or("")
}

fn extract_row(row: &[String], columns: &ColumnMap, ctx: &ImportContext<'_>) -> Result<ParsedEntry> {
    let description = cell(row, columns.description);
    let type_text = cell(row, columns.kind);

    let (amount, direction) = match columns.split_amounts() {
        Some((debit_col, credit_col)) => {
            let credit = clean_amount(cell(row, Some(credit_col))).abs();
            let debit = clean_amount(cell(row, Some(debit_col))).abs();
            if credit > 0.0 {
                (credit, Direction::Income)
            } else if debit > 0.0 {
                (debit, Direction::Expense)
            } else {
                bail!("debit and credit are both empty");
            }
        }
        None => {
            let amount = clean_amount(cell(row, columns.amount.or(columns.balance))).abs();
            let direction = if is_received(&[type_text, description]) {
                Direction::Income
            } else {
                Direction::Expense
            };
            (amount, direction)
        }
    };
    ensure!(amount > 0.0, "zero or unparseable amount");

    let date = normalize_date(cell(row, columns.date), ctx.today);
    let account_hint = Some(cell(row, columns.account))
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    if is_account_marker(type_text) || columns.amount_from_balance() {
        let (wealth_type, wealth_category) = wealth_class(type_text, description);
        let name = if !description.is_empty() {
            description.to_string()
        } else {
            account_hint.unwrap_or_else(|| "Imported Account".to_string())
        };
        return Ok(ParsedEntry::Account(AccountSnapshot {
            name,
            value: amount,
            wealth_type,
            wealth_category,
            date,
        }));
    }

    Ok(classify_transaction(
        RowFacts {
            direction,
            amount,
            description,
            type_text,
            date,
            raw_content: raw_row(row),
            account_hint,
        },
        ctx,
    ))
}
