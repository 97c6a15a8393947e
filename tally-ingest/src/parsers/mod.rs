//! Row extractors: header-driven (`structured`) and heuristic (`generic`)

pub mod columns;
pub mod generic;
pub mod structured;

use chrono::NaiveDate;
use tally_core::{Bucket, ParsedEntry, Transaction};
use tally_finance::{Movement, classify_movement, income_type, resolve_category};

use crate::types::{Direction, ImportContext};

/// Facts pulled out of one row, before classification
pub(crate) struct RowFacts<'a> {
    pub direction: Direction,
    pub amount: f64,
    pub description: &'a str,
    pub type_text: &'a str,
    pub date: NaiveDate,
    pub raw_content: String,
    pub account_hint: Option<String>,
}

/// Turn row facts into a transaction entry.
/// Priority: bill payment > transfer > taxonomy category.
pub(crate) fn classify_transaction(facts: RowFacts<'_>, ctx: &ImportContext<'_>) -> ParsedEntry {
    let bucket = Bucket::Uncategorized;
    match classify_movement(&[facts.description, facts.type_text]) {
        Some(Movement::BillPayment) => {
            ParsedEntry::BillPayment(build_transaction(facts, bucket, "Bill Payment"))
        }
        Some(Movement::Transfer) => ParsedEntry::Transfer(build_transaction(facts, bucket, "Transfer")),
        None => categorize_transaction(facts, ctx),
    }
}

/// Expense or income by direction, categorized through the taxonomy only.
pub(crate) fn categorize_transaction(facts: RowFacts<'_>, ctx: &ImportContext<'_>) -> ParsedEntry {
    let cat = resolve_category(facts.description, ctx.taxonomy);
    let direction = facts.direction;
    let income = income_type(facts.description);
    let t = build_transaction(facts, cat.bucket, &cat.sub_category);
    match direction {
        Direction::Expense => ParsedEntry::Expense(t),
        Direction::Income => ParsedEntry::Income(t.with_income_type(income)),
    }
}

fn build_transaction(facts: RowFacts<'_>, bucket: Bucket, sub_category: &str) -> Transaction {
    Transaction::new(
        facts.amount,
        facts.description,
        facts.date,
        bucket,
        sub_category,
        facts.raw_content,
    )
    .with_account_hint(facts.account_hint)
}

/// Rejoin a row for `raw_content`.
pub(crate) fn raw_row(row: &[String]) -> String {
    row.join(" | ")
}
