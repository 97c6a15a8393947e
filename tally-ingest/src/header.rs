//! Header row detection.
//!
//! A row is a header when its joined, uppercased text names a date together
//! with a money column, or an account together with a balance/name/type column.

use crate::tokenizer::Row;

const DATE_MONEY: &[&str] = &["AMOUNT", "DEBIT", "CREDIT", "VALUE"];
const ACCOUNT_DETAIL: &[&str] = &["BAL", "NAME", "TYPE"];

pub fn is_header(row: &[String]) -> bool {
    let joined = row.join("|").to_uppercase();
    let has_any = |words: &[&str]| words.iter().any(|w| joined.contains(w));

    (joined.contains("DATE") && has_any(DATE_MONEY))
        || (joined.contains("ACCOUNT") && has_any(ACCOUNT_DETAIL))
}

/// Index of the first header-looking row, if any.
pub fn find_header_row(rows: &[Row]) -> Option<usize> {
    rows.iter().position(|r| is_header(r))
}
