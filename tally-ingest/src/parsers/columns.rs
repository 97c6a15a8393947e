//! Column role resolution from a header row.

/// Header synonyms per role, matched as substrings of the uppercased header
const DATE: &[&str] = &["DATE", "TIMESTAMP", "TIME", "TXN DATE", "PERIOD"];
const DESCRIPTION: &[&str] = &[
    "PLACE",
    "MERCHANT",
    "DESCRIPTION",
    "NOTE",
    "PAYEE",
    "PARTICULAR",
    "NARRATION",
    "REMARKS",
    "DESC",
    "ACCOUNT NAME",
    "DETAILS",
];
const AMOUNT: &[&str] = &["AMOUNT", "VALUE", "TOTAL", "TRANSACTION AMT", "SUM"];
const BALANCE: &[&str] = &["BALANCE", "BAL", "CURRENT BAL", "OUTSTANDING", "AVAILABLE"];
const KIND: &[&str] = &["DR/CR", "TYPE", "MODE", "TRANSACTION TYPE"];
const ACCOUNT: &[&str] = &["ACCOUNT", "BANK", "SOURCE", "ACC"];

const DEBIT_EXACT: &[&str] = &["DEBIT", "DR"];
const DEBIT_PARTIAL: &[&str] = &["WITHDRAW", "OUT"];
const CREDIT_EXACT: &[&str] = &["CREDIT", "CR"];
const CREDIT_PARTIAL: &[&str] = &["DEPOSIT", "IN"];

/// Column index per role; `None` when the header has no such column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: Option<usize>,
    pub description: Option<usize>,
    pub amount: Option<usize>,
    pub balance: Option<usize>,
    pub debit: Option<usize>,
    pub credit: Option<usize>,
    pub kind: Option<usize>,
    pub account: Option<usize>,
}

impl ColumnMap {
    pub fn resolve(header: &[String]) -> Self {
        let upper: Vec<String> = header.iter().map(|h| h.trim().to_uppercase()).collect();

        Self {
            date: find_partial(&upper, DATE),
            description: find_partial(&upper, DESCRIPTION),
            amount: find_partial(&upper, AMOUNT),
            balance: find_partial(&upper, BALANCE),
            debit: find_exact(&upper, DEBIT_EXACT).or_else(|| find_partial(&upper, DEBIT_PARTIAL)),
            credit: find_exact(&upper, CREDIT_EXACT)
                .or_else(|| find_partial(&upper, CREDIT_PARTIAL)),
            kind: find_partial(&upper, KIND),
            account: find_partial(&upper, ACCOUNT),
        }
    }

    /// Separate debit and credit columns, both present
    pub fn split_amounts(&self) -> Option<(usize, usize)> {
        self.debit.zip(self.credit)
    }

    /// True when the magnitude is read from a balance column because there is no amount column
    pub fn amount_from_balance(&self) -> bool {
        self.split_amounts().is_none() && self.amount.is_none() && self.balance.is_some()
    }
}

fn find_partial(upper: &[String], words: &[&str]) -> Option<usize> {
    upper
        .iter()
        .position(|h| words.iter().any(|w| h.contains(w)))
}

fn find_exact(upper: &[String], words: &[&str]) -> Option<usize> {
    upper.iter().position(|h| words.contains(&h.as_str()))
}
