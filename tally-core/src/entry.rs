//! Normalized records emitted by statement import

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level spending classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Bucket {
    Needs,
    Wants,
    Savings,
    Avoids,
    Uncategorized,
}

impl Bucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Needs => "Needs",
            Bucket::Wants => "Wants",
            Bucket::Savings => "Savings",
            Bucket::Avoids => "Avoids",
            Bucket::Uncategorized => "Uncategorized",
        }
    }
}

/// Discriminant of a [`ParsedEntry`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EntryType {
    Expense,
    Income,
    Transfer,
    Account,
    BillPayment,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IncomeType {
    Salary,
    Freelance,
    Refund,
    Interest,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WealthType {
    Investment,
    Liability,
}

/// Coarse classification of an account snapshot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WealthCategory {
    Savings,
    FixedDeposit,
    MutualFund,
    Stocks,
    CreditCard,
    Loan,
}

/// Money movement shared by the Expense, Income, Transfer and BillPayment variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Magnitude, always > 0. Direction lives in the variant.
    pub amount: f64,
    pub merchant_or_source: String,
    pub date: NaiveDate,
    pub bucket: Bucket,
    pub sub_category: String,
    /// The source row verbatim, kept for audit only
    pub raw_content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_type: Option<IncomeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_hint: Option<String>,
}

impl Transaction {
    /// Create a transaction with the "General" defaults applied to blank text.
    pub fn new(
        amount: f64,
        merchant_or_source: impl Into<String>,
        date: NaiveDate,
        bucket: Bucket,
        sub_category: impl Into<String>,
        raw_content: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            merchant_or_source: or_general(merchant_or_source.into()),
            date,
            bucket,
            sub_category: or_general(sub_category.into()),
            raw_content: raw_content.into(),
            income_type: None,
            account_hint: None,
        }
    }

    pub fn with_income_type(mut self, income_type: IncomeType) -> Self {
        self.income_type = Some(income_type);
        self
    }

    pub fn with_account_hint(mut self, hint: Option<String>) -> Self {
        self.account_hint = hint.filter(|h| !h.trim().is_empty());
        self
    }
}

fn or_general(s: String) -> String {
    if s.trim().is_empty() {
        "General".to_string()
    } else {
        s
    }
}

/// Point-in-time balance of an asset or liability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSnapshot {
    pub name: String,
    pub value: f64,
    pub wealth_type: WealthType,
    pub wealth_category: WealthCategory,
    pub date: NaiveDate,
}

/// One classified row of imported statement text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entryType")]
pub enum ParsedEntry {
    Expense(Transaction),
    Income(Transaction),
    Transfer(Transaction),
    BillPayment(Transaction),
    Account(AccountSnapshot),
}

impl ParsedEntry {
    pub fn entry_type(&self) -> EntryType {
        match self {
            ParsedEntry::Expense(_) => EntryType::Expense,
            ParsedEntry::Income(_) => EntryType::Income,
            ParsedEntry::Transfer(_) => EntryType::Transfer,
            ParsedEntry::BillPayment(_) => EntryType::BillPayment,
            ParsedEntry::Account(_) => EntryType::Account,
        }
    }

    /// The transaction payload, or `None` for account snapshots
    pub fn transaction(&self) -> Option<&Transaction> {
        match self {
            ParsedEntry::Expense(t)
            | ParsedEntry::Income(t)
            | ParsedEntry::Transfer(t)
            | ParsedEntry::BillPayment(t) => Some(t),
            ParsedEntry::Account(_) => None,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            ParsedEntry::Expense(t)
            | ParsedEntry::Income(t)
            | ParsedEntry::Transfer(t)
            | ParsedEntry::BillPayment(t) => t.date,
            ParsedEntry::Account(a) => a.date,
        }
    }

    /// Amount for transactions, value for account snapshots
    pub fn magnitude(&self) -> f64 {
        match self {
            ParsedEntry::Expense(t)
            | ParsedEntry::Income(t)
            | ParsedEntry::Transfer(t)
            | ParsedEntry::BillPayment(t) => t.amount,
            ParsedEntry::Account(a) => a.value,
        }
    }
}
