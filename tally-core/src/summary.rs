//! Count-based summary of an import, and the split into the two caller stores

use crate::entry::{AccountSnapshot, ParsedEntry};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub expenses: usize,
    pub incomes: usize,
    pub transfers: usize,
    pub bill_payments: usize,
    pub accounts: usize,
}

impl ImportSummary {
    pub fn from_entries(entries: &[ParsedEntry]) -> Self {
        let mut s = Self::default();
        for e in entries {
            match e {
                ParsedEntry::Expense(_) => s.expenses += 1,
                ParsedEntry::Income(_) => s.incomes += 1,
                ParsedEntry::Transfer(_) => s.transfers += 1,
                ParsedEntry::BillPayment(_) => s.bill_payments += 1,
                ParsedEntry::Account(_) => s.accounts += 1,
            }
        }
        s
    }

    pub fn transactions(&self) -> usize {
        self.expenses + self.incomes + self.transfers + self.bill_payments
    }

    pub fn total(&self) -> usize {
        self.transactions() + self.accounts
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// User-facing result line. `None` means nothing importable was found.
    pub fn message(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }
        let mut msg = format!("Imported {} transactions", self.transactions());
        if self.accounts > 0 {
            msg.push_str(&format!(" and {} account snapshots", self.accounts));
        }
        Some(msg)
    }
}

/// Separate transaction entries from account snapshots, preserving order.
pub fn split_entries(entries: Vec<ParsedEntry>) -> (Vec<ParsedEntry>, Vec<AccountSnapshot>) {
    let mut transactions = Vec::new();
    let mut accounts = Vec::new();
    for e in entries {
        match e {
            ParsedEntry::Account(a) => accounts.push(a),
            other => transactions.push(other),
        }
    }
    (transactions, accounts)
}
