//! Ordered keyword rules for statement text.
//!
//! Each table is a list of `(pattern, outcome)` pairs. Patterns are
//! case-insensitive regex fragments; the first rule whose pattern matches
//! decides the outcome. All matching goes through [`first_match`].

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use tally_core::{IncomeType, WealthCategory, WealthType};

/// Non-spending money movement detected from description or type text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    BillPayment,
    Transfer,
}

struct Rule<T> {
    re: Regex,
    outcome: T,
}

fn compile<T: Copy>(table: &[(&str, T)]) -> Vec<Rule<T>> {
    table
        .iter()
        .filter_map(|&(pattern, outcome)| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .ok()
                .map(|re| Rule { re, outcome })
        })
        .collect()
}

/// First outcome whose pattern matches any of `texts`, in rule order.
fn first_match<T: Copy>(rules: &[Rule<T>], texts: &[&str]) -> Option<T> {
    rules
        .iter()
        .find(|r| texts.iter().any(|t| r.re.is_match(t)))
        .map(|r| r.outcome)
}

const MOVEMENT_RULES: &[(&str, Movement)] = &[
    // Bill payments win over transfers ("card payment transfer" is a bill payment)
    (r"credit card payment", Movement::BillPayment),
    (r"\bcc payment", Movement::BillPayment),
    (r"\bcc bill", Movement::BillPayment),
    (r"card payment", Movement::BillPayment),
    (r"card settlement", Movement::BillPayment),
    (r"card bill", Movement::BillPayment),
    (r"bill ?desk", Movement::BillPayment),
    (r"\btransfer", Movement::Transfer),
    (r"\bremit", Movement::Transfer),
    (r"\binternal\b", Movement::Transfer),
    (r"\bself\b", Movement::Transfer),
    (r"\bto a/c", Movement::Transfer),
    (r"\bfrom a/c", Movement::Transfer),
    (r"linked account", Movement::Transfer),
    (r"own account", Movement::Transfer),
];

const RECEIVED_RULES: &[(&str, ())] = &[
    (r"\breceived\b", ()),
    (r"\bcredited\b", ()),
    (r"\bdeposited\b", ()),
    (r"\bcr\b", ()),
    (r"\badded\b", ()),
    (r"\brefund(ed)?\b", ()),
    (r"\binward\b", ()),
    (r"\bsalary\b", ()),
    (r"\bfreelance\b", ()),
    // A type column holding just "Credit"
    (r"^\s*credit\s*$", ()),
];

const INCOME_TYPE_RULES: &[(&str, IncomeType)] = &[
    (r"\bsalary\b", IncomeType::Salary),
    (r"\bpayroll\b", IncomeType::Salary),
    (r"\bfreelanc", IncomeType::Freelance),
    (r"\bconsult", IncomeType::Freelance),
    (r"\brefund", IncomeType::Refund),
    (r"\bcashback\b", IncomeType::Refund),
    (r"\breversal\b", IncomeType::Refund),
    (r"\binterest\b", IncomeType::Interest),
    (r"\bdividend", IncomeType::Interest),
];

const ACCOUNT_MARKER_RULES: &[(&str, ())] = &[("account", ()), ("asset", ()), ("liability", ())];

const LIABILITY_RULES: &[(&str, WealthCategory)] = &[
    (r"loan|\bemi\b", WealthCategory::Loan),
    (r"debt|card", WealthCategory::CreditCard),
];

const ASSET_RULES: &[(&str, WealthCategory)] = &[
    (r"mutual|fund|\bsip\b", WealthCategory::MutualFund),
    (r"stock|equity|share", WealthCategory::Stocks),
    (r"\bfd\b|fixed deposit", WealthCategory::FixedDeposit),
];

static MOVEMENT: LazyLock<Vec<Rule<Movement>>> = LazyLock::new(|| compile(MOVEMENT_RULES));
static RECEIVED: LazyLock<Vec<Rule<()>>> = LazyLock::new(|| compile(RECEIVED_RULES));
static INCOME_TYPE: LazyLock<Vec<Rule<IncomeType>>> = LazyLock::new(|| compile(INCOME_TYPE_RULES));
static ACCOUNT_MARKER: LazyLock<Vec<Rule<()>>> = LazyLock::new(|| compile(ACCOUNT_MARKER_RULES));
static LIABILITY: LazyLock<Vec<Rule<WealthCategory>>> = LazyLock::new(|| compile(LIABILITY_RULES));
static ASSET: LazyLock<Vec<Rule<WealthCategory>>> = LazyLock::new(|| compile(ASSET_RULES));

/// Bill payment or transfer, checking every text against one rule before moving on.
pub fn classify_movement(texts: &[&str]) -> Option<Movement> {
    first_match(&MOVEMENT, texts)
}

pub fn is_bill_payment(text: &str) -> bool {
    classify_movement(&[text]) == Some(Movement::BillPayment)
}

/// Text that marks money coming in (received, credited, salary, ...)
pub fn is_received(texts: &[&str]) -> bool {
    first_match(&RECEIVED, texts).is_some()
}

pub fn income_type(text: &str) -> IncomeType {
    first_match(&INCOME_TYPE, &[text]).unwrap_or(IncomeType::Other)
}

/// Type text that marks a row as a balance snapshot rather than a transaction
pub fn is_account_marker(type_text: &str) -> bool {
    first_match(&ACCOUNT_MARKER, &[type_text]).is_some()
}

/// Classify an account snapshot from its type and description text.
pub fn wealth_class(type_text: &str, description: &str) -> (WealthType, WealthCategory) {
    let texts = [type_text, description];
    match first_match(&LIABILITY, &texts) {
        Some(category) => (WealthType::Liability, category),
        None => (
            WealthType::Investment,
            first_match(&ASSET, &texts).unwrap_or(WealthCategory::Savings),
        ),
    }
}
