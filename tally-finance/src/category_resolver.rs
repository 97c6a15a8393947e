//! Map free-text descriptions to a (bucket, subcategory) pair using the
//! user's taxonomy.
//!
//! Matching is a plain substring test against subcategory names, first match
//! wins in taxonomy order. Reordering the taxonomy changes results.

use tally_core::{Bucket, Taxonomy};

use crate::rules::is_bill_payment;

/// Result of categorization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Categorized {
    pub bucket: Bucket,
    pub sub_category: String,
}

impl Categorized {
    pub fn uncategorized(sub_category: &str) -> Self {
        Self {
            bucket: Bucket::Uncategorized,
            sub_category: sub_category.to_string(),
        }
    }
}

/// Categorize a description against `taxonomy`.
/// Priority: bill payment > first taxonomy subcategory contained in the text > General.
pub fn resolve_category(text: &str, taxonomy: &Taxonomy) -> Categorized {
    if is_bill_payment(text) {
        return Categorized::uncategorized("Bill Payment");
    }

    let desc = text.to_lowercase();
    for (bucket, sub) in taxonomy.subcategories() {
        let needle = sub.trim().to_lowercase();
        if needle.is_empty() {
            continue;
        }
        if desc.contains(&needle) {
            return Categorized {
                bucket,
                sub_category: sub.to_string(),
            };
        }
    }

    Categorized::uncategorized("General")
}
