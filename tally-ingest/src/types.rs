use chrono::NaiveDate;
use tally_core::Taxonomy;

/// Everything an import needs besides the text itself.
///
/// `today` is the fallback for rows with no usable date.
#[derive(Debug, Clone, Copy)]
pub struct ImportContext<'a> {
    pub taxonomy: &'a Taxonomy,
    pub today: NaiveDate,
}

impl<'a> ImportContext<'a> {
    pub fn new(taxonomy: &'a Taxonomy, today: NaiveDate) -> Self {
        Self { taxonomy, today }
    }
}

/// Direction of money for a transaction row before transfer/bill detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Expense,
    Income,
}
