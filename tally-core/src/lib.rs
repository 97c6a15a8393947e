//! tally-core: typed records produced by statement import, plus the category taxonomy

pub mod entry;
pub mod summary;
pub mod taxonomy;

pub use entry::{
    AccountSnapshot, Bucket, EntryType, IncomeType, ParsedEntry, Transaction, WealthCategory,
    WealthType,
};
pub use summary::{ImportSummary, split_entries};
pub use taxonomy::{BucketTaxonomy, CategoryGroup, Taxonomy};
