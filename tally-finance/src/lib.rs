//! tally-finance: keyword rules and taxonomy-driven category resolution

pub mod category_resolver;
pub mod rules;

pub use category_resolver::{Categorized, resolve_category};
pub use rules::{
    Movement, classify_movement, income_type, is_account_marker, is_bill_payment, is_received,
    wealth_class,
};
