//! Category taxonomy: bucket -> category -> subcategories.
//!
//! Order is significant. Classification takes the first subcategory that matches,
//! so everything here is kept in vectors and iterated exactly as supplied.

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::entry::Bucket;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub name: String,
    #[serde(default)]
    pub subcategories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketTaxonomy {
    pub bucket: Bucket,
    #[serde(default)]
    pub categories: Vec<CategoryGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taxonomy {
    #[serde(default)]
    pub buckets: Vec<BucketTaxonomy>,
}

impl Taxonomy {
    pub fn empty() -> Self {
        Self { buckets: Vec::new() }
    }

    /// Every (bucket, subcategory) pair in iteration order.
    pub fn subcategories(&self) -> impl Iterator<Item = (Bucket, &str)> + '_ {
        self.buckets.iter().flat_map(|b| {
            b.categories
                .iter()
                .flat_map(|c| c.subcategories.iter())
                .map(move |s| (b.bucket, s.as_str()))
        })
    }

    /// Reject taxonomies that would classify everything into one subcategory.
    pub fn validate(&self) -> Result<()> {
        for (bucket, sub) in self.subcategories() {
            ensure!(
                !sub.trim().is_empty(),
                "blank subcategory name under bucket {}",
                bucket.as_str()
            );
        }
        Ok(())
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        fn group(name: &str, subs: &[&str]) -> CategoryGroup {
            CategoryGroup {
                name: name.to_string(),
                subcategories: subs.iter().map(|s| s.to_string()).collect(),
            }
        }

        Self {
            buckets: vec![
                BucketTaxonomy {
                    bucket: Bucket::Needs,
                    categories: vec![
                        group("Housing", &["Rent", "Maintenance", "Electricity", "Water Bill", "Gas Cylinder"]),
                        group("Groceries", &["Grocery", "Supermarket", "Vegetables", "Milk"]),
                        group("Transport", &["Fuel", "Petrol", "Metro", "Uber", "Rapido", "Parking"]),
                        group("Health", &["Pharmacy", "Hospital", "Doctor", "Medical"]),
                        group("Utilities", &["Internet", "Broadband", "Mobile Recharge", "Insurance"]),
                        group("Education", &["Tuition", "School", "Course"]),
                    ],
                },
                BucketTaxonomy {
                    bucket: Bucket::Wants,
                    categories: vec![
                        group("Dining", &["Zomato", "Swiggy", "Restaurant", "Cafe", "Coffee", "Pizza"]),
                        group("Entertainment", &["Netflix", "Spotify", "Prime Video", "Movie", "Concert"]),
                        group("Shopping", &["Amazon", "Flipkart", "Myntra", "Clothing", "Electronics"]),
                        group("Travel", &["Flight", "Hotel", "Airbnb", "Train"]),
                    ],
                },
                BucketTaxonomy {
                    bucket: Bucket::Savings,
                    categories: vec![
                        group("Investments", &["Mutual Fund", "SIP", "Stocks", "Fixed Deposit", "PPF"]),
                        group("Emergency Fund", &["Emergency"]),
                    ],
                },
                BucketTaxonomy {
                    bucket: Bucket::Avoids,
                    categories: vec![
                        group("Habits", &["Cigarette", "Alcohol", "Liquor", "Betting"]),
                        group("Penalties", &["Late Fee", "Penalty", "Overdraft"]),
                    ],
                },
            ],
        }
    }
}
