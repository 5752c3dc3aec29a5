use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockdeck_core::{Entity, EntryId};

/// Explicit lifecycle flag carried on an entry.
///
/// Low stock is *derived* from the count (see [`StockStatus`]), never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Active,
    Inactive,
}

/// Stock-level classification with fixed thresholds.
///
/// Total over any non-negative count: 0 is out of stock, anything below 10
/// is low, 10 and up is in stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockStatus {
    /// Counts strictly below this are classified as low stock.
    pub const LOW_STOCK_THRESHOLD: u32 = 10;

    pub fn classify(stock: u32) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock < Self::LOW_STOCK_THRESHOLD {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out of stock",
            StockStatus::LowStock => "low stock",
            StockStatus::InStock => "in stock",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only product record owned by the external product source.
///
/// The catalog only reads and filters these; editing goes through the wizard
/// and the product sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: EntryId,
    pub name: String,
    pub sku: String,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    pub stock: u32,
    pub category: String,
    pub status: EntryStatus,
    /// Variant option labels (e.g. "Red / XL"), empty for simple products.
    pub variant_labels: Vec<String>,
    pub expiry: Option<NaiveDate>,
}

impl CatalogEntry {
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.stock)
    }
}

impl Entity for CatalogEntry {
    type Id = EntryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Hard-coded sample list standing in for the external product source.
///
/// The catalog view is designed to have its source replaced by a fetched
/// list; until one is wired up, this is what the grid shows.
pub fn sample_entries() -> Vec<CatalogEntry> {
    fn entry(name: &str, sku: &str, price: u64, stock: u32, category: &str) -> CatalogEntry {
        CatalogEntry {
            id: EntryId::new(),
            name: name.to_string(),
            sku: sku.to_string(),
            price,
            stock,
            category: category.to_string(),
            status: EntryStatus::Active,
            variant_labels: Vec::new(),
            expiry: None,
        }
    }

    vec![
        entry("Wireless Headphones", "WH001", 9999, 25, "Electronics"),
        entry("Bluetooth Speaker", "BS002", 7999, 15, "Electronics"),
        entry("Phone Case", "PC003", 1999, 50, "Accessories"),
        entry("USB Cable", "UC004", 1299, 100, "Accessories"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_thresholds() {
        assert_eq!(StockStatus::classify(0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(1), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(5), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(9), StockStatus::LowStock);
        assert_eq!(StockStatus::classify(10), StockStatus::InStock);
        assert_eq!(StockStatus::classify(150), StockStatus::InStock);
    }

    #[test]
    fn classification_labels() {
        assert_eq!(StockStatus::OutOfStock.as_str(), "out of stock");
        assert_eq!(StockStatus::LowStock.as_str(), "low stock");
        assert_eq!(StockStatus::InStock.as_str(), "in stock");
    }

    #[test]
    fn sample_entries_are_well_formed() {
        let entries = sample_entries();
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(|e| !e.name.is_empty() && !e.sku.is_empty()));
        assert!(entries.iter().all(|e| e.status == EntryStatus::Active));
    }

    #[test]
    fn entry_reports_derived_stock_status() {
        let mut entry = sample_entries().remove(0);
        entry.stock = 3;
        assert_eq!(entry.stock_status(), StockStatus::LowStock);
        entry.stock = 0;
        assert_eq!(entry.stock_status(), StockStatus::OutOfStock);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: classification is total and consistent with the
            /// threshold constant.
            #[test]
            fn classify_is_total(stock in 0u32..100_000) {
                let status = StockStatus::classify(stock);
                match status {
                    StockStatus::OutOfStock => prop_assert_eq!(stock, 0),
                    StockStatus::LowStock => {
                        prop_assert!(stock > 0);
                        prop_assert!(stock < StockStatus::LOW_STOCK_THRESHOLD);
                    }
                    StockStatus::InStock => {
                        prop_assert!(stock >= StockStatus::LOW_STOCK_THRESHOLD);
                    }
                }
            }
        }
    }
}
