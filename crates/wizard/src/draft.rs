use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockdeck_core::ValueObject;

use crate::media::ImageRef;

/// Whether the record describes physical goods or a service.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Goods,
    Services,
}

/// Structural kind of the product being authored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    #[default]
    Simple,
    Variant,
    Bundle,
}

/// How individual units are tracked in the warehouse.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrackingMode {
    #[default]
    SerialNumber,
    BatchNumber,
}

/// One selected variant axis (e.g. color, size) with its option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantAxis {
    pub kind: String,
    pub options: Vec<String>,
}

/// The in-progress product record owned by the wizard.
///
/// A draft has no identity until the product sink accepts it. Prices,
/// quantities and rates stay opaque strings exactly as entered; typing
/// them is the sink's concern. SKU/barcode/EAN carry no format constraint
/// on manual entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DraftProduct {
    // General information
    pub item_kind: ItemKind,
    pub product_name: String,
    pub sku: String,
    pub barcode: String,
    pub ean: String,
    pub category: String,
    pub sub_category: String,
    pub brand: String,
    pub product_kind: ProductKind,
    pub supplier: String,
    pub supplier_sku: String,
    pub warehouse_location: String,
    pub lead_time: String,
    pub reorder_level: String,
    pub initial_stock_quantity: String,
    pub tracking: TrackingMode,
    pub returnable: bool,

    // Pricing & tax
    pub purchase_price: String,
    pub selling_price: String,
    pub wholesale_price: String,
    pub quantity: String,
    pub unit: String,
    pub discount_percent: String,
    pub discount_from: Option<NaiveDate>,
    pub discount_to: Option<NaiveDate>,
    pub tax_rate: String,
    pub hsn_sac: String,
    pub price_includes_tax: bool,
    pub included_tax_rate: String,

    // Description & media
    pub description: String,
    pub seo_title: String,
    pub seo_description: String,
    pub images: Vec<ImageRef>,
    pub keywords: Vec<String>,

    // Variants
    pub variant_axes: Vec<VariantAxis>,
}

impl Default for DraftProduct {
    fn default() -> Self {
        Self {
            item_kind: ItemKind::default(),
            product_name: String::new(),
            sku: String::new(),
            barcode: String::new(),
            ean: String::new(),
            category: String::new(),
            sub_category: String::new(),
            brand: String::new(),
            product_kind: ProductKind::default(),
            supplier: String::new(),
            supplier_sku: String::new(),
            warehouse_location: String::new(),
            lead_time: String::new(),
            reorder_level: String::new(),
            initial_stock_quantity: String::new(),
            tracking: TrackingMode::default(),
            // New records are returnable unless the author opts out.
            returnable: true,
            purchase_price: String::new(),
            selling_price: String::new(),
            wholesale_price: String::new(),
            quantity: String::new(),
            unit: String::new(),
            discount_percent: String::new(),
            discount_from: None,
            discount_to: None,
            tax_rate: String::new(),
            hsn_sac: String::new(),
            price_includes_tax: false,
            included_tax_rate: String::new(),
            description: String::new(),
            seo_title: String::new(),
            seo_description: String::new(),
            images: Vec::new(),
            keywords: Vec::new(),
            variant_axes: Vec::new(),
        }
    }
}

/// One scalar field update. Collections (images, keywords, variant axes)
/// have dedicated operations on the controller instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    ItemKind(ItemKind),
    ProductName(String),
    Sku(String),
    Barcode(String),
    Ean(String),
    Category(String),
    SubCategory(String),
    Brand(String),
    ProductKind(ProductKind),
    Supplier(String),
    SupplierSku(String),
    WarehouseLocation(String),
    LeadTime(String),
    ReorderLevel(String),
    InitialStockQuantity(String),
    Tracking(TrackingMode),
    Returnable(bool),
    PurchasePrice(String),
    SellingPrice(String),
    WholesalePrice(String),
    Quantity(String),
    Unit(String),
    DiscountPercent(String),
    DiscountFrom(Option<NaiveDate>),
    DiscountTo(Option<NaiveDate>),
    TaxRate(String),
    HsnSac(String),
    PriceIncludesTax(bool),
    IncludedTaxRate(String),
    Description(String),
    SeoTitle(String),
    SeoDescription(String),
}

impl DraftProduct {
    /// Functional update: consume the draft and return a new value with one
    /// field replaced. Untouched fields are carried over unchanged; no
    /// validation happens at this layer.
    pub fn with_field(mut self, field: DraftField) -> Self {
        match field {
            DraftField::ItemKind(v) => self.item_kind = v,
            DraftField::ProductName(v) => self.product_name = v,
            DraftField::Sku(v) => self.sku = v,
            DraftField::Barcode(v) => self.barcode = v,
            DraftField::Ean(v) => self.ean = v,
            DraftField::Category(v) => self.category = v,
            DraftField::SubCategory(v) => self.sub_category = v,
            DraftField::Brand(v) => self.brand = v,
            DraftField::ProductKind(v) => self.product_kind = v,
            DraftField::Supplier(v) => self.supplier = v,
            DraftField::SupplierSku(v) => self.supplier_sku = v,
            DraftField::WarehouseLocation(v) => self.warehouse_location = v,
            DraftField::LeadTime(v) => self.lead_time = v,
            DraftField::ReorderLevel(v) => self.reorder_level = v,
            DraftField::InitialStockQuantity(v) => self.initial_stock_quantity = v,
            DraftField::Tracking(v) => self.tracking = v,
            DraftField::Returnable(v) => self.returnable = v,
            DraftField::PurchasePrice(v) => self.purchase_price = v,
            DraftField::SellingPrice(v) => self.selling_price = v,
            DraftField::WholesalePrice(v) => self.wholesale_price = v,
            DraftField::Quantity(v) => self.quantity = v,
            DraftField::Unit(v) => self.unit = v,
            DraftField::DiscountPercent(v) => self.discount_percent = v,
            DraftField::DiscountFrom(v) => self.discount_from = v,
            DraftField::DiscountTo(v) => self.discount_to = v,
            DraftField::TaxRate(v) => self.tax_rate = v,
            DraftField::HsnSac(v) => self.hsn_sac = v,
            DraftField::PriceIncludesTax(v) => self.price_includes_tax = v,
            DraftField::IncludedTaxRate(v) => self.included_tax_rate = v,
            DraftField::Description(v) => self.description = v,
            DraftField::SeoTitle(v) => self.seo_title = v,
            DraftField::SeoDescription(v) => self.seo_description = v,
        }
        self
    }

    /// Append a trimmed keyword if non-empty and not already present.
    /// Returns whether the list changed.
    pub(crate) fn push_keyword(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.keywords.iter().any(|k| k == trimmed) {
            return false;
        }
        self.keywords.push(trimmed.to_string());
        true
    }

    /// Remove the keyword at `index`. Out-of-range is a no-op.
    pub(crate) fn remove_keyword(&mut self, index: usize) -> Option<String> {
        if index < self.keywords.len() {
            Some(self.keywords.remove(index))
        } else {
            None
        }
    }

    pub(crate) fn push_image(&mut self, reference: ImageRef) {
        self.images.push(reference);
    }

    /// Remove the image at `index` — positional, not by value, so equal
    /// references elsewhere in the list are untouched. Out-of-range is a
    /// no-op.
    pub(crate) fn remove_image(&mut self, index: usize) -> Option<ImageRef> {
        if index < self.images.len() {
            Some(self.images.remove(index))
        } else {
            None
        }
    }

    /// Select a variant axis. Selection is a set: a second select of the
    /// same kind is a no-op and returns false.
    pub(crate) fn select_axis(&mut self, kind: &str) -> bool {
        if self.variant_axes.iter().any(|axis| axis.kind == kind) {
            return false;
        }
        self.variant_axes.push(VariantAxis {
            kind: kind.to_string(),
            options: Vec::new(),
        });
        true
    }

    pub(crate) fn deselect_axis(&mut self, kind: &str) -> bool {
        let before = self.variant_axes.len();
        self.variant_axes.retain(|axis| axis.kind != kind);
        self.variant_axes.len() != before
    }

    /// Replace the option list of a selected axis. Returns false when the
    /// axis is not selected.
    pub(crate) fn set_axis_options(&mut self, kind: &str, options: Vec<String>) -> bool {
        match self.variant_axes.iter_mut().find(|axis| axis.kind == kind) {
            Some(axis) => {
                axis.options = options;
                true
            }
            None => false,
        }
    }
}

impl ValueObject for DraftProduct {}
