use std::collections::BTreeMap;

use rust_decimal::Decimal;

use warehouse_core::{DomainError, DomainResult, Entity, ProductId};

use crate::category::Category;
use crate::product::ProductRecord;

/// Label used by [`Catalog::new`].
pub const DEFAULT_CATALOG_NAME: &str = "Warehouse";

/// Command: AddProduct.
///
/// Every field may be absent; [`Catalog::add_product`] validates and fills
/// defaults in a fixed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddProduct {
    pub id: Option<ProductId>,
    pub name: Option<String>,
    pub category: Option<Category>,
    pub price: Option<Decimal>,
}

impl AddProduct {
    pub fn new(name: impl Into<String>, category: &Category) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            category: Some(category.clone()),
            price: None,
        }
    }

    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }
}

/// Named container of product records.
///
/// Current records keep insertion order; records displaced by a price update
/// are appended to an audit log. `Catalog` does no locking of its own: share
/// it behind one `Mutex` guarding both sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    name: String,
    products: Vec<ProductRecord>,
    changed_products: Vec<ProductRecord>,
}

impl Catalog {
    /// A fresh catalog named [`DEFAULT_CATALOG_NAME`].
    ///
    /// Always constructs a new, independent instance; there is no shared
    /// catalog behind this call.
    pub fn new() -> Self {
        Self::with_name(DEFAULT_CATALOG_NAME)
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            products: Vec::new(),
            changed_products: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Current records in insertion order.
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    /// Validate and append a new product record.
    ///
    /// Checks run in order: name present and non-empty, category present.
    /// An absent price becomes zero and an absent id is generated. A record
    /// with the same id must not already exist.
    pub fn add_product(&mut self, cmd: AddProduct) -> DomainResult<ProductRecord> {
        let name = match cmd.name {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(DomainError::invalid_argument(
                    "product name can't be absent or empty",
                ));
            }
        };
        let category = cmd
            .category
            .ok_or_else(|| DomainError::invalid_argument("category can't be absent"))?;
        let price = cmd.price.unwrap_or(Decimal::ZERO);
        let id = cmd.id.unwrap_or_else(ProductId::new);

        if self.position_of(id).is_some() {
            return Err(DomainError::invalid_argument(format!(
                "product with id {id} already exists, use update_product_price for updates"
            )));
        }

        let record = ProductRecord::new(id, name, category, Some(price));
        tracing::debug!(
            catalog = %self.name,
            product_id = %id,
            category = %record.category(),
            %price,
            "product added"
        );
        self.products.push(record.clone());
        Ok(record)
    }

    /// Replace the record with `id` by a copy carrying `new_price`.
    ///
    /// The replacement keeps its position; the displaced record is appended
    /// to [`Catalog::changed_products`]. An absent price is stored as absent,
    /// unlike [`Catalog::add_product`] which defaults it to zero.
    pub fn update_product_price(
        &mut self,
        id: ProductId,
        new_price: Option<Decimal>,
    ) -> DomainResult<()> {
        let index = self
            .position_of(id)
            .ok_or_else(|| DomainError::invalid_argument("product with that id doesn't exist"))?;

        let updated = self.products[index].with_price(new_price);
        let previous = std::mem::replace(&mut self.products[index], updated);
        tracing::debug!(
            catalog = %self.name,
            product_id = %id,
            old_price = ?previous.price(),
            new_price = ?new_price,
            "product price updated"
        );
        self.changed_products.push(previous);
        Ok(())
    }

    pub fn product_by_id(&self, id: ProductId) -> Option<&ProductRecord> {
        self.products.iter().find(|p| *p.id() == id)
    }

    /// Current records partitioned by category, each group in insertion
    /// order. Categories without current records are absent.
    pub fn products_grouped_by_category(&self) -> BTreeMap<Category, Vec<&ProductRecord>> {
        let mut groups: BTreeMap<Category, Vec<&ProductRecord>> = BTreeMap::new();
        for product in &self.products {
            groups
                .entry(product.category().clone())
                .or_default()
                .push(product);
        }
        groups
    }

    pub fn products_by_category(&self, category: &Category) -> Vec<&ProductRecord> {
        self.products
            .iter()
            .filter(|p| p.category() == category)
            .collect()
    }

    /// Records displaced by price updates, oldest first.
    pub fn changed_products(&self) -> &[ProductRecord] {
        &self.changed_products
    }

    /// Superseded snapshots of a single product, oldest first.
    pub fn price_history(&self, id: ProductId) -> Vec<&ProductRecord> {
        self.changed_products
            .iter()
            .filter(|p| *p.id() == id)
            .collect()
    }

    fn position_of(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| *p.id() == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
