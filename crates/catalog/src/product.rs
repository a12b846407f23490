use rust_decimal::Decimal;
use serde::Serialize;

use warehouse_core::{Entity, ProductId};

use crate::category::Category;

/// Immutable snapshot of a product at a point in time.
///
/// A price change never mutates a record; [`ProductRecord::with_price`]
/// builds the successor and the catalog retires the old one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    id: ProductId,
    name: String,
    category: Category,
    price: Option<Decimal>,
}

impl ProductRecord {
    pub(crate) fn new(
        id: ProductId,
        name: String,
        category: Category,
        price: Option<Decimal>,
    ) -> Self {
        Self {
            id,
            name,
            category,
            price,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Price of this snapshot. Records created through
    /// [`Catalog::add_product`](crate::Catalog::add_product) always carry one;
    /// a price update may store an absent price.
    pub fn price(&self) -> Option<Decimal> {
        self.price
    }

    /// Same product (id, name, category) at a new price.
    pub fn with_price(&self, price: Option<Decimal>) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            category: self.category.clone(),
            price,
        }
    }
}

impl Entity for ProductRecord {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
