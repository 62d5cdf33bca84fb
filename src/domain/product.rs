//! Product domain entity and related types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Product domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Currency-agnostic amount in the base unit
    pub price: Decimal,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub in_stock: bool,
}

impl Product {
    /// Build a product from a store-assigned id and a creation payload
    pub fn new(id: ProductId, draft: CreateProduct) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category: draft.category,
            image_url: draft.image_url,
            in_stock: draft.in_stock,
        }
    }

    /// Shallow-merge an update onto this product; absent fields stay as-is
    pub fn apply(&mut self, updates: UpdateProduct) {
        if let Some(name) = updates.name {
            self.name = name;
        }
        if let Some(description) = updates.description {
            self.description = description;
        }
        if let Some(price) = updates.price {
            self.price = price;
        }
        if let Some(category) = updates.category {
            self.category = category;
        }
        if let Some(image_url) = updates.image_url {
            self.image_url = Some(image_url);
        }
        if let Some(in_stock) = updates.in_stock {
            self.in_stock = in_stock;
        }
    }
}

/// Product creation data transfer object
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image_url: Option<String>,
    pub in_stock: bool,
}

/// Product update data transfer object; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub in_stock: Option<bool>,
}
