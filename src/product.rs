//! The product record and its create / update payloads.

use serde::{Deserialize, Serialize};

/// A catalog entry. `id` is assigned by the store and never changes.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub in_stock: bool,
}

/// Body of `POST /api/products`.
///
/// Unknown fields are ignored. `inStock` defaults to `true`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub in_stock: Option<bool>,
}

/// Body of `PUT /api/products/{id}`. Absent fields keep their current value.
///
/// There is no `id` field, so an `id` in the body is ignored.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

impl Product {
    pub fn from_new(id: String, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
            category: new.category,
            in_stock: new.in_stock.unwrap_or(true),
        }
    }

    /// Shallow merge: every field present in `patch` overwrites, the rest stay.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(category) = patch.category {
            self.category = Some(category);
        }
        if let Some(in_stock) = patch.in_stock {
            self.in_stock = in_stock;
        }
    }
}

/// The three records every fresh process starts with.
pub fn seed() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_owned(),
            name: "Laptop".to_owned(),
            description: Some("High-performance laptop".to_owned()),
            price: 999.99,
            category: Some("electronics".to_owned()),
            in_stock: true,
        },
        Product {
            id: "2".to_owned(),
            name: "Smartphone".to_owned(),
            description: Some("Latest model smartphone".to_owned()),
            price: 699.99,
            category: Some("electronics".to_owned()),
            in_stock: true,
        },
        Product {
            id: "3".to_owned(),
            name: "Coffee Maker".to_owned(),
            description: Some("Automatic drip coffee maker".to_owned()),
            price: 89.99,
            category: Some("kitchen".to_owned()),
            in_stock: false,
        },
    ]
}
