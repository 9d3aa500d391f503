//! Product domain types.
//!
//! `price` crosses the wire as a JSON number (not a string), so Decimal
//! fields use the `rust_decimal::serde::float` codec.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Type-safe product identifier.
///
/// Newtype over the `serial` column value; transparent in both JSON and
/// `PostgreSQL` encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct ProductId(i32);

impl ProductId {
    /// Create a new ID from an i32 value.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the underlying i32 value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<ProductId> for i32 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

/// A product row as stored and as served.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    /// Unique product ID, assigned by the store on insert.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price, `numeric(10,2)` in the store.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Request body for creating or updating a product.
///
/// The id is never taken from the body; for updates the path id is
/// authoritative and any stray `id` field is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInput {
    /// Product name.
    pub name: String,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Response body for a successful delete: the id that was removed.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeletedProduct {
    /// The deleted product's id.
    pub id: ProductId,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_product_id_serde_transparent() {
        let id: ProductId = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(id, ProductId::new(7));
        assert_eq!(serde_json::to_value(id).unwrap(), json!(7));
    }

    #[test]
    fn test_product_serializes_price_as_number() {
        let product = Product {
            id: ProductId::new(1),
            name: "test product".to_string(),
            price: Decimal::new(1122, 2),
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(
            value,
            json!({"id": 1, "name": "test product", "price": 11.22})
        );
    }

    #[test]
    fn test_input_decodes_number_price() {
        let input: ProductInput =
            serde_json::from_value(json!({"name": "widget", "price": 11.22})).unwrap();
        assert_eq!(input.name, "widget");
        assert_eq!(input.price, Decimal::new(1122, 2));
    }

    #[test]
    fn test_input_accepts_integer_price() {
        let input: ProductInput =
            serde_json::from_value(json!({"name": "widget", "price": 10})).unwrap();
        assert_eq!(input.price, Decimal::new(10, 0));
    }

    #[test]
    fn test_input_ignores_stray_id() {
        // The path id is authoritative; a body id must not be an error.
        let input: ProductInput =
            serde_json::from_value(json!({"id": 99, "name": "widget", "price": 1.5})).unwrap();
        assert_eq!(input.name, "widget");
    }

    #[test]
    fn test_input_rejects_wrong_types() {
        assert!(
            serde_json::from_value::<ProductInput>(json!({"name": "widget", "price": "free"}))
                .is_err()
        );
        assert!(serde_json::from_value::<ProductInput>(json!({"name": 42, "price": 1.0})).is_err());
    }

    #[test]
    fn test_input_requires_fields() {
        assert!(serde_json::from_value::<ProductInput>(json!({"name": "widget"})).is_err());
        assert!(serde_json::from_value::<ProductInput>(json!({"price": 1.0})).is_err());
    }

    #[test]
    fn test_deleted_product_shape() {
        let value = serde_json::to_value(DeletedProduct {
            id: ProductId::new(3),
        })
        .unwrap();
        assert_eq!(value, json!({"id": 3}));
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::new(42).to_string(), "42");
    }
}
