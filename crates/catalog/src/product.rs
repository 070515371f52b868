use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shoplite_core::{Entity, ProductId};

/// Catalog product.
///
/// Plain data record: identity is immutable once created, every other field is
/// replaced wholesale by the update operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub summary: String,
    pub description: String,
    /// Filename reference, not inline image data.
    pub image_file: String,
    pub price: Decimal,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_returns_product_id() {
        let product = Product {
            id: ProductId::from("602d2149e773f2a3990b47f5"),
            name: "IPhone X".to_string(),
            category: "Smart Phone".to_string(),
            summary: "Flagship phone.".to_string(),
            description: "Long description.".to_string(),
            image_file: "product-1.png".to_string(),
            price: Decimal::new(95000, 2),
        };

        assert_eq!(product.id().as_str(), "602d2149e773f2a3990b47f5");
    }

    #[test]
    fn serde_round_trip_preserves_every_field() {
        let product = Product {
            id: ProductId::generate(),
            name: "Samsung 10".to_string(),
            category: "Smart Phone".to_string(),
            summary: "Flagship phone.".to_string(),
            description: "Long description.".to_string(),
            image_file: "product-2.png".to_string(),
            price: Decimal::new(84000, 2),
        };

        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
