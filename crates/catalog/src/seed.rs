//! Demo catalog used by dev seeding and tests.

use rust_decimal::Decimal;

use shoplite_core::ProductId;

use crate::product::Product;

const SUMMARY: &str = "This phone is the company's biggest change to its flagship \
smartphone in years. It includes a borderless.";

const DESCRIPTION: &str = "Lorem ipsum dolor sit amet, consectetur adipisicing elit. \
Ut, tenetur natus doloremque laborum quos iste ipsum rerum obcaecati impedit odit \
illo dolorum ab tempora nihil dicta earum fugiat. Temporibus, voluptatibus.";

/// The reference catalog: three products, two of them in "Smart Phone".
pub fn demo_catalog() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::from("602d2149e773f2a3990b47f5"),
            name: "IPhone X".to_string(),
            category: "Smart Phone".to_string(),
            summary: SUMMARY.to_string(),
            description: DESCRIPTION.to_string(),
            image_file: "product-1.png".to_string(),
            price: Decimal::new(95000, 2),
        },
        Product {
            id: ProductId::from("602d2149e773f2a3990b47f6"),
            name: "Samsung 10".to_string(),
            category: "Smart Phone".to_string(),
            summary: SUMMARY.to_string(),
            description: DESCRIPTION.to_string(),
            image_file: "product-2.png".to_string(),
            price: Decimal::new(84000, 2),
        },
        Product {
            id: ProductId::from("602d2149e773f2a3990b47f7"),
            name: "Huawei Plus".to_string(),
            category: "White Appliances".to_string(),
            summary: SUMMARY.to_string(),
            description: DESCRIPTION.to_string(),
            image_file: "product-3.png".to_string(),
            price: Decimal::new(65000, 2),
        },
    ]
}
