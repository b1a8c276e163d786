//! Built-in sample catalog data.

use chrono::{DateTime, TimeZone, Utc};

use crate::catalog::{Category, Product, ProductVariant};
use crate::ids::{CategoryId, ProductId, VariantId};
use crate::money::{Currency, Money};

fn listed_at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn usd(cents: i64) -> Money {
    Money::new(cents, Currency::USD)
}

pub(super) fn sample_categories() -> Vec<Category> {
    vec![
        Category {
            id: CategoryId::new("electronics"),
            name: "Electronics".to_string(),
            slug: "electronics".to_string(),
            description: Some("Latest gadgets and electronic devices".to_string()),
            image: Some("images/categories/electronics.jpg".to_string()),
            parent_id: None,
            subcategories: vec![
                Category {
                    id: CategoryId::new("smartphones"),
                    name: "Smartphones".to_string(),
                    slug: "smartphones".to_string(),
                    description: None,
                    image: None,
                    parent_id: Some(CategoryId::new("electronics")),
                    subcategories: vec![],
                    product_count: 1,
                },
                Category {
                    id: CategoryId::new("headphones"),
                    name: "Headphones".to_string(),
                    slug: "headphones".to_string(),
                    description: None,
                    image: None,
                    parent_id: Some(CategoryId::new("electronics")),
                    subcategories: vec![],
                    product_count: 1,
                },
            ],
            product_count: 2,
        },
        Category {
            id: CategoryId::new("fashion"),
            name: "Fashion".to_string(),
            slug: "fashion".to_string(),
            description: Some("Clothing and accessories".to_string()),
            image: Some("images/categories/fashion.jpg".to_string()),
            parent_id: None,
            subcategories: vec![
                Category {
                    id: CategoryId::new("accessories"),
                    name: "Accessories".to_string(),
                    slug: "accessories".to_string(),
                    description: None,
                    image: None,
                    parent_id: Some(CategoryId::new("fashion")),
                    subcategories: vec![],
                    product_count: 1,
                },
                Category {
                    id: CategoryId::new("knitwear"),
                    name: "Knitwear".to_string(),
                    slug: "knitwear".to_string(),
                    description: None,
                    image: None,
                    parent_id: Some(CategoryId::new("fashion")),
                    subcategories: vec![],
                    product_count: 1,
                },
            ],
            product_count: 2,
        },
        Category {
            id: CategoryId::new("home-garden"),
            name: "Home & Garden".to_string(),
            slug: "home-garden".to_string(),
            description: Some("Everything for your home".to_string()),
            image: Some("images/categories/home.jpg".to_string()),
            parent_id: None,
            subcategories: vec![Category {
                id: CategoryId::new("decor"),
                name: "Decor".to_string(),
                slug: "decor".to_string(),
                description: None,
                image: None,
                parent_id: Some(CategoryId::new("home-garden")),
                subcategories: vec![],
                product_count: 2,
            }],
            product_count: 2,
        },
    ]
}

pub(super) fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("nimbus-x1"),
            name: "Nimbus X1 Smartphone".to_string(),
            description: "Flagship smartphone with a 6.1-inch OLED display, triple camera \
                          system, and all-day battery life."
                .to_string(),
            price: usd(89_900),
            original_price: Some(usd(99_900)),
            images: vec![
                "images/products/nimbus-x1-front.jpg".to_string(),
                "images/products/nimbus-x1-back.jpg".to_string(),
            ],
            category: CategoryId::new("electronics"),
            subcategory: Some("Smartphones".to_string()),
            brand: "Nimbus".to_string(),
            rating: 4.8,
            review_count: 1247,
            in_stock: true,
            stock_quantity: 25,
            tags: vec![
                "flagship".to_string(),
                "camera".to_string(),
                "5g".to_string(),
            ],
            features: vec![
                "6.1-inch OLED display".to_string(),
                "Triple 48MP camera system".to_string(),
                "All-day battery".to_string(),
            ],
            specifications: Some(
                [
                    ("Display".to_string(), "6.1-inch OLED".to_string()),
                    ("Battery".to_string(), "4,400 mAh".to_string()),
                    ("Weight".to_string(), "187 g".to_string()),
                ]
                .into_iter()
                .collect(),
            ),
            variants: Some(vec![
                ProductVariant {
                    id: VariantId::new("nimbus-x1-128"),
                    name: "Storage".to_string(),
                    value: "128GB".to_string(),
                    price: None,
                    in_stock: true,
                    stock_quantity: 15,
                },
                ProductVariant {
                    id: VariantId::new("nimbus-x1-256"),
                    name: "Storage".to_string(),
                    value: "256GB".to_string(),
                    price: Some(usd(99_900)),
                    in_stock: true,
                    stock_quantity: 10,
                },
            ]),
            created_at: listed_at(2024, 3, 5),
            updated_at: listed_at(2024, 3, 5),
        },
        Product {
            id: ProductId::new("polar-anc"),
            name: "Polar ANC Headphones".to_string(),
            description: "Over-ear wireless headphones with adaptive noise cancelling and \
                          30-hour playtime."
                .to_string(),
            price: usd(24_999),
            original_price: None,
            images: vec!["images/products/polar-anc.jpg".to_string()],
            category: CategoryId::new("electronics"),
            subcategory: Some("Headphones".to_string()),
            brand: "Polar Audio".to_string(),
            rating: 4.6,
            review_count: 832,
            in_stock: true,
            stock_quantity: 40,
            tags: vec!["wireless".to_string(), "noise-cancelling".to_string()],
            features: vec![
                "Adaptive noise cancelling".to_string(),
                "30-hour playtime".to_string(),
                "Multipoint Bluetooth".to_string(),
            ],
            specifications: None,
            variants: None,
            created_at: listed_at(2024, 2, 12),
            updated_at: listed_at(2024, 2, 12),
        },
        Product {
            id: ProductId::new("voyager-pack"),
            name: "Voyager Canvas Backpack".to_string(),
            description: "Water-resistant canvas backpack with a padded 15-inch laptop \
                          sleeve and quick-access pockets."
                .to_string(),
            price: usd(7_999),
            original_price: None,
            images: vec!["images/products/voyager-pack.jpg".to_string()],
            category: CategoryId::new("fashion"),
            subcategory: Some("Accessories".to_string()),
            brand: "Voyager".to_string(),
            rating: 4.4,
            review_count: 210,
            in_stock: true,
            stock_quantity: 60,
            tags: vec!["travel".to_string(), "everyday".to_string()],
            features: vec![
                "Water-resistant canvas".to_string(),
                "Padded laptop sleeve".to_string(),
            ],
            specifications: None,
            variants: None,
            created_at: listed_at(2023, 11, 20),
            updated_at: listed_at(2023, 11, 20),
        },
        Product {
            id: ProductId::new("meridian-sweater"),
            name: "Meridian Wool Sweater".to_string(),
            description: "Midweight merino crewneck, knit for year-round layering."
                .to_string(),
            price: usd(12_900),
            original_price: Some(usd(15_900)),
            images: vec!["images/products/meridian-sweater.jpg".to_string()],
            category: CategoryId::new("fashion"),
            subcategory: Some("Knitwear".to_string()),
            brand: "Meridian".to_string(),
            rating: 4.2,
            review_count: 98,
            in_stock: false,
            stock_quantity: 0,
            tags: vec!["winter".to_string(), "wool".to_string()],
            features: vec!["100% merino wool".to_string()],
            specifications: None,
            variants: Some(vec![
                ProductVariant {
                    id: VariantId::new("meridian-sweater-m"),
                    name: "Size".to_string(),
                    value: "M".to_string(),
                    price: None,
                    in_stock: false,
                    stock_quantity: 0,
                },
                ProductVariant {
                    id: VariantId::new("meridian-sweater-l"),
                    name: "Size".to_string(),
                    value: "L".to_string(),
                    price: None,
                    in_stock: false,
                    stock_quantity: 0,
                },
            ]),
            created_at: listed_at(2023, 12, 1),
            updated_at: listed_at(2024, 1, 8),
        },
        Product {
            id: ProductId::new("hearth-mugs"),
            name: "Hearth Ceramic Mug Set".to_string(),
            description: "Set of four stoneware mugs with a speckled glaze, dishwasher and \
                          microwave safe."
                .to_string(),
            price: usd(3_995),
            original_price: None,
            images: vec!["images/products/hearth-mugs.jpg".to_string()],
            category: CategoryId::new("home-garden"),
            subcategory: Some("Decor".to_string()),
            brand: "Hearth & Co".to_string(),
            rating: 4.9,
            review_count: 455,
            in_stock: true,
            stock_quantity: 120,
            tags: vec!["kitchen".to_string(), "gift".to_string()],
            features: vec!["Set of four".to_string(), "Dishwasher safe".to_string()],
            specifications: None,
            variants: None,
            created_at: listed_at(2024, 1, 15),
            updated_at: listed_at(2024, 1, 15),
        },
        Product {
            id: ProductId::new("lumen-lamp"),
            name: "Lumen Desk Lamp".to_string(),
            description: "Adjustable aluminum desk lamp with stepless dimming and a USB-C \
                          charging port."
                .to_string(),
            price: usd(8_950),
            original_price: None,
            images: vec!["images/products/lumen-lamp.jpg".to_string()],
            category: CategoryId::new("home-garden"),
            subcategory: Some("Decor".to_string()),
            brand: "Lumen".to_string(),
            rating: 4.1,
            review_count: 67,
            in_stock: true,
            stock_quantity: 15,
            tags: vec!["lighting".to_string(), "office".to_string()],
            features: vec![
                "Stepless dimming".to_string(),
                "USB-C charging port".to_string(),
            ],
            specifications: None,
            variants: None,
            created_at: listed_at(2024, 4, 2),
            updated_at: listed_at(2024, 4, 2),
        },
    ]
}
