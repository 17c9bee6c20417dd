//! Demo catalog: gaming peripherals and the categories they are browsed by.

use techgear_commerce::prelude::*;

struct ProductRow {
    id: &'static str,
    name: &'static str,
    price: f64,
    original_price: Option<f64>,
    image: &'static str,
    category: &'static str,
    rating: f32,
    reviews: u32,
    badge: Option<&'static str>,
    description: &'static str,
}

const PRODUCTS: &[ProductRow] = &[
    ProductRow {
        id: "1",
        name: "Pro Gaming Headset X1",
        price: 149.99,
        original_price: Some(199.99),
        image: "/products/headset-x1.jpg",
        category: "Headsets",
        rating: 4.8,
        reviews: 256,
        badge: Some("BEST SELLER"),
        description: "7.1 surround sound with a detachable noise-cancelling mic.",
    },
    ProductRow {
        id: "2",
        name: "Mechanical Keyboard RGB",
        price: 129.99,
        original_price: None,
        image: "/products/keyboard-rgb.jpg",
        category: "Keyboards",
        rating: 4.7,
        reviews: 189,
        badge: Some("NEW"),
        description: "Hot-swappable switches and per-key RGB lighting.",
    },
    ProductRow {
        id: "3",
        name: "Wireless Gaming Mouse",
        price: 79.99,
        original_price: Some(99.99),
        image: "/products/mouse-wireless.jpg",
        category: "Mice",
        rating: 4.9,
        reviews: 342,
        badge: Some("SALE"),
        description: "26K DPI sensor with 70 hours of battery life.",
    },
    ProductRow {
        id: "4",
        name: "Studio Wireless Headphones",
        price: 199.99,
        original_price: None,
        image: "/products/headphones-studio.jpg",
        category: "Headsets",
        rating: 4.6,
        reviews: 128,
        badge: None,
        description: "Hi-res audio with adaptive noise cancellation.",
    },
    ProductRow {
        id: "5",
        name: "Compact TKL Keyboard",
        price: 89.99,
        original_price: Some(109.99),
        image: "/products/keyboard-tkl.jpg",
        category: "Keyboards",
        rating: 4.5,
        reviews: 97,
        badge: None,
        description: "Tenkeyless layout with PBT double-shot keycaps.",
    },
    ProductRow {
        id: "6",
        name: "Ultralight Esports Mouse",
        price: 59.99,
        original_price: None,
        image: "/products/mouse-ultralight.jpg",
        category: "Mice",
        rating: 4.7,
        reviews: 211,
        badge: Some("HOT"),
        description: "58 g honeycomb shell tuned for competitive play.",
    },
    ProductRow {
        id: "7",
        name: "XL Desk Mat",
        price: 29.99,
        original_price: None,
        image: "/products/desk-mat.jpg",
        category: "Accessories",
        rating: 4.4,
        reviews: 76,
        badge: None,
        description: "900 x 400 mm stitched-edge cloth surface.",
    },
    ProductRow {
        id: "8",
        name: "Streaming Microphone",
        price: 119.99,
        original_price: Some(149.99),
        image: "/products/microphone.jpg",
        category: "Accessories",
        rating: 4.8,
        reviews: 164,
        badge: None,
        description: "Cardioid condenser mic with a built-in shock mount.",
    },
];

/// The demo products, priced in `currency`.
pub fn demo_products(currency: Currency) -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|row| {
            let mut product = Product::new(
                row.id,
                row.name,
                Money::from_decimal(row.price, currency),
            )
            .with_image(row.image)
            .with_category(row.category)
            .with_rating(row.rating, row.reviews)
            .with_description(row.description);
            if let Some(original) = row.original_price {
                product = product.with_original_price(Money::from_decimal(original, currency));
            }
            if let Some(badge) = row.badge {
                product = product.with_badge(badge);
            }
            product
        })
        .collect()
}

/// The "browse by category" cards.
pub fn demo_categories() -> Vec<Category> {
    vec![
        Category::new("headsets", "Headsets", "/categories/headsets.jpg", 48),
        Category::new("keyboards", "Keyboards", "/categories/keyboards.jpg", 36),
        Category::new("mice", "Mice", "/categories/mice.jpg", 52),
    ]
}

/// Build the demo catalog.
pub fn demo_catalog(currency: Currency) -> Result<Catalog, CommerceError> {
    Catalog::new(currency, demo_products(currency), demo_categories())
}
