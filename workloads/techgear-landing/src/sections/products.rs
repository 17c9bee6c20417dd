//! Featured products rail.

use std::sync::Arc;

use techgear_commerce::catalog::Product;

use super::{html_escape, reveal_class};
use crate::interaction::ProductRail;

/// Render the featured products rail with its scroll arrows.
pub fn render_products(products: &[Arc<Product>], rail: &ProductRail, revealed: bool) -> String {
    let cards: String = products.iter().map(|p| render_product_card(p)).collect();

    format!(
        r#"<section id="products" class="products {reveal}" data-section="products">
    <div class="section-header">
        <span class="eyebrow">FEATURED PRODUCTS</span>
        <h2>OUR <span class="text-gradient">PRODUCTS</span></h2>
        <div class="rail-arrows">
            <button type="button" data-action="scroll_rail" data-direction="left" aria-label="Scroll left">&larr;</button>
            <button type="button" data-action="scroll_rail" data-direction="right" aria-label="Scroll right">&rarr;</button>
        </div>
    </div>
    <div class="product-rail" data-scroll-left="{offset}">
        {cards}
    </div>
    <div class="products-more"><button type="button" class="btn-outline">View All Products</button></div>
</section>"#,
        reveal = reveal_class(revealed),
        offset = rail.offset(),
        cards = cards,
    )
}

fn render_product_card(product: &Product) -> String {
    let badge = product
        .badge
        .as_ref()
        .map(|b| format!(r#"<span class="product-badge">{}</span>"#, html_escape(b)))
        .unwrap_or_default();

    let original = product
        .original_price
        .filter(|_| product.is_on_sale())
        .map(|m| format!(r#"<span class="price-original">{}</span>"#, m.display()))
        .unwrap_or_default();

    format!(
        r#"<div class="product-card" data-product-id="{id}">
            <div class="product-media">
                {badge}
                <img src="{image}" alt="{name}">
                <button type="button" class="quick-add" data-action="add_to_cart" data-product-id="{id}" aria-label="Add to cart">Add</button>
            </div>
            <div class="product-info">
                <p class="product-category">{category}</p>
                <h3>{name}</h3>
                <div class="product-rating"><span class="rating">{rating:.1}</span> <span class="review-count">({reviews})</span></div>
                <div class="product-price"><span class="price">{price}</span>{original}</div>
            </div>
        </div>"#,
        id = html_escape(product.id.as_str()),
        badge = badge,
        image = html_escape(&product.image),
        name = html_escape(&product.name),
        category = html_escape(&product.category),
        rating = product.rating,
        reviews = product.review_count,
        price = product.price.display(),
        original = original,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use techgear_commerce::prelude::*;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_sale_card_shows_original_price() {
        let product = Arc::new(
            Product::new("k", "Keyboard", usd(8999))
                .with_original_price(usd(10999))
                .with_badge("SALE"),
        );
        let html = render_products(&[product], &ProductRail::new(1), true);
        assert!(html.contains("products is-revealed"));
        assert!(html.contains("$89.99"));
        assert!(html.contains(r#"<span class="price-original">$109.99</span>"#));
        assert!(html.contains(r#"<span class="product-badge">SALE</span>"#));
    }

    #[test]
    fn test_original_price_hidden_when_not_a_discount() {
        let product = Arc::new(Product::new("k", "Keyboard", usd(8999)).with_original_price(usd(100)));
        let html = render_products(&[product], &ProductRail::new(1), true);
        assert!(!html.contains("price-original"));
    }
}
