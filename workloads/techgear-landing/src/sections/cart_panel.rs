//! Slide-over cart panel.

use techgear_commerce::cart::{CartLine, CartStore};

use super::html_escape;

/// Render the cart panel.
pub fn render_cart_panel(cart: &CartStore) -> String {
    let open = if cart.is_visible() { " is-open" } else { "" };

    let body = if cart.is_empty() {
        r#"<div class="cart-empty">
            <p class="cart-empty-title">Your cart is empty</p>
            <p class="cart-empty-hint">Add some products to get started</p>
        </div>"#
            .to_string()
    } else {
        let lines: String = cart.lines().iter().map(render_line).collect();
        format!(
            r#"<ul class="cart-lines">{lines}</ul>
        <div class="cart-footer">
            <div class="cart-subtotal">
                <span>Subtotal</span>
                <span class="cart-subtotal-amount">{subtotal}</span>
            </div>
            <button type="button" class="btn-checkout">Checkout</button>
        </div>"#,
            lines = lines,
            subtotal = cart.subtotal().display(),
        )
    };

    format!(
        r#"<aside class="cart-panel{open}" data-section="cart" aria-hidden="{hidden}">
    <div class="cart-header">
        <h2>Your Cart</h2>
        <button type="button" class="cart-close" data-action="close_cart" aria-label="Close cart">&times;</button>
    </div>
    {body}
</aside>"#,
        open = open,
        hidden = !cart.is_visible(),
        body = body,
    )
}

fn render_line(line: &CartLine) -> String {
    let product = line.product();
    let id = html_escape(product.id.as_str());
    format!(
        r#"<li class="cart-line" data-product-id="{id}">
            <img src="{image}" alt="{name}" class="cart-line-image">
            <div class="cart-line-info">
                <h3>{name}</h3>
                <p class="cart-line-price">{price}</p>
                <div class="cart-line-qty">
                    <button type="button" data-action="decrement_quantity" data-product-id="{id}" aria-label="Decrease quantity">-</button>
                    <span class="qty">{quantity}</span>
                    <button type="button" data-action="increment_quantity" data-product-id="{id}" aria-label="Increase quantity">+</button>
                    <button type="button" class="cart-line-remove" data-action="remove_from_cart" data-product-id="{id}" aria-label="Remove">&times;</button>
                </div>
            </div>
        </li>"#,
        id = id,
        image = html_escape(&product.image),
        name = html_escape(&product.name),
        price = product.price.display(),
        quantity = line.quantity(),
    )
}
