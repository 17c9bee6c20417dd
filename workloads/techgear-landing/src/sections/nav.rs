//! Navigation bar with the cart badge.

use techgear_commerce::cart::CartStore;

use super::html_escape;
use crate::interaction::{NavState, NAV_LINKS};

/// Render the navigation bar.
///
/// The cart badge only appears while the cart holds at least one item.
pub fn render_nav(nav: &NavState, cart: &CartStore) -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" class="nav-link">{}</a>"#,
                link.href,
                html_escape(link.label)
            )
        })
        .collect();

    let badge = cart
        .totals()
        .badge()
        .map(|count| format!(r#"<span class="cart-badge">{}</span>"#, count))
        .unwrap_or_default();

    let scrolled = if nav.is_scrolled() { " is-scrolled" } else { "" };
    let menu_open = if nav.is_menu_open() { " is-open" } else { "" };

    format!(
        r##"<header class="site-nav{scrolled}" data-section="nav">
    <nav class="nav-container">
        <a href="#hero" class="logo">TECH<span class="logo-accent">GEAR</span></a>
        <div class="nav-links">{links}</div>
        <div class="nav-actions">
            <button type="button" class="cart-button" data-action="toggle_cart" aria-label="Open cart">Cart{badge}</button>
            <button type="button" class="menu-toggle" data-action="toggle_menu" aria-expanded="{expanded}">Menu</button>
        </div>
    </nav>
    <div class="mobile-menu{menu_open}">{links}</div>
</header>"##,
        scrolled = scrolled,
        links = links,
        badge = badge,
        expanded = nav.is_menu_open(),
        menu_open = menu_open,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use techgear_commerce::prelude::*;

    #[test]
    fn test_badge_only_with_items() {
        let nav = NavState::new();
        let mut cart = CartStore::new(Currency::USD);
        assert!(!render_nav(&nav, &cart).contains("cart-badge"));

        let product = Arc::new(Product::new("p", "P", Money::new(100, Currency::USD)));
        cart.add(product.clone());
        cart.add(product);
        assert!(render_nav(&nav, &cart).contains(r#"<span class="cart-badge">2</span>"#));
    }

    #[test]
    fn test_scrolled_and_menu_classes() {
        let mut nav = NavState::new();
        nav.on_scroll(120.0);
        nav.toggle_menu();
        let html = render_nav(&nav, &CartStore::default());
        assert!(html.contains("site-nav is-scrolled"));
        assert!(html.contains("mobile-menu is-open"));
    }
}
