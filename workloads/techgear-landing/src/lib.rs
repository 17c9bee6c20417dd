//! TechGear landing page.
//!
//! This workload holds everything above the commerce core:
//! - Static catalog and editorial content ([`data`])
//! - Interaction state machines: reveal-on-enter, reviews carousel,
//!   newsletter form, toasts, nav, parallax and the product rail
//!   ([`interaction`])
//! - The [`Storefront`] session that applies [`UiEvent`]s
//! - HTML section renderers ([`sections`]) and [`render_page`]

pub mod data;
pub mod interaction;
pub mod sections;
pub mod storefront;

pub use storefront::{
    SessionSummary, Storefront, StorefrontError, StorefrontSettings, UiEvent,
    DEFAULT_FEATURED_PRODUCTS,
};

use interaction::Section;
use sections::{
    render_blog, render_cart_panel, render_categories, render_features, render_footer,
    render_hero, render_nav, render_newsletter, render_products, render_reviews, render_toasts,
};

const PAGE_TITLE: &str = "TechGear | Premium Gaming Gear";
const PAGE_DESCRIPTION: &str =
    "High-performance gaming headsets, keyboards and mice with free shipping and easy returns.";

/// Render the full page for the current session state.
pub fn render_page(storefront: &Storefront) -> String {
    let content = storefront.content();
    let main = [
        render_hero(
            &content.hero,
            storefront.is_revealed(Section::Hero),
            storefront.hero_tilt(),
        ),
        render_categories(
            storefront.catalog().categories(),
            storefront.is_revealed(Section::Categories),
        ),
        render_products(
            storefront.featured_products(),
            storefront.rail(),
            storefront.is_revealed(Section::Products),
        ),
        render_features(
            &content.features,
            storefront.spotlight(),
            storefront.is_revealed(Section::Features),
        ),
        render_reviews(
            &content.reviews,
            storefront.reviews(),
            storefront.is_revealed(Section::Reviews),
        ),
        render_blog(&content.posts, storefront.is_revealed(Section::Blog)),
        render_newsletter(
            storefront.newsletter(),
            storefront.is_revealed(Section::Newsletter),
        ),
    ]
    .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="description" content="{description}">
<title>{title}</title>
<style>{styles}</style>
</head>
<body>
{nav}
{cart}
<main>
{main}
</main>
{footer}
{toasts}
</body>
</html>"#,
        description = PAGE_DESCRIPTION,
        title = PAGE_TITLE,
        styles = PAGE_STYLES,
        nav = render_nav(storefront.nav(), storefront.cart()),
        cart = render_cart_panel(storefront.cart()),
        main = main,
        footer = render_footer(&content.footer),
        toasts = render_toasts(storefront.notifier()),
    )
}

const PAGE_STYLES: &str = r#"
:root { --primary: #d90d2c; --bg: #0a0a0a; --bg-alt: #1a1a1a; --text: #ffffff; --muted: #9ca3af; }
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, sans-serif; background: var(--bg); color: var(--text); }
.is-hidden { opacity: 0; }
.is-revealed { opacity: 1; transition: opacity 0.6s ease-out; }
.cart-panel { position: fixed; top: 0; right: 0; height: 100%; transform: translateX(100%); }
.cart-panel.is-open { transform: none; }
.mobile-menu { display: none; }
.mobile-menu.is-open { display: block; }
.toaster { position: fixed; bottom: 1rem; right: 1rem; }
"#;
