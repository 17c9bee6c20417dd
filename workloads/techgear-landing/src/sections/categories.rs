//! "Browse by category" grid.

use techgear_commerce::catalog::Category;

use super::{html_escape, reveal_class};

pub fn render_categories(categories: &[Category], revealed: bool) -> String {
    let cards: String = categories
        .iter()
        .map(|c| {
            format!(
                r#"<div class="category-card" data-category-id="{id}">
            <img src="{image}" alt="{name}">
            <p class="category-count">{count}</p>
            <h3>{name}</h3>
        </div>"#,
                id = html_escape(c.id.as_str()),
                image = html_escape(&c.image),
                name = html_escape(&c.name),
                count = c.count_label(),
            )
        })
        .collect();

    format!(
        r#"<section id="categories" class="categories {reveal}" data-section="categories">
    <div class="section-header">
        <span class="eyebrow">BROWSE BY CATEGORY</span>
        <h2>CHOOSE YOUR <span class="text-gradient">FAVORITE CATEGORY</span></h2>
    </div>
    <div class="categories-grid">
        {cards}
    </div>
</section>"#,
        reveal = reveal_class(revealed),
        cards = cards,
    )
}
