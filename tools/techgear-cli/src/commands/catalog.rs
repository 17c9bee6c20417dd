//! List fixture data.

use anyhow::Result;

use super::{CatalogArgs, CatalogKind};
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let storefront = ctx.storefront()?;
    let catalog = storefront.catalog();
    let content = storefront.content();
    let out = &ctx.output;

    match args.kind {
        CatalogKind::Products => {
            if out.is_json() {
                let products: Vec<_> = catalog.products().iter().map(|p| p.as_ref()).collect();
                out.json(&products);
                return Ok(());
            }
            out.header(&format!("Products ({})", catalog.len()));
            for p in catalog.products() {
                let price = match p.discount_percentage() {
                    Some(pct) => format!("{} (-{}%)", p.price.display(), pct),
                    None => p.price.display(),
                };
                let rating = format!("{:.1} ({})", p.rating, p.review_count);
                out.table_row(
                    &[
                        p.id.as_str(),
                        &p.name,
                        &p.category,
                        &price,
                        &rating,
                        p.badge.as_deref().unwrap_or(""),
                    ],
                    &[3, 28, 12, 18, 12, 12],
                );
            }
        }
        CatalogKind::Categories => {
            if out.is_json() {
                out.json(&catalog.categories());
                return Ok(());
            }
            out.header("Categories");
            for c in catalog.categories() {
                out.table_row(&[c.id.as_str(), &c.name, &c.count_label()], &[12, 14, 14]);
            }
        }
        CatalogKind::Reviews => {
            if out.is_json() {
                out.json(&content.reviews);
                return Ok(());
            }
            out.header("Reviews");
            for r in &content.reviews {
                out.table_row(
                    &[&r.name, &r.render_stars(), &r.display_date()],
                    &[20, 6, 14],
                );
            }
        }
        CatalogKind::Posts => {
            if out.is_json() {
                out.json(&content.posts);
                return Ok(());
            }
            out.header("Blog posts");
            for post in &content.posts {
                out.table_row(
                    &[&post.display_date(), &post.category, &post.title],
                    &[14, 10, 50],
                );
            }
        }
    }

    Ok(())
}
