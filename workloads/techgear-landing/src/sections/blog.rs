//! Blog teaser grid.

use super::{html_escape, reveal_class};
use crate::data::BlogPost;

pub fn render_blog(posts: &[BlogPost], revealed: bool) -> String {
    let articles: String = posts
        .iter()
        .map(|post| {
            format!(
                r#"<article class="blog-card" data-post-id="{id}">
            <img src="{image}" alt="{title}">
            <div class="blog-meta">
                <span class="blog-category">{category}</span>
                <time datetime="{iso}">{date}</time>
            </div>
            <h3>{title}</h3>
            <p class="blog-excerpt">{excerpt}</p>
            <span class="read-more">Read More</span>
        </article>"#,
                id = html_escape(post.id.as_str()),
                image = html_escape(&post.image),
                title = html_escape(&post.title),
                category = html_escape(&post.category),
                iso = post.date,
                date = post.display_date(),
                excerpt = html_escape(&post.excerpt),
            )
        })
        .collect();

    format!(
        r#"<section id="blog" class="blog {reveal}" data-section="blog">
    <div class="section-header">
        <span class="eyebrow">FROM THE BLOG</span>
        <h2>LATEST <span class="text-gradient">BLOG</span></h2>
        <a href="/blog" class="view-all">View All Articles</a>
    </div>
    <div class="blog-grid">
        {articles}
    </div>
</section>"#,
        reveal = reveal_class(revealed),
        articles = articles,
    )
}
