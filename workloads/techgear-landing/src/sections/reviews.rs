//! Reviews carousel.

use super::{html_escape, reveal_class};
use crate::data::Review;
use crate::interaction::Carousel;

/// Render the reviews carousel: the active review, dot indicators and the
/// thumbnail grid.
pub fn render_reviews(reviews: &[Review], carousel: &Carousel, revealed: bool) -> String {
    let featured = reviews
        .get(carousel.active())
        .map(render_active_review)
        .unwrap_or_default();

    let dots: String = (0..reviews.len())
        .map(|i| {
            let active = if carousel.is_active(i) { " is-active" } else { "" };
            format!(
                r#"<button type="button" class="dot{}" data-action="select_review" data-index="{}" aria-label="Show review {}"></button>"#,
                active,
                i,
                i + 1
            )
        })
        .collect();

    let thumbs: String = reviews
        .iter()
        .enumerate()
        .map(|(i, review)| {
            let active = if carousel.is_active(i) { " is-active" } else { "" };
            format!(
                r#"<div class="review-thumb{active}" data-action="select_review" data-index="{i}">
            <img src="{avatar}" alt="{name}">
            <p>{name}</p>
            <span class="review-stars">{stars}</span>
        </div>"#,
                active = active,
                i = i,
                avatar = html_escape(&review.avatar),
                name = html_escape(&review.name),
                stars = review.render_stars(),
            )
        })
        .collect();

    format!(
        r#"<section id="reviews" class="reviews {reveal}" data-section="reviews">
    <div class="section-header">
        <span class="eyebrow">TESTIMONIALS</span>
        <h2>CUSTOMER <span class="text-gradient">REVIEWS</span></h2>
    </div>
    <div class="review-carousel" data-active="{active}">
        {featured}
        <div class="carousel-controls">
            <button type="button" data-action="prev_review" aria-label="Previous review">&lsaquo;</button>
            <div class="dots">{dots}</div>
            <button type="button" data-action="next_review" aria-label="Next review">&rsaquo;</button>
        </div>
    </div>
    <div class="review-thumbs">
        {thumbs}
    </div>
</section>"#,
        reveal = reveal_class(revealed),
        active = carousel.active(),
        featured = featured,
        dots = dots,
        thumbs = thumbs,
    )
}

fn render_active_review(review: &Review) -> String {
    format!(
        r#"<article class="review-card">
            <span class="review-stars">{stars}</span>
            <p class="review-comment">&ldquo;{comment}&rdquo;</p>
            <div class="review-author">
                <img src="{avatar}" alt="{name}">
                <div>
                    <h4>{name}</h4>
                    <time datetime="{iso}">{date}</time>
                </div>
            </div>
        </article>"#,
        stars = review.render_stars(),
        comment = html_escape(&review.comment),
        avatar = html_escape(&review.avatar),
        name = html_escape(&review.name),
        iso = review.date,
        date = review.display_date(),
    )
}
