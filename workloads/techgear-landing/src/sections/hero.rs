//! Hero banner section.

use super::{html_escape, reveal_class};
use crate::data::HeroContent;
use crate::interaction::Tilt;

/// Render the hero banner. `tilt` is the current pointer tilt of the
/// product image.
pub fn render_hero(content: &HeroContent, revealed: bool, tilt: Tilt) -> String {
    let stats: String = content
        .stats
        .iter()
        .map(|s| {
            format!(
                r#"<div class="hero-stat"><p class="stat-value">{}</p><p class="stat-label">{}</p></div>"#,
                html_escape(&s.value),
                html_escape(&s.label)
            )
        })
        .collect();

    let badges: String = content
        .badges
        .iter()
        .map(|b| format!(r#"<div class="hero-badge">{}</div>"#, html_escape(b)))
        .collect();

    format!(
        r##"<section id="hero" class="hero {reveal}" data-section="hero">
    <div class="hero-bg"><img src="{bg}" alt="Background"></div>
    <div class="hero-content">
        <span class="hero-eyebrow">{eyebrow}</span>
        <h1 class="hero-headline">{headline}<br><span class="text-gradient">{accent}</span></h1>
        <p class="hero-subheadline">{sub}</p>
        <div class="hero-ctas">
            <a href="#products" class="btn-primary">{primary}</a>
            <a href="#categories" class="btn-outline">{secondary}</a>
        </div>
        <div class="hero-stats">{stats}</div>
    </div>
    <div class="hero-visual">
        <img src="{product}" alt="Gaming Headset" class="hero-product" style="transform: {transform}">
        {badges}
    </div>
</section>"##,
        reveal = reveal_class(revealed),
        bg = html_escape(&content.background_image),
        eyebrow = html_escape(&content.eyebrow),
        headline = html_escape(&content.headline),
        accent = html_escape(&content.headline_accent),
        sub = html_escape(&content.subheadline),
        primary = html_escape(&content.primary_cta),
        secondary = html_escape(&content.secondary_cta),
        stats = stats,
        product = html_escape(&content.product_image),
        transform = tilt.css(),
        badges = badges,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_hero() {
        let html = render_hero(&HeroContent::default(), true, Tilt::default());
        assert!(html.contains("hero is-revealed"));
        assert!(html.contains("NEW COLLECTION 2024"));
        assert!(html.contains("50K+"));
        assert!(html.contains("-25% OFF"));
        assert!(html.contains("rotateY(0.00deg) rotateX(0.00deg)"));
    }

    #[test]
    fn test_hero_hidden_before_mount() {
        let html = render_hero(&HeroContent::default(), false, Tilt::default());
        assert!(html.contains("hero is-hidden"));
    }
}
