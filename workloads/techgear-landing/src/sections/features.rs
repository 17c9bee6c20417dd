//! Features section with the pointer spotlight.

use super::{html_escape, reveal_class};
use crate::data::Feature;
use crate::interaction::parallax::SPOTLIGHT_RADIUS;
use crate::interaction::Point;

/// Render the features section.
///
/// The spotlight is a square of twice [`SPOTLIGHT_RADIUS`] centred on the
/// last pointer position inside the section.
pub fn render_features(features: &[Feature], spotlight: Point, revealed: bool) -> String {
    let features_html: String = features
        .iter()
        .map(|f| {
            format!(
                r#"<div class="feature-card">
            <span class="feature-icon" data-icon="{}"></span>
            <h3 class="feature-title">{}</h3>
            <p class="feature-description">{}</p>
        </div>"#,
                html_escape(&f.icon),
                html_escape(&f.title),
                html_escape(&f.description)
            )
        })
        .collect();

    format!(
        r#"<section id="features" class="features {reveal}" data-section="features">
    <div class="spotlight" style="left: {left:.0}px; top: {top:.0}px; width: {size:.0}px; height: {size:.0}px"></div>
    <div class="section-header">
        <span class="eyebrow">WHY CHOOSE US</span>
        <h2>OUR <span class="text-gradient">FEATURES</span></h2>
    </div>
    <div class="features-grid">
        {features}
    </div>
</section>"#,
        reveal = reveal_class(revealed),
        left = spotlight.x - SPOTLIGHT_RADIUS,
        top = spotlight.y - SPOTLIGHT_RADIUS,
        size = SPOTLIGHT_RADIUS * 2.0,
        features = features_html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spotlight_position() {
        let features = vec![Feature::new("truck", "Free Shipping", "On orders over $50")];
        let html = render_features(&features, Point::new(300.0, 250.0), true);
        assert!(html.contains("left: 100px; top: 50px; width: 400px; height: 400px"));
        assert!(html.contains(r#"data-icon="truck""#));
        assert!(html.contains("Free Shipping"));
    }
}
