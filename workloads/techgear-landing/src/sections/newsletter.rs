//! Newsletter signup section.

use super::{html_escape, reveal_class};
use crate::interaction::NewsletterForm;

/// Render the newsletter signup. Once a signup is accepted the form is
/// replaced by a confirmation.
pub fn render_newsletter(form: &NewsletterForm, revealed: bool) -> String {
    let body = if form.is_submitted() {
        r#"<div class="newsletter-success">
            <span class="success-icon">&#10003;</span>
            <span>Successfully subscribed!</span>
        </div>"#
            .to_string()
    } else {
        format!(
            r#"<form class="newsletter-form" id="newsletter-form" data-action="newsletter_submit" novalidate>
            <input type="email" name="email" placeholder="Enter your email" value="{}" aria-label="Email address">
            <button type="submit">Subscribe</button>
        </form>"#,
            html_escape(form.input())
        )
    };

    format!(
        r#"<section id="newsletter" class="newsletter {reveal}" data-section="newsletter">
    <div class="newsletter-content">
        <h2>SUBSCRIBE TO OUR <span class="text-gradient">NEWSLETTER</span></h2>
        <p>Stay updated with the latest gaming gear, exclusive deals, and tech news delivered straight to your inbox.</p>
        {body}
        <ul class="trust-badges">
            <li>No spam, ever</li>
            <li>Unsubscribe anytime</li>
            <li>Exclusive deals</li>
        </ul>
    </div>
</section>"#,
        reveal = reveal_class(revealed),
        body = body,
    )
}
