//! Site footer.

use super::html_escape;
use crate::data::{FooterContent, Link};

fn render_links(links: &[Link]) -> String {
    links
        .iter()
        .map(|l| {
            format!(
                r#"<li><a href="{}">{}</a></li>"#,
                html_escape(&l.href),
                html_escape(&l.label)
            )
        })
        .collect()
}

pub fn render_footer(footer: &FooterContent) -> String {
    let social: String = footer
        .social
        .iter()
        .map(|l| {
            format!(
                r#"<a href="{}" class="social-link" aria-label="{}"></a>"#,
                html_escape(&l.href),
                html_escape(&l.label)
            )
        })
        .collect();

    format!(
        r##"<footer class="site-footer">
    <div class="footer-container">
        <div class="footer-brand">
            <a href="#hero" class="logo">TECH<span class="logo-accent">GEAR</span></a>
            <p>{blurb}</p>
            <a href="mailto:{email}">{email}</a>
            <a href="tel:{phone}">{phone}</a>
            <p>{address}</p>
        </div>
        <div class="footer-column"><h4>Quick Links</h4><ul>{pages}</ul></div>
        <div class="footer-column"><h4>Support</h4><ul>{support}</ul></div>
        <div class="footer-column"><h4>Legal</h4><ul>{legal}</ul></div>
    </div>
    <div class="footer-bottom">
        <p>{copyright}</p>
        <div class="social-links">{social}</div>
    </div>
</footer>"##,
        blurb = html_escape(&footer.blurb),
        email = html_escape(&footer.email),
        phone = html_escape(&footer.phone),
        address = html_escape(&footer.address),
        pages = render_links(&footer.pages),
        support = render_links(&footer.support),
        legal = render_links(&footer.legal),
        copyright = html_escape(&footer.copyright),
        social = social,
    )
}
