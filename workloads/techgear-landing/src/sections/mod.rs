//! Section renderers for the landing page.
//!
//! Each renderer borrows exactly the state it shows and returns an HTML
//! fragment. Text content is always escaped.

mod blog;
mod cart_panel;
mod categories;
mod features;
mod footer;
mod hero;
mod nav;
mod newsletter;
mod products;
mod reviews;
mod toasts;

pub use blog::*;
pub use cart_panel::*;
pub use categories::*;
pub use features::*;
pub use footer::*;
pub use hero::*;
pub use nav::*;
pub use newsletter::*;
pub use products::*;
pub use reviews::*;
pub use toasts::*;

/// Escape text for element content and double-quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// State class for a section that reveals on enter.
pub(crate) fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "is-revealed"
    } else {
        "is-hidden"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&lt;/a&gt;"
        );
    }
}
