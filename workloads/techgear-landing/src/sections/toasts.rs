//! Toast stack.

use super::html_escape;
use crate::interaction::Notifier;

/// Render the current toasts, oldest first.
pub fn render_toasts(notifier: &Notifier) -> String {
    let items: String = notifier
        .toasts()
        .map(|t| {
            let description = t
                .description
                .as_ref()
                .map(|d| format!(r#"<p class="toast-description">{}</p>"#, html_escape(d)))
                .unwrap_or_default();
            format!(
                r#"<div class="toast toast-{kind}" role="status" data-toast-id="{id}">
        <p class="toast-message">{message}</p>{description}
    </div>"#,
                kind = t.kind.as_str(),
                id = t.id,
                message = html_escape(&t.message),
                description = description,
            )
        })
        .collect();

    format!(r#"<div class="toaster" aria-live="polite">{}</div>"#, items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_toasts() {
        let mut notifier = Notifier::default();
        notifier.success("Mouse added to cart!", Some("$79.99".to_string()));
        notifier.error("Please enter a valid email address");

        let html = render_toasts(&notifier);
        assert!(html.contains("toast toast-success"));
        assert!(html.contains(r#"<p class="toast-description">$79.99</p>"#));
        assert!(html.contains("toast toast-error"));
        assert!(html.find("Mouse added").unwrap() < html.find("valid email").unwrap());
    }
}
