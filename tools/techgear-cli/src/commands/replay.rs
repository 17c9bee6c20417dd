//! Replay a scripted UI session.

use std::path::Path;

use anyhow::{Context as _, Result};
use techgear_landing::{render_page, SessionSummary, Storefront, UiEvent};
use tracing::warn;

use super::ReplayArgs;
use crate::context::Context;
use crate::output::{toast_badge, Output};

/// Run the replay command.
pub fn run(args: ReplayArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.file);
    let events = load_events(&path)?;
    ctx.output
        .debug(&format!("Loaded {} events from {}", events.len(), path.display()));

    let mut storefront = ctx.storefront()?;
    apply_events(&mut storefront, events, &ctx.output);

    let summary = storefront.summary();
    if ctx.output.is_json() {
        ctx.output.json(&summary);
    } else {
        print_summary(&summary, &ctx.output);
    }

    if args.render {
        println!("{}", render_page(&storefront));
    }

    Ok(())
}

/// Read a JSON array of events.
pub fn load_events(path: &Path) -> Result<Vec<UiEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event script: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse event script: {}", path.display()))
}

/// Apply events in order. Rejected events are reported and skipped.
/// Returns the number rejected.
pub fn apply_events(
    storefront: &mut Storefront,
    events: impl IntoIterator<Item = UiEvent>,
    output: &Output,
) -> usize {
    let mut rejected = 0;
    for (index, event) in events.into_iter().enumerate() {
        if let Err(e) = storefront.dispatch(event) {
            warn!(index, error = %e, "event rejected");
            output.warn(&format!("Event #{} rejected: {}", index, e));
            rejected += 1;
        }
    }
    rejected
}

fn print_summary(summary: &SessionSummary, output: &Output) {
    output.header("Session summary");
    output.kv("events applied", &summary.events_applied.to_string());
    output.kv("events rejected", &summary.events_rejected.to_string());

    output.header("Cart");
    if summary.lines.is_empty() {
        output.info("Your cart is empty");
    } else {
        for line in &summary.lines {
            output.table_row(
                &[
                    line.product_id.as_str(),
                    &line.name,
                    &format!("x{}", line.quantity),
                    &line.total.display(),
                ],
                &[4, 30, 6, 10],
            );
        }
    }
    output.kv("items", &summary.total_items.to_string());
    output.kv("subtotal", &summary.subtotal);
    output.kv("panel", if summary.cart_open { "open" } else { "closed" });

    output.header("Page");
    output.kv("active review", &summary.active_review.to_string());
    let revealed: Vec<String> = summary.revealed.iter().map(|s| s.to_string()).collect();
    output.kv("revealed", &revealed.join(", "));
    output.kv("newsletter", if summary.newsletter_subscribed { "subscribed" } else { "-" });
    output.kv("nav scrolled", &summary.nav_scrolled.to_string());
    output.kv("rail offset", &format!("{}px", summary.rail_offset));

    if !summary.toasts.is_empty() {
        output.header("Toasts");
        for toast in &summary.toasts {
            let kind = toast_badge(toast.kind.as_str());
            let text = match &toast.description {
                Some(d) => format!("[{}] {} ({})", kind, toast.message, d),
                None => format!("[{}] {}", kind, toast.message),
            };
            output.list_item(&text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use techgear_landing::StorefrontSettings;

    #[test]
    fn test_load_and_apply_script() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(
            &path,
            r#"[
                {"type": "add_to_cart", "product_id": "1"},
                {"type": "add_to_cart", "product_id": "does-not-exist"},
                {"type": "set_quantity", "product_id": "1", "quantity": 5},
                {"type": "toggle_cart"}
            ]"#,
        )
        .unwrap();

        let events = load_events(&path).unwrap();
        assert_eq!(events.len(), 4);

        let mut storefront = Storefront::new(StorefrontSettings::default()).unwrap();
        let rejected = apply_events(&mut storefront, events, &Output::new(false, true));
        assert_eq!(rejected, 1);

        let summary = storefront.summary();
        assert_eq!(summary.total_items, 5);
        assert_eq!(summary.subtotal, "$749.95");
        assert!(summary.cart_open);
    }

    #[test]
    fn test_bad_script_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"[{"type": "teleport"}]"#).unwrap();

        let err = load_events(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse event script"));
    }
}
