//! Render the landing page to HTML.

use std::fs;

use anyhow::{Context as _, Result};
use techgear_landing::{render_page, UiEvent};

use super::replay::{apply_events, load_events};
use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
///
/// The page is rendered as mounted: the hero has already played its
/// entrance before any scripted events are applied.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let mut storefront = ctx.storefront()?;
    storefront.dispatch(UiEvent::Mount)?;

    if let Some(events) = &args.events {
        let path = ctx.resolve_path(events);
        let events = load_events(&path)?;
        let rejected = apply_events(&mut storefront, events, &ctx.output);
        ctx.output.debug(&format!(
            "Replayed {} ({} rejected)",
            path.display(),
            rejected
        ));
    }

    let html = render_page(&storefront);

    match &args.output {
        Some(out) => {
            let path = ctx.resolve_path(out);
            fs::write(&path, &html)
                .with_context(|| format!("Failed to write page: {}", path.display()))?;
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "output": path.display().to_string(),
                    "bytes": html.len(),
                }));
            } else {
                ctx.output
                    .success(&format!("Wrote {} ({} bytes)", path.display(), html.len()));
            }
        }
        None => println!("{}", html),
    }

    Ok(())
}
