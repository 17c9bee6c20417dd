//! Whole-session behaviour: events in, page state and HTML out.

use techgear_landing::interaction::{Section, ToastKind};
use techgear_landing::{render_page, Storefront, StorefrontError, StorefrontSettings, UiEvent};

fn session() -> Storefront {
    Storefront::new(StorefrontSettings::default()).unwrap()
}

fn add(id: &str) -> UiEvent {
    UiEvent::AddToCart {
        product_id: id.to_string(),
    }
}

#[test]
fn newsletter_signup_flow() {
    let mut s = session();

    s.dispatch(UiEvent::NewsletterSubmit).unwrap();
    let toast = s.notifier().latest().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert_eq!(toast.message, "Please enter your email address");

    s.dispatch(UiEvent::NewsletterInput {
        value: "not-an-email".to_string(),
    })
    .unwrap();
    s.dispatch(UiEvent::NewsletterSubmit).unwrap();
    assert_eq!(
        s.notifier().latest().unwrap().message,
        "Please enter a valid email address"
    );
    assert_eq!(s.newsletter().input(), "not-an-email");
    assert!(!s.newsletter().is_submitted());

    s.dispatch(UiEvent::NewsletterInput {
        value: "user@example.com".to_string(),
    })
    .unwrap();
    s.dispatch(UiEvent::NewsletterSubmit).unwrap();
    let toast = s.notifier().latest().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
    assert_eq!(toast.message, "Thank you for subscribing!");
    assert_eq!(s.newsletter().input(), "");
    assert!(s.newsletter().is_submitted());

    let html = render_page(&s);
    assert!(html.contains("Successfully subscribed!"));
}

#[test]
fn cart_badge_and_panel_follow_the_store() {
    let mut s = session();
    let html = render_page(&s);
    assert!(!html.contains("cart-badge"));
    assert!(html.contains("Your cart is empty"));

    s.dispatch(add("3")).unwrap();
    s.dispatch(add("3")).unwrap();
    s.dispatch(add("7")).unwrap();
    s.dispatch(UiEvent::OpenCart).unwrap();

    let html = render_page(&s);
    assert!(html.contains(r#"<span class="cart-badge">3</span>"#));
    assert!(html.contains("cart-panel is-open"));
    assert!(!html.contains("Your cart is empty"));
    // 2 x 79.99 + 29.99
    assert!(html.contains("$189.97"));

    s.dispatch(UiEvent::DecrementQuantity {
        product_id: "7".to_string(),
    })
    .unwrap();
    s.dispatch(UiEvent::SetQuantity {
        product_id: "3".to_string(),
        quantity: 0,
    })
    .unwrap();
    assert!(s.cart().is_empty());
    assert!(!render_page(&s).contains("cart-badge"));
}

#[test]
fn unknown_product_add_is_rejected_and_edits_are_noops() {
    let mut s = session();
    s.dispatch(add("1")).unwrap();
    let before = render_page(&s);

    assert_eq!(
        s.dispatch(add("999")),
        Err(StorefrontError::UnknownProduct("999".to_string()))
    );
    for event in [
        UiEvent::RemoveFromCart {
            product_id: "999".to_string(),
        },
        UiEvent::SetQuantity {
            product_id: "999".to_string(),
            quantity: 2,
        },
        UiEvent::IncrementQuantity {
            product_id: "999".to_string(),
        },
    ] {
        assert_eq!(s.dispatch(event), Ok(()));
    }

    assert_eq!(render_page(&s), before);
    let summary = s.summary();
    assert_eq!(summary.events_applied, 4);
    assert_eq!(summary.events_rejected, 1);
    assert_eq!(summary.total_items, 1);
}

#[test]
fn sections_reveal_once() {
    let mut s = session();
    s.dispatch(UiEvent::Mount).unwrap();
    s.dispatch(UiEvent::SectionVisible {
        section: Section::Newsletter,
        fraction: 0.1,
    })
    .unwrap();
    assert!(!s.is_revealed(Section::Newsletter));

    s.dispatch(UiEvent::SectionVisible {
        section: Section::Newsletter,
        fraction: 0.5,
    })
    .unwrap();
    s.dispatch(UiEvent::SectionVisible {
        section: Section::Newsletter,
        fraction: 0.0,
    })
    .unwrap();

    assert_eq!(s.summary().revealed, vec![Section::Hero, Section::Newsletter]);
    let html = render_page(&s);
    assert!(html.contains("hero is-revealed"));
    assert!(html.contains("newsletter is-revealed"));
    assert!(html.contains("blog is-hidden"));
}

#[test]
fn replay_from_json_script() {
    let script = r#"[
        {"type": "mount"},
        {"type": "scroll", "y": 240.0},
        {"type": "add_to_cart", "product_id": "2"},
        {"type": "increment_quantity", "product_id": "2"},
        {"type": "next_review"},
        {"type": "scroll_rail", "direction": "right"},
        {"type": "hero_pointer", "pointer": {"x": 200.0, "y": 100.0},
         "rect": {"left": 0.0, "top": 0.0, "width": 200.0, "height": 100.0}}
    ]"#;
    let events: Vec<UiEvent> = serde_json::from_str(script).unwrap();

    let mut s = session();
    for event in events {
        s.dispatch(event).unwrap();
    }

    let summary = s.summary();
    assert_eq!(summary.events_applied, 7);
    assert_eq!(summary.total_items, 2);
    assert_eq!(summary.subtotal, "$259.98");
    assert_eq!(summary.active_review, 1);
    assert_eq!(summary.rail_offset, 320.0);
    assert!(summary.nav_scrolled);
    assert_eq!(s.hero_tilt().rotate_y, 5.0);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["lines"][0]["quantity"], 2);
    assert_eq!(json["revealed"][0], "hero");
}

#[test]
fn featured_grid_shows_first_six() {
    let s = session();
    let html = render_page(&s);
    assert_eq!(html.matches(r#"class="product-card""#).count(), 6);
    assert!(html.contains("Ultralight Esports Mouse"));
    assert!(!html.contains("XL Desk Mat"));
}
