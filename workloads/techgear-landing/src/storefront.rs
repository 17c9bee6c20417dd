//! The storefront session.
//!
//! [`Storefront`] owns every piece of page state, including the one
//! [`CartStore`]. All interaction arrives as a [`UiEvent`] and is applied
//! synchronously by [`Storefront::dispatch`]; renderers only ever borrow the
//! session.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use techgear_commerce::prelude::*;

use crate::data::{demo_catalog, SiteContent};
use crate::interaction::newsletter::SUBSCRIBED_MESSAGE;
use crate::interaction::notify::DEFAULT_TOAST_CAPACITY;
use crate::interaction::{
    parallax, Carousel, NavState, NewsletterForm, Notifier, Point, ProductRail, RailDirection,
    Rect, RevealBoard, RevealThresholds, Section, Tilt, Toast,
};

/// Number of products shown in the featured grid by default.
pub const DEFAULT_FEATURED_PRODUCTS: usize = 6;

/// Errors raised at the event boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorefrontError {
    #[error("unknown product: {0}")]
    UnknownProduct(String),

    #[error(transparent)]
    Commerce(#[from] CommerceError),
}

/// Session tunables.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontSettings {
    pub currency: Currency,
    pub featured_products: usize,
    pub toast_capacity: usize,
    pub reveal: RevealThresholds,
}

impl Default for StorefrontSettings {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            featured_products: DEFAULT_FEATURED_PRODUCTS,
            toast_capacity: DEFAULT_TOAST_CAPACITY,
            reveal: RevealThresholds::default(),
        }
    }
}

/// One user or browser event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// The page finished mounting.
    Mount,
    /// Window scrolled to `y` pixels.
    Scroll { y: f64 },
    /// An intersection sample for a section.
    SectionVisible { section: Section, fraction: f32 },
    ToggleMenu,
    FollowLink { href: String },
    AddToCart { product_id: String },
    RemoveFromCart { product_id: String },
    SetQuantity { product_id: String, quantity: i64 },
    IncrementQuantity { product_id: String },
    DecrementQuantity { product_id: String },
    OpenCart,
    CloseCart,
    ToggleCart,
    NextReview,
    PrevReview,
    SelectReview { index: usize },
    ScrollRail { direction: RailDirection },
    /// Pointer moved over the hero.
    HeroPointer { pointer: Point, rect: Rect },
    /// Pointer moved over the features section.
    FeaturesPointer { pointer: Point, rect: Rect },
    NewsletterInput { value: String },
    NewsletterSubmit,
    DismissToast { id: u64 },
}

/// Page state for one visitor session.
#[derive(Debug)]
pub struct Storefront {
    catalog: Catalog,
    content: SiteContent,
    cart: CartStore,
    reveal: RevealBoard,
    reviews: Carousel,
    newsletter: NewsletterForm,
    nav: NavState,
    rail: ProductRail,
    hero_tilt: Tilt,
    spotlight: Point,
    notifier: Notifier,
    featured_products: usize,
    applied: usize,
    rejected: usize,
}

impl Storefront {
    /// Session over the demo catalog and default content.
    pub fn new(settings: StorefrontSettings) -> Result<Self, StorefrontError> {
        let catalog = demo_catalog(settings.currency)?;
        Ok(Self::with_content(catalog, SiteContent::default(), settings))
    }

    /// Session over a caller-supplied catalog. The cart totals in the
    /// catalog's currency.
    pub fn with_content(catalog: Catalog, content: SiteContent, settings: StorefrontSettings) -> Self {
        let reviews = Carousel::new(content.reviews.len());
        let rail = ProductRail::new(catalog.featured(settings.featured_products).len());
        Self {
            cart: CartStore::new(catalog.currency()),
            catalog,
            content,
            reveal: RevealBoard::new(&settings.reveal),
            reviews,
            newsletter: NewsletterForm::new(),
            nav: NavState::new(),
            rail,
            hero_tilt: Tilt::default(),
            spotlight: Point::default(),
            notifier: Notifier::new(settings.toast_capacity),
            featured_products: settings.featured_products,
            applied: 0,
            rejected: 0,
        }
    }

    /// Apply one event.
    ///
    /// Fails only when an add names a product the catalog does not know; in
    /// that case nothing changes. Every other cart event goes straight to the
    /// store, where an id not in the cart is a no-op.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<(), StorefrontError> {
        let product = match &event {
            UiEvent::AddToCart { product_id } => match self.catalog.product(product_id) {
                Some(product) => Some(Arc::clone(product)),
                None => {
                    self.rejected += 1;
                    warn!(product_id = %product_id, "rejected add for unknown product");
                    return Err(StorefrontError::UnknownProduct(product_id.clone()));
                }
            },
            _ => None,
        };

        debug!(?event, "dispatch");
        self.applied += 1;

        match event {
            UiEvent::Mount => {
                self.reveal.mount();
            }
            UiEvent::Scroll { y } => {
                self.nav.on_scroll(y);
            }
            UiEvent::SectionVisible { section, fraction } => {
                self.reveal.observe(section, fraction);
            }
            UiEvent::ToggleMenu => {
                self.nav.toggle_menu();
            }
            UiEvent::FollowLink { href } => {
                if self.nav.follow(&href).is_none() {
                    debug!(href = %href, "followed link outside the nav");
                }
            }
            UiEvent::AddToCart { .. } => {
                if let Some(product) = product {
                    let message = format!("{} added to cart!", product.name);
                    let price = product.price.display();
                    self.cart.add(product);
                    self.notifier.success(message, Some(price));
                }
            }
            UiEvent::RemoveFromCart { product_id } => {
                let name = self
                    .cart
                    .line(&product_id)
                    .map(|line| line.product().name.clone());
                if let Some(name) = name {
                    self.cart.remove(&product_id);
                    self.notifier
                        .success(format!("{} removed from cart", name), None);
                }
            }
            UiEvent::SetQuantity {
                product_id,
                quantity,
            } => {
                self.cart.set_quantity(&product_id, quantity);
            }
            UiEvent::IncrementQuantity { product_id } => {
                self.cart.increment(&product_id);
            }
            UiEvent::DecrementQuantity { product_id } => {
                self.cart.decrement(&product_id);
            }
            UiEvent::OpenCart => self.cart.set_visible(true),
            UiEvent::CloseCart => self.cart.set_visible(false),
            UiEvent::ToggleCart => {
                self.cart.toggle_visible();
            }
            UiEvent::NextReview => {
                self.reviews.next();
            }
            UiEvent::PrevReview => {
                self.reviews.prev();
            }
            UiEvent::SelectReview { index } => {
                if !self.reviews.select(index) {
                    warn!(index, len = self.reviews.len(), "review index out of range");
                }
            }
            UiEvent::ScrollRail { direction } => {
                self.rail.scroll(direction);
            }
            UiEvent::HeroPointer { pointer, rect } => {
                self.hero_tilt = parallax::tilt(pointer, rect);
            }
            UiEvent::FeaturesPointer { pointer, rect } => {
                self.spotlight = parallax::spotlight(pointer, rect);
            }
            UiEvent::NewsletterInput { value } => self.newsletter.set_input(value),
            UiEvent::NewsletterSubmit => match self.newsletter.submit() {
                Ok(_) => {
                    self.notifier.success(SUBSCRIBED_MESSAGE, None);
                }
                Err(e) => {
                    warn!(error = %e, "newsletter signup rejected");
                    self.notifier.error(e.to_string());
                }
            },
            UiEvent::DismissToast { id } => {
                self.notifier.dismiss(id);
            }
        }
        Ok(())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Products shown in the featured grid.
    pub fn featured_products(&self) -> &[Arc<Product>] {
        self.catalog.featured(self.featured_products)
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.reveal.is_revealed(section)
    }

    pub fn reviews(&self) -> &Carousel {
        &self.reviews
    }

    pub fn newsletter(&self) -> &NewsletterForm {
        &self.newsletter
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn rail(&self) -> &ProductRail {
        &self.rail
    }

    pub fn hero_tilt(&self) -> Tilt {
        self.hero_tilt
    }

    pub fn spotlight(&self) -> Point {
        self.spotlight
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Snapshot of the session for reporting.
    pub fn summary(&self) -> SessionSummary {
        let totals = self.cart.totals();
        SessionSummary {
            events_applied: self.applied,
            events_rejected: self.rejected,
            total_items: totals.total_items,
            subtotal: totals.subtotal.display(),
            lines: totals.lines,
            cart_open: self.cart.is_visible(),
            active_review: self.reviews.active(),
            revealed: self.reveal.revealed(),
            newsletter_subscribed: self.newsletter.is_submitted(),
            nav_scrolled: self.nav.is_scrolled(),
            rail_offset: self.rail.offset(),
            toasts: self.notifier.toasts().cloned().collect(),
        }
    }
}

/// Serialisable snapshot of a session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub events_applied: usize,
    pub events_rejected: usize,
    pub total_items: u64,
    pub subtotal: String,
    pub lines: Vec<LineTotal>,
    pub cart_open: bool,
    pub active_review: usize,
    pub revealed: Vec<Section>,
    pub newsletter_subscribed: bool,
    pub nav_scrolled: bool,
    pub rail_offset: f64,
    pub toasts: Vec<Toast>,
}
