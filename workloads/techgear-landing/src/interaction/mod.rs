//! Client-side interaction state for the landing page.
//!
//! Each type here is a small synchronous state machine fed by
//! [`crate::UiEvent`]s through the storefront dispatcher.

pub mod carousel;
pub mod nav;
pub mod newsletter;
pub mod notify;
pub mod parallax;
pub mod rail;
pub mod reveal;

pub use carousel::Carousel;
pub use nav::{NavLink, NavState, NAV_LINKS};
pub use newsletter::{EmailAddress, NewsletterError, NewsletterForm};
pub use notify::{Notifier, Toast, ToastKind};
pub use parallax::{Point, Rect, Tilt};
pub use rail::{ProductRail, RailDirection};
pub use reveal::{RevealBoard, RevealThresholds, RevealTracker, Section};
