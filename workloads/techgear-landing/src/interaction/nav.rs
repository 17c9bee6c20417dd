//! Navigation bar state.

use serde::Serialize;

/// Scroll offset (px) past which the bar switches to its condensed style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// A navigation link: label and in-page anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", href: "#hero" },
    NavLink { label: "Categories", href: "#categories" },
    NavLink { label: "Products", href: "#products" },
    NavLink { label: "Reviews", href: "#reviews" },
    NavLink { label: "Blog", href: "#blog" },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NavState {
    scroll_y: f64,
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the window scroll offset. Returns whether `scrolled` flipped.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.scroll_y = scroll_y;
        let scrolled = scroll_y > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Following a link closes the mobile menu. Returns the link's anchor
    /// when `href` is one of [`NAV_LINKS`].
    pub fn follow(&mut self, href: &str) -> Option<&'static str> {
        self.close_menu();
        NAV_LINKS.iter().find(|l| l.href == href).map(|l| l.href)
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        let mut nav = NavState::new();
        assert!(!nav.on_scroll(50.0));
        assert!(!nav.is_scrolled());
        assert!(nav.on_scroll(50.5));
        assert!(nav.is_scrolled());
        assert!(nav.on_scroll(10.0));
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_follow_closes_menu() {
        let mut nav = NavState::new();
        assert!(nav.toggle_menu());
        assert_eq!(nav.follow("#products"), Some("#products"));
        assert!(!nav.is_menu_open());

        nav.toggle_menu();
        assert_eq!(nav.follow("#nowhere"), None);
        assert!(!nav.is_menu_open());
    }
}
