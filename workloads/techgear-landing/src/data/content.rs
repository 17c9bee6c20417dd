//! Editorial content for the landing page sections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use techgear_commerce::{PostId, ReviewId};

/// Date format used wherever a fixture date is shown.
pub const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// A headline number in the hero (e.g., "50K+ Happy Customers").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Hero banner content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub eyebrow: String,
    pub headline: String,
    pub headline_accent: String,
    pub subheadline: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub background_image: String,
    pub product_image: String,
    pub stats: Vec<Stat>,
    pub badges: Vec<String>,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            eyebrow: "NEW COLLECTION 2024".to_string(),
            headline: "GAMING".to_string(),
            headline_accent: "HEADSET".to_string(),
            subheadline: "Experience the future of audio with our premium gaming collection. \
                          Immersive sound, ultimate comfort."
                .to_string(),
            primary_cta: "SHOP NOW".to_string(),
            secondary_cta: "VIEW COLLECTION".to_string(),
            background_image: "/hero-bg.jpg".to_string(),
            product_image: "/hero-headphones.png".to_string(),
            stats: vec![
                Stat::new("50K+", "Happy Customers"),
                Stat::new("200+", "Products"),
                Stat::new("4.9", "Rating"),
            ],
            badges: vec!["7.1 Surround".to_string(), "-25% OFF".to_string()],
        }
    }
}

/// A feature highlight. `icon` is a symbolic key, not markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Feature {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// A customer testimonial shown in the reviews carousel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub name: String,
    pub avatar: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

impl Review {
    /// Star rating as text, filled then empty.
    pub fn render_stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }

    pub fn display_date(&self) -> String {
        self.date.format(DISPLAY_DATE_FORMAT).to_string()
    }
}

/// A blog teaser card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub date: NaiveDate,
    pub category: String,
}

impl BlogPost {
    pub fn display_date(&self) -> String {
        self.date.format(DISPLAY_DATE_FORMAT).to_string()
    }
}

/// A footer link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Footer columns and contact details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterContent {
    pub blurb: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub pages: Vec<Link>,
    pub support: Vec<Link>,
    pub legal: Vec<Link>,
    pub social: Vec<Link>,
    pub copyright: String,
}

impl Default for FooterContent {
    fn default() -> Self {
        Self {
            blurb: "Your premier destination for high-performance gaming gear. We deliver \
                    cutting-edge technology and exceptional customer service to gamers worldwide."
                .to_string(),
            email: "support@techgear.com".to_string(),
            phone: "+1 (234) 567-890".to_string(),
            address: "123 Gaming Street, Tech City".to_string(),
            pages: vec![
                Link::new("Home", "#hero"),
                Link::new("Products", "#products"),
                Link::new("Categories", "#categories"),
                Link::new("Reviews", "#reviews"),
                Link::new("Blog", "#blog"),
            ],
            support: vec![
                Link::new("Contact Us", "#"),
                Link::new("FAQs", "#"),
                Link::new("Shipping Info", "#"),
                Link::new("Returns", "#"),
                Link::new("Track Order", "#"),
            ],
            legal: vec![
                Link::new("Privacy Policy", "#"),
                Link::new("Terms of Service", "#"),
                Link::new("Cookie Policy", "#"),
            ],
            social: vec![
                Link::new("Facebook", "#"),
                Link::new("Twitter", "#"),
                Link::new("Instagram", "#"),
                Link::new("YouTube", "#"),
            ],
            copyright: "© 2024 TechGear. All rights reserved.".to_string(),
        }
    }
}

/// Everything on the page that is not catalog data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub hero: HeroContent,
    pub features: Vec<Feature>,
    pub reviews: Vec<Review>,
    pub posts: Vec<BlogPost>,
    pub footer: FooterContent,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            hero: HeroContent::default(),
            features: default_features(),
            reviews: default_reviews(),
            posts: default_posts(),
            footer: FooterContent::default(),
        }
    }
}

fn default_features() -> Vec<Feature> {
    vec![
        Feature::new(
            "truck",
            "Free Shipping",
            "Free delivery on all orders over $50, shipped within 24 hours.",
        ),
        Feature::new(
            "refresh-cw",
            "Easy Returns",
            "Changed your mind? Return any item within 30 days.",
        ),
        Feature::new(
            "shield",
            "2 Year Warranty",
            "Every product is covered against manufacturing defects.",
        ),
        Feature::new(
            "headphones",
            "24/7 Support",
            "Gamers helping gamers, any hour of the day.",
        ),
    ]
}

fn default_reviews() -> Vec<Review> {
    let review = |id: &str, name: &str, rating: u8, comment: &str, date: NaiveDate| Review {
        id: ReviewId::new(id),
        name: name.to_string(),
        avatar: format!("/avatars/{}.jpg", id),
        rating,
        comment: comment.to_string(),
        date,
    };
    vec![
        review(
            "r1",
            "Alex Johnson",
            5,
            "The X1 headset completely changed my gaming experience. The surround sound is \
             incredibly accurate and I can hear footsteps from every direction.",
            date(2024, 1, 15),
        ),
        review(
            "r2",
            "Sarah Chen",
            5,
            "Best mechanical keyboard I have owned. The switches feel amazing and the RGB \
             lighting is gorgeous.",
            date(2024, 1, 10),
        ),
        review(
            "r3",
            "Marcus Williams",
            4,
            "Great mouse with an excellent sensor. Battery life is impressive, it lasts me \
             over a week of heavy use.",
            date(2024, 1, 5),
        ),
        review(
            "r4",
            "Emily Rodriguez",
            5,
            "Fast shipping and the customer support team helped me pick the perfect setup.",
            date(2023, 12, 28),
        ),
    ]
}

fn default_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: PostId::new("b1"),
            title: "Choosing the Right Gaming Headset in 2024".to_string(),
            excerpt: "Surround sound, mic quality, comfort: what actually matters when you \
                      pick a headset for long sessions."
                .to_string(),
            image: "/blog/headset-guide.jpg".to_string(),
            date: date(2024, 1, 20),
            category: "Guides".to_string(),
        },
        BlogPost {
            id: PostId::new("b2"),
            title: "Linear vs Tactile Switches Explained".to_string(),
            excerpt: "A hands-on comparison of the switch types behind today's most popular \
                      mechanical keyboards."
                .to_string(),
            image: "/blog/switches.jpg".to_string(),
            date: date(2024, 1, 12),
            category: "Tech".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_shape() {
        let content = SiteContent::default();
        assert_eq!(content.features.len(), 4);
        assert_eq!(content.reviews.len(), 4);
        assert_eq!(content.posts.len(), 2);
        assert!(content.reviews.iter().all(|r| (1..=5).contains(&r.rating)));
    }

    #[test]
    fn test_display_date() {
        let content = SiteContent::default();
        assert_eq!(content.reviews[0].display_date(), "Jan 15, 2024");
        assert_eq!(content.posts[1].display_date(), "Jan 12, 2024");
    }

    #[test]
    fn test_render_stars() {
        let content = SiteContent::default();
        assert_eq!(content.reviews[2].render_stars(), "★★★★☆");
    }
}
