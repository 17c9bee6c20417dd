//! CLI configuration.

use std::fmt;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use techgear_commerce::Currency;
use techgear_landing::interaction::RevealThresholds;
use techgear_landing::interaction::notify::DEFAULT_TOAST_CAPACITY;
use techgear_landing::{StorefrontSettings, DEFAULT_FEATURED_PRODUCTS};

/// File names searched for, in order, when no `--config` is given.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["techgear.toml", ".techgear.toml", "techgear.json"];

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Store settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Visible fraction each section needs before it reveals.
    #[serde(default)]
    pub reveal: RevealThresholds,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Session settings derived from this config.
    pub fn settings(&self) -> Result<StorefrontSettings> {
        let Some(currency) = Currency::from_code(&self.store.currency) else {
            bail!("Unsupported currency: {}", self.store.currency);
        };
        Ok(StorefrontSettings {
            currency,
            featured_products: self.store.featured_products,
            toast_capacity: self.store.toast_capacity,
            reveal: self.reveal,
        })
    }

    /// Check the config. Returns `(errors, warnings)`.
    pub fn validate(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if Currency::from_code(&self.store.currency).is_none() {
            errors.push(format!(
                "store.currency '{}' is not a supported currency code",
                self.store.currency
            ));
        }
        if self.store.toast_capacity == 0 {
            warnings.push("store.toast_capacity is 0; one toast will still be kept".to_string());
        }
        if self.store.featured_products == 0 {
            warnings.push("store.featured_products is 0; the product grid will be empty".to_string());
        }
        for section in self.reveal.out_of_range() {
            errors.push(format!("reveal.{} must be between 0.0 and 1.0", section));
        }
        if self.logging.level.parse::<tracing::Level>().is_err() {
            errors.push(format!(
                "logging.level '{}' is not one of trace, debug, info, warn, error",
                self.logging.level
            ));
        }

        (errors, warnings)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Store settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// ISO currency code for fixture prices.
    pub currency: String,

    /// Products shown in the featured grid.
    pub featured_products: usize,

    /// Toasts kept on screen before the oldest is dropped.
    pub toast_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD.code().to_string(),
            featured_products: DEFAULT_FEATURED_PRODUCTS,
            toast_capacity: DEFAULT_TOAST_CAPACITY,
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON lines, for log aggregation.
    Json,
    /// Compact human-readable lines.
    #[default]
    Human,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Human => write!(f, "human"),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,

    /// Default filter when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Human,
            level: "warn".to_string(),
        }
    }
}

/// Generate a default techgear.toml config file.
pub fn generate_default_config() -> String {
    let reveal = RevealThresholds::default();
    format!(
        r#"# TechGear storefront configuration

[store]
currency = "USD"
# Products shown in the featured grid
featured_products = {featured}
# Toasts kept on screen before the oldest is dropped
toast_capacity = {toasts}

# Visible fraction (0.0 - 1.0) a section needs before it reveals.
# The hero always reveals on mount.
[reveal]
categories = {categories}
products = {products}
features = {features}
reviews = {reviews}
blog = {blog}
newsletter = {newsletter}

[logging]
# "human" or "json"
format = "human"
# Used when RUST_LOG is unset; --verbose forces debug
level = "warn"
"#,
        featured = DEFAULT_FEATURED_PRODUCTS,
        toasts = DEFAULT_TOAST_CAPACITY,
        categories = reveal.categories,
        products = reveal.products,
        features = reveal.features,
        reviews = reveal.reviews,
        blog = reveal.blog,
        newsletter = reveal.newsletter,
    )
}
