//! Shared UI crate for the HR Communication Platform site. Every view, section and
//! the small amount of interaction state behind them live here; platform crates only
//! launch the renderer and own the `Route` enum.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Shared inline icon set (components/icon.rs)
    mod icon;
    pub use icon::Icon;

    // Locale context + picker (components/locale.rs)
    mod locale;
    pub use locale::{use_locale, use_locale_provider, LocaleSwitcher};

    // Single-page layout
    mod site_header;
    pub use site_header::{MobileMenu, SiteHeader, SiteHeaderBar};

    mod feature_grid;
    pub use feature_grid::{FeatureGrid, FeatureGridView, FeaturesSection, HoverEvent};

    mod app_promo;
    pub use app_promo::AppPromo;

    mod strategy;
    pub use strategy::Strategy;

    mod site_footer;
    pub use site_footer::SiteFooter;

    // Header/footer pair wrapped around the secondary pages
    mod simple_header;
    pub use simple_header::SimpleHeader;

    mod simple_footer;
    pub use simple_footer::SimpleFooter;
}

mod hero;
pub use hero::Hero;

/// Unified theme stylesheet (linked on web).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Same theme as text, for platforms that inline it (desktop).
pub const THEME_CSS_INLINE: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/theme/main.css"));
