//! Internationalization (i18n) support for `hrcomm-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/hrcomm-ui.ftl   (fallback/reference)
//!   es-ES/hrcomm-ui.ftl   (additional locale)
//! ```
//!
//! Two lookup styles are used:
//! - `t!("nav-features")` for ids written inline in markup (checked at compile time).
//! - `tr(id)` for ids stored in the static content tables (`core::content`);
//!   those are covered by the content table tests instead.
//!
//! To add a new locale:
//! 1. Copy `en-US/hrcomm-ui.ftl` to `i18n/<lang-id>/hrcomm-ui.ftl`.
//! 2. Translate each message value (keep IDs and variable placeholders identical).
//! 3. Run tests to ensure completeness.
//!
//! Platform notes:
//! - Desktop: uses `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
//! - Assets are always embedded on WASM (`debug-embed` is enabled for that target).
use std::sync::Once;

use dioxus::logger::tracing::{debug, warn};
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-features")
///     t!("footer-copyright", year = 2024)
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "hrcomm-ui";

/// Locale used when nothing else matches.
pub const FALLBACK_LANGUAGE: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => debug!(?selected, "i18n bundles loaded"),
            Err(err) => warn!("failed selecting languages ({err}); continuing with fallback"),
        }
        disable_isolation();
    });
}

/// No locale here is right-to-left, so placeables skip the U+2068/U+2069 bidi marks.
/// Bundles are rebuilt on every `select`, hence this runs after each one.
fn disable_isolation() {
    LOADER.set_use_isolating(false);
}

/// Tag of the bundle lookups currently resolve against (first loaded language).
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        debug!(tag, "ignoring unparsable language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang])?;
    disable_isolation();
    Ok(())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Look up a message id that is only known at runtime (content tables).
pub fn tr(id: &str) -> String {
    LOADER.get(id)
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
