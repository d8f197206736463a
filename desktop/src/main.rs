#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::dpi::LogicalSize, tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{use_locale_provider, SimpleFooter, SimpleHeader};
use ui::views::{Features, Info, Landing, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[layout(DesktopShell)]
        #[route("/features")]
        Features {},
        #[route("/:slug")]
        Info { slug: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!(
                            "HR Communication Platform – v{}",
                            env!("CARGO_PKG_VERSION")
                        ))
                        .with_inner_size(LogicalSize::new(1280.0, 860.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    // Provide global reactive language code signal (mirrors web approach)
    let lang_code = use_locale_provider();

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{ui::THEME_CSS_INLINE}" }

        // Keyed wrapper forces a full remount of the routed subtree on language change.
        div {
            key: "{lang_code()}",
            class: "app-root",
            Router::<Route> {}
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the shared ui crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Simple header/footer pair around the secondary pages.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        div { class: "page",
            SimpleHeader {}
            Outlet::<Route> {}
            SimpleFooter {}
        }
    }
}
