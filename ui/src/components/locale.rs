use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::i18n;

/// Provide the shared language code signal for everything below the caller.
///
/// Platforms call this once at the top of `App`; views read it through
/// [`use_locale`] so a locale switch re-renders them with fresh strings.
pub fn use_locale_provider() -> Signal<String> {
    i18n::init();
    // Seed from what `init` negotiated with the OS/browser, so the picker shows the live bundle.
    let code = use_signal(i18n::current_language);
    use_context_provider(|| code)
}

/// Current language code, subscribing the calling component to changes.
///
/// Falls back to the loader's current language when no provider exists (e.g. isolated renders).
pub fn use_locale() -> String {
    let ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    ctx.map(|code| code()).unwrap_or_else(i18n::current_language)
}

/// Language picker shown in the headers when more than one locale is embedded.
#[component]
pub fn LocaleSwitcher() -> Element {
    let langs = use_signal(i18n::available_languages);
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let current = lang_code_ctx
        .as_ref()
        .map(|c| c())
        .unwrap_or_else(i18n::current_language);

    if langs().len() <= 1 {
        return rsx! {};
    }

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                debug!(lang = %val, "locale switched");
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!(lang = %val, "locale switch failed: {err}"),
        }
    };

    rsx! {
        div { class: "locale-switcher",
            label { class: "visually-hidden", r#for: "locale-select",
                {crate::t!("nav-language-label")}
            }
            select {
                id: "locale-select",
                class: "locale-switcher__select",
                value: "{current}",
                oninput: on_change,
                for code in langs().into_iter() {
                    option { key: "{code}", value: "{code}", "{code}" }
                }
            }
        }
    }
}
