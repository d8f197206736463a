#![cfg(test)]
//! Ensures the theme the desktop build inlines (`ui::THEME_CSS_INLINE`) is present & non‑trivial.
//!
//! The desktop app never loads a stylesheet from disk; a truncated or blank theme would
//! only show up at runtime as an unstyled window.

#[test]
fn embedded_css_is_not_empty() {
    assert!(
        !ui::THEME_CSS_INLINE.trim().is_empty(),
        "Embedded theme appears to be empty."
    );
}

#[test]
fn embedded_css_matches_file_on_disk() {
    let on_disk = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../ui/assets/theme/main.css"
    ))
    .expect("shared theme readable");
    assert_eq!(on_disk, ui::THEME_CSS_INLINE);
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-primary", "body {", ".site-header", ".button--primary"];
    for token in required {
        assert!(
            ui::THEME_CSS_INLINE.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
