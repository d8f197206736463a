use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Ensures every non‑fallback locale provides *at least* the keys present
/// in the fallback (en-US) `hrcomm-ui.ftl`, and no keys the fallback lacks.
///
/// This is a lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
/// - Does not attempt to parse multi-line pattern bodies (only keys)
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<locale>/hrcomm-ui.ftl`
/// 2. Copy all keys from `en-US/hrcomm-ui.ftl`
/// 3. Run `cargo test -p hrcomm-ui` to confirm completeness.
const EN_US: &str = include_str!("../i18n/en-US/hrcomm-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/hrcomm-ui.ftl");

/// Non-fallback locales. Register new ones here.
const LOCALES: &[(&str, &str)] = &[("es-ES", ES_ES)];

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys = extract_keys(EN_US);

    assert!(
        !fallback_keys.is_empty(),
        "Fallback (en-US) contains no keys."
    );
    assert_no_dup_keys(EN_US, "en-US");

    let mut failures = Vec::new();

    for (locale, src) in LOCALES {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<&String> = fallback_keys.difference(&keys).collect();

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing
                    .into_iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn no_locale_defines_orphan_keys() {
    let fallback_keys = extract_keys(EN_US);

    for (locale, src) in LOCALES {
        let keys = extract_keys(src);
        let orphans: BTreeSet<&String> = keys.difference(&fallback_keys).collect();
        assert!(
            orphans.is_empty(),
            "Locale {locale} defines keys absent from en-US: {orphans:?}"
        );
    }
}

#[test]
fn copyright_keeps_year_placeholder() {
    for (locale, src) in [("en-US", EN_US)].iter().chain(LOCALES) {
        let line = src
            .lines()
            .find(|l| l.trim_start().starts_with("footer-copyright"))
            .unwrap_or_else(|| panic!("{locale}: footer-copyright missing"));
        assert!(
            line.contains("{ $year }"),
            "{locale}: footer-copyright lost its $year placeable"
        );
    }
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        if let Some(key) = message_key(line) {
            keys.insert(key.to_string());
        }
    }

    keys
}

fn message_key(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
        return None;
    }
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let valid = !key.is_empty()
        && !key.contains(' ')
        && !key.contains('\t')
        && !key.starts_with('[')
        && !key.starts_with('@');
    valid.then_some(key)
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for raw in src.lines() {
        if let Some(key) = message_key(raw) {
            if !seen.insert(key) {
                dups.insert(format!("{key}  (line: \"{raw}\")"));
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
