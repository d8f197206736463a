//! Cross-checks message ids used by the crate against the fallback bundle.
//!
//! Two sources of ids exist:
//! - literal `t!("...")` calls anywhere under `src/`
//! - the static content tables (`core::content::message_ids`)
//!
//! Every id from either source must be defined in `i18n/en-US/hrcomm-ui.ftl`.
//! Fallback ids used by neither are reported on stderr but do not fail.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::content;

const FALLBACK_FTL: &str = include_str!("../../i18n/en-US/hrcomm-ui.ftl");

/// Message ids defined in a Fluent file (terms and comments skipped).
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Collect the first literal argument of every `t!(` call under `root`.
///
/// Only direct literals are seen; ids passed through variables belong in the
/// content tables, which are checked separately.
fn macro_keys_under(root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(source) = fs::read_to_string(&path) else {
            continue;
        };
        found.extend(macro_keys_in(&source));
    }

    found
}

fn macro_keys_in(source: &str) -> Vec<String> {
    const NEEDLE: &str = "t!(\"";
    source
        .match_indices(NEEDLE)
        .filter_map(|(pos, _)| {
            let rest = &source[pos + NEEDLE.len()..];
            let end = rest.find('"')?;
            let key = &rest[..end];
            (!key.is_empty() && key.chars().all(valid_key_char)).then(|| key.to_string())
        })
        .collect()
}

#[test]
fn macro_scanner_reads_literal_ids() {
    let sample = r#"h1 { {crate::t!("hero-title")} } p { {t!("footer-copyright", year = 1)} }"#;
    assert_eq!(macro_keys_in(sample), vec!["hero-title", "footer-copyright"]);
}

#[test]
fn every_referenced_id_is_defined() {
    let fallback = parse_ftl_keys(FALLBACK_FTL);
    assert!(!fallback.is_empty(), "no ids parsed from fallback bundle");

    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let mut referenced = macro_keys_under(&src_root);
    referenced.extend(content::message_ids().into_iter().map(str::to_string));

    let missing: Vec<_> = referenced.difference(&fallback).cloned().collect();
    assert!(
        missing.is_empty(),
        "ids referenced in code but missing from en-US ({}):\n{}",
        missing.len(),
        missing.join("\n")
    );

    let unused: Vec<_> = fallback.difference(&referenced).cloned().collect();
    if !unused.is_empty() {
        eprintln!(
            "[i18n] NOTE: {} fallback ids unused in Rust sources: {}",
            unused.len(),
            unused.join(", ")
        );
    }
}
