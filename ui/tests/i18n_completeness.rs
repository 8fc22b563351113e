use std::collections::{BTreeSet, HashSet};

/// Fluent bundles embedded at compile time. The fallback comes first.
const FALLBACK: (&str, &str) = ("en-US", include_str!("../i18n/en-US/academy-ui.ftl"));
const LOCALES: &[(&str, &str)] = &[("ar", include_str!("../i18n/ar/academy-ui.ftl"))];

/// `t!` keys are compile-time checked against the fallback only, so every
/// other locale must define the same set: a missing key shows English text
/// in the Arabic UI, an extra key is dead translation.
#[test]
fn every_locale_defines_exactly_the_fallback_keys() {
    let (fallback_name, fallback_src) = FALLBACK;
    assert_no_dup_keys(fallback_src, fallback_name);
    let fallback_keys = extract_keys(fallback_src);
    assert!(
        !fallback_keys.is_empty(),
        "Fallback ({fallback_name}) contains no keys."
    );

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        assert_no_dup_keys(src, locale);
        let keys = extract_keys(src);

        let missing: BTreeSet<_> = fallback_keys.difference(&keys).cloned().collect();
        let extra: BTreeSet<_> = keys.difference(&fallback_keys).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
        if !extra.is_empty() {
            failures.push(format!(
                "Locale {locale} defines {} unknown key(s):\n  {}",
                extra.len(),
                extra.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}",
            failures.join("\n\n")
        );
    }
}

/// Placeholders must survive translation, or the argument silently vanishes.
#[test]
fn placeholders_match_the_fallback() {
    let (_, fallback_src) = FALLBACK;
    for (locale, src) in LOCALES {
        for key in extract_keys(fallback_src) {
            let expected = placeholders(message_body(fallback_src, &key));
            let found = placeholders(message_body(src, &key));
            assert_eq!(
                expected, found,
                "placeholders of `{key}` differ in {locale}"
            );
        }
    }
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    src.lines().filter_map(message_key).map(str::to_string).collect()
}

fn message_key(line: &str) -> Option<&str> {
    // Definitions start in column zero; variants and continuations are indented.
    if line.starts_with(char::is_whitespace) || line.starts_with('#') {
        return None;
    }
    let (left, _) = line.split_once('=')?;
    let key = left.trim();
    let valid = !key.is_empty()
        && !key.contains(char::is_whitespace)
        && !key.starts_with(['[', '*', '.', '@']);
    valid.then_some(key)
}

/// The text of one message, including indented continuation lines.
fn message_body(src: &str, key: &str) -> String {
    let mut lines = src.lines().skip_while(|line| message_key(line) != Some(key));
    let Some(first) = lines.next() else {
        return String::new();
    };
    let mut body = first.to_string();
    for line in lines.take_while(|line| line.starts_with(char::is_whitespace) || line.starts_with('}')) {
        body.push('\n');
        body.push_str(line);
    }
    body
}

fn placeholders(body: String) -> BTreeSet<String> {
    body.split('$')
        .skip(1)
        .map(|rest| {
            rest.chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                .collect()
        })
        .collect()
}

/// Assert no duplicate key definitions in a single FTL file.
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let dups: BTreeSet<_> = src
        .lines()
        .filter_map(message_key)
        .filter(|key| !seen.insert(*key))
        .collect();
    assert!(
        dups.is_empty(),
        "Duplicate key definitions in {locale}:\n  {}",
        dups.into_iter().collect::<Vec<_>>().join("\n  ")
    );
}
