//! Alias/synonym resolver.
//!
//! Maps a free-text query (trade name, generic name, accented Spanish
//! name, partial substring) to the canonical key used by the knowledge
//! tables. Matching is exact-then-substring with first-match-wins over
//! table insertion order; there is no edit-distance matching and no
//! ranking among multiple substring hits, so a short key that is a
//! substring of many names can shadow the intended target. That ambiguity
//! is part of the lookup contract; see DESIGN.md.

use crate::data;

/// Static synonym table: canonical key → trade names, English names and
/// common misspellings. Entry order is observable (first match wins).
pub const MEDICATION_SYNONYMS: &[(&str, &[&str])] = &[
    ("ketoprofeno", &["keto", "ketonal", "profenid"]),
    (
        "paracetamol",
        &["acetaminofen", "tylenol", "acetaminofeno", "tempra", "panadol"],
    ),
    ("ibuprofeno", &["ibu", "advil", "motrin", "nurofen", "buprex"]),
    ("amoxicilina", &["amox", "amoxil", "amoxidal", "augmentin"]),
    (
        "aspirina",
        &["asa", "ácido acetilsalicílico", "bayaspirina", "adiro"],
    ),
    ("ondansetrón", &["ondasetron", "zofran"]),
    ("warfarina", &["coumadin"]),
    ("metformina", &["glucophage"]),
    ("omeprazol", &["omepral", "losec", "prilosec"]),
    ("diazepam", &["valium"]),
    ("fluoxetina", &["prozac"]),
    ("atorvastatina", &["lipitor"]),
    ("misoprostol", &["cytotec"]),
    ("metildopa", &["aldomet"]),
    ("naproxeno", &["aleve"]),
    ("diclofenaco", &["voltaren"]),
    ("ranitidina", &["zantac"]),
    ("famotidina", &["pepcid"]),
    ("antiácido", &["maalox", "mylanta"]),
    ("calcio", &["tums", "carbonato de calcio"]),
    ("loratadina", &["claritin"]),
    ("cetirizina", &["zyrtec"]),
    ("difenhidramina", &["benadryl"]),
    ("clotrimazol", &["canesten"]),
    ("miconazol", &["monistat"]),
    ("fluconazol", &["diflucan"]),
    ("cefalexina", &["keflex"]),
    ("azitromicina", &["zithromax"]),
    ("ácido fólico", &["folato", "vitamina b9"]),
    ("hierro", &["sulfato ferroso"]),
];

/// Canonical keys in resolution order: essential table first, then
/// comprehensive, then legacy, then synonym-only canonicals. Duplicates
/// across tables are harmless under first-match-wins.
fn canonical_keys() -> impl Iterator<Item = &'static str> {
    data::essential::keys()
        .chain(data::comprehensive::keys())
        .chain(data::legacy::keys())
        .chain(MEDICATION_SYNONYMS.iter().map(|(key, _)| *key))
}

/// Resolve a free-text query to a canonical key.
///
/// Matching order, first hit wins:
/// 1. exact canonical key
/// 2. exact alias in the synonym table
/// 3. substring against canonical keys, in both directions
/// 4. substring against aliases, in both directions
///
/// Pure function over static data; no I/O.
pub fn resolve(query: &str) -> Option<&'static str> {
    let query = query.to_lowercase();
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    if let Some(key) = canonical_keys().find(|key| *key == query) {
        return Some(key);
    }

    for &(canonical, aliases) in MEDICATION_SYNONYMS {
        if aliases.iter().any(|alias| *alias == query) {
            return Some(canonical);
        }
    }

    if let Some(key) = canonical_keys().find(|key| key.contains(query) || query.contains(key)) {
        return Some(key);
    }

    for &(canonical, aliases) in MEDICATION_SYNONYMS {
        if aliases
            .iter()
            .any(|alias| alias.contains(query) || query.contains(alias))
        {
            return Some(canonical);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_canonical() {
        assert_eq!(resolve("paracetamol"), Some("paracetamol"));
        assert_eq!(resolve("  Warfarina  "), Some("warfarina"));
    }

    #[test]
    fn test_exact_alias() {
        assert_eq!(resolve("tylenol"), Some("paracetamol"));
        assert_eq!(resolve("coumadin"), Some("warfarina"));
        assert_eq!(resolve("valium"), Some("diazepam"));
    }

    #[test]
    fn test_substring_canonical() {
        // Query is a prefix of the key
        assert_eq!(resolve("paraceta"), Some("paracetamol"));
        // Key is contained in a longer query
        assert_eq!(resolve("warfarina sódica 5mg"), Some("warfarina"));
    }

    #[test]
    fn test_substring_alias() {
        assert_eq!(resolve("tyleno"), Some("paracetamol"));
    }

    #[test]
    fn test_idempotence() {
        for query in ["paracetamol", "tylenol", "coumadin", "enalapril", "keflex"] {
            let first = resolve(query).unwrap();
            assert_eq!(resolve(first), Some(first));
        }
    }

    #[test]
    fn test_unknown_query() {
        assert_eq!(resolve("xyznonexistentdrug123"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("   "), None);
    }

    #[test]
    fn test_short_query_shadowing() {
        // Known ambiguity: a short fragment hits the first key containing it
        // in insertion order, which may not be the drug the user meant.
        assert_eq!(resolve("ina"), Some("nistatina"));
    }

    #[test]
    fn test_accented_spanish_names() {
        assert_eq!(resolve("ácido fólico"), Some("ácido fólico"));
        assert_eq!(resolve("folato"), Some("ácido fólico"));
    }
}
