//! Reward-tier catalog types.

use std::collections::BTreeMap;

use serde::Deserialize;

/// One reward tier: a title, a description, and payout ranges per severity.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Tier {
    /// Tier title shown on the selection card.
    #[serde(default)]
    pub title: String,
    /// Short tier description.
    #[serde(default)]
    pub description: String,
    /// Severity label to payout-range string (e.g. `critical` to
    /// `"$2,000 - $4,500"`). Blank amounts mean the severity is not
    /// rewarded under this tier.
    #[serde(default)]
    pub levels: BTreeMap<String, String>,
}

/// Per-severity example text, either a single entry or several.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Examples {
    /// A single example.
    One(String),
    /// Several examples.
    Many(Vec<String>),
}

impl Examples {
    /// View the examples as a slice regardless of variant.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::One(example) => std::slice::from_ref(example),
            Self::Many(examples) => examples,
        }
    }
}

/// The full reward configuration: tiers plus shared severity metadata.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct TierCatalog {
    /// Available tiers, keyed by tier identifier.
    #[serde(default)]
    pub tiers: BTreeMap<String, Tier>,
    /// Severity label to definition text, shared across tiers.
    #[serde(default)]
    pub definitions: BTreeMap<String, String>,
    /// Severity label to example text(s), shared across tiers.
    #[serde(default)]
    pub examples: BTreeMap<String, Examples>,
    /// Tier used for the masked preview before the user picks one.
    #[serde(default)]
    pub default_tier: Option<String>,
}

impl TierCatalog {
    /// Look up a tier by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Tier> {
        self.tiers.get(key)
    }

    /// The tier to show while no tier is selected.
    ///
    /// Prefers `default_tier` when it names an existing tier, then the
    /// first tier in key order. `None` only for an empty catalog.
    #[must_use]
    pub fn fallback_key(&self) -> Option<&str> {
        self.default_tier
            .as_deref()
            .filter(|key| self.tiers.contains_key(*key))
            .or_else(|| self.tiers.keys().next().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(keys: &[&str]) -> TierCatalog {
        let mut tiers = BTreeMap::new();
        for key in keys {
            tiers.insert((*key).to_owned(), Tier::default());
        }
        TierCatalog {
            tiers,
            ..TierCatalog::default()
        }
    }

    #[test]
    fn test_fallback_prefers_default_tier() {
        let mut cat = catalog(&["basic", "premium"]);
        cat.default_tier = Some("premium".to_owned());
        assert_eq!(cat.fallback_key(), Some("premium"));
    }

    #[test]
    fn test_fallback_ignores_unknown_default() {
        let mut cat = catalog(&["basic"]);
        cat.default_tier = Some("gone".to_owned());
        assert_eq!(cat.fallback_key(), Some("basic"));
    }

    #[test]
    fn test_fallback_empty_catalog() {
        assert_eq!(TierCatalog::default().fallback_key(), None);
    }

    #[test]
    fn test_examples_as_slice() {
        let one = Examples::One("an example".to_owned());
        assert_eq!(one.as_slice(), ["an example".to_owned()]);

        let many = Examples::Many(vec!["a".to_owned(), "b".to_owned()]);
        assert_eq!(many.as_slice().len(), 2);
    }

    #[test]
    fn test_deserialize_catalog() {
        let json = r#"{
            "tiers": {
                "standard": {
                    "title": "Standard",
                    "description": "Typical program",
                    "levels": {"critical": "$2,000 - $4,500", "low": ""}
                }
            },
            "definitions": {"critical": "Full compromise."},
            "examples": {"critical": ["RCE", "SQL injection"], "low": "Open redirect"}
        }"#;

        let cat: TierCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(cat.fallback_key(), Some("standard"));
        let tier = cat.get("standard").unwrap();
        assert_eq!(tier.levels["critical"], "$2,000 - $4,500");
        assert_eq!(cat.examples["critical"].as_slice().len(), 2);
        assert_eq!(cat.examples["low"].as_slice(), ["Open redirect".to_owned()]);
    }
}
