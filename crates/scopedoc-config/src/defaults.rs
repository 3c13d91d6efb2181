//! Built-in template and reward catalog, used when no `scopedoc.toml`
//! overrides them.

use std::collections::BTreeMap;

use scopedoc_model::{Examples, TemplateBlock, Tier, TierCatalog};

fn paragraph(text: &str) -> TemplateBlock {
    TemplateBlock::Paragraph {
        text: text.to_owned(),
    }
}

fn list(items: &[&str]) -> TemplateBlock {
    TemplateBlock::List {
        items: items.iter().map(|item| (*item).to_owned()).collect(),
    }
}

/// The standard scope-document template.
///
/// Carries the empty `IN-SCOPE` and `REWARDS` regions, each immediately
/// followed by the heading the assembler uses as its insertion anchor
/// when the markers go missing.
pub(crate) fn default_template() -> Vec<TemplateBlock> {
    vec![
        paragraph("<strong>Welcome</strong>"),
        paragraph(
            "We invite security researchers to look into the assets listed below. \
             Found something? Report it through this program and we will get back \
             to you as soon as possible.",
        ),
        paragraph("--START IN-SCOPE----END IN-SCOPE--"),
        paragraph("<strong>Out of scope</strong>"),
        list(&[
            "Findings from automated scanners without a proof of concept",
            "Denial of service and rate-limiting issues",
            "Social engineering of employees or contractors",
            "Physical attacks against offices or data centers",
            "Vulnerabilities in third-party services outside our control",
        ]),
        paragraph("--START REWARDS----END REWARDS--"),
        paragraph("<strong>Disclosure policy</strong>"),
        list(&[
            "Report findings through this program only, and allow a reasonable \
             time for a fix before any public disclosure",
            "Do not access, modify, or delete data that is not yours; use test \
             accounts wherever possible",
            "Stop testing and report immediately when a vulnerability exposes \
             personal data",
        ]),
    ]
}

fn tier(title: &str, description: &str, levels: &[(&str, &str)]) -> Tier {
    Tier {
        title: title.to_owned(),
        description: description.to_owned(),
        levels: levels
            .iter()
            .map(|(severity, amount)| ((*severity).to_owned(), (*amount).to_owned()))
            .collect(),
    }
}

/// The built-in three-tier reward catalog.
pub(crate) fn default_catalog() -> TierCatalog {
    let mut tiers = BTreeMap::new();
    tiers.insert(
        "basic".to_owned(),
        tier(
            "Basic",
            "For programs just getting started.",
            &[
                ("critical", "$500 - $1,500"),
                ("high", "$250 - $500"),
                ("medium", "$100 - $250"),
                ("low", "$50 - $100"),
            ],
        ),
    );
    tiers.insert(
        "standard".to_owned(),
        tier(
            "Standard",
            "The most common choice.",
            &[
                ("critical", "$1,500 - $4,000"),
                ("high", "$750 - $1,500"),
                ("medium", "$250 - $750"),
                ("low", "$100 - $250"),
            ],
        ),
    );
    tiers.insert(
        "premium".to_owned(),
        tier(
            "Premium",
            "For mature, hardened targets.",
            &[
                ("critical", "$4,000 - $10,000"),
                ("high", "$2,000 - $4,000"),
                ("medium", "$750 - $2,000"),
                ("low", "$250 - $750"),
            ],
        ),
    );

    let definitions = [
        (
            "critical",
            "Exploitable with severe impact: full account takeover, remote code \
             execution, or exposure of sensitive data at scale.",
        ),
        (
            "high",
            "Significant impact on confidentiality or integrity for other users, \
             without requiring unlikely preconditions.",
        ),
        (
            "medium",
            "Limited impact, or a severe issue that requires substantial user \
             interaction or an unusual configuration.",
        ),
        ("low", "Minimal direct impact; hardening opportunities."),
    ]
    .into_iter()
    .map(|(severity, text)| (severity.to_owned(), text.to_owned()))
    .collect();

    let examples = [
        (
            "critical",
            Examples::Many(vec![
                "Remote code execution".to_owned(),
                "SQL injection with data access".to_owned(),
            ]),
        ),
        (
            "high",
            Examples::Many(vec![
                "Stored cross-site scripting".to_owned(),
                "Authentication bypass".to_owned(),
            ]),
        ),
        ("medium", Examples::One("Reflected cross-site scripting".to_owned())),
        ("low", Examples::One("Open redirect".to_owned())),
    ]
    .into_iter()
    .map(|(severity, examples)| (severity.to_owned(), examples))
    .collect();

    TierCatalog {
        tiers,
        definitions,
        examples,
        default_tier: Some("standard".to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_seeds_both_regions() {
        let blocks = default_template();
        let text: String = blocks
            .iter()
            .map(|block| match block {
                TemplateBlock::Paragraph { text } => text.clone(),
                TemplateBlock::List { items } => items.join(" "),
            })
            .collect();

        assert!(text.contains("--START IN-SCOPE----END IN-SCOPE--"));
        assert!(text.contains("--START REWARDS----END REWARDS--"));
        // Anchor headings follow their regions
        assert!(text.contains("<strong>Out of scope</strong>"));
        assert!(text.contains("<strong>Disclosure policy</strong>"));
    }

    #[test]
    fn test_default_catalog_shape() {
        let catalog = default_catalog();
        assert_eq!(catalog.tiers.len(), 3);
        assert_eq!(catalog.fallback_key(), Some("standard"));

        for tier in catalog.tiers.values() {
            for severity in ["critical", "high", "medium", "low"] {
                assert!(tier.levels.contains_key(severity), "missing {severity}");
                assert!(catalog.definitions.contains_key(severity));
            }
        }
    }
}
