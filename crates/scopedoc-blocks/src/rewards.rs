//! Reward-tier block builder.

use std::fmt::Write;

use scopedoc_markers::{REWARDS, wrap_region};
use scopedoc_model::{Tier, TierCatalog};

use crate::util::escape_html;

/// Amount shown for every severity while no tier is selected.
pub const MASKED_RANGE: &str = "$*** - $***";

const HEADING: &str = "<p><strong>Rewards</strong></p>";

const INTRO: &str = "<p>We reward reports according to the severity of the finding. \
     The ranges below are guidelines; the final amount is decided when a report is triaged.</p>";

const DISCLAIMER: &str = "<p><em>Note: Rewards are granted at the discretion of the program team, \
     and only the first report of a given issue is eligible.</em></p>";

/// Severity labels in display order; anything else renders after these,
/// in the catalog's own key order.
const SEVERITY_ORDER: [&str; 4] = ["critical", "high", "medium", "low"];

fn ordered_severities(tier: &Tier) -> Vec<&str> {
    let mut ordered: Vec<&str> = SEVERITY_ORDER
        .iter()
        .copied()
        .filter(|severity| tier.levels.contains_key(*severity))
        .collect();
    ordered.extend(
        tier.levels
            .keys()
            .map(String::as_str)
            .filter(|severity| !SEVERITY_ORDER.contains(severity)),
    );
    ordered
}

fn capitalized(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn severity_rows(out: &mut String, tier: &Tier, catalog: &TierCatalog, masked: bool) {
    for severity in ordered_severities(tier) {
        let amount = tier.levels.get(severity).map_or("", String::as_str);
        let shown = if masked {
            MASKED_RANGE
        } else if amount.trim().is_empty() {
            // Severity not rewarded under this tier
            continue;
        } else {
            amount
        };

        write!(
            out,
            "<p><strong>{}: {}</strong></p>",
            escape_html(&capitalized(severity)),
            escape_html(shown)
        )
        .unwrap();

        if let Some(definition) = catalog
            .definitions
            .get(severity)
            .filter(|text| !text.trim().is_empty())
        {
            write!(out, "<p>{}</p>", escape_html(definition)).unwrap();
        }

        if let Some(examples) = catalog.examples.get(severity) {
            match examples.as_slice() {
                [] => {}
                [only] => write!(out, "<p>Example: {}</p>", escape_html(only)).unwrap(),
                many => {
                    out.push_str("<p>Examples:</p><ul>");
                    for example in many {
                        write!(out, "<li>{}</li>", escape_html(example)).unwrap();
                    }
                    out.push_str("</ul>");
                }
            }
        }
    }
}

/// The rewards region for `selected` (a tier key) against `catalog`,
/// wrapped in the `REWARDS` markers.
///
/// With no selection (or a selection the catalog no longer knows), the
/// fallback tier's severities render with [`MASKED_RANGE`] in place of the
/// amounts, so the rewards section is always present even before a tier is
/// chosen.
#[must_use]
pub fn rewards_block(selected: Option<&str>, catalog: &TierCatalog) -> String {
    let selected = match selected {
        Some(key) if catalog.get(key).is_some() => Some(key),
        Some(key) => {
            tracing::warn!(tier = %key, "selected reward tier missing from catalog; masking amounts");
            None
        }
        None => None,
    };

    let masked = selected.is_none();
    let key = selected.or_else(|| catalog.fallback_key());

    let mut out = String::new();
    out.push_str(HEADING);
    out.push_str(INTRO);
    if let Some(tier) = key.and_then(|key| catalog.get(key)) {
        severity_rows(&mut out, tier, catalog, masked);
    }
    out.push_str(DISCLAIMER);

    wrap_region(REWARDS, &out)
}
