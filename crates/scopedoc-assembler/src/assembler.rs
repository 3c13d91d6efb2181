//! Rebuild decisions, region splicing, and persistence gating.

use scopedoc_blocks::{assets_region, render_template, rewards_block};
use scopedoc_markers::{self as markers, IN_SCOPE, REWARDS};
use scopedoc_model::{AssetData, TemplateBlock, TierCatalog};
use scopedoc_store::{ValueStore, keys};

use crate::normalize::normalized_eq;
use crate::presentation::Presentation;

/// Where the persisted document is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentState {
    /// Nothing persisted yet.
    NoDocument,
    /// Template persisted, but the named regions are still empty.
    TemplateOnly,
    /// All regions populated.
    Assembled,
    /// Assembled, and at least one merge folded in caller-supplied edits.
    UserEdited,
}

/// Everything one merge needs, borrowed from the calling collaborators.
#[derive(Clone, Copy, Debug)]
pub struct MergeRequest<'a> {
    /// Subject domain the assets were resolved for.
    pub domain: &'a str,
    /// Asset provider payload.
    pub assets: &'a AssetData,
    /// Reward-tier catalog.
    pub catalog: &'a TierCatalog,
    /// Currently selected tier key, if the user picked one.
    pub selected_tier: Option<&'a str>,
    /// User-edited document reported by the editing surface, used as the
    /// patch base instead of the persisted copy.
    pub edited_document: Option<&'a str>,
}

/// What a merge did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// The merged document.
    pub html: String,
    /// Whether the document was written to the store.
    pub persisted: bool,
    /// Whether the merge was discarded because a newer subject domain had
    /// been recorded.
    pub superseded: bool,
    /// Whether the in-scope region was rebuilt.
    pub rebuilt_assets: bool,
    /// Whether the rewards region was rebuilt.
    pub rebuilt_rewards: bool,
}

/// The single writer of the persisted scope document.
///
/// Owns the patch-or-rebuild decision per region and the tracking state
/// behind it (last-built domain, last-rendered tier). All work happens
/// inside one synchronous [`merge`](Self::merge) call, so a re-entrant
/// event loop never observes a half-patched document.
pub struct Assembler {
    store: Box<dyn ValueStore>,
    template: Vec<TemplateBlock>,
    suggested_only: bool,
    subject: Option<String>,
    user_edited: bool,
}

impl Assembler {
    /// Create an assembler over `store`, building fresh documents from
    /// `template`. Alternative asset suggestions are excluded by default.
    #[must_use]
    pub fn new(store: Box<dyn ValueStore>, template: Vec<TemplateBlock>) -> Self {
        Self {
            store,
            template,
            suggested_only: true,
            subject: None,
            user_edited: false,
        }
    }

    /// Include or exclude the provider's alternative suggestions.
    #[must_use]
    pub fn with_suggested_only(mut self, suggested_only: bool) -> Self {
        self.suggested_only = suggested_only;
        self
    }

    /// Record the current subject domain.
    ///
    /// A later merge carrying a different domain is treated as superseded:
    /// its results are discarded and nothing is persisted.
    pub fn set_subject(&mut self, domain: impl Into<String>) {
        self.subject = Some(domain.into());
    }

    /// Where the persisted document currently is in its lifecycle.
    #[must_use]
    pub fn state(&self) -> DocumentState {
        let Some(doc) = self.store.get(keys::DOCUMENT) else {
            return DocumentState::NoDocument;
        };
        if !region_populated(&doc, IN_SCOPE) || !region_populated(&doc, REWARDS) {
            return DocumentState::TemplateOnly;
        }
        if self.user_edited {
            DocumentState::UserEdited
        } else {
            DocumentState::Assembled
        }
    }

    /// Merge fresh asset and reward content into the document.
    ///
    /// Decides per region whether to rebuild: the in-scope region when the
    /// subject domain changed or the embedded content drifted from the
    /// freshly computed one (whitespace-insensitive); the rewards region
    /// when the tier selection changed, always while no tier is selected,
    /// or when the region was never populated. The result is persisted
    /// only when it differs from the stored copy after trimming.
    ///
    /// Never fails: missing markers degrade to inserting before the
    /// region's anchor heading, then to appending at the document end.
    pub fn merge(&mut self, request: &MergeRequest<'_>) -> MergeOutcome {
        if let Some(subject) = self.subject.as_deref()
            && subject != request.domain
        {
            tracing::debug!(
                requested = %request.domain,
                current = %subject,
                "merge superseded by a newer subject domain; discarding"
            );
            return MergeOutcome {
                html: self.store.get(keys::DOCUMENT).unwrap_or_default(),
                superseded: true,
                ..MergeOutcome::default()
            };
        }

        let persisted = self.store.get(keys::DOCUMENT);
        if let Some(edited) = request.edited_document
            && persisted.as_deref().is_some_and(|stored| stored != edited)
        {
            self.user_edited = true;
        }

        let mut doc = request
            .edited_document
            .map(str::to_owned)
            .or_else(|| persisted.clone())
            .unwrap_or_else(|| render_template(&self.template));

        // In-scope assets: domain change or content drift.
        let fresh_assets = assets_region(request.domain, request.assets, self.suggested_only);
        let domain_changed = self.store.get(keys::DOMAIN).as_deref() != Some(request.domain);
        let assets_current = markers::extract_region(&doc, IN_SCOPE)
            .is_some_and(|span| normalized_eq(span, &fresh_assets));
        let rebuilt_assets = domain_changed || !assets_current;
        if rebuilt_assets {
            doc = splice(&doc, IN_SCOPE, &fresh_assets);
        }

        // Rewards: tier change, no selection yet, or never populated.
        let last_tier = self.store.get(keys::TIER);
        let rebuilt_rewards = request.selected_tier.is_none()
            || last_tier.as_deref() != request.selected_tier
            || !region_populated(&doc, REWARDS);
        if rebuilt_rewards {
            let fresh_rewards = rewards_block(request.selected_tier, request.catalog);
            doc = splice(&doc, REWARDS, &fresh_rewards);
        }

        let changed = persisted.as_deref().map(str::trim) != Some(doc.trim());
        if changed {
            self.store.set(keys::DOCUMENT, &doc);
        }
        if domain_changed {
            self.store.set(keys::DOMAIN, request.domain);
        }
        if let Some(tier) = request.selected_tier
            && last_tier.as_deref() != Some(tier)
        {
            self.store.set(keys::TIER, tier);
        }

        MergeOutcome {
            html: doc,
            persisted: changed,
            superseded: false,
            rebuilt_assets,
            rebuilt_rewards,
        }
    }

    /// [`merge`](Self::merge), then push the result to the editing surface
    /// unless the merge was superseded.
    pub fn merge_and_present(
        &mut self,
        request: &MergeRequest<'_>,
        presentation: &mut dyn Presentation,
    ) -> MergeOutcome {
        let outcome = self.merge(request);
        if !outcome.superseded {
            presentation.show(&outcome.html);
        }
        outcome
    }
}

/// Whether the region exists and holds non-whitespace content.
fn region_populated(doc: &str, name: &str) -> bool {
    markers::region_interior(doc, name).is_some_and(|interior| !interior.trim().is_empty())
}

/// Anchor heading for a region: the heading of the logical section that
/// follows it in the standard document.
fn anchor_heading(name: &str) -> Option<&'static str> {
    match name {
        IN_SCOPE => Some("<p><strong>Out of scope</strong>"),
        REWARDS => Some("<p><strong>Disclosure policy</strong>"),
        _ => None,
    }
}

/// ASCII case-insensitive substring search.
fn find_case_insensitive(doc: &str, needle: &str) -> Option<usize> {
    doc.to_ascii_lowercase().find(&needle.to_ascii_lowercase())
}

/// Splice `fragment` over the region `name`, degrading to anchor insertion
/// and finally to appending.
fn splice(doc: &str, name: &str, fragment: &str) -> String {
    if let Some(out) = markers::try_replace_region(doc, name, fragment) {
        return out;
    }

    if let Some(heading) = anchor_heading(name)
        && let Some(at) = find_case_insensitive(doc, heading)
    {
        tracing::warn!(region = %name, "region markers missing; inserting before anchor heading");
        let mut out = String::with_capacity(doc.len() + fragment.len());
        out.push_str(&doc[..at]);
        out.push_str(fragment);
        out.push_str(&doc[at..]);
        return out;
    }

    tracing::warn!(region = %name, "region markers and anchor heading missing; appending at end");
    format!("{doc}{fragment}")
}
