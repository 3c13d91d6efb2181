//! In-scope asset builders: website, mobile apps, APIs, and the aggregate
//! region.

use std::fmt::Write;

use scopedoc_markers::{IN_SCOPE, wrap_region};
use scopedoc_model::{Api, ApiDetails, AssetData, MobileApp, MobileDetails};

use crate::util::{escape_html, join_fragments, link_paragraph};

/// Heading of the aggregate in-scope region.
const IN_SCOPE_HEADING: &str = "<p><strong>In scope</strong></p>";

/// Website asset block.
///
/// A blank domain omits the whole block.
#[must_use]
pub fn website_block(domain: &str) -> String {
    let domain = domain.trim();
    if domain.is_empty() {
        return String::new();
    }
    format!(
        "<p><strong>Website</strong></p><p>{}</p>",
        escape_html(domain)
    )
}

fn app_entry(app: &MobileApp) -> String {
    let mut out = String::new();

    match app.platform.label() {
        Some(label) => {
            write!(out, "<p><strong>Mobile application ({label})</strong></p>").unwrap();
        }
        None => out.push_str("<p><strong>Mobile application</strong></p>"),
    }
    write!(out, "<p>{}</p>", escape_html(app.name.trim())).unwrap();

    if let Some(url) = app.url.as_deref().filter(|url| !url.trim().is_empty()) {
        out.push_str(&link_paragraph(url));
    }

    let version = app
        .version_label
        .as_deref()
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .unwrap_or("Latest");
    write!(out, "<p>Version: {}</p>", escape_html(version)).unwrap();

    out
}

/// Mobile-app asset block.
///
/// Renders one entry per suggested app; alternative apps are included only
/// when `suggested_only` is false. No apps means no block.
#[must_use]
pub fn mobile_block(details: &MobileDetails, suggested_only: bool) -> String {
    let mut apps: Vec<&MobileApp> = details.suggested_apps.iter().collect();
    if !suggested_only {
        apps.extend(&details.alternatives.ios);
        apps.extend(&details.alternatives.android);
    }

    let entries: Vec<String> = apps
        .iter()
        .filter(|app| !app.name.trim().is_empty())
        .map(|app| app_entry(app))
        .collect();
    join_fragments(&entries)
}

fn api_entry(api: &Api) -> String {
    let mut out = String::new();

    out.push_str("<p><strong>API</strong></p>");
    write!(out, "<p>{}</p>", escape_html(api.name.trim())).unwrap();

    if let Some(url) = api.main_page.as_deref().filter(|url| !url.trim().is_empty()) {
        out.push_str(&link_paragraph(url));
    }

    let docs: Vec<&str> = api
        .documentation
        .iter()
        .map(|url| url.trim())
        .filter(|url| !url.is_empty())
        .collect();
    match docs.as_slice() {
        [] => {}
        [only] => {
            let url = escape_html(only);
            write!(out, r#"<p>Documentation: <a href="{url}">{url}</a></p>"#).unwrap();
        }
        many => {
            out.push_str("<p>Documentation:</p><ul>");
            for doc in many {
                let url = escape_html(doc);
                write!(out, r#"<li><a href="{url}">{url}</a></li>"#).unwrap();
            }
            out.push_str("</ul>");
        }
    }

    out
}

/// API asset block.
///
/// Renders suggested APIs, plus alternatives when `suggested_only` is
/// false. No APIs means no block.
#[must_use]
pub fn api_block(details: &ApiDetails, suggested_only: bool) -> String {
    let mut apis: Vec<&Api> = details.suggested_apis.iter().collect();
    if !suggested_only {
        apis.extend(&details.alternative_apis);
    }

    let entries: Vec<String> = apis
        .iter()
        .filter(|api| !api.name.trim().is_empty())
        .map(|api| api_entry(api))
        .collect();
    join_fragments(&entries)
}

/// The aggregate in-scope region: website, mobile, and API sections under
/// a fixed heading, wrapped in the `IN-SCOPE` markers.
///
/// Sections the provider had nothing for are omitted entirely; with no
/// assets at all the region holds only the heading.
#[must_use]
pub fn assets_region(domain: &str, data: &AssetData, suggested_only: bool) -> String {
    let sections = [
        website_block(domain),
        data.mobile_details
            .as_ref()
            .map(|details| mobile_block(details, suggested_only))
            .unwrap_or_default(),
        data.api_details
            .as_ref()
            .map(|details| api_block(details, suggested_only))
            .unwrap_or_default(),
    ];

    let interior = format!("{IN_SCOPE_HEADING}{}", join_fragments(&sections));
    wrap_region(IN_SCOPE, &interior)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use scopedoc_model::{Alternatives, Platform};

    use super::*;
    use crate::util::SPACER;

    fn app(name: &str, platform: Platform) -> MobileApp {
        MobileApp {
            name: name.to_owned(),
            platform,
            url: None,
            version_label: None,
        }
    }

    #[test]
    fn test_website_block() {
        assert_eq!(
            website_block("example.com"),
            "<p><strong>Website</strong></p><p>example.com</p>"
        );
    }

    #[test]
    fn test_website_block_blank_domain_omitted() {
        assert_eq!(website_block(""), "");
        assert_eq!(website_block("   "), "");
    }

    #[test]
    fn test_website_block_escapes_domain() {
        assert!(website_block("exa<mple.com").contains("exa&lt;mple.com"));
    }

    #[test]
    fn test_mobile_block_single_app() {
        let details = MobileDetails {
            suggested_apps: vec![MobileApp {
                name: "Example".to_owned(),
                platform: Platform::Ios,
                url: Some("https://apps.example.com/x".to_owned()),
                version_label: Some("3.1".to_owned()),
            }],
            ..MobileDetails::default()
        };

        let block = mobile_block(&details, true);
        assert_eq!(
            block,
            concat!(
                "<p><strong>Mobile application (Apple)</strong></p>",
                "<p>Example</p>",
                r#"<p><a href="https://apps.example.com/x">https://apps.example.com/x</a></p>"#,
                "<p>Version: 3.1</p>"
            )
        );
    }

    #[test]
    fn test_mobile_block_unknown_platform_label_omitted() {
        let details = MobileDetails {
            suggested_apps: vec![app("Example", Platform::Unknown)],
            ..MobileDetails::default()
        };

        let block = mobile_block(&details, true);
        assert!(block.starts_with("<p><strong>Mobile application</strong></p>"));
        assert!(block.contains("<p>Version: Latest</p>"));
    }

    #[test]
    fn test_mobile_block_spacer_between_entries_not_after_last() {
        let details = MobileDetails {
            suggested_apps: vec![app("One", Platform::Ios), app("Two", Platform::Android)],
            ..MobileDetails::default()
        };

        let block = mobile_block(&details, true);
        assert_eq!(block.matches(SPACER).count(), 1);
        assert!(!block.ends_with(SPACER));
    }

    #[test]
    fn test_mobile_block_suggested_only_gates_alternatives() {
        let details = MobileDetails {
            suggested_apps: vec![app("Main", Platform::Ios)],
            suggested_name: None,
            alternatives: Alternatives {
                ios: vec![app("Alt iOS", Platform::Ios)],
                android: vec![app("Alt Android", Platform::Android)],
            },
        };

        let suggested = mobile_block(&details, true);
        assert!(suggested.contains("Main"));
        assert!(!suggested.contains("Alt iOS"));

        let all = mobile_block(&details, false);
        assert!(all.contains("Alt iOS"));
        assert!(all.contains("Alt Android"));
    }

    #[test]
    fn test_mobile_block_empty_input() {
        assert_eq!(mobile_block(&MobileDetails::default(), false), "");
    }

    #[test]
    fn test_api_block_single_doc_inline() {
        let details = ApiDetails {
            suggested_apis: vec![Api {
                name: "Example API".to_owned(),
                main_page: Some("https://api.example.com".to_owned()),
                documentation: vec!["https://docs.example.com".to_owned()],
            }],
            alternative_apis: Vec::new(),
        };

        let block = api_block(&details, true);
        assert!(block.contains("<p>Example API</p>"));
        assert!(block.contains(
            r#"<p>Documentation: <a href="https://docs.example.com">https://docs.example.com</a></p>"#
        ));
        assert!(!block.contains("<ul>"));
    }

    #[test]
    fn test_api_block_multiple_docs_as_list() {
        let details = ApiDetails {
            suggested_apis: vec![Api {
                name: "Example API".to_owned(),
                main_page: None,
                documentation: vec![
                    "https://docs.example.com/a".to_owned(),
                    "https://docs.example.com/b".to_owned(),
                ],
            }],
            alternative_apis: Vec::new(),
        };

        let block = api_block(&details, true);
        assert!(block.contains("<p>Documentation:</p><ul>"));
        assert_eq!(block.matches("<li>").count(), 2);
    }

    #[test]
    fn test_api_block_alternatives_gated() {
        let details = ApiDetails {
            suggested_apis: Vec::new(),
            alternative_apis: vec![Api {
                name: "Alt API".to_owned(),
                main_page: None,
                documentation: Vec::new(),
            }],
        };

        assert_eq!(api_block(&details, true), "");
        assert!(api_block(&details, false).contains("Alt API"));
    }

    #[test]
    fn test_assets_region_website_only() {
        let region = assets_region("example.com", &AssetData::default(), true);

        assert!(region.starts_with("--START IN-SCOPE--"));
        assert!(region.ends_with("--END IN-SCOPE--"));
        assert!(region.contains("<p>example.com</p>"));
        assert!(!region.contains("Mobile application"));
        assert!(!region.contains("API"));
    }

    #[test]
    fn test_assets_region_empty_has_only_heading() {
        let region = assets_region("", &AssetData::default(), true);
        assert_eq!(
            region,
            format!("--START IN-SCOPE--{IN_SCOPE_HEADING}--END IN-SCOPE--")
        );
    }

    #[test]
    fn test_assets_region_spacer_between_sections() {
        let data = AssetData {
            mobile_details: Some(MobileDetails {
                suggested_apps: vec![app("Example", Platform::Ios)],
                ..MobileDetails::default()
            }),
            api_details: None,
        };

        let region = assets_region("example.com", &data, true);
        // One spacer between the website and mobile sections
        assert_eq!(region.matches(SPACER).count(), 1);
    }
}
