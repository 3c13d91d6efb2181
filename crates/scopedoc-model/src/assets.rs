//! Asset provider payload types.
//!
//! These mirror the JSON shape returned by the asset-suggestion backend.
//! Every collection defaults to empty so partial responses deserialize
//! without errors.

use serde::Deserialize;

/// Mobile platform of a suggested app.
///
/// Deserialized leniently from the wire spelling: `"iOS"`, `"ios"`,
/// `"Android"` and `"android"` map to their variants, anything else to
/// [`Platform::Unknown`].
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(from = "String")]
pub enum Platform {
    /// Apple iOS.
    Ios,
    /// Android.
    Android,
    /// Platform not reported or not recognized.
    #[default]
    Unknown,
}

impl From<String> for Platform {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "ios" | "apple" => Self::Ios,
            "android" => Self::Android,
            _ => Self::Unknown,
        }
    }
}

impl Platform {
    /// Store label shown next to an app entry.
    ///
    /// Returns `None` for [`Platform::Unknown`]; callers omit the label
    /// entirely rather than showing a placeholder.
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Ios => Some("Apple"),
            Self::Android => Some("Android"),
            Self::Unknown => None,
        }
    }
}

/// A single mobile application asset.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct MobileApp {
    /// App display name.
    pub name: String,
    /// Store platform.
    #[serde(default)]
    pub platform: Platform,
    /// Store listing URL, when known.
    #[serde(default)]
    pub url: Option<String>,
    /// Version label reported by the provider (e.g. "4.2.0").
    #[serde(default, alias = "version")]
    pub version_label: Option<String>,
}

/// Alternative apps grouped by platform.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Alternatives {
    /// iOS alternatives.
    #[serde(default, rename = "iOS", alias = "ios")]
    pub ios: Vec<MobileApp>,
    /// Android alternatives.
    #[serde(default, rename = "Android", alias = "android")]
    pub android: Vec<MobileApp>,
}

/// Mobile-app suggestions for a subject domain.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct MobileDetails {
    /// Apps the backend considers a confident match.
    #[serde(default)]
    pub suggested_apps: Vec<MobileApp>,
    /// Name the suggestion was derived from.
    #[serde(default)]
    pub suggested_name: Option<String>,
    /// Lower-confidence candidates, grouped by platform.
    #[serde(default)]
    pub alternatives: Alternatives,
}

/// A single API asset.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Api {
    /// API display name.
    pub name: String,
    /// Main documentation page or API root, when known.
    #[serde(default)]
    pub main_page: Option<String>,
    /// Further documentation URLs, in provider order.
    #[serde(default)]
    pub documentation: Vec<String>,
}

/// API suggestions for a subject domain.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiDetails {
    /// APIs the backend considers a confident match.
    #[serde(default)]
    pub suggested_apis: Vec<Api>,
    /// Lower-confidence candidates.
    #[serde(default)]
    pub alternative_apis: Vec<Api>,
}

/// Combined asset payload for one subject domain.
///
/// Either side may be `None` when the backend had nothing to suggest or
/// the lookup failed; builders treat `None` the same as empty.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssetData {
    /// Mobile-app suggestions.
    #[serde(default)]
    pub mobile_details: Option<MobileDetails>,
    /// API suggestions.
    #[serde(default)]
    pub api_details: Option<ApiDetails>,
}
