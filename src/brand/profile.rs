//! Brand profile supplied by the caller.
//!
//! The profile is read-only to the engine and is always passed explicitly;
//! nothing in this crate reads ambient state.

use crate::foundation::core::Rgba8;

/// A brand's content and reduced two-color system.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BrandProfile {
    /// Business display name, bound to `#name` fields.
    #[serde(default)]
    pub business_name: String,
    /// Tagline, bound to `#title` fields.
    #[serde(default)]
    pub tagline: String,
    /// Logo source (URL, path or `data:` URL); `None` falls back to a
    /// palette fill of the placeholder.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Contact rows.
    #[serde(default)]
    pub contact_info: ContactInfo,
    /// Brand colors.
    pub colors: BrandColors,
}

/// Contact content bound to the four contact rows.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ContactInfo {
    /// Phone number (`#phone`).
    #[serde(default)]
    pub phone: String,
    /// Email address (`#email`).
    #[serde(default)]
    pub email: String,
    /// Website (`#website`).
    #[serde(default)]
    pub website: String,
    /// Street address (`#address`).
    #[serde(default)]
    pub address: String,
}

/// The brand's reduced color system.
///
/// `primary_text` and `background` form the two-color palette every template
/// paint is mapped onto; `text` is the dedicated color of hydrated text
/// fields (subject to the contrast sweep).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BrandColors {
    /// Primary palette color (headings, accents).
    #[serde(rename = "primaryText")]
    pub primary_text: Rgba8,
    /// Dedicated text color.
    pub text: Rgba8,
    /// Background palette color.
    pub background: Rgba8,
}
