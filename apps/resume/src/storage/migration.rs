//! Legacy record upgrade, applied while deserializing `personal_info`.
//!
//! Older files stored LinkedIn and GitHub as one combined string (`linkedin`, `github`).
//! The current shape stores a display label and a URL per field. Loading always yields the
//! current shape; saving never writes a link back as a combined string.
//!
//! The URL derivation is best-effort text rewriting. Nothing here checks that the resulting
//! URL exists.

use serde::{Deserialize, Serialize};

use crate::models::resume::{PersonalInfo, ProfileLink, SocialField};

const LINKEDIN_LABEL: &str = "LinkedIn: ";
const LINKEDIN_PROFILE_BASE: &str = "https://linkedin.com/in/";
const GITHUB_DOMAIN_PREFIX: &str = "github.com/";
const HTTPS_SCHEME: &str = "https://";

/// On-disk shape of `personal_info`, covering both the legacy and the current keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredPersonalInfo {
    pub name: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

impl From<StoredPersonalInfo> for PersonalInfo {
    fn from(stored: StoredPersonalInfo) -> Self {
        let linkedin = upgrade_field(
            stored.linkedin_display,
            stored.linkedin_url,
            stored.linkedin.as_deref(),
            linkedin_from_legacy,
        );
        let github = upgrade_field(
            stored.github_display,
            stored.github_url,
            stored.github.as_deref(),
            github_from_legacy,
        );
        PersonalInfo {
            name: stored.name,
            location: stored.location,
            email: stored.email,
            phone: stored.phone,
            linkedin: SocialField::Link(linkedin),
            github: SocialField::Link(github),
        }
    }
}

impl From<PersonalInfo> for StoredPersonalInfo {
    fn from(info: PersonalInfo) -> Self {
        let mut stored = StoredPersonalInfo {
            name: info.name,
            location: info.location,
            email: info.email,
            phone: info.phone,
            ..Default::default()
        };
        match info.linkedin {
            SocialField::Plain(text) => stored.linkedin = Some(text),
            SocialField::Link(link) => {
                stored.linkedin_display = Some(link.display);
                stored.linkedin_url = Some(link.url);
            }
        }
        match info.github {
            SocialField::Plain(text) => stored.github = Some(text),
            SocialField::Link(link) => {
                stored.github_display = Some(link.display);
                stored.github_url = Some(link.url);
            }
        }
        stored
    }
}

/// The presence of the display key decides the format, matching how older writers behaved:
/// they never wrote a display key at all.
fn upgrade_field(
    display: Option<String>,
    url: Option<String>,
    legacy: Option<&str>,
    derive: fn(&str) -> ProfileLink,
) -> ProfileLink {
    match display {
        Some(display) => ProfileLink {
            display,
            url: url.unwrap_or_default(),
        },
        None => match legacy {
            Some(text) if !text.is_empty() => derive(text),
            _ => ProfileLink::default(),
        },
    }
}

/// `"Jane Doe"` → display `"LinkedIn: Jane Doe"`, URL `https://linkedin.com/in/jane-doe`.
pub fn linkedin_from_legacy(combined: &str) -> ProfileLink {
    let slug = combined.to_lowercase().replace(' ', "-");
    ProfileLink {
        display: format!("{LINKEDIN_LABEL}{combined}"),
        url: format!("{LINKEDIN_PROFILE_BASE}{slug}"),
    }
}

/// Three shapes are anticipated, checked in this order:
/// - `github.com/user` → shown as-is, URL gets the scheme prepended
/// - `https://…` → shown without the scheme, URL as-is
/// - anything else is taken as a bare username
pub fn github_from_legacy(combined: &str) -> ProfileLink {
    if combined.starts_with(GITHUB_DOMAIN_PREFIX) {
        ProfileLink {
            display: combined.to_string(),
            url: format!("{HTTPS_SCHEME}{combined}"),
        }
    } else if combined.starts_with(HTTPS_SCHEME) {
        ProfileLink {
            display: combined.replace(HTTPS_SCHEME, ""),
            url: combined.to_string(),
        }
    } else {
        ProfileLink {
            display: format!("{GITHUB_DOMAIN_PREFIX}{combined}"),
            url: format!("{HTTPS_SCHEME}{GITHUB_DOMAIN_PREFIX}{combined}"),
        }
    }
}

/// Upgrades an in-memory legacy field the same way a load would.
pub fn upgrade_social(field: &SocialField, derive: fn(&str) -> ProfileLink) -> ProfileLink {
    match field {
        SocialField::Link(link) => link.clone(),
        SocialField::Plain(text) if text.is_empty() => ProfileLink::default(),
        SocialField::Plain(text) => derive(text),
    }
}
