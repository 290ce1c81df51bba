//! Social platforms and their icons.

use serde::{Deserialize, Serialize};

macro_rules! svg_open {
    () => {
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">"#
    };
}

/// Icon shown next to a social link.
///
/// Always derived from the link's platform through [`SocialIcon::for_platform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SocialIcon {
    Github,
    Linkedin,
    Twitter,
    #[default]
    Globe,
    Mail,
    Instagram,
    Facebook,
    Youtube,
}

/// A platform offered in the social link picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformInfo {
    /// Display name, also the value stored in `SocialLink::platform`
    pub name: &'static str,
    /// Canonical icon for the platform
    pub icon: SocialIcon,
    /// Hint shown in an empty URL field
    pub placeholder: &'static str,
}

/// The fixed platform table.
pub const SOCIAL_PLATFORMS: &[PlatformInfo] = &[
    PlatformInfo {
        name: "GitHub",
        icon: SocialIcon::Github,
        placeholder: "https://github.com/username",
    },
    PlatformInfo {
        name: "LinkedIn",
        icon: SocialIcon::Linkedin,
        placeholder: "https://linkedin.com/in/username",
    },
    PlatformInfo {
        name: "Twitter",
        icon: SocialIcon::Twitter,
        placeholder: "https://twitter.com/username",
    },
    PlatformInfo {
        name: "Website",
        icon: SocialIcon::Globe,
        placeholder: "https://yourwebsite.com",
    },
    PlatformInfo {
        name: "Email",
        icon: SocialIcon::Mail,
        placeholder: "your@email.com",
    },
    PlatformInfo {
        name: "Instagram",
        icon: SocialIcon::Instagram,
        placeholder: "https://instagram.com/username",
    },
    PlatformInfo {
        name: "Facebook",
        icon: SocialIcon::Facebook,
        placeholder: "https://facebook.com/username",
    },
    PlatformInfo {
        name: "YouTube",
        icon: SocialIcon::Youtube,
        placeholder: "https://youtube.com/c/username",
    },
];

/// Look up a platform by its display name.
pub fn platform(name: &str) -> Option<&'static PlatformInfo> {
    SOCIAL_PLATFORMS.iter().find(|p| p.name == name)
}

impl SocialIcon {
    /// Canonical icon for a platform name. Unknown platforms get [`SocialIcon::Globe`].
    pub fn for_platform(platform_name: &str) -> Self {
        platform(platform_name)
            .map(|p| p.icon)
            .unwrap_or(SocialIcon::Globe)
    }

    /// Lowercase identifier, used as a CSS modifier.
    pub fn as_str(self) -> &'static str {
        match self {
            SocialIcon::Github => "github",
            SocialIcon::Linkedin => "linkedin",
            SocialIcon::Twitter => "twitter",
            SocialIcon::Globe => "globe",
            SocialIcon::Mail => "mail",
            SocialIcon::Instagram => "instagram",
            SocialIcon::Facebook => "facebook",
            SocialIcon::Youtube => "youtube",
        }
    }

    /// Inline SVG markup for the icon (24x24, stroked with `currentColor`).
    pub fn svg(self) -> &'static str {
        match self {
            SocialIcon::Github => concat!(
                svg_open!(),
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-8-2"/>"#,
                "</svg>"
            ),
            SocialIcon::Linkedin => concat!(
                svg_open!(),
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#,
                "</svg>"
            ),
            SocialIcon::Twitter => concat!(
                svg_open!(),
                r#"<path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/>"#,
                "</svg>"
            ),
            SocialIcon::Globe => concat!(
                svg_open!(),
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/><path d="M2 12h20"/>"#,
                "</svg>"
            ),
            SocialIcon::Mail => concat!(
                svg_open!(),
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
                "</svg>"
            ),
            SocialIcon::Instagram => concat!(
                svg_open!(),
                r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#,
                "</svg>"
            ),
            SocialIcon::Facebook => concat!(
                svg_open!(),
                r#"<path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"/>"#,
                "</svg>"
            ),
            SocialIcon::Youtube => concat!(
                svg_open!(),
                r#"<path d="M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17"/><path d="m10 15 5-3-5-3z"/>"#,
                "</svg>"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_platforms() {
        assert_eq!(SocialIcon::for_platform("LinkedIn"), SocialIcon::Linkedin);
        assert_eq!(SocialIcon::for_platform("Email"), SocialIcon::Mail);
        assert_eq!(SocialIcon::for_platform("Website"), SocialIcon::Globe);
    }

    #[test]
    fn unknown_platform_falls_back_to_globe() {
        assert_eq!(SocialIcon::for_platform("Mastodon"), SocialIcon::Globe);
        assert_eq!(SocialIcon::for_platform(""), SocialIcon::Globe);
    }

    #[test]
    fn every_platform_has_distinct_name() {
        for (i, a) in SOCIAL_PLATFORMS.iter().enumerate() {
            for b in &SOCIAL_PLATFORMS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn svg_markup_is_closed() {
        for p in SOCIAL_PLATFORMS {
            let svg = p.icon.svg();
            assert!(svg.starts_with("<svg"));
            assert!(svg.ends_with("</svg>"));
        }
    }
}
