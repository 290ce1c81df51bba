//! Portfolio record types.

use serde::{Deserialize, Serialize};

use crate::social::SocialIcon;

/// Generate a fresh list item id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// The full structured description of one portfolio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioRecord {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub location: String,
    pub email: String,
    pub phone: String,

    /// Profile picture as a `data:` URI
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,

    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_description: String,

    pub social_links: Vec<SocialLink>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub testimonials: Vec<Testimonial>,
    pub blog_posts: Vec<BlogPost>,

    /// Unique, case-sensitive
    pub skills: Vec<String>,
    pub languages: Vec<Language>,
    pub interests: Vec<String>,

    pub contact: ContactConfig,
}

impl PortfolioRecord {
    /// Projects flagged for display on the generated site.
    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }
}

/// A link to one of the owner's profiles elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub id: String,
    pub platform: String,
    pub url: String,
    pub icon: SocialIcon,
}

impl Default for SocialLink {
    fn default() -> Self {
        Self {
            id: String::new(),
            platform: "Website".to_string(),
            url: String::new(),
            icon: SocialIcon::Globe,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Ordered, without duplicates
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    /// `data:` URIs in selection order
    pub images: Vec<String>,
    pub featured: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    /// Star rating, 1 to 5
    pub rating: u8,
}

impl Default for Testimonial {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            role: String::new(),
            company: String::new(),
            content: String::new(),
            rating: 5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub url: String,
    pub date: String,
}

/// A spoken language and how well it is spoken.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    pub id: String,
    pub name: String,
    pub proficiency: String,
}

/// Settings for the contact form on the generated site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactConfig {
    pub enabled: bool,
    /// Form submission endpoint (e.g. a Formspree URL)
    pub endpoint: String,
}

impl ContactConfig {
    /// Whether the generated site should render a contact form.
    pub fn form_active(&self) -> bool {
        self.enabled && !self.endpoint.trim().is_empty()
    }
}
