//! Editing store for a portfolio record.
//!
//! The [`Store`] owns one [`PortfolioRecord`] and the selected [`Theme`]. Every
//! mutation goes through it so the record's invariants always hold:
//!
//! - every list item has a unique id assigned at creation and never reused
//! - skills (and interests) contain no duplicate entries
//! - a social link's icon is always derived from its platform

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::media::encode_data_uri;
use crate::record::{
    new_id, BlogPost, Certification, Education, Experience, Language, PortfolioRecord, Project,
    SocialLink, Testimonial,
};
use crate::sample::sample_record;
use crate::social::SocialIcon;
use crate::theme::{InvalidTheme, Theme};

/// Errors raised by store operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    InvalidTheme(#[from] InvalidTheme),

    #[error("Unknown field '{field}' on {kind}")]
    UnknownField { kind: &'static str, field: String },

    #[error("Unknown list '{0}'")]
    UnknownList(String),

    #[error("Field '{0}' is derived and cannot be set directly")]
    ReadOnlyField(String),

    #[error("Field '{field}' expects {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },

    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
}

/// A value written into a record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Rating(u8),
    List(Vec<String>),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl From<u8> for FieldValue {
    fn from(value: u8) -> Self {
        FieldValue::Rating(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

impl FieldValue {
    fn into_text(self, field: &str) -> Result<String, StoreError> {
        match self {
            FieldValue::Text(text) => Ok(text),
            _ => Err(mismatch(field, "text")),
        }
    }

    fn into_flag(self, field: &str) -> Result<bool, StoreError> {
        match self {
            FieldValue::Flag(flag) => Ok(flag),
            _ => Err(mismatch(field, "a boolean")),
        }
    }

    fn into_list(self, field: &str) -> Result<Vec<String>, StoreError> {
        match self {
            FieldValue::List(list) => Ok(list),
            _ => Err(mismatch(field, "a list of strings")),
        }
    }

    fn into_rating(self, field: &str) -> Result<u8, StoreError> {
        match self {
            FieldValue::Rating(r) if (1..=5).contains(&r) => Ok(r),
            FieldValue::Rating(r) => Err(StoreError::InvalidRating(r)),
            _ => Err(mismatch(field, "a rating")),
        }
    }
}

fn mismatch(field: &str, expected: &'static str) -> StoreError {
    StoreError::TypeMismatch {
        field: field.to_string(),
        expected,
    }
}

/// Scalar fields of a [`PortfolioRecord`] that can be set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarField {
    Name,
    Title,
    Bio,
    Location,
    Email,
    Phone,
    HeroTitle,
    HeroSubtitle,
    HeroDescription,
    ContactEnabled,
    ContactEndpoint,
}

impl ScalarField {
    pub const ALL: [ScalarField; 11] = [
        ScalarField::Name,
        ScalarField::Title,
        ScalarField::Bio,
        ScalarField::Location,
        ScalarField::Email,
        ScalarField::Phone,
        ScalarField::HeroTitle,
        ScalarField::HeroSubtitle,
        ScalarField::HeroDescription,
        ScalarField::ContactEnabled,
        ScalarField::ContactEndpoint,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScalarField::Name => "name",
            ScalarField::Title => "title",
            ScalarField::Bio => "bio",
            ScalarField::Location => "location",
            ScalarField::Email => "email",
            ScalarField::Phone => "phone",
            ScalarField::HeroTitle => "heroTitle",
            ScalarField::HeroSubtitle => "heroSubtitle",
            ScalarField::HeroDescription => "heroDescription",
            ScalarField::ContactEnabled => "contactEnabled",
            ScalarField::ContactEndpoint => "contactEndpoint",
        }
    }
}

impl FromStr for ScalarField {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScalarField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| StoreError::UnknownField {
                kind: "portfolio",
                field: s.to_string(),
            })
    }
}

/// The id-addressed collections of a [`PortfolioRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    SocialLinks,
    Projects,
    Experience,
    Education,
    Certifications,
    Testimonials,
    BlogPosts,
    Languages,
}

impl ListKind {
    pub const ALL: [ListKind; 8] = [
        ListKind::SocialLinks,
        ListKind::Projects,
        ListKind::Experience,
        ListKind::Education,
        ListKind::Certifications,
        ListKind::Testimonials,
        ListKind::BlogPosts,
        ListKind::Languages,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ListKind::SocialLinks => "socialLinks",
            ListKind::Projects => "projects",
            ListKind::Experience => "experience",
            ListKind::Education => "education",
            ListKind::Certifications => "certifications",
            ListKind::Testimonials => "testimonials",
            ListKind::BlogPosts => "blogPosts",
            ListKind::Languages => "languages",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListKind {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| StoreError::UnknownList(s.to_string()))
    }
}

/// An item in one of the record's id-addressed lists.
trait ListItem: Default {
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn id_mut(&mut self) -> &mut String;

    /// Write a single field. `id` is never writable.
    fn set(&mut self, field: &str, value: FieldValue) -> Result<(), StoreError>;

    /// Restore derived state and clean up values after a bulk load.
    fn normalize(&mut self) {}
}

fn unknown<T: ListItem>(field: &str) -> StoreError {
    StoreError::UnknownField {
        kind: T::KIND,
        field: field.to_string(),
    }
}

impl ListItem for SocialLink {
    const KIND: &'static str = "social link";

    fn id(&self) -> &str {
        &self.id
    }

    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }

    fn set(&mut self, field: &str, value: FieldValue) -> Result<(), StoreError> {
        match field {
            "platform" => {
                self.platform = value.into_text(field)?;
                self.icon = SocialIcon::for_platform(&self.platform);
            }
            "url" => self.url = value.into_text(field)?,
            "icon" | "id" => return Err(StoreError::ReadOnlyField(field.to_string())),
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }

    fn normalize(&mut self) {
        self.icon = SocialIcon::for_platform(&self.platform);
    }
}

impl ListItem for Project {
    const KIND: &'static str = "project";

    fn id(&self) -> &str {
        &self.id
    }

    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }

    fn set(&mut self, field: &str, value: FieldValue) -> Result<(), StoreError> {
        match field {
            "title" => self.title = value.into_text(field)?,
            "description" => self.description = value.into_text(field)?,
            "technologies" => self.technologies = dedup_trimmed(value.into_list(field)?),
            "liveUrl" => self.live_url = value.into_text(field)?,
            "githubUrl" => self.github_url = value.into_text(field)?,
            "images" => self.images = value.into_list(field)?,
            "featured" => self.featured = value.into_flag(field)?,
            "id" => return Err(StoreError::ReadOnlyField(field.to_string())),
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }

    fn normalize(&mut self) {
        self.technologies = dedup_trimmed(std::mem::take(&mut self.technologies));
    }
}

impl ListItem for Experience {
    const KIND: &'static str = "experience";

    fn id(&self) -> &str {
        &self.id
    }

    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }

    fn set(&mut self, field: &str, value: FieldValue) -> Result<(), StoreError> {
        match field {
            "company" => self.company = value.into_text(field)?,
            "position" => self.position = value.into_text(field)?,
            "startDate" => self.start_date = value.into_text(field)?,
            "endDate" => self.end_date = value.into_text(field)?,
            "current" => self.current = value.into_flag(field)?,
            "location" => self.location = value.into_text(field)?,
            "description" => self.description = value.into_text(field)?,
            "id" => return Err(StoreError::ReadOnlyField(field.to_string())),
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }
}

impl ListItem for Education {
    const KIND: &'static str = "education";

    fn id(&self) -> &str {
        &self.id
    }

    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }

    fn set(&mut self, field: &str, value: FieldValue) -> Result<(), StoreError> {
        match field {
            "institution" => self.institution = value.into_text(field)?,
            "degree" => self.degree = value.into_text(field)?,
            "field" => self.field = value.into_text(field)?,
            "startDate" => self.start_date = value.into_text(field)?,
            "endDate" => self.end_date = value.into_text(field)?,
            "description" => self.description = value.into_text(field)?,
            "id" => return Err(StoreError::ReadOnlyField(field.to_string())),
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }
}

impl ListItem for Certification {
    const KIND: &'static str = "certification";

    fn id(&self) -> &str {
        &self.id
    }

    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }

    fn set(&mut self, field: &str, value: FieldValue) -> Result<(), StoreError> {
        match field {
            "name" => self.name = value.into_text(field)?,
            "issuer" => self.issuer = value.into_text(field)?,
            "date" => self.date = value.into_text(field)?,
            "url" => self.url = value.into_text(field)?,
            "id" => return Err(StoreError::ReadOnlyField(field.to_string())),
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }
}

impl ListItem for Testimonial {
    const KIND: &'static str = "testimonial";

    fn id(&self) -> &str {
        &self.id
    }

    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }

    fn set(&mut self, field: &str, value: FieldValue) -> Result<(), StoreError> {
        match field {
            "name" => self.name = value.into_text(field)?,
            "role" => self.role = value.into_text(field)?,
            "company" => self.company = value.into_text(field)?,
            "content" => self.content = value.into_text(field)?,
            "rating" => self.rating = value.into_rating(field)?,
            "id" => return Err(StoreError::ReadOnlyField(field.to_string())),
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }

    fn normalize(&mut self) {
        self.rating = self.rating.clamp(1, 5);
    }
}

impl ListItem for BlogPost {
    const KIND: &'static str = "blog post";

    fn id(&self) -> &str {
        &self.id
    }

    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }

    fn set(&mut self, field: &str, value: FieldValue) -> Result<(), StoreError> {
        match field {
            "title" => self.title = value.into_text(field)?,
            "excerpt" => self.excerpt = value.into_text(field)?,
            "url" => self.url = value.into_text(field)?,
            "date" => self.date = value.into_text(field)?,
            "id" => return Err(StoreError::ReadOnlyField(field.to_string())),
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }
}

impl ListItem for Language {
    const KIND: &'static str = "language";

    fn id(&self) -> &str {
        &self.id
    }

    fn id_mut(&mut self) -> &mut String {
        &mut self.id
    }

    fn set(&mut self, field: &str, value: FieldValue) -> Result<(), StoreError> {
        match field {
            "name" => self.name = value.into_text(field)?,
            "proficiency" => self.proficiency = value.into_text(field)?,
            "id" => return Err(StoreError::ReadOnlyField(field.to_string())),
            _ => return Err(unknown::<Self>(field)),
        }
        Ok(())
    }
}

/// Run `$body` with `$list` bound to the record collection selected by `$kind`.
macro_rules! with_list {
    ($record:expr, $kind:expr, |$list:ident| $body:expr) => {
        match $kind {
            ListKind::SocialLinks => {
                let $list = &mut $record.social_links;
                $body
            }
            ListKind::Projects => {
                let $list = &mut $record.projects;
                $body
            }
            ListKind::Experience => {
                let $list = &mut $record.experience;
                $body
            }
            ListKind::Education => {
                let $list = &mut $record.education;
                $body
            }
            ListKind::Certifications => {
                let $list = &mut $record.certifications;
                $body
            }
            ListKind::Testimonials => {
                let $list = &mut $record.testimonials;
                $body
            }
            ListKind::BlogPosts => {
                let $list = &mut $record.blog_posts;
                $body
            }
            ListKind::Languages => {
                let $list = &mut $record.languages;
                $body
            }
        }
    };
}

fn add_item<T: ListItem>(items: &mut Vec<T>) -> String {
    let mut item = T::default();
    let id = new_id();
    *item.id_mut() = id.clone();
    items.push(item);
    id
}

fn update_item<T: ListItem>(
    items: &mut [T],
    id: &str,
    field: &str,
    value: FieldValue,
) -> Result<bool, StoreError> {
    match items.iter_mut().find(|item| item.id() == id) {
        Some(item) => item.set(field, value).map(|_| true),
        None => Ok(false),
    }
}

fn remove_item<T: ListItem>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

fn normalize_items<T: ListItem>(items: &mut [T], seen: &mut HashSet<String>) {
    for item in items.iter_mut() {
        if item.id().is_empty() || !seen.insert(item.id().to_string()) {
            let id = new_id();
            seen.insert(id.clone());
            *item.id_mut() = id;
        }
        item.normalize();
    }
}

/// Append `text` (trimmed) unless it is empty or already present.
fn push_unique(list: &mut Vec<String>, text: &str) -> bool {
    let text = text.trim();
    if text.is_empty() || list.iter().any(|existing| existing == text) {
        return false;
    }
    list.push(text.to_string());
    true
}

fn remove_exact(list: &mut Vec<String>, text: &str) -> bool {
    let before = list.len();
    list.retain(|existing| existing != text);
    list.len() != before
}

fn dedup_trimmed(values: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(values.len());
    for value in values {
        push_unique(&mut out, &value);
    }
    out
}

/// Holds the portfolio being edited and the selected theme.
#[derive(Debug, Clone)]
pub struct Store {
    record: PortfolioRecord,
    theme: Theme,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a store seeded with the sample portfolio and the light theme.
    pub fn new() -> Self {
        Self::from_record(sample_record(), Theme::Light)
    }

    /// Create a store with a blank record.
    pub fn empty() -> Self {
        Self {
            record: PortfolioRecord::default(),
            theme: Theme::default(),
        }
    }

    /// Adopt an externally loaded record, repairing anything that breaks the
    /// store's invariants (missing or duplicate ids, duplicate skills, stale icons).
    pub fn from_record(mut record: PortfolioRecord, theme: Theme) -> Self {
        let mut seen = HashSet::new();
        normalize_items(&mut record.social_links, &mut seen);
        normalize_items(&mut record.projects, &mut seen);
        normalize_items(&mut record.experience, &mut seen);
        normalize_items(&mut record.education, &mut seen);
        normalize_items(&mut record.certifications, &mut seen);
        normalize_items(&mut record.testimonials, &mut seen);
        normalize_items(&mut record.blog_posts, &mut seen);
        normalize_items(&mut record.languages, &mut seen);

        record.skills = dedup_trimmed(std::mem::take(&mut record.skills));
        record.interests = dedup_trimmed(std::mem::take(&mut record.interests));

        Self { record, theme }
    }

    /// The current record.
    pub fn record(&self) -> &PortfolioRecord {
        &self.record
    }

    /// The selected theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn into_parts(self) -> (PortfolioRecord, Theme) {
        (self.record, self.theme)
    }

    /// Replace a scalar field.
    pub fn set_field(
        &mut self,
        field: ScalarField,
        value: impl Into<FieldValue>,
    ) -> Result<(), StoreError> {
        let value = value.into();
        let name = field.as_str();
        let r = &mut self.record;
        match field {
            ScalarField::Name => r.name = value.into_text(name)?,
            ScalarField::Title => r.title = value.into_text(name)?,
            ScalarField::Bio => r.bio = value.into_text(name)?,
            ScalarField::Location => r.location = value.into_text(name)?,
            ScalarField::Email => r.email = value.into_text(name)?,
            ScalarField::Phone => r.phone = value.into_text(name)?,
            ScalarField::HeroTitle => r.hero_title = value.into_text(name)?,
            ScalarField::HeroSubtitle => r.hero_subtitle = value.into_text(name)?,
            ScalarField::HeroDescription => r.hero_description = value.into_text(name)?,
            ScalarField::ContactEnabled => r.contact.enabled = value.into_flag(name)?,
            ScalarField::ContactEndpoint => r.contact.endpoint = value.into_text(name)?,
        }
        Ok(())
    }

    /// Append a blank item to a list and return its id.
    pub fn add_list_item(&mut self, kind: ListKind) -> String {
        with_list!(self.record, kind, |list| add_item(list))
    }

    /// Set one field of the item with `id`.
    ///
    /// Returns `Ok(false)` when no item has that id. Setting a social link's
    /// `platform` also resets its icon.
    pub fn update_list_item(
        &mut self,
        kind: ListKind,
        id: &str,
        field: &str,
        value: impl Into<FieldValue>,
    ) -> Result<bool, StoreError> {
        let value = value.into();
        with_list!(self.record, kind, |list| update_item(list, id, field, value))
    }

    /// Remove the item with `id`. Returns whether anything was removed.
    pub fn remove_list_item(&mut self, kind: ListKind, id: &str) -> bool {
        with_list!(self.record, kind, |list| remove_item(list, id))
    }

    /// Add a skill. Blank input and exact duplicates are ignored.
    pub fn add_skill(&mut self, text: &str) -> bool {
        push_unique(&mut self.record.skills, text)
    }

    pub fn remove_skill(&mut self, text: &str) -> bool {
        remove_exact(&mut self.record.skills, text)
    }

    /// Add an interest. Same rules as [`Store::add_skill`].
    pub fn add_interest(&mut self, text: &str) -> bool {
        push_unique(&mut self.record.interests, text)
    }

    pub fn remove_interest(&mut self, text: &str) -> bool {
        remove_exact(&mut self.record.interests, text)
    }

    /// Select a theme by name.
    pub fn set_theme(&mut self, name: &str) -> Result<Theme, StoreError> {
        let theme: Theme = name.parse()?;
        self.theme = theme;
        Ok(theme)
    }

    pub fn set_theme_value(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Store raw image bytes as the profile picture.
    pub fn set_profile_image(&mut self, bytes: &[u8]) {
        self.record.profile_image = Some(encode_data_uri(bytes));
    }

    pub fn clear_profile_image(&mut self) {
        self.record.profile_image = None;
    }

    /// Append an image (`data:` URI) to a project's gallery.
    pub fn add_project_image(&mut self, project_id: &str, data_uri: String) -> bool {
        match self.project_mut(project_id) {
            Some(project) => {
                project.images.push(data_uri);
                true
            }
            None => false,
        }
    }

    pub fn remove_project_image(&mut self, project_id: &str, index: usize) -> bool {
        match self.project_mut(project_id) {
            Some(project) if index < project.images.len() => {
                project.images.remove(index);
                true
            }
            _ => false,
        }
    }

    /// Add a technology tag to a project, keeping the tags unique.
    pub fn add_technology(&mut self, project_id: &str, text: &str) -> bool {
        self.project_mut(project_id)
            .map(|project| push_unique(&mut project.technologies, text))
            .unwrap_or(false)
    }

    pub fn remove_technology(&mut self, project_id: &str, text: &str) -> bool {
        self.project_mut(project_id)
            .map(|project| remove_exact(&mut project.technologies, text))
            .unwrap_or(false)
    }

    fn project_mut(&mut self, id: &str) -> Option<&mut Project> {
        self.record.projects.iter_mut().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store_with_link(platform: &str) -> (Store, String) {
        let mut store = Store::empty();
        let id = store.add_list_item(ListKind::SocialLinks);
        store
            .update_list_item(ListKind::SocialLinks, &id, "platform", platform)
            .unwrap();
        (store, id)
    }

    #[test]
    fn duplicate_skill_is_ignored() {
        let mut store = Store::empty();
        assert!(store.add_skill("React"));
        assert!(!store.add_skill("React"));
        assert!(!store.add_skill("  React  "));

        assert_eq!(store.record().skills, vec!["React".to_string()]);
    }

    #[test]
    fn skills_are_case_sensitive_and_trimmed() {
        let mut store = Store::empty();
        store.add_skill(" react ");
        store.add_skill("React");
        assert!(!store.add_skill("   "));

        assert_eq!(store.record().skills, vec!["react", "React"]);
    }

    #[test]
    fn removes_skill_by_exact_match() {
        let mut store = Store::empty();
        store.add_skill("Rust");
        store.add_skill("Go");

        assert!(!store.remove_skill("rust"));
        assert!(store.remove_skill("Rust"));
        assert_eq!(store.record().skills, vec!["Go"]);
    }

    #[test]
    fn removing_unknown_link_changes_nothing() {
        let mut store = Store::new();
        let before = store.record().social_links.clone();

        assert!(!store.remove_list_item(ListKind::SocialLinks, "missing"));
        assert_eq!(store.record().social_links, before);
    }

    #[test]
    fn platform_change_resets_icon() {
        let (mut store, id) = store_with_link("GitHub");
        assert_eq!(store.record().social_links[0].icon, SocialIcon::Github);

        store
            .update_list_item(ListKind::SocialLinks, &id, "platform", "LinkedIn")
            .unwrap();

        let link = &store.record().social_links[0];
        assert_eq!(link.platform, "LinkedIn");
        assert_eq!(link.icon, SocialIcon::Linkedin);
    }

    #[test]
    fn unknown_platform_gets_globe_icon() {
        let (store, _) = store_with_link("Mastodon");
        assert_eq!(store.record().social_links[0].icon, SocialIcon::Globe);
    }

    #[test]
    fn icon_cannot_be_set_directly() {
        let (mut store, id) = store_with_link("GitHub");
        let err = store
            .update_list_item(ListKind::SocialLinks, &id, "icon", "Youtube")
            .unwrap_err();

        assert_eq!(err, StoreError::ReadOnlyField("icon".to_string()));
        assert_eq!(store.record().social_links[0].icon, SocialIcon::Github);
    }

    #[test]
    fn update_with_unknown_id_is_noop() {
        let mut store = Store::new();
        let before = store.record().clone();

        let matched = store
            .update_list_item(ListKind::Projects, "nope", "title", "X")
            .unwrap();

        assert!(!matched);
        assert_eq!(store.record(), &before);
    }

    #[test]
    fn new_items_get_fresh_ids() {
        let mut store = Store::empty();
        let a = store.add_list_item(ListKind::Projects);
        store.remove_list_item(ListKind::Projects, &a);
        let b = store.add_list_item(ListKind::Projects);

        assert_ne!(a, b);
        assert_eq!(store.record().projects.len(), 1);
        assert_eq!(store.record().projects[0].id, b);
    }

    #[test]
    fn rejects_wrong_value_type() {
        let mut store = Store::empty();
        let id = store.add_list_item(ListKind::Projects);

        let err = store
            .update_list_item(ListKind::Projects, &id, "featured", "yes")
            .unwrap_err();
        assert!(matches!(err, StoreError::TypeMismatch { .. }));

        let err = store
            .update_list_item(ListKind::Projects, &id, "stars", true)
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownField { .. }));
    }

    #[test]
    fn rating_must_be_one_to_five() {
        let mut store = Store::empty();
        let id = store.add_list_item(ListKind::Testimonials);

        let err = store
            .update_list_item(ListKind::Testimonials, &id, "rating", 6u8)
            .unwrap_err();
        assert_eq!(err, StoreError::InvalidRating(6));

        store
            .update_list_item(ListKind::Testimonials, &id, "rating", 3u8)
            .unwrap();
        assert_eq!(store.record().testimonials[0].rating, 3);
    }

    #[test]
    fn technologies_stay_unique() {
        let mut store = Store::empty();
        let id = store.add_list_item(ListKind::Projects);
        store
            .update_list_item(
                ListKind::Projects,
                &id,
                "technologies",
                vec!["Go".to_string(), "React".to_string(), "Go".to_string()],
            )
            .unwrap();
        assert!(!store.add_technology(&id, "React"));
        assert!(store.add_technology(&id, "Rust"));

        assert_eq!(
            store.record().projects[0].technologies,
            vec!["Go", "React", "Rust"]
        );
    }

    #[test]
    fn set_theme_rejects_unknown_name() {
        let mut store = Store::empty();
        store.set_theme("dark").unwrap();

        let err = store.set_theme("sepia").unwrap_err();

        assert!(matches!(err, StoreError::InvalidTheme(_)));
        assert_eq!(store.theme(), Theme::Dark);
    }

    #[test]
    fn sets_scalar_fields() {
        let mut store = Store::empty();
        store.set_field(ScalarField::Name, "Ada Lovelace").unwrap();
        store.set_field(ScalarField::ContactEnabled, true).unwrap();

        assert_eq!(store.record().name, "Ada Lovelace");
        assert!(store.record().contact.enabled);
        assert!(store.set_field(ScalarField::Bio, false).is_err());
    }

    #[test]
    fn parses_field_and_list_names() {
        assert_eq!("heroTitle".parse::<ScalarField>().unwrap(), ScalarField::HeroTitle);
        assert_eq!("blogPosts".parse::<ListKind>().unwrap(), ListKind::BlogPosts);
        assert!("widgets".parse::<ListKind>().is_err());
    }

    #[test]
    fn profile_image_becomes_data_uri() {
        let mut store = Store::empty();
        store.set_profile_image(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);

        let uri = store.record().profile_image.as_deref().unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));

        store.clear_profile_image();
        assert!(store.record().profile_image.is_none());
    }

    #[test]
    fn project_images_keep_insertion_order() {
        let mut store = Store::empty();
        let id = store.add_list_item(ListKind::Projects);
        store.add_project_image(&id, "data:a".to_string());
        store.add_project_image(&id, "data:b".to_string());
        assert!(!store.add_project_image("missing", "data:c".to_string()));

        assert_eq!(store.record().projects[0].images, vec!["data:a", "data:b"]);

        assert!(store.remove_project_image(&id, 0));
        assert!(!store.remove_project_image(&id, 5));
        assert_eq!(store.record().projects[0].images, vec!["data:b"]);
    }

    #[test]
    fn from_record_repairs_invariants() {
        let record = PortfolioRecord {
            skills: vec!["Rust".into(), "Rust".into(), " ".into()],
            social_links: vec![
                SocialLink {
                    id: "1".into(),
                    platform: "YouTube".into(),
                    url: String::new(),
                    icon: SocialIcon::Github,
                },
                SocialLink {
                    id: "1".into(),
                    ..Default::default()
                },
            ],
            testimonials: vec![Testimonial {
                rating: 0,
                ..Default::default()
            }],
            ..Default::default()
        };

        let store = Store::from_record(record, Theme::Modern);
        let r = store.record();

        assert_eq!(r.skills, vec!["Rust"]);
        assert_eq!(r.social_links[0].icon, SocialIcon::Youtube);
        assert_eq!(r.social_links[0].id, "1");
        assert_ne!(r.social_links[1].id, "1");
        assert!(!r.testimonials[0].id.is_empty());
        assert_eq!(r.testimonials[0].rating, 1);
        assert_eq!(store.theme(), Theme::Modern);
    }
}
