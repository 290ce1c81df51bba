//! Portfolio data model and editing store.
//!
//! This crate holds the structured portfolio record, the closed set of visual
//! themes, and the [`Store`] that applies editing operations while keeping the
//! record's invariants intact.

pub mod media;
pub mod record;
pub mod sample;
pub mod social;
pub mod store;
pub mod theme;

pub use media::{encode_data_uri, load_images, MediaError};
pub use record::{
    BlogPost, Certification, ContactConfig, Education, Experience, Language, PortfolioRecord,
    Project, SocialLink, Testimonial,
};
pub use sample::sample_record;
pub use social::{PlatformInfo, SocialIcon, SOCIAL_PLATFORMS};
pub use store::{FieldValue, ListKind, ScalarField, Store, StoreError};
pub use theme::{InvalidTheme, Theme};
