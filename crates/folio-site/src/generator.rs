//! Portfolio site generator.

use std::fs;
use std::path::Path;

use folio_model::{PortfolioRecord, Theme};

use crate::assets::AssetPipeline;
use crate::templates::{Context, TemplateEngine};

/// Archive entry / file name of the page.
pub const HTML_FILE: &str = "index.html";
/// Archive entry / file name of the stylesheet.
pub const CSS_FILE: &str = "styles.css";
/// Archive entry / file name of the behavior script.
pub const JS_FILE: &str = "scripts.js";

/// Options controlling generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Minify the stylesheet
    pub minify: bool,

    /// HTML-escape user supplied text
    pub escape_html: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            minify: false,
            escape_html: true,
        }
    }
}

/// Errors that can occur during generation.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// The three text artifacts that make up a generated site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSite {
    pub html: String,
    pub css: String,
    pub js: String,
}

impl GeneratedSite {
    /// Artifacts as `(file name, contents)` pairs, in archive order.
    pub fn files(&self) -> [(&'static str, &str); 3] {
        [
            (HTML_FILE, self.html.as_str()),
            (CSS_FILE, self.css.as_str()),
            (JS_FILE, self.js.as_str()),
        ]
    }

    /// Write the artifacts as plain files into `dir`.
    pub fn write_to(&self, dir: &Path) -> Result<(), GenerateError> {
        fs::create_dir_all(dir).map_err(|e| GenerateError::WriteError(e.to_string()))?;

        for (name, contents) in self.files() {
            fs::write(dir.join(name), contents)
                .map_err(|e| GenerateError::WriteError(format!("{}: {}", name, e)))?;
        }

        tracing::debug!("Wrote site files to {}", dir.display());
        Ok(())
    }
}

/// Turns a portfolio record into a static site.
///
/// Generation is pure: the same record and theme always produce byte-identical
/// output.
pub struct SiteGenerator {
    options: GenerateOptions,
    templates: TemplateEngine,
}

impl SiteGenerator {
    /// Create a new generator.
    pub fn new(options: GenerateOptions) -> Result<Self, GenerateError> {
        let templates = TemplateEngine::new(options.escape_html)
            .map_err(|e| GenerateError::TemplateError(e.to_string()))?;

        Ok(Self { options, templates })
    }

    /// Produce the HTML, CSS and JS for a record and theme.
    pub fn generate(
        &self,
        record: &PortfolioRecord,
        theme: Theme,
    ) -> Result<GeneratedSite, GenerateError> {
        Ok(GeneratedSite {
            html: self.generate_html(record)?,
            css: self.generate_css(theme),
            js: AssetPipeline::generate_js(),
        })
    }

    /// Render the page.
    pub fn generate_html(&self, record: &PortfolioRecord) -> Result<String, GenerateError> {
        let context = Context::from_record(record);

        self.templates
            .render_page(&context)
            .map_err(|e| GenerateError::TemplateError(e.to_string()))
    }

    /// Build the stylesheet, minified when configured.
    pub fn generate_css(&self, theme: Theme) -> String {
        let css = AssetPipeline::generate_css(theme);
        if !self.options.minify {
            return css;
        }

        match AssetPipeline::minify_css(&css) {
            Ok(minified) => minified,
            Err(e) => {
                tracing::warn!("CSS minification failed, keeping original: {}", e);
                css
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::{ContactConfig, Project};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use crate::palette::Palette;

    fn generator() -> SiteGenerator {
        SiteGenerator::new(GenerateOptions::default()).unwrap()
    }

    fn demo_record() -> PortfolioRecord {
        PortfolioRecord {
            name: "Ada Lovelace".to_string(),
            projects: vec![Project {
                id: "p1".to_string(),
                title: "Demo".to_string(),
                featured: true,
                technologies: vec!["Go".to_string(), "React".to_string()],
                images: vec![],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let record = folio_model::sample_record();
        let gen = generator();

        let first = gen.generate(&record, Theme::Modern).unwrap();
        let second = gen.generate(&record, Theme::Modern).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn every_theme_generates_with_its_accent() {
        let record = folio_model::sample_record();
        let gen = generator();

        for theme in Theme::ALL {
            let site = gen.generate(&record, theme).unwrap();
            assert!(site.css.contains(Palette::for_theme(theme).accent));
        }
    }

    #[test]
    fn featured_project_without_images() {
        let site = generator().generate(&demo_record(), Theme::Dark).unwrap();

        assert!(site.html.contains("Demo"));
        assert!(site.html.contains("<span class=\"tech-tag\">Go</span>"));
        assert!(site.html.contains("<span class=\"tech-tag\">React</span>"));
        assert!(!site.html.contains("gallery-prev"));
        assert!(!site.html.contains("gallery-next"));
        assert!(!site.html.contains("project-gallery"));
    }

    #[test]
    fn gallery_controls_need_two_images() {
        let mut record = demo_record();
        record.projects[0].images = vec!["data:image/png;base64,AA".to_string()];
        let html = generator().generate_html(&record).unwrap();
        assert!(html.contains("project-gallery"));
        assert!(!html.contains("gallery-prev"));

        record.projects[0].images.push("data:image/png;base64,BB".to_string());
        let html = generator().generate_html(&record).unwrap();
        assert!(html.contains("class=\"gallery-prev\""));
        assert!(html.contains("class=\"gallery-next\""));
        assert!(html.contains("class=\"gallery-image active\""));
    }

    #[test]
    fn only_featured_projects_are_rendered() {
        let mut record = demo_record();
        record.projects.push(Project {
            id: "p2".to_string(),
            title: "Hidden Side Project".to_string(),
            featured: false,
            ..Default::default()
        });

        let html = generator().generate_html(&record).unwrap();

        assert!(html.contains("Demo"));
        assert!(!html.contains("Hidden Side Project"));
    }

    #[test]
    fn disabled_contact_has_no_form() {
        let mut record = demo_record();
        record.contact = ContactConfig {
            enabled: false,
            endpoint: "https://formspree.io/f/abc".to_string(),
        };

        let html = generator().generate_html(&record).unwrap();

        assert!(!html.contains("<form"));
        assert!(!html.contains("contact-form"));
    }

    #[test]
    fn script_targets_match_markup() {
        let mut record = folio_model::sample_record();
        record.contact = ContactConfig {
            enabled: true,
            endpoint: "https://formspree.io/f/abc".to_string(),
        };
        record.projects[0].images = vec!["data:a".to_string(), "data:b".to_string()];
        let site = generator().generate(&record, Theme::Light).unwrap();

        let selectors = [
            ("'.nav-links'", "class=\"nav-links\""),
            ("'.nav-toggle'", "class=\"nav-toggle\""),
            ("'.nav-link'", "class=\"nav-link\""),
            ("'section[id]'", "<section id="),
            ("'.fade-in'", "fade-in"),
            ("'[data-typing]'", "data-typing="),
            ("'.project-gallery'", "class=\"project-gallery\""),
            ("'.gallery-image'", "gallery-image"),
            ("'.gallery-prev'", "class=\"gallery-prev\""),
            ("'.gallery-next'", "class=\"gallery-next\""),
            ("getElementById('contact-form')", "id=\"contact-form\""),
            ("getElementById('form-status')", "id=\"form-status\""),
            ("'button[type=\"submit\"]'", "<button type=\"submit\""),
        ];

        for (in_js, in_html) in selectors {
            assert!(site.js.contains(in_js), "script no longer uses {}", in_js);
            assert!(site.html.contains(in_html), "markup lacks {}", in_html);
        }
    }

    #[test]
    fn minified_css_keeps_accent() {
        let gen = SiteGenerator::new(GenerateOptions {
            minify: true,
            ..Default::default()
        })
        .unwrap();

        let css = gen.generate_css(Theme::Glassmorphism);

        assert!(css.contains("#22d3ee"));
        assert!(!css.contains('\n'));
    }

    #[test]
    fn writes_site_files() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("site");
        let site = generator().generate(&demo_record(), Theme::Light).unwrap();

        site.write_to(&out).unwrap();

        assert_eq!(fs::read_to_string(out.join("index.html")).unwrap(), site.html);
        assert!(out.join("styles.css").exists());
        assert!(out.join("scripts.js").exists());
    }
}
