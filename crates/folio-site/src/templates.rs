//! Template engine for rendering the portfolio page.

use minijinja::{context, AutoEscape, Environment};
use serde::Serialize;

use folio_model::{PortfolioRecord, Project, SocialIcon};

/// A navigation entry pointing at a page section.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavItem {
    /// Section element id
    pub id: &'static str,
    /// Link text
    pub label: &'static str,
}

/// The fixed page sections, in page order.
pub const SECTIONS: &[NavItem] = &[
    NavItem { id: "home", label: "Home" },
    NavItem { id: "about", label: "About" },
    NavItem { id: "skills", label: "Skills" },
    NavItem { id: "projects", label: "Projects" },
    NavItem { id: "experience", label: "Experience" },
    NavItem { id: "education", label: "Education" },
    NavItem { id: "testimonials", label: "Testimonials" },
    NavItem { id: "blog", label: "Blog" },
    NavItem { id: "contact", label: "Contact" },
];

/// A social link ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct SocialView<'a> {
    pub platform: &'a str,
    pub href: String,
    pub icon: &'static str,
    pub svg: &'static str,
}

/// Context for rendering the page template.
#[derive(Debug, Clone, Serialize)]
pub struct Context<'a> {
    /// Document `<title>`
    pub page_title: String,
    /// The portfolio being rendered (serialized with camelCase keys)
    pub record: &'a PortfolioRecord,
    pub nav: &'static [NavItem],
    pub socials: Vec<SocialView<'a>>,
    /// Projects marked as featured, in record order
    pub projects: Vec<&'a Project>,
    /// Render the contact form
    pub contact_form: bool,
}

impl<'a> Context<'a> {
    /// Build the render context for a record.
    pub fn from_record(record: &'a PortfolioRecord) -> Self {
        let page_title = if record.title.trim().is_empty() {
            format!("{} - Portfolio", record.name)
        } else {
            format!("{} - {}", record.name, record.title)
        };

        let socials = record
            .social_links
            .iter()
            .map(|link| SocialView {
                platform: &link.platform,
                href: social_href(link.icon, &link.url),
                icon: link.icon.as_str(),
                svg: link.icon.svg(),
            })
            .collect();

        Self {
            page_title,
            record,
            nav: SECTIONS,
            socials,
            projects: record.featured_projects().collect(),
            contact_form: record.contact.form_active(),
        }
    }
}

fn social_href(icon: SocialIcon, url: &str) -> String {
    if icon == SocialIcon::Mail && !url.is_empty() && !url.starts_with("mailto:") {
        format!("mailto:{}", url)
    } else {
        url.to_string()
    }
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a template engine. With `escape_html` off, user text is
    /// interpolated verbatim.
    pub fn new(escape_html: bool) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        if !escape_html {
            env.set_auto_escape_callback(|_| AutoEscape::None);
        }

        env.add_template("base.html", BASE_TEMPLATE)?;
        env.add_template("nav.html", NAV_TEMPLATE)?;
        env.add_template("hero.html", HERO_TEMPLATE)?;
        env.add_template("index.html", INDEX_TEMPLATE)?;

        Ok(Self { env })
    }

    /// Render the portfolio page.
    pub fn render_page(&self, context: &Context<'_>) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("index.html")?;

        tmpl.render(context! {
            page_title => &context.page_title,
            record => context.record,
            nav => context.nav,
            socials => &context.socials,
            projects => &context.projects,
            contact_form => context.contact_form,
        })
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="description" content="{{ record.title }}">
  <meta name="author" content="{{ record.name }}">
  <title>{{ page_title }}</title>
  <link rel="stylesheet" href="styles.css">
</head>
<body>
  {% include "nav.html" %}
  <main>
    {% block content %}{% endblock %}
  </main>
  <footer class="footer">
    <div class="container">
      <p>&copy; {{ record.name }}</p>
    </div>
  </footer>
  <script src="scripts.js"></script>
</body>
</html>
"##;

const NAV_TEMPLATE: &str = r##"<nav class="navbar">
  <div class="nav-container">
    <a href="#home" class="nav-logo">{{ record.name }}</a>
    <button type="button" class="nav-toggle" aria-label="Toggle navigation">&#9776;</button>
    <ul class="nav-links">
    {% for item in nav %}
      <li><a href="#{{ item.id }}" class="nav-link">{{ item.label }}</a></li>
    {% endfor %}
    </ul>
  </div>
</nav>
"##;

const HERO_TEMPLATE: &str = r##"<section id="home" class="hero">
  <div class="hero-content">
    {% if record.profileImage %}
    <img src="{{ record.profileImage }}" alt="{{ record.name }}" class="profile-image">
    {% endif %}
    <h1 class="hero-title" data-typing="{{ record.heroTitle }}">{{ record.heroTitle }}</h1>
    <p class="hero-subtitle">{{ record.heroSubtitle }}</p>
    <p class="hero-description">{{ record.heroDescription }}</p>
    <div class="social-links">
    {% for link in socials %}
      <a href="{{ link.href }}" target="_blank" rel="noopener noreferrer" class="social-link social-{{ link.icon }}" aria-label="{{ link.platform }}">{{ link.svg | safe }}</a>
    {% endfor %}
    </div>
  </div>
</section>
"##;

const INDEX_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% include "hero.html" %}

<section id="about" class="section fade-in">
  <div class="container">
    <h2 class="section-title">About Me</h2>
    <div class="about-grid">
      <div class="about-text">
        <p>{{ record.bio }}</p>
      </div>
      <div class="about-details card">
        {% if record.location %}<p class="detail-item"><strong>Location:</strong> {{ record.location }}</p>{% endif %}
        {% if record.email %}<p class="detail-item"><strong>Email:</strong> {{ record.email }}</p>{% endif %}
        {% if record.phone %}<p class="detail-item"><strong>Phone:</strong> {{ record.phone }}</p>{% endif %}
        {% if record.languages %}
        <p class="detail-item"><strong>Languages:</strong></p>
        <ul class="languages-list">{% for lang in record.languages %}<li class="language-item">{{ lang.name }}{% if lang.proficiency %} ({{ lang.proficiency }}){% endif %}</li>{% endfor %}</ul>
        {% endif %}
        {% if record.interests %}
        <p class="detail-item"><strong>Interests:</strong></p>
        <ul class="interests-list">{% for interest in record.interests %}<li class="interest-tag">{{ interest }}</li>{% endfor %}</ul>
        {% endif %}
      </div>
    </div>
  </div>
</section>

<section id="skills" class="section fade-in">
  <div class="container">
    <h2 class="section-title">Skills</h2>
    <div class="skills-grid">{% for skill in record.skills %}<span class="skill-tag">{{ skill }}</span>{% endfor %}</div>
  </div>
</section>

<section id="projects" class="section fade-in">
  <div class="container">
    <h2 class="section-title">Featured Projects</h2>
    <div class="projects-grid">
    {% for project in projects -%}
      <article class="project-card">
        {% if project.images %}
        <div class="project-gallery">
          {% for image in project.images %}<img src="{{ image }}" alt="{{ project.title }} screenshot {{ loop.index }}" class="gallery-image{% if loop.first %} active{% endif %}" loading="lazy">{% endfor %}
          {% if project.images | length > 1 %}
          <button type="button" class="gallery-prev" aria-label="Previous image">&#8249;</button>
          <button type="button" class="gallery-next" aria-label="Next image">&#8250;</button>
          {% endif %}
        </div>
        {% endif %}
        <div class="project-content">
          <h3 class="project-title">{{ project.title }}</h3>
          <p class="project-description">{{ project.description }}</p>
          <div class="tech-tags">{% for tech in project.technologies %}<span class="tech-tag">{{ tech }}</span>{% endfor %}</div>
          <div class="project-links">
            {% if project.liveUrl %}<a href="{{ project.liveUrl }}" target="_blank" rel="noopener noreferrer" class="project-link">Live Demo</a>{% endif %}
            {% if project.githubUrl %}<a href="{{ project.githubUrl }}" target="_blank" rel="noopener noreferrer" class="project-link">Source</a>{% endif %}
          </div>
        </div>
      </article>
    {%- endfor %}
    </div>
  </div>
</section>

<section id="experience" class="section fade-in">
  <div class="container">
    <h2 class="section-title">Experience</h2>
    <div class="timeline">
    {% for job in record.experience -%}
      <div class="timeline-item">
        <div class="timeline-header">
          <h3>{{ job.position }}</h3>
          <span class="timeline-date">{{ job.startDate }} - {% if job.current %}Present{% else %}{{ job.endDate }}{% endif %}</span>
        </div>
        <p class="timeline-company">{{ job.company }}{% if job.location %} &middot; {{ job.location }}{% endif %}</p>
        <p>{{ job.description }}</p>
      </div>
    {%- endfor %}
    </div>
  </div>
</section>

<section id="education" class="section fade-in">
  <div class="container">
    <h2 class="section-title">Education</h2>
    <div class="education-grid">
    {% for edu in record.education -%}
      <div class="education-card">
        <h3>{{ edu.degree }}{% if edu.field %} in {{ edu.field }}{% endif %}</h3>
        <p class="timeline-company">{{ edu.institution }}</p>
        <p class="timeline-date">{{ edu.startDate }} - {{ edu.endDate }}</p>
        {% if edu.description %}<p>{{ edu.description }}</p>{% endif %}
      </div>
    {%- endfor %}
    </div>
    {% if record.certifications %}
    <div class="certifications">
      <h3>Certifications</h3>
      {% for cert in record.certifications -%}
      <div class="cert-item">
        <span>{% if cert.url %}<a href="{{ cert.url }}" target="_blank" rel="noopener noreferrer">{{ cert.name }}</a>{% else %}{{ cert.name }}{% endif %} &middot; {{ cert.issuer }}</span>
        <span class="timeline-date">{{ cert.date }}</span>
      </div>
      {%- endfor %}
    </div>
    {% endif %}
  </div>
</section>

<section id="testimonials" class="section fade-in">
  <div class="container">
    <h2 class="section-title">Testimonials</h2>
    <div class="testimonials-grid">
    {% for t in record.testimonials -%}
      <blockquote class="testimonial-card">
        <div class="rating" aria-label="{{ t.rating }} out of 5">{% for star in range(t.rating) %}&#9733;{% endfor %}</div>
        <p>{{ t.content }}</p>
        <p class="testimonial-author"><strong>{{ t.name }}</strong>{% if t.role %}, {{ t.role }}{% endif %}{% if t.company %} at {{ t.company }}{% endif %}</p>
      </blockquote>
    {%- endfor %}
    </div>
  </div>
</section>

<section id="blog" class="section fade-in">
  <div class="container">
    <h2 class="section-title">Blog</h2>
    <div class="blog-grid">
    {% for post in record.blogPosts -%}
      <article class="blog-card">
        <p class="blog-date">{{ post.date }}</p>
        <h3>{% if post.url %}<a href="{{ post.url }}" target="_blank" rel="noopener noreferrer">{{ post.title }}</a>{% else %}{{ post.title }}{% endif %}</h3>
        <p>{{ post.excerpt }}</p>
      </article>
    {%- endfor %}
    </div>
  </div>
</section>

<section id="contact" class="section fade-in">
  <div class="container">
    <h2 class="section-title">Get In Touch</h2>
    <div class="contact-info">
      {% if record.email %}<p class="contact-item">{{ record.email }}</p>{% endif %}
      {% if record.phone %}<p class="contact-item">{{ record.phone }}</p>{% endif %}
      {% if record.location %}<p class="contact-item">{{ record.location }}</p>{% endif %}
    </div>
    {% if contact_form %}
    <form id="contact-form" class="contact-form" action="{{ record.contact.endpoint }}" method="POST">
      <div class="form-group">
        <label for="contact-name">Name</label>
        <input type="text" id="contact-name" name="name" required>
      </div>
      <div class="form-group">
        <label for="contact-email">Email</label>
        <input type="email" id="contact-email" name="email" required>
      </div>
      <div class="form-group">
        <label for="contact-subject">Subject</label>
        <input type="text" id="contact-subject" name="subject">
      </div>
      <div class="form-group">
        <label for="contact-message">Message</label>
        <textarea id="contact-message" name="message" rows="5" required></textarea>
      </div>
      <button type="submit" class="btn">Send Message</button>
      <p id="form-status" class="form-status" role="status"></p>
    </form>
    {% endif %}
  </div>
</section>
{% endblock %}
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use folio_model::{BlogPost, ContactConfig, Experience, SocialLink, Testimonial};

    fn render(record: &PortfolioRecord) -> String {
        let engine = TemplateEngine::new(true).unwrap();
        engine.render_page(&Context::from_record(record)).unwrap()
    }

    #[test]
    fn renders_title_from_name_and_title() {
        let record = PortfolioRecord {
            name: "Ada".to_string(),
            title: "Engineer".to_string(),
            ..Default::default()
        };

        let html = render(&record);

        assert!(html.contains("<title>Ada - Engineer</title>"));
    }

    #[test]
    fn untitled_portfolio_falls_back() {
        let record = PortfolioRecord {
            name: "Ada".to_string(),
            ..Default::default()
        };

        assert!(render(&record).contains("<title>Ada - Portfolio</title>"));
    }

    #[test]
    fn renders_nav_for_every_section() {
        let html = render(&PortfolioRecord::default());

        for item in SECTIONS {
            assert!(html.contains(&format!("href=\"#{}\" class=\"nav-link\"", item.id)));
            assert!(html.contains(&format!("id=\"{}\"", item.id)));
        }
    }

    #[test]
    fn profile_image_only_when_present() {
        let mut record = PortfolioRecord::default();
        assert!(!render(&record).contains("profile-image\""));

        record.profile_image = Some("data:image/png;base64,AAAA".to_string());
        assert!(render(&record).contains("class=\"profile-image\""));
    }

    #[test]
    fn email_links_get_mailto() {
        let record = PortfolioRecord {
            social_links: vec![SocialLink {
                id: "1".to_string(),
                platform: "Email".to_string(),
                url: "me@example.com".to_string(),
                icon: SocialIcon::Mail,
            }],
            ..Default::default()
        };

        let context = Context::from_record(&record);

        assert_eq!(context.socials[0].href, "mailto:me@example.com");
        assert!(render(&record).contains("social-link social-mail"));
    }

    #[test]
    fn collection_items_are_concatenated() {
        let record = PortfolioRecord {
            experience: vec![
                Experience { position: "Lead".to_string(), ..Default::default() },
                Experience { position: "Junior".to_string(), ..Default::default() },
            ],
            testimonials: vec![Testimonial::default(), Testimonial::default()],
            blog_posts: vec![BlogPost::default(), BlogPost::default()],
            ..Default::default()
        };

        let html = render(&record);

        assert!(html.contains("</div><div class=\"timeline-item\">"));
        assert!(html.contains("</blockquote><blockquote class=\"testimonial-card\">"));
        assert!(html.contains("</article><article class=\"blog-card\">"));
    }

    #[test]
    fn empty_collections_keep_section_wrappers() {
        let html = render(&PortfolioRecord::default());

        assert!(html.contains("<div class=\"skills-grid\"></div>"));
        assert!(html.contains("id=\"testimonials\""));
        assert!(!html.contains("class=\"skill-tag\""));
    }

    #[test]
    fn escapes_user_text_by_default() {
        let record = PortfolioRecord {
            bio: "<script>alert(1)</script>".to_string(),
            ..Default::default()
        };

        let html = render(&record);

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn raw_mode_interpolates_verbatim() {
        let record = PortfolioRecord {
            bio: "<em>hello</em>".to_string(),
            ..Default::default()
        };
        let engine = TemplateEngine::new(false).unwrap();

        let html = engine.render_page(&Context::from_record(&record)).unwrap();

        assert!(html.contains("<p><em>hello</em></p>"));
    }

    #[test]
    fn form_needs_enabled_and_endpoint() {
        let mut record = PortfolioRecord {
            contact: ContactConfig {
                enabled: true,
                endpoint: String::new(),
            },
            ..Default::default()
        };
        assert!(!render(&record).contains("<form"));

        record.contact.endpoint = "https://formspree.io/f/xyz".to_string();
        assert!(render(&record).contains("<form id=\"contact-form\""));
    }
}
