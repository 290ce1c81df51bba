//! Stylesheet and behavior script generation.

use folio_model::Theme;

use crate::palette::Palette;

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the stylesheet for a theme.
    ///
    /// Only the `:root` token block depends on the theme; every structural rule
    /// reads colors through CSS variables.
    pub fn generate_css(theme: Theme) -> String {
        let palette = Palette::for_theme(theme);
        let mut css = String::with_capacity(BASE_CSS.len() + 512);
        css.push_str(&format!("/* Portfolio theme: {} */\n\n", theme));
        css.push_str(&root_tokens(&palette));
        css.push('\n');
        css.push_str(BASE_CSS);
        css
    }

    /// Generate the behavior script. Independent of the portfolio content.
    pub fn generate_js() -> String {
        DEFAULT_JS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

fn root_tokens(p: &Palette) -> String {
    let blur = if p.translucent { "blur(12px)" } else { "none" };
    format!(
        r#":root {{
  --background: {background};
  --text: {text};
  --text-muted: {text_muted};
  --card: {card};
  --accent: {accent};
  --on-accent: {on_accent};
  --border: {border};
  --shadow: {shadow};
  --card-blur: {blur};
}}
"#,
        background = p.background,
        text = p.text,
        text_muted = p.text_muted,
        card = p.card_background,
        accent = p.accent,
        on_accent = p.on_accent,
        border = p.border,
        shadow = p.shadow,
        blur = blur,
    )
}

const BASE_CSS: &str = r#"* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  line-height: 1.6;
  color: var(--text);
  background: var(--background);
  background-attachment: fixed;
  min-height: 100vh;
}

a {
  color: var(--accent);
}

.container {
  max-width: 1100px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

/* Navigation */
.navbar {
  position: sticky;
  top: 0;
  z-index: 100;
  background: var(--card);
  border-bottom: 1px solid var(--border);
  backdrop-filter: var(--card-blur);
  -webkit-backdrop-filter: var(--card-blur);
}

.nav-container {
  display: flex;
  align-items: center;
  justify-content: space-between;
  max-width: 1100px;
  margin: 0 auto;
  padding: 1rem 1.5rem;
}

.nav-logo {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--accent);
  text-decoration: none;
}

.nav-links {
  display: flex;
  gap: 1.25rem;
  list-style: none;
}

.nav-link {
  color: var(--text-muted);
  text-decoration: none;
  font-weight: 500;
  transition: color 0.2s ease;
}

.nav-link:hover,
.nav-link.active {
  color: var(--accent);
}

.nav-toggle {
  display: none;
  background: none;
  border: none;
  color: var(--text);
  font-size: 1.5rem;
  cursor: pointer;
}

/* Hero */
.hero {
  min-height: 80vh;
  display: flex;
  align-items: center;
  text-align: center;
}

.hero-content {
  max-width: 760px;
  margin: 0 auto;
  padding: 4rem 1.5rem;
}

.profile-image {
  width: 150px;
  height: 150px;
  border-radius: 50%;
  object-fit: cover;
  border: 4px solid var(--accent);
  margin-bottom: 1.5rem;
  box-shadow: var(--shadow);
}

.hero-title {
  font-size: 3rem;
  font-weight: 800;
  color: var(--accent);
  margin-bottom: 0.5rem;
  min-height: 1.2em;
}

.typing-cursor {
  display: inline-block;
  width: 2px;
  margin-left: 2px;
  background: var(--accent);
  animation: blink 1s step-end infinite;
}

@keyframes blink {
  50% {
    opacity: 0;
  }
}

.hero-subtitle {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: 1rem;
}

.hero-description {
  font-size: 1.1rem;
  color: var(--text-muted);
  margin-bottom: 2rem;
}

.social-links {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: 1rem;
}

.social-link {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 48px;
  height: 48px;
  border-radius: 50%;
  background: var(--accent);
  color: var(--on-accent);
  box-shadow: var(--shadow);
  transition: transform 0.3s ease;
}

.social-link:hover {
  transform: translateY(-3px) scale(1.1);
}

.social-link svg {
  width: 22px;
  height: 22px;
}

/* Sections */
.section {
  padding: 5rem 0;
}

.section-title {
  font-size: 2rem;
  text-align: center;
  color: var(--accent);
  margin-bottom: 2.5rem;
}

.card,
.project-card,
.education-card,
.testimonial-card,
.blog-card,
.timeline-item {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: 16px;
  box-shadow: var(--shadow);
  backdrop-filter: var(--card-blur);
  -webkit-backdrop-filter: var(--card-blur);
}

.fade-in {
  opacity: 0;
  transform: translateY(24px);
  transition: opacity 0.6s ease, transform 0.6s ease;
}

.fade-in.visible {
  opacity: 1;
  transform: none;
}

/* About */
.about-grid {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: 2rem;
}

.about-text {
  font-size: 1.1rem;
}

.about-details {
  padding: 1.5rem;
}

.detail-item {
  margin-bottom: 0.75rem;
  color: var(--text-muted);
}

.detail-item strong {
  color: var(--text);
}

.languages-list,
.interests-list {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  list-style: none;
  margin-top: 0.5rem;
}

.language-item,
.interest-tag {
  border: 1px solid var(--border);
  border-radius: 999px;
  padding: 0.25rem 0.75rem;
  font-size: 0.85rem;
}

/* Skills */
.skills-grid {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
}

.skill-tag {
  background: var(--accent);
  color: var(--on-accent);
  padding: 0.5rem 1rem;
  border-radius: 25px;
  font-size: 0.9rem;
  font-weight: 500;
  box-shadow: var(--shadow);
  transition: transform 0.3s ease;
}

.skill-tag:hover {
  transform: translateY(-2px);
}

/* Projects */
.projects-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 2rem;
}

.project-card {
  overflow: hidden;
  display: flex;
  flex-direction: column;
}

.project-gallery {
  position: relative;
  aspect-ratio: 16 / 9;
  background: var(--border);
}

.gallery-image {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0;
  transition: opacity 0.4s ease;
}

.gallery-image.active {
  opacity: 1;
}

.gallery-prev,
.gallery-next {
  position: absolute;
  top: 50%;
  transform: translateY(-50%);
  width: 36px;
  height: 36px;
  border: none;
  border-radius: 50%;
  background: var(--accent);
  color: var(--on-accent);
  font-size: 1.25rem;
  cursor: pointer;
}

.gallery-prev {
  left: 0.75rem;
}

.gallery-next {
  right: 0.75rem;
}

.project-content {
  padding: 1.5rem;
  flex: 1;
}

.project-title {
  font-size: 1.3rem;
  margin-bottom: 0.5rem;
}

.project-description {
  color: var(--text-muted);
  margin-bottom: 1rem;
}

.tech-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-bottom: 1rem;
}

.tech-tag {
  font-size: 0.8rem;
  padding: 0.2rem 0.6rem;
  border-radius: 6px;
  border: 1px solid var(--accent);
  color: var(--accent);
}

.project-links {
  display: flex;
  gap: 1rem;
}

.project-link {
  font-weight: 600;
  text-decoration: none;
}

/* Experience */
.timeline {
  position: relative;
  max-width: 800px;
  margin: 0 auto;
  padding-left: 2rem;
  border-left: 2px solid var(--accent);
}

.timeline-item {
  position: relative;
  padding: 1.5rem;
  margin-bottom: 2rem;
}

.timeline-item::before {
  content: "";
  position: absolute;
  left: calc(-2rem - 7px);
  top: 1.75rem;
  width: 12px;
  height: 12px;
  border-radius: 50%;
  background: var(--accent);
}

.timeline-header {
  display: flex;
  justify-content: space-between;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin-bottom: 0.5rem;
}

.timeline-date,
.timeline-company {
  color: var(--text-muted);
  font-size: 0.9rem;
}

/* Education */
.education-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.5rem;
}

.education-card {
  padding: 1.5rem;
}

.certifications {
  margin-top: 2.5rem;
}

.certifications h3 {
  margin-bottom: 1rem;
}

.cert-item {
  display: flex;
  justify-content: space-between;
  padding: 0.75rem 0;
  border-bottom: 1px solid var(--border);
}

/* Testimonials */
.testimonials-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 1.5rem;
}

.testimonial-card {
  padding: 1.5rem;
}

.rating {
  color: var(--accent);
  letter-spacing: 2px;
  margin-bottom: 0.75rem;
}

.testimonial-author {
  margin-top: 1rem;
  color: var(--text-muted);
  font-size: 0.9rem;
}

/* Blog */
.blog-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.5rem;
}

.blog-card {
  padding: 1.5rem;
}

.blog-date {
  color: var(--text-muted);
  font-size: 0.85rem;
}

/* Contact */
.contact-info {
  display: flex;
  justify-content: center;
  flex-wrap: wrap;
  gap: 2rem;
  margin-bottom: 2rem;
}

.contact-item {
  color: var(--text-muted);
}

.contact-form {
  max-width: 600px;
  margin: 0 auto;
  padding: 2rem;
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: 16px;
  backdrop-filter: var(--card-blur);
  -webkit-backdrop-filter: var(--card-blur);
}

.form-group {
  margin-bottom: 1rem;
}

.form-group label {
  display: block;
  margin-bottom: 0.25rem;
  font-weight: 500;
}

.form-group input,
.form-group textarea {
  width: 100%;
  padding: 0.75rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  background: transparent;
  color: var(--text);
  font: inherit;
}

.btn {
  display: inline-block;
  padding: 0.75rem 1.5rem;
  border: none;
  border-radius: 8px;
  background: var(--accent);
  color: var(--on-accent);
  font-weight: 600;
  cursor: pointer;
}

.btn:disabled {
  opacity: 0.6;
  cursor: wait;
}

.form-status {
  margin-top: 1rem;
  min-height: 1.5em;
}

.form-status.success {
  color: var(--accent);
}

.form-status.error {
  color: var(--text-muted);
  font-style: italic;
}

.footer {
  padding: 2rem 0;
  text-align: center;
  color: var(--text-muted);
  border-top: 1px solid var(--border);
}

/* Responsive */
@media (max-width: 768px) {
  .nav-toggle {
    display: block;
  }

  .nav-links {
    display: none;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    flex-direction: column;
    padding: 1rem 1.5rem;
    background: var(--card);
    border-bottom: 1px solid var(--border);
  }

  .nav-links.open {
    display: flex;
  }

  .hero-title {
    font-size: 2.25rem;
  }

  .about-grid {
    grid-template-columns: 1fr;
  }

  .projects-grid {
    grid-template-columns: 1fr;
  }

  .section {
    padding: 3.5rem 0;
  }
}
"#;

// Targets the classes and ids emitted by the page templates.
const DEFAULT_JS: &str = r##"// Portfolio runtime
(function() {
  'use strict';

  // Smooth scrolling for in-page navigation
  document.querySelectorAll('a.nav-link[href^="#"], a.nav-logo[href^="#"]').forEach(link => {
    link.addEventListener('click', event => {
      const target = document.querySelector(link.getAttribute('href'));
      if (!target) return;
      event.preventDefault();
      target.scrollIntoView({ behavior: 'smooth', block: 'start' });
      const links = document.querySelector('.nav-links');
      if (links) links.classList.remove('open');
    });
  });

  // Mobile menu toggle
  const toggle = document.querySelector('.nav-toggle');
  const navLinks = document.querySelector('.nav-links');
  if (toggle && navLinks) {
    toggle.addEventListener('click', () => {
      navLinks.classList.toggle('open');
    });
  }

  // Highlight the nav link of the section in view
  const sections = Array.from(document.querySelectorAll('section[id]'));
  const setActive = () => {
    const offset = window.scrollY + 120;
    let current = sections.length ? sections[0].id : '';
    sections.forEach(section => {
      if (section.offsetTop <= offset) current = section.id;
    });
    document.querySelectorAll('.nav-link').forEach(link => {
      link.classList.toggle('active', link.getAttribute('href') === '#' + current);
    });
  };
  window.addEventListener('scroll', setActive, { passive: true });
  setActive();

  // Fade sections in as they enter the viewport
  const faders = document.querySelectorAll('.fade-in');
  if ('IntersectionObserver' in window) {
    const observer = new IntersectionObserver(entries => {
      entries.forEach(entry => {
        if (entry.isIntersecting) {
          entry.target.classList.add('visible');
          observer.unobserve(entry.target);
        }
      });
    }, { threshold: 0.1 });
    faders.forEach(el => observer.observe(el));
  } else {
    faders.forEach(el => el.classList.add('visible'));
  }

  // Typing effect on the hero title
  const typed = document.querySelector('[data-typing]');
  if (typed) {
    const text = typed.getAttribute('data-typing') || '';
    typed.textContent = '';
    const cursor = document.createElement('span');
    cursor.className = 'typing-cursor';
    cursor.innerHTML = '&nbsp;';
    let i = 0;
    const step = () => {
      if (i <= text.length) {
        typed.textContent = text.slice(0, i);
        typed.appendChild(cursor);
        i += 1;
        setTimeout(step, 70);
      }
    };
    step();
  }

  // Project image galleries
  document.querySelectorAll('.project-gallery').forEach(gallery => {
    const images = gallery.querySelectorAll('.gallery-image');
    if (images.length < 2) return;
    let index = 0;
    const show = next => {
      images[index].classList.remove('active');
      index = (next + images.length) % images.length;
      images[index].classList.add('active');
    };
    const prev = gallery.querySelector('.gallery-prev');
    const next = gallery.querySelector('.gallery-next');
    if (prev) prev.addEventListener('click', () => show(index - 1));
    if (next) next.addEventListener('click', () => show(index + 1));
  });

  // Contact form submission
  const form = document.getElementById('contact-form');
  if (form) {
    const status = document.getElementById('form-status');
    const button = form.querySelector('button[type="submit"]');
    const report = (message, kind) => {
      if (!status) return;
      status.textContent = message;
      status.className = 'form-status ' + kind;
    };
    form.addEventListener('submit', async event => {
      event.preventDefault();
      if (button) button.disabled = true;
      report('Sending...', 'pending');
      try {
        const response = await fetch(form.action, {
          method: 'POST',
          body: new URLSearchParams(new FormData(form)),
          headers: { 'Accept': 'application/json' }
        });
        if (response.ok) {
          report('Thanks! Your message has been sent.', 'success');
          form.reset();
        } else {
          report('Sorry, something went wrong. Please try again.', 'error');
        }
      } catch (err) {
        report('Sorry, something went wrong. Please try again.', 'error');
      } finally {
        if (button) button.disabled = false;
      }
    });
  }
})();
"##;
