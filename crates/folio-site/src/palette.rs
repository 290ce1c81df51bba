//! Color palettes for each theme.

use folio_model::Theme;

/// Color tokens substituted into the generated stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub card_background: &'static str,
    pub accent: &'static str,
    /// Text drawn on top of `accent`
    pub on_accent: &'static str,
    pub border: &'static str,
    pub shadow: &'static str,
    /// Cards get a backdrop blur
    pub translucent: bool,
}

impl Palette {
    /// Resolve the palette for a theme.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
            Theme::Modern => MODERN,
            Theme::Glassmorphism => GLASSMORPHISM,
        }
    }
}

const LIGHT: Palette = Palette {
    background: "#ffffff",
    text: "#1f2937",
    text_muted: "#6b7280",
    card_background: "#f9fafb",
    accent: "#8b5cf6",
    on_accent: "#ffffff",
    border: "#e5e7eb",
    shadow: "0 4px 6px -1px rgba(0, 0, 0, 0.1)",
    translucent: false,
};

const DARK: Palette = Palette {
    background: "#111827",
    text: "#f9fafb",
    text_muted: "#9ca3af",
    card_background: "#1f2937",
    accent: "#a78bfa",
    on_accent: "#111827",
    border: "#374151",
    shadow: "0 4px 6px -1px rgba(0, 0, 0, 0.3)",
    translucent: false,
};

const MODERN: Palette = Palette {
    background: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    text: "#ffffff",
    text_muted: "rgba(255, 255, 255, 0.75)",
    card_background: "rgba(255, 255, 255, 0.1)",
    accent: "#fbbf24",
    on_accent: "#000000",
    border: "rgba(255, 255, 255, 0.2)",
    shadow: "0 8px 32px rgba(0, 0, 0, 0.2)",
    translucent: true,
};

const GLASSMORPHISM: Palette = Palette {
    background: "linear-gradient(135deg, #0f172a 0%, #1e3a8a 50%, #0f766e 100%)",
    text: "#f8fafc",
    text_muted: "rgba(248, 250, 252, 0.7)",
    card_background: "rgba(255, 255, 255, 0.08)",
    accent: "#22d3ee",
    on_accent: "#0f172a",
    border: "rgba(255, 255, 255, 0.18)",
    shadow: "0 8px 32px rgba(31, 38, 135, 0.37)",
    translucent: true,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accents_are_distinct() {
        for (i, a) in Theme::ALL.iter().enumerate() {
            for b in &Theme::ALL[i + 1..] {
                assert_ne!(Palette::for_theme(*a).accent, Palette::for_theme(*b).accent);
            }
        }
    }

    #[test]
    fn only_gradient_themes_are_translucent() {
        assert!(!Palette::for_theme(Theme::Light).translucent);
        assert!(!Palette::for_theme(Theme::Dark).translucent);
        assert!(Palette::for_theme(Theme::Modern).translucent);
        assert!(Palette::for_theme(Theme::Glassmorphism).translucent);
    }
}
