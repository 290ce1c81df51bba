//! List available themes.

use folio_model::Theme;
use folio_site::Palette;

/// Run the themes command.
pub fn run() {
    for theme in Theme::ALL {
        let palette = Palette::for_theme(theme);
        let default = if theme == Theme::default() { " (default)" } else { "" };
        println!("{:<14} {}{}", theme.as_str(), palette.accent, default);
    }
}
