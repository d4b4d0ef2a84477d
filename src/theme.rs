//! Theme CSS generation.
//!
//! The stylesheet contract between the document and the rendered site is a
//! handful of CSS custom properties: the two brand colors, the body font
//! stack, and the neutral palette that flips with the display mode. Pages
//! inline the generated block ahead of the static stylesheet, so an edited
//! theme takes effect on the next render without touching any template.

use crate::types::{FontFamily, ThemeConfig, ThemeMode};

/// CSS font stack for each selectable family.
pub fn font_stack(family: FontFamily) -> &'static str {
    match family {
        FontFamily::Sans => "'Inter', 'Helvetica Neue', Arial, sans-serif",
        FontFamily::Serif => "'Merriweather', Georgia, serif",
        FontFamily::Display => "'Playfair Display', 'Times New Roman', serif",
    }
}

/// Generate the `:root` custom-property block for a theme.
///
/// Emits the primary/secondary brand colors verbatim (hex strings, not
/// validated) plus the mode-dependent neutral palette.
pub fn theme_css(theme: &ThemeConfig) -> String {
    let (bg, surface, text, text_muted, border) = match theme.mode {
        ThemeMode::Light => ("#ffffff", "#f9fafb", "#111827", "#6b7280", "#e5e7eb"),
        ThemeMode::Dark => ("#111827", "#1f2937", "#f9fafb", "#9ca3af", "#374151"),
    };
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-secondary: {secondary};
    --color-bg: {bg};
    --color-surface: {surface};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-border: {border};
    --font-body: {font};
}}"#,
        primary = theme.primary_color,
        secondary = theme.secondary_color,
        font = font_stack(theme.font_family),
    )
}

/// Class applied to `<html>` so mode-specific selectors in the static
/// stylesheet can hook in.
pub fn mode_class(theme: &ThemeConfig) -> Option<&'static str> {
    theme.mode.is_dark().then_some("dark")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_carries_brand_colors() {
        let css = theme_css(&ThemeConfig::default());
        assert!(css.contains("--color-primary: #1e40af"));
        assert!(css.contains("--color-secondary: #f59e0b"));
    }

    #[test]
    fn css_includes_all_variables() {
        let css = theme_css(&ThemeConfig::default());
        for var in [
            "--color-primary:",
            "--color-secondary:",
            "--color-bg:",
            "--color-surface:",
            "--color-text:",
            "--color-text-muted:",
            "--color-border:",
            "--font-body:",
        ] {
            assert!(css.contains(var), "missing {var}");
        }
    }

    #[test]
    fn dark_mode_flips_the_neutral_palette() {
        let mut theme = ThemeConfig::default();
        let light = theme_css(&theme);
        theme.mode = ThemeMode::Dark;
        let dark = theme_css(&theme);

        assert!(light.contains("--color-bg: #ffffff"));
        assert!(dark.contains("--color-bg: #111827"));
        // Brand colors are mode-independent
        assert!(dark.contains("--color-primary: #1e40af"));
    }

    #[test]
    fn mode_class_only_set_for_dark() {
        let mut theme = ThemeConfig::default();
        assert_eq!(mode_class(&theme), None);
        theme.mode = ThemeMode::Dark;
        assert_eq!(mode_class(&theme), Some("dark"));
    }

    #[test]
    fn each_family_has_a_distinct_stack() {
        let stacks = [
            font_stack(FontFamily::Sans),
            font_stack(FontFamily::Serif),
            font_stack(FontFamily::Display),
        ];
        assert_ne!(stacks[0], stacks[1]);
        assert_ne!(stacks[1], stacks[2]);
    }

    #[test]
    fn custom_colors_pass_through_unvalidated() {
        let theme = ThemeConfig {
            primary_color: "#047857".to_string(),
            secondary_color: "not-a-color".to_string(),
            ..ThemeConfig::default()
        };
        let css = theme_css(&theme);
        assert!(css.contains("--color-primary: #047857"));
        assert!(css.contains("--color-secondary: not-a-color"));
    }
}
