use crate::types::ThemeMode;
use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub error: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: TextColors,
    pub border: &'static str,
    pub hover: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    pub xs: &'static str,
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
    pub xl: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    pub sm: &'static str,
    pub md: &'static str,
    pub lg: &'static str,
}

/// Style tokens derived from a [`ThemeMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub colors: Palette,
    pub spacing: Spacing,
    pub border_radius: Scale,
    pub shadows: Scale,
}

const SPACING: Spacing = Spacing {
    xs: "0.25rem",
    sm: "0.5rem",
    md: "1rem",
    lg: "1.5rem",
    xl: "2rem",
};

const BORDER_RADIUS: Scale = Scale {
    sm: "4px",
    md: "8px",
    lg: "12px",
};

pub const LIGHT_THEME: Theme = Theme {
    mode: ThemeMode::Light,
    colors: Palette {
        primary: "#3498db",
        secondary: "#2c3e50",
        background: "#ffffff",
        surface: "#f8f9fa",
        text: TextColors {
            primary: "#2c3e50",
            secondary: "#888",
            error: "#e53e3e",
        },
        border: "#e2e8f0",
        hover: "#f1f5f9",
    },
    spacing: SPACING,
    border_radius: BORDER_RADIUS,
    shadows: Scale {
        sm: "0 1px 3px rgba(0, 0, 0, 0.1)",
        md: "0 4px 6px rgba(0, 0, 0, 0.1)",
        lg: "0 10px 15px rgba(0, 0, 0, 0.1)",
    },
};

pub const DARK_THEME: Theme = Theme {
    mode: ThemeMode::Dark,
    colors: Palette {
        primary: "#60a5fa",
        secondary: "#94a3b8",
        background: "#0f172a",
        surface: "#1e293b",
        text: TextColors {
            primary: "#f1f5f9",
            secondary: "#94a3b8",
            error: "#f87171",
        },
        border: "#334155",
        hover: "#334155",
    },
    spacing: SPACING,
    border_radius: BORDER_RADIUS,
    shadows: Scale {
        sm: "0 1px 3px rgba(0, 0, 0, 0.3)",
        md: "0 4px 6px rgba(0, 0, 0, 0.3)",
        lg: "0 10px 15px rgba(0, 0, 0, 0.3)",
    },
};

static LIGHT_CSS: Lazy<String> = Lazy::new(|| LIGHT_THEME.to_css());
static DARK_CSS: Lazy<String> = Lazy::new(|| DARK_THEME.to_css());

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> &'static Theme {
        match mode {
            ThemeMode::Light => &LIGHT_THEME,
            ThemeMode::Dark => &DARK_THEME,
        }
    }

    /// Custom properties consumed by the stylesheet.
    pub fn css_variables(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("--color-primary", self.colors.primary),
            ("--color-secondary", self.colors.secondary),
            ("--color-background", self.colors.background),
            ("--color-surface", self.colors.surface),
            ("--color-text-primary", self.colors.text.primary),
            ("--color-text-secondary", self.colors.text.secondary),
            ("--color-text-error", self.colors.text.error),
            ("--color-border", self.colors.border),
            ("--color-hover", self.colors.hover),
            ("--spacing-xs", self.spacing.xs),
            ("--spacing-sm", self.spacing.sm),
            ("--spacing-md", self.spacing.md),
            ("--spacing-lg", self.spacing.lg),
            ("--spacing-xl", self.spacing.xl),
            ("--radius-sm", self.border_radius.sm),
            ("--radius-md", self.border_radius.md),
            ("--radius-lg", self.border_radius.lg),
            ("--shadow-sm", self.shadows.sm),
            ("--shadow-md", self.shadows.md),
            ("--shadow-lg", self.shadows.lg),
        ]
    }

    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.css_variables() {
            css.push_str(&format!("    {name}: {value};\n"));
        }
        css.push_str("}\n");
        css.push_str(
            "body { background: var(--color-background); color: var(--color-text-primary); }\n",
        );
        css
    }
}

/// Cached stylesheet for a mode
pub fn theme_css(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => LIGHT_CSS.as_str(),
        ThemeMode::Dark => DARK_CSS.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_matches_mode() {
        assert_eq!(Theme::for_mode(ThemeMode::Light).mode, ThemeMode::Light);
        assert_eq!(Theme::for_mode(ThemeMode::Dark).mode, ThemeMode::Dark);
        assert_eq!(Theme::for_mode(ThemeMode::Light).colors.background, "#ffffff");
        assert_eq!(Theme::for_mode(ThemeMode::Dark).colors.background, "#0f172a");
    }

    #[test]
    fn test_scales_shared_between_modes() {
        assert_eq!(LIGHT_THEME.spacing, DARK_THEME.spacing);
        assert_eq!(LIGHT_THEME.border_radius, DARK_THEME.border_radius);
        assert_ne!(LIGHT_THEME.shadows, DARK_THEME.shadows);
    }

    #[test]
    fn test_css_contains_every_variable() {
        let css = theme_css(ThemeMode::Dark);
        for (name, value) in DARK_THEME.css_variables() {
            assert!(css.contains(&format!("{name}: {value};")), "missing {name}");
        }
        assert!(css.starts_with(":root {"));
    }
}
