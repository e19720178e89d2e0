use std::fmt::Write;

/// Color palette shared by every visual component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub primary: &'static str,
    pub primary_dark: &'static str,
    pub secondary: &'static str,
    pub tertiary: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
    pub highlight: &'static str,
    pub card: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub star: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fonts {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Responsive breakpoints in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
    pub xl: u32,
}

impl Breakpoints {
    /// Media query matching viewports at or below `width`.
    pub fn max_width(width: u32) -> String {
        format!("@media (max-width: {width}px)")
    }

    /// Media query matching viewports at or above `width`.
    pub fn min_width(width: u32) -> String {
        format!("@media (min-width: {width}px)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shadows {
    pub card: &'static str,
    pub button: &'static str,
}

/// Static styling configuration, handed to components explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub colors: Palette,
    pub fonts: Fonts,
    pub breakpoints: Breakpoints,
    pub transition: &'static str,
    pub shadows: Shadows,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: Palette {
                background: "#050816",
                primary: "#915EFF",
                primary_dark: "#7A48E8",
                secondary: "#AAA6C3",
                tertiary: "#151030",
                text: "#FFFFFF",
                accent: "#00FFFF",
                highlight: "#F7F7F7",
                card: "rgba(255, 255, 255, 0.05)",
                success: "#64ffda",
                error: "#ff6464",
                star: "#f272c8",
            },
            fonts: Fonts {
                heading: "'Poppins', sans-serif",
                body: "'Poppins', sans-serif",
            },
            breakpoints: Breakpoints {
                sm: 640,
                md: 768,
                lg: 1024,
                xl: 1280,
            },
            transition: "0.3s ease-in-out",
            shadows: Shadows {
                card: "0 4px 30px rgba(0, 0, 0, 0.1)",
                button: "0px 10px 20px rgba(145, 94, 255, 0.3)",
            },
        }
    }
}

impl Theme {
    /// Render the theme as a `:root` block of CSS custom properties.
    pub fn css_variables(&self) -> String {
        let c = &self.colors;
        let vars = [
            ("color-background", c.background),
            ("color-primary", c.primary),
            ("color-primary-dark", c.primary_dark),
            ("color-secondary", c.secondary),
            ("color-tertiary", c.tertiary),
            ("color-text", c.text),
            ("color-accent", c.accent),
            ("color-highlight", c.highlight),
            ("color-card", c.card),
            ("color-success", c.success),
            ("color-error", c.error),
            ("font-heading", self.fonts.heading),
            ("font-body", self.fonts.body),
            ("transition-default", self.transition),
            ("shadow-card", self.shadows.card),
            ("shadow-button", self.shadows.button),
        ];

        let mut css = String::from(":root {\n");
        for (name, value) in vars {
            let _ = writeln!(css, "    --{name}: {value};");
        }
        css.push('}');
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_variables_contains_palette() {
        let css = Theme::default().css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--color-primary: #915EFF;"));
        assert!(css.contains("--color-background: #050816;"));
        assert!(css.contains("--shadow-button: 0px 10px 20px rgba(145, 94, 255, 0.3);"));
        assert!(css.ends_with('}'));
    }

    #[test]
    fn test_breakpoint_queries() {
        let bp = Theme::default().breakpoints;
        assert_eq!(Breakpoints::max_width(bp.sm), "@media (max-width: 640px)");
        assert_eq!(Breakpoints::min_width(bp.lg), "@media (min-width: 1024px)");
    }
}
