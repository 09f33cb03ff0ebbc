//! # Theme colors resolved from the document stylesheet
//!
//! The stylesheet defines its palette as CSS custom properties on `:root`
//! (`--p`, `--s`, `--a`, ...). On the web platform [`theme_colors`] reads
//! them back through `getComputedStyle`, so the chart and tooltip pick up
//! whatever theme the stylesheet ships without hard-coding colors twice.
//! On native builds (server-side rendering) the static fallback palette is
//! used; the client re-renders with the real values after hydration.

/// Semantic colors resolved from the document theme.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeColors {
    pub primary: String,
    pub primary_focus: String,
    pub primary_content: String,
    pub secondary: String,
    pub secondary_focus: String,
    pub secondary_content: String,
    pub accent: String,
    pub accent_focus: String,
    pub accent_content: String,
    pub neutral: String,
    pub neutral_focus: String,
    pub neutral_content: String,
    pub base_100: String,
    pub base_200: String,
    pub base_300: String,
    pub base_content: String,
    pub info: String,
    pub info_content: String,
    pub success: String,
    pub success_content: String,
    pub warning: String,
    pub warning_content: String,
    pub error: String,
    pub error_content: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#6366f1".into(),
            primary_focus: "#4f46e5".into(),
            primary_content: "#ffffff".into(),
            secondary: "#14b8a6".into(),
            secondary_focus: "#0d9488".into(),
            secondary_content: "#ffffff".into(),
            accent: "#f59e0b".into(),
            accent_focus: "#d97706".into(),
            accent_content: "#1f2937".into(),
            neutral: "#3d4451".into(),
            neutral_focus: "#2a2e37".into(),
            neutral_content: "#ffffff".into(),
            base_100: "#ffffff".into(),
            base_200: "#f2f2f2".into(),
            base_300: "#e5e6e6".into(),
            base_content: "#1f2937".into(),
            info: "#3abff8".into(),
            info_content: "#002b3d".into(),
            success: "#36d399".into(),
            success_content: "#003320".into(),
            warning: "#fbbd23".into(),
            warning_content: "#382800".into(),
            error: "#f87272".into(),
            error_content: "#470000".into(),
        }
    }
}

/// Resolve the theme from the document, falling back to the static palette.
pub fn theme_colors() -> ThemeColors {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(colors) = extract_from_dom() {
            return colors;
        }
    }
    ThemeColors::default()
}

/// The series colors of the trend chart: weight, rolling average, BMI.
pub fn chart_colors(colors: &ThemeColors) -> [String; 3] {
    [
        colors.primary.clone(),
        colors.secondary.clone(),
        colors.accent.clone(),
    ]
}

#[cfg(target_arch = "wasm32")]
fn extract_from_dom() -> Option<ThemeColors> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let styles = window.get_computed_style(&root).ok()??;

    let var = |name: &str, fallback: &str| -> String {
        match styles.get_property_value(name) {
            Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
            _ => fallback.to_string(),
        }
    };

    let defaults = ThemeColors::default();
    Some(ThemeColors {
        primary: var("--p", &defaults.primary),
        primary_focus: var("--pf", &defaults.primary_focus),
        primary_content: var("--pc", &defaults.primary_content),
        secondary: var("--s", &defaults.secondary),
        secondary_focus: var("--sf", &defaults.secondary_focus),
        secondary_content: var("--sc", &defaults.secondary_content),
        accent: var("--a", &defaults.accent),
        accent_focus: var("--af", &defaults.accent_focus),
        accent_content: var("--ac", &defaults.accent_content),
        neutral: var("--n", &defaults.neutral),
        neutral_focus: var("--nf", &defaults.neutral_focus),
        neutral_content: var("--nc", &defaults.neutral_content),
        base_100: var("--b1", &defaults.base_100),
        base_200: var("--b2", &defaults.base_200),
        base_300: var("--b3", &defaults.base_300),
        base_content: var("--bc", &defaults.base_content),
        info: var("--in", &defaults.info),
        info_content: var("--inc", &defaults.info_content),
        success: var("--su", &defaults.success),
        success_content: var("--suc", &defaults.success_content),
        warning: var("--wa", &defaults.warning),
        warning_content: var("--wac", &defaults.warning_content),
        error: var("--er", &defaults.error),
        error_content: var("--erc", &defaults.error_content),
    })
}
