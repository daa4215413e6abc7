//! Colors for the desktop app

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub bg_selected: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub text_on_accent: &'static str,
    pub border: &'static str,
    pub error: &'static str,
}

/// The only palette; there is no dark mode
pub const PALETTE: ColorPalette = ColorPalette {
    primary: "#2563eb",
    secondary: "#64748b",
    accent: "#f59e42",
    bg_primary: "#ffffff",
    bg_secondary: "#f8fafc",
    bg_selected: "#e0e7ff",
    text_primary: "#1a1a1a",
    text_muted: "#94a3b8",
    text_on_accent: "#222222",
    border: "#e2e8f0",
    error: "#dc2626",
};
