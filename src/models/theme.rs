use crate::config::Config;

/// Resolved colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Interprets a persisted value. Only `"dark"` selects dark mode.
    pub fn from_persisted(value: &str) -> Self {
        Self::from(value == Self::Dark.as_str())
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Value written to storage
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark mode",
            Self::Light => "Light mode",
        }
    }

    /// Icon shown on the toggle button, hinting at the mode it switches to
    pub const fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "☀️",
            Self::Light => "🌙",
        }
    }

    /// Accessible label for the toggle button
    pub const fn toggle_label(self) -> &'static str {
        match self.toggled() {
            Self::Dark => "Switch to dark mode",
            Self::Light => "Switch to light mode",
        }
    }

    /// Whether the dark marker class should be present on the document
    pub fn css_class(self) -> Option<&'static str> {
        self.is_dark().then_some(Config::DARK_CLASS)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl From<bool> for ThemeMode {
    fn from(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }
}
