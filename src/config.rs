/// Configuration constants for the theme provider
pub struct Config;

impl Config {
    /// localStorage key holding the persisted preference
    pub const STORAGE_KEY: &'static str = "theme";

    /// Class toggled on the document body while dark mode is active
    pub const DARK_CLASS: &'static str = "dark";

    /// Media query reporting the platform's colour-scheme preference
    pub const DARK_SCHEME_QUERY: &'static str = "(prefers-color-scheme: dark)";

    /// Track live OS theme changes until the user picks a mode explicitly
    pub const FOLLOW_SYSTEM_CHANGES: bool = true;
}
