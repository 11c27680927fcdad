pub mod theme_provider;
pub mod theme_status;
pub mod theme_toggle;

pub use theme_provider::ThemeProvider;
pub use theme_status::ThemeStatus;
pub use theme_toggle::ThemeToggle;
