pub mod use_theme;

pub use use_theme::{ThemeHandle, use_theme};
