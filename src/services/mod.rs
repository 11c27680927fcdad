pub mod browser;
pub mod store;

pub use store::{PreferenceStorage, Subscription, SystemPreference, ThemePreferenceStore, ThemeSink};
