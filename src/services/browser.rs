use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::MediaQueryList;

use crate::config::Config;
use crate::models::error::AppError;
use crate::services::store::{PreferenceStorage, SystemPreference, ThemePreferenceStore, ThemeSink};

/// `window.localStorage`, holding raw `"dark"`/`"light"` strings
pub struct LocalStorageBackend;

/// `(prefers-color-scheme: dark)` media query
pub struct MediaQueryPreference;

/// Class list of `document.body`
pub struct BodyClassSink;

impl ThemePreferenceStore {
    /// Store backed by the browser's localStorage, media query and document body
    pub fn browser() -> Self {
        Self::new(
            Box::new(LocalStorageBackend),
            &MediaQueryPreference,
            Box::new(BodyClassSink),
        )
    }
}

impl PreferenceStorage for LocalStorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        local_storage()?.get_item(key).map_err(storage_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        local_storage()?.set_item(key, value).map_err(storage_error)
    }
}

impl SystemPreference for MediaQueryPreference {
    fn prefers_dark(&self) -> Result<bool, AppError> {
        dark_scheme_query().map(|mq| mq.matches())
    }
}

impl ThemeSink for BodyClassSink {
    fn toggle_class(&self, class: &str, on: bool) -> Result<(), AppError> {
        let body = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .ok_or_else(|| AppError::DomUnavailable("document body not found".to_string()))?;

        body.class_list()
            .toggle_with_force(class, on)
            .map(|_| ())
            .map_err(|e| AppError::DomUnavailable(format!("{e:?}")))
    }
}

/// Calls `on_change` with the new value whenever the system colour scheme changes.
///
/// Returns `None` when media queries are unsupported. The listener is removed
/// when the returned value is dropped.
pub fn watch_system_preference<F>(on_change: F) -> Option<EventListener>
where
    F: Fn(bool) + 'static,
{
    let mq = match dark_scheme_query() {
        Ok(mq) => mq,
        Err(e) => {
            log::warn!("{e}, not watching for system theme changes");
            return None;
        }
    };

    let target = mq.clone();
    Some(EventListener::new(&target, "change", move |_event| {
        on_change(mq.matches());
    }))
}

fn local_storage() -> Result<web_sys::Storage, AppError> {
    web_sys::window()
        .ok_or_else(|| AppError::StorageUnavailable("no window".to_string()))?
        .local_storage()
        .map_err(storage_error)?
        .ok_or_else(|| AppError::StorageUnavailable("localStorage disabled".to_string()))
}

fn dark_scheme_query() -> Result<MediaQueryList, AppError> {
    web_sys::window()
        .ok_or_else(|| AppError::SystemPreferenceUnavailable("no window".to_string()))?
        .match_media(Config::DARK_SCHEME_QUERY)
        .map_err(|e| AppError::SystemPreferenceUnavailable(format!("{e:?}")))?
        .ok_or_else(|| {
            AppError::SystemPreferenceUnavailable("matchMedia unsupported".to_string())
        })
}

fn storage_error(e: JsValue) -> AppError {
    AppError::StorageUnavailable(format!("{e:?}"))
}
