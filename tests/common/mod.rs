//! Service doubles shared by the integration tests
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use theme_preference::models::error::AppError;
use theme_preference::services::store::{
    PreferenceStorage, SystemPreference, ThemePreferenceStore, ThemeSink,
};

// In-memory storage shared with the test through an Rc
#[derive(Clone, Default)]
pub struct MemoryStorage {
    pub items: Rc<RefCell<HashMap<String, String>>>,
    pub writes: Rc<Cell<usize>>,
}

impl MemoryStorage {
    pub fn with_theme(value: &str) -> Self {
        let storage = Self::default();
        storage
            .items
            .borrow_mut()
            .insert("theme".to_string(), value.to_string());
        storage
    }

    pub fn theme(&self) -> Option<String> {
        self.items.borrow().get("theme").cloned()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.writes.set(self.writes.get() + 1);
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct BrokenStorage;

impl PreferenceStorage for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, AppError> {
        Err(AppError::StorageUnavailable("disabled".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), AppError> {
        Err(AppError::StorageUnavailable("disabled".to_string()))
    }
}

pub struct FixedSystem(pub bool);

impl SystemPreference for FixedSystem {
    fn prefers_dark(&self) -> Result<bool, AppError> {
        Ok(self.0)
    }
}

pub struct NoSystem;

impl SystemPreference for NoSystem {
    fn prefers_dark(&self) -> Result<bool, AppError> {
        Err(AppError::SystemPreferenceUnavailable("no window".to_string()))
    }
}

// Records the set of classes present, like a DOM class list
#[derive(Clone, Default)]
pub struct RecordingSink {
    pub classes: Rc<RefCell<Vec<String>>>,
    pub calls: Rc<Cell<usize>>,
}

impl RecordingSink {
    pub fn has(&self, class: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == class)
    }
}

impl ThemeSink for RecordingSink {
    fn toggle_class(&self, class: &str, on: bool) -> Result<(), AppError> {
        self.calls.set(self.calls.get() + 1);
        let mut classes = self.classes.borrow_mut();
        classes.retain(|c| c != class);
        if on {
            classes.push(class.to_string());
        }
        Ok(())
    }
}

pub struct BrokenSink;

impl ThemeSink for BrokenSink {
    fn toggle_class(&self, _class: &str, _on: bool) -> Result<(), AppError> {
        Err(AppError::DomUnavailable("no body".to_string()))
    }
}

pub fn create_store(
    storage: &MemoryStorage,
    system: bool,
) -> (ThemePreferenceStore, RecordingSink) {
    let sink = RecordingSink::default();
    let store = ThemePreferenceStore::new(
        Box::new(storage.clone()),
        &FixedSystem(system),
        Box::new(sink.clone()),
    );
    (store, sink)
}

/// Shared store over doubles, as handed to `ThemeProvider`
pub fn shared_store(storage: &MemoryStorage, system: bool) -> Rc<ThemePreferenceStore> {
    Rc::new(create_store(storage, system).0)
}
