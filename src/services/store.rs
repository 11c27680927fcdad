use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::config::Config;
use crate::models::error::AppError;
use crate::models::theme::ThemeMode;

/// Durable key-value storage for the persisted preference
pub trait PreferenceStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Platform colour-scheme query
pub trait SystemPreference {
    fn prefers_dark(&self) -> Result<bool, AppError>;
}

/// Receives the marker class whenever the preference is applied.
///
/// Implementations must be idempotent: repeating the same `on` value has no
/// further effect.
pub trait ThemeSink {
    fn toggle_class(&self, class: &str, on: bool) -> Result<(), AppError>;
}

type Listener = Rc<dyn Fn(bool)>;

#[derive(Default)]
struct Listeners {
    next_id: usize,
    entries: Vec<(usize, Listener)>,
}

/// Registration returned by [`ThemePreferenceStore::on_change`].
///
/// The callback stays registered until this value is dropped.
#[must_use = "dropping the subscription unregisters the callback"]
pub struct Subscription {
    id: usize,
    listeners: Weak<RefCell<Listeners>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .borrow_mut()
                .entries
                .retain(|(id, _)| *id != self.id);
        }
    }
}

/// Holds the dark-mode flag and keeps storage, the DOM and subscribers in step with it.
pub struct ThemePreferenceStore {
    is_dark: Cell<bool>,
    // Set once the user has chosen a mode, either persisted earlier or toggled now.
    explicit: Cell<bool>,
    // Bumped on every notification; a nested notify supersedes the outer one.
    generation: Cell<u64>,
    storage: Box<dyn PreferenceStorage>,
    sink: Box<dyn ThemeSink>,
    listeners: Rc<RefCell<Listeners>>,
}

impl ThemePreferenceStore {
    /// Resolves the initial preference and reflects it onto the sink.
    ///
    /// Storage is not written here; it only changes on [`toggle`](Self::toggle).
    pub fn new(
        storage: Box<dyn PreferenceStorage>,
        system: &dyn SystemPreference,
        sink: Box<dyn ThemeSink>,
    ) -> Self {
        let persisted = load_persisted(storage.as_ref());
        let is_dark = match persisted {
            Some(mode) => mode.is_dark(),
            None => query_system(system),
        };

        let store = Self {
            is_dark: Cell::new(is_dark),
            explicit: Cell::new(persisted.is_some()),
            generation: Cell::new(0),
            storage,
            sink,
            listeners: Rc::default(),
        };
        store.apply();
        log::debug!("Initial theme resolved to {}", store.mode().as_str());
        store
    }

    /// Resolves the preference: persisted value, then system preference, then light.
    ///
    /// Unavailable dependencies are logged and treated as absent.
    pub fn initialize(storage: &dyn PreferenceStorage, system: &dyn SystemPreference) -> bool {
        load_persisted(storage).map_or_else(|| query_system(system), ThemeMode::is_dark)
    }

    /// Current in-memory preference
    pub fn preference(&self) -> bool {
        self.is_dark.get()
    }

    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from(self.preference())
    }

    /// Whether the user has picked a mode rather than inheriting the system one
    pub fn has_explicit_choice(&self) -> bool {
        self.explicit.get()
    }

    /// Sets the preference to `explicit`, or flips it when `None`.
    ///
    /// Memory, storage, the sink and subscribers are all updated before this
    /// returns. Write failures are logged; the in-memory value is kept.
    pub fn toggle(&self, explicit: Option<bool>) -> bool {
        let is_dark = explicit.unwrap_or_else(|| self.mode().toggled().is_dark());
        self.is_dark.set(is_dark);
        self.explicit.set(true);

        let mode = self.mode();
        if let Err(e) = self.storage.set(Config::STORAGE_KEY, mode.as_str()) {
            log::warn!("Failed to save theme: {e}");
        }
        self.apply();
        log::debug!("Theme set to {}", mode.as_str());

        self.notify();
        is_dark
    }

    /// Follows a live system preference change.
    ///
    /// Ignored once the user has made an explicit choice. Never writes storage.
    pub fn follow_system(&self, prefers_dark: bool) -> bool {
        if self.has_explicit_choice() || prefers_dark == self.preference() {
            return self.preference();
        }

        self.is_dark.set(prefers_dark);
        self.apply();
        log::debug!("System theme changed to {}", self.mode().as_str());

        self.notify();
        prefers_dark
    }

    /// Registers `callback`, invoked synchronously with the new value after every change.
    pub fn on_change<F>(&self, callback: F) -> Subscription
    where
        F: Fn(bool) + 'static,
    {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Rc::new(callback)));

        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    fn apply(&self) {
        if let Err(e) = self
            .sink
            .toggle_class(Config::DARK_CLASS, self.preference())
        {
            log::warn!("Failed to apply theme to document: {e}");
        }
    }

    fn notify(&self) {
        // Snapshot so callbacks may subscribe, unsubscribe or toggle again.
        let callbacks: Vec<Listener> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);

        let is_dark = self.preference();
        for callback in callbacks {
            // A callback changed the value again; the nested notify already
            // delivered the newer value to everyone.
            if self.generation.get() != generation {
                break;
            }
            callback(is_dark);
        }
    }
}

// Stores compare by identity.
impl PartialEq for ThemePreferenceStore {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

fn load_persisted(storage: &dyn PreferenceStorage) -> Option<ThemeMode> {
    match storage.get(Config::STORAGE_KEY) {
        Ok(value) => value.as_deref().map(ThemeMode::from_persisted),
        Err(e) => {
            log::warn!("{e}, ignoring persisted theme");
            None
        }
    }
}

fn query_system(system: &dyn SystemPreference) -> bool {
    system.prefers_dark().unwrap_or_else(|e| {
        log::warn!("{e}, defaulting to light theme");
        false
    })
}
