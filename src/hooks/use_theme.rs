use yew::prelude::*;

use crate::models::error::AppError;
use crate::models::theme::ThemeMode;

/// Value provided by `ThemeProvider` to its subtree
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub is_dark: bool,
    /// `Some(x)` selects `x`, `None` flips the current mode
    pub toggle: Callback<Option<bool>>,
}

impl ThemeHandle {
    pub fn mode(&self) -> ThemeMode {
        self.is_dark.into()
    }

    /// Fails with a configuration error when no provider supplied a handle.
    pub fn from_context(context: Option<Self>) -> Result<Self, AppError> {
        context.ok_or_else(|| {
            AppError::ConfigError("use_theme must be used within a ThemeProvider".to_string())
        })
    }
}

/// Custom hook for reading the theme from the enclosing `ThemeProvider`
#[hook]
pub fn use_theme() -> Result<ThemeHandle, AppError> {
    ThemeHandle::from_context(use_context::<ThemeHandle>())
}
