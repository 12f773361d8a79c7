//! Theme management with localStorage persistence.
//!
//! Resolves the startup theme (stored choice first, then the system colour
//! scheme) and persists every later change under the configured key.

use std::fmt;
use std::rc::Rc;

use super::preferences::PreferenceStore;

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Parse a stored value; anything other than the two modes is rejected
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Startup theme: a valid stored value wins over the system preference
pub fn initial_theme(system_prefers_dark: bool, stored: Option<&str>) -> ThemeMode {
    stored
        .and_then(ThemeMode::parse)
        .unwrap_or_else(|| ThemeMode::from_system(system_prefers_dark))
}

/// Reads and writes the persisted theme under a fixed key
#[derive(Clone)]
pub struct ThemeResolver {
    store: Rc<dyn PreferenceStore>,
    key: String,
}

impl ThemeResolver {
    pub fn new(store: Rc<dyn PreferenceStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Resolve the startup theme. An unreadable store counts as "nothing stored".
    pub fn resolve(&self, system_prefers_dark: bool) -> ThemeMode {
        let stored = match self.store.get(&self.key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Theme preference unreadable, using system scheme: {}", e);
                None
            }
        };
        let theme = initial_theme(system_prefers_dark, stored.as_deref());
        tracing::debug!(
            theme = %theme,
            stored = stored.is_some(),
            system_prefers_dark,
            "resolved initial theme"
        );
        theme
    }

    /// Persist the current theme. Failures are logged and not retried.
    pub fn persist(&self, theme: ThemeMode) {
        if let Err(e) = self.store.set(&self.key, theme.as_str()) {
            tracing::error!("Failed to persist theme '{}': {}", theme, e);
        }
    }
}

/// Whether the platform reports a dark colour scheme preference
#[cfg(target_arch = "wasm32")]
pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn system_prefers_dark() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::preferences::{MemoryStore, StorageError};

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                reason: "SecurityError".into(),
            })
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".into(),
            })
        }
    }

    #[test]
    fn system_preference_used_when_nothing_stored() {
        assert_eq!(initial_theme(true, None), ThemeMode::Dark);
        assert_eq!(initial_theme(false, None), ThemeMode::Light);
    }

    #[test]
    fn stored_value_overrides_system() {
        assert_eq!(initial_theme(true, Some("light")), ThemeMode::Light);
        assert_eq!(initial_theme(false, Some("dark")), ThemeMode::Dark);
    }

    #[test]
    fn invalid_stored_value_falls_back_to_system() {
        assert_eq!(initial_theme(true, Some("oled")), ThemeMode::Dark);
        assert_eq!(initial_theme(false, Some("")), ThemeMode::Light);
    }

    #[test]
    fn resolver_persists_under_its_key() {
        let store = MemoryStore::new();
        let resolver = ThemeResolver::new(Rc::new(store.clone()), "space-x_theme");

        resolver.persist(ThemeMode::Light);

        assert_eq!(store.get("space-x_theme"), Ok(Some("light".to_string())));
    }

    #[test]
    fn unreadable_store_uses_system_scheme() {
        let resolver = ThemeResolver::new(Rc::new(BrokenStore), "space-x_theme");
        assert_eq!(resolver.resolve(true), ThemeMode::Dark);
        // Write failure is logged, not propagated
        resolver.persist(ThemeMode::Light);
    }
}
