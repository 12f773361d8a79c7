//! Shell state context shared by the layout and every view.
//!
//! Holds the side-nav visibility and the theme mode. Both are only changed
//! through [`ShellContext::toggle_sidenav`] and [`ShellContext::change_theme`];
//! the theme is persisted by an effect reacting to the change.

use std::rc::Rc;

use dioxus::prelude::*;

use super::breakpoint::Breakpoint;
use super::preferences::PreferenceStore;
use super::theme::{system_prefers_dark, ThemeMode, ThemeResolver};
use crate::config::AppConfig;

/// UI state owned by the shell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShellState {
    pub nav_open: bool,
    pub theme_mode: ThemeMode,
}

impl ShellState {
    pub fn new(theme_mode: ThemeMode) -> Self {
        Self {
            nav_open: false,
            theme_mode,
        }
    }

    /// Direct setter: calling it twice with `true` leaves the nav open
    pub fn toggle_sidenav(&mut self, open: bool) {
        self.nav_open = open;
    }

    pub fn change_theme(&mut self, mode: ThemeMode) {
        self.theme_mode = mode;
    }

    /// Class list for the app container, e.g. `"medium dark"`
    pub fn css_state(&self, breakpoint: Breakpoint) -> String {
        format!("{} {}", breakpoint.as_str(), self.theme_mode.as_str())
    }
}

/// Global shell state shared via context
#[derive(Clone, Copy)]
pub struct ShellContext {
    state: Signal<ShellState>,
}

impl ShellContext {
    pub fn nav_open(&self) -> bool {
        self.state.read().nav_open
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.state.read().theme_mode
    }

    pub fn snapshot(&self) -> ShellState {
        (self.state)()
    }

    /// Open or close the side navigation
    pub fn toggle_sidenav(&self, open: bool) {
        let mut state = self.state;
        if state.peek().nav_open != open {
            state.with_mut(|s| s.toggle_sidenav(open));
        }
    }

    /// Switch theme; persistence follows as an effect
    pub fn change_theme(&self, mode: ThemeMode) {
        let mut state = self.state;
        if state.peek().theme_mode != mode {
            state.with_mut(|s| s.change_theme(mode));
        }
    }
}

/// Initialize shell context provider - call once at app root.
///
/// `store` is read once for the startup theme and written on every theme change.
pub fn use_shell_provider(config: &AppConfig, store: Rc<dyn PreferenceStore>) -> ShellContext {
    let theme_key = config.theme_key();
    let resolver = use_hook(move || ThemeResolver::new(store, theme_key));

    let initial = resolver.clone();
    let state = use_signal(move || ShellState::new(initial.resolve(system_prefers_dark())));

    let ctx = ShellContext { state };
    use_context_provider(|| ctx);

    // Nav changes leave the memo untouched, so only theme changes reach storage
    let theme_mode = use_memo(move || state.read().theme_mode);

    // Also writes the resolved startup theme
    use_effect(move || {
        let mode = theme_mode();
        tracing::debug!(theme = %mode, key = resolver.key(), "persisting theme");
        resolver.persist(mode);
    });

    ctx
}

/// Get shell context - use in any component
pub fn use_shell() -> ShellContext {
    use_context::<ShellContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_nav_closed() {
        let state = ShellState::new(ThemeMode::Light);
        assert!(!state.nav_open);
        assert_eq!(state.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn toggle_sidenav_is_a_setter_not_a_flip() {
        let mut state = ShellState::new(ThemeMode::Dark);
        state.toggle_sidenav(true);
        state.toggle_sidenav(true);
        assert!(state.nav_open);
    }

    #[test]
    fn nav_round_trip_leaves_theme_untouched() {
        let before = ShellState::new(ThemeMode::Dark);
        let mut state = before;

        state.toggle_sidenav(true);
        assert_eq!(state.theme_mode, ThemeMode::Dark);
        state.toggle_sidenav(false);

        assert_eq!(state, before);
    }

    #[test]
    fn change_theme_applies_immediately() {
        let mut state = ShellState::new(ThemeMode::Dark);
        state.change_theme(ThemeMode::Light);
        assert_eq!(state.theme_mode, ThemeMode::Light);
        assert!(!state.nav_open);
    }

    #[test]
    fn css_state_combines_breakpoint_and_theme() {
        let state = ShellState::new(ThemeMode::Dark);
        assert_eq!(state.css_state(Breakpoint::Medium), "medium dark");

        let state = ShellState::new(ThemeMode::Light);
        assert_eq!(state.css_state(Breakpoint::Small), "small light");
    }
}
