//! Light/dark theme resolution, toggle, and persistence.
//!
//! The explicit choice lives in a [`PreferenceStore`]; the applied theme is
//! reflected through a [`ThemeSurface`] (document attribute plus toggle
//! label). Environment changes only win while no valid choice is stored.
//!
//! TRADE-OFFS
//! ==========
//! Stored values other than `dark`/`light` are treated as absent everywhere,
//! including the gate on environment changes.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::Cell;
use std::fmt;

/// Visual color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    /// Parse a stored value. Only the exact strings `dark` and `light` count.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Theme implied by the environment's color-scheme signal.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Toggle label for this applied theme. Names the action, not the state.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Light",
            Self::Light => "Dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Durable single-value storage for the explicit theme choice.
///
/// Implementations swallow storage failures: a missing store behaves like an
/// empty one and writes become no-ops.
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
    fn clear(&self);
}

/// Where the applied theme becomes visible.
pub trait ThemeSurface {
    fn apply(&self, theme: Theme);
    fn set_label(&self, text: &str);
}

/// Owns the applied theme for one document.
pub struct ThemeController<S, V> {
    store: S,
    surface: V,
    current: Cell<Theme>,
}

impl<S: PreferenceStore, V: ThemeSurface> ThemeController<S, V> {
    /// Resolve the initial theme (stored choice, else environment) and apply it.
    pub fn init(store: S, surface: V, prefers_dark: bool) -> Self {
        let controller = Self { store, surface, current: Cell::new(Theme::default()) };
        let initial = controller
            .stored()
            .unwrap_or_else(|| Theme::from_prefers_dark(prefers_dark));
        controller.show(initial);
        controller
    }

    /// Currently applied theme.
    pub fn current(&self) -> Theme {
        self.current.get()
    }

    /// Valid explicit choice, if one is persisted.
    pub fn stored(&self) -> Option<Theme> {
        self.store.load().as_deref().and_then(Theme::parse)
    }

    /// Flip the applied theme and persist it as the explicit choice.
    pub fn toggle(&self) -> Theme {
        let next = self.current().flipped();
        self.store.save(next.as_str());
        self.show(next);
        next
    }

    /// React to a live environment change. Returns whether it was applied.
    pub fn on_environment_change(&self, prefers_dark: bool) -> bool {
        if self.stored().is_some() {
            log::debug!("theme: environment change ignored, explicit choice stored");
            return false;
        }
        self.show(Theme::from_prefers_dark(prefers_dark));
        true
    }

    /// Forget the explicit choice and follow the environment again.
    ///
    /// Bound to the optional reset control named by `ThemeConfig::reset_id`.
    pub fn clear_preference(&self, prefers_dark: bool) -> Theme {
        self.store.clear();
        let theme = Theme::from_prefers_dark(prefers_dark);
        self.show(theme);
        theme
    }

    fn show(&self, theme: Theme) {
        self.current.set(theme);
        self.surface.apply(theme);
        self.surface.set_label(theme.toggle_label());
        log::debug!("theme applied: {theme}");
    }
}
