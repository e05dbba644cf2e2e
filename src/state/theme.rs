//! Theme selection: persisted choice first, system preference second.
//!
//! DESIGN
//! ======
//! Storage sits behind `PreferenceStore` so the precedence rules run on the
//! host. The browser store lives in `util::storage`, the `<body>` class in
//! `util::theme`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Storage key holding the persisted theme.
pub const STORAGE_KEY: &str = "theme";

/// The two page themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Slate,
}

impl Theme {
    /// Body class for this theme. Also the persisted value.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Dark => "theme-dark",
            Self::Slate => "theme-slate",
        }
    }

    /// Parse a persisted value. Accepts the class name or the bare tag.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "theme-dark" | "dark" => Some(Self::Dark),
            "theme-slate" | "slate" => Some(Self::Slate),
            _ => None,
        }
    }

    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Slate }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Slate,
            Self::Slate => Self::Dark,
        }
    }

    /// Glyph for the toggle button: the theme you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Dark => "☀",
            Self::Slate => "☾",
        }
    }
}

/// Key-value preference persistence.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Resolves and persists the active theme.
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Pick the initial theme from the store, falling back to the system preference.
    pub fn load(store: S, system_prefers_dark: bool) -> Self {
        let current = Self::stored_in(&store).unwrap_or_else(|| Theme::from_system(system_prefers_dark));
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn has_stored_preference(&self) -> bool {
        Self::stored_in(&self.store).is_some()
    }

    /// Flip the theme and persist the choice.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.set(STORAGE_KEY, self.current.class_name());
        self.current
    }

    /// Follow a system preference change unless the user chose explicitly.
    ///
    /// Returns the new theme when it was applied.
    pub fn system_changed(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.has_stored_preference() {
            return None;
        }
        self.current = Theme::from_system(prefers_dark);
        Some(self.current)
    }

    fn stored_in(store: &S) -> Option<Theme> {
        store.get(STORAGE_KEY).as_deref().and_then(Theme::parse)
    }
}
