//! Theme context provider for the gallery.
//!
//! The active [`TokenSet`] is resolved once per theme change and shared with
//! every page through a single signal.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| Signal::new(GalleryTheme::new(startup_theme())));
//!
//! // In child components
//! let tokens = use_tokens();
//! let library = use_theme().read().library();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use strata_tokens::{Density, IconLibrary, Mode, ThemeConfig, TokenSet};

/// Current theme selection and the token set resolved from it.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryTheme {
    config: ThemeConfig,
    tokens: Arc<TokenSet>,
}

impl GalleryTheme {
    pub fn new(config: ThemeConfig) -> Self {
        let tokens = Arc::new(config.resolve());
        Self { config, tokens }
    }

    pub fn tokens(&self) -> Arc<TokenSet> {
        self.tokens.clone()
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn library(&self) -> IconLibrary {
        self.config.icon_library
    }

    pub fn density(&self) -> Density {
        self.config.density
    }

    pub fn reduced_motion(&self) -> bool {
        self.config.reduced_motion
    }

    /// Switch mode and re-resolve. No-op when the mode is unchanged.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.config.mode != mode {
            self.config.mode = mode;
            self.refresh();
        }
    }

    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        if self.config.reduced_motion != reduced_motion {
            self.config.reduced_motion = reduced_motion;
            self.refresh();
        }
    }

    /// Library and density are read by components directly, so the token
    /// set is kept.
    pub fn set_library(&mut self, library: IconLibrary) {
        self.config.icon_library = library;
    }

    pub fn set_density(&mut self, density: Density) {
        self.config.density = density;
    }

    fn refresh(&mut self) {
        self.tokens = Arc::new(self.config.resolve());
        tracing::info!(mode = %self.config.mode, reduced_motion = self.config.reduced_motion, "theme changed");
    }
}

/// Hook to access the theme signal from context.
pub fn use_theme() -> Signal<GalleryTheme> {
    use_context::<Signal<GalleryTheme>>()
}

/// Hook to read the active token set.
pub fn use_tokens() -> Arc<TokenSet> {
    use_theme().read().tokens()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_switch_resolves_new_set() {
        let mut theme = GalleryTheme::new(ThemeConfig::default());
        let light = theme.tokens();
        theme.set_mode(Mode::Dark);
        assert_eq!(theme.tokens().mode(), Mode::Dark);
        assert_ne!(theme.tokens(), light);
    }

    #[test]
    fn same_mode_keeps_set() {
        let mut theme = GalleryTheme::new(ThemeConfig::default());
        let before = theme.tokens();
        theme.set_mode(Mode::Light);
        assert!(Arc::ptr_eq(&before, &theme.tokens()));
    }

    #[test]
    fn library_change_keeps_set() {
        let mut theme = GalleryTheme::new(ThemeConfig::default());
        let before = theme.tokens();
        theme.set_library(IconLibrary::Filled);
        assert_eq!(theme.library(), IconLibrary::Filled);
        assert!(Arc::ptr_eq(&before, &theme.tokens()));
    }

    #[test]
    fn reduced_motion_resolves_instant() {
        let mut theme = GalleryTheme::new(ThemeConfig::default());
        theme.set_reduced_motion(true);
        assert!(theme.tokens().reduced_motion());
        assert_eq!(theme.tokens().semantic().motion.hover.duration.get(), 0);
    }
}
