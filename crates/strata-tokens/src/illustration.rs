//! Illustrations for empty, error and success states.
//!
//! Artwork is drawn on a 200×200 grid in two layers: outline strokes take
//! the illustration color and accent fills take the accent color.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TokenError;
use crate::icons::IconName;

/// A closed set of illustrated states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Illustration {
    NoResults,
    EmptyInbox,
    NoData,
    Error,
    Offline,
    NotFound,
    Upload,
    Success,
}

/// Default copy shown with an illustration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IllustrationContent {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Which color a path in the artwork takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Outline,
    Accent,
}

impl Illustration {
    pub const ALL: [Illustration; 8] = [
        Illustration::NoResults,
        Illustration::EmptyInbox,
        Illustration::NoData,
        Illustration::Error,
        Illustration::Offline,
        Illustration::NotFound,
        Illustration::Upload,
        Illustration::Success,
    ];

    pub const VIEW_BOX: &'static str = "0 0 200 200";

    pub fn as_str(&self) -> &'static str {
        match self {
            Illustration::NoResults => "no-results",
            Illustration::EmptyInbox => "empty-inbox",
            Illustration::NoData => "no-data",
            Illustration::Error => "error",
            Illustration::Offline => "offline",
            Illustration::NotFound => "not-found",
            Illustration::Upload => "upload",
            Illustration::Success => "success",
        }
    }

    pub fn content(&self) -> IllustrationContent {
        let (heading, body) = match self {
            Illustration::NoResults => (
                "No results found",
                "Try adjusting your search or filters to find what you're looking for.",
            ),
            Illustration::EmptyInbox => ("You're all caught up", "New messages will appear here."),
            Illustration::NoData => (
                "No data yet",
                "Once data is available it will show up here.",
            ),
            Illustration::Error => (
                "Something went wrong",
                "An unexpected error occurred. Please try again.",
            ),
            Illustration::Offline => (
                "You're offline",
                "Check your connection. We'll keep trying in the meantime.",
            ),
            Illustration::NotFound => (
                "Page not found",
                "The page you're looking for doesn't exist or has moved.",
            ),
            Illustration::Upload => ("Drop files to upload", "Drag files here or browse to select them."),
            Illustration::Success => ("All done", "Your changes have been saved."),
        };
        IllustrationContent { heading, body }
    }

    /// Small icon badged onto the artwork.
    pub fn badge(&self) -> IconName {
        match self {
            Illustration::NoResults => IconName::Search,
            Illustration::EmptyInbox => IconName::Inbox,
            Illustration::NoData => IconName::File,
            Illustration::Error => IconName::Error,
            Illustration::Offline => IconName::CloudOff,
            Illustration::NotFound => IconName::Warning,
            Illustration::Upload => IconName::Upload,
            Illustration::Success => IconName::CheckCircle,
        }
    }

    /// Artwork paths with the layer each belongs to.
    pub fn artwork(&self) -> &'static [(Layer, &'static str)] {
        use Layer::{Accent, Outline};
        match self {
            Illustration::NoResults => &[
                (Accent, "M100 40a60 60 0 1 0 0 120 60 60 0 0 0 0-120z"),
                (Outline, "M92 60a28 28 0 1 0 0 56 28 28 0 0 0 0-56z"),
                (Outline, "M112 108l30 30"),
            ],
            Illustration::EmptyInbox => &[
                (Accent, "M40 120h120v36a8 8 0 0 1-8 8H48a8 8 0 0 1-8-8z"),
                (Outline, "M40 120l24-56h72l24 56"),
                (Outline, "M40 120h36l8 16h32l8-16h36"),
            ],
            Illustration::NoData => &[
                (Accent, "M56 40h64l32 32v88H56z"),
                (Outline, "M120 40v32h32"),
                (Outline, "M76 104h48M76 124h32"),
            ],
            Illustration::Error => &[
                (Accent, "M100 36 172 160H28z"),
                (Outline, "M100 84v36"),
                (Outline, "M100 136v4"),
            ],
            Illustration::Offline => &[
                (Accent, "M60 136a32 32 0 0 1 4-64 44 44 0 0 1 84 12 26 26 0 0 1-4 52z"),
                (Outline, "M48 48l104 104"),
            ],
            Illustration::NotFound => &[
                (Accent, "M40 56h120v96H40z"),
                (Outline, "M40 76h120"),
                (Outline, "M84 104l32 32M116 104l-32 32"),
            ],
            Illustration::Upload => &[
                (Accent, "M44 132h112v28H44z"),
                (Outline, "M100 120V52"),
                (Outline, "M72 80l28-28 28 28"),
            ],
            Illustration::Success => &[
                (Accent, "M100 40a60 60 0 1 0 0 120 60 60 0 0 0 0-120z"),
                (Outline, "M72 100l20 20 36-40"),
            ],
        }
    }
}

impl fmt::Display for Illustration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Illustration {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Illustration::ALL
            .into_iter()
            .find(|i| i.as_str() == wanted)
            .ok_or_else(|| TokenError::UnknownIllustration(s.to_string()))
    }
}

/// Look up an illustration by name; unknown names warn and return `None`.
pub fn lookup_illustration(name: &str) -> Option<Illustration> {
    match name.parse() {
        Ok(illustration) => Some(illustration),
        Err(_) => {
            tracing::warn!(illustration = name, "unknown illustration name, rendering nothing");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::IconLibrary;

    #[test]
    fn names_round_trip_through_display() {
        for illustration in Illustration::ALL {
            assert_eq!(illustration.to_string().parse::<Illustration>().unwrap(), illustration);
        }
    }

    #[test]
    fn underscores_are_accepted() {
        assert_eq!("no_results".parse::<Illustration>().unwrap(), Illustration::NoResults);
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(lookup_illustration("unicorn"), None);
        assert!(matches!(
            "unicorn".parse::<Illustration>(),
            Err(TokenError::UnknownIllustration(_))
        ));
    }

    #[test]
    fn every_illustration_has_copy_and_art() {
        for illustration in Illustration::ALL {
            let content = illustration.content();
            assert!(!content.heading.is_empty());
            assert!(!content.body.is_empty());
            assert!(illustration
                .artwork()
                .iter()
                .any(|(layer, _)| *layer == Layer::Accent));
        }
    }

    #[test]
    fn badges_exist_in_outlined_library() {
        for illustration in Illustration::ALL {
            assert!(IconLibrary::Outlined.glyph(illustration.badge()).is_some());
        }
    }
}
