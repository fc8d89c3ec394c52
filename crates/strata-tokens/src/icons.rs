//! Icon catalog.
//!
//! Icon names form a closed set; each library maps a name to glyph path
//! data on a 24×24 grid or to nothing when the library lacks that icon.
//! String lookups that miss log a warning and return `None` so callers can
//! render nothing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// How a glyph's paths are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphStyle {
    /// Paths are outlines drawn with `stroke: currentColor`.
    Stroke,
    /// Paths are solid shapes drawn with `fill: currentColor`.
    Fill,
}

/// SVG path data for one icon in one library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub paths: &'static [&'static str],
    pub style: GlyphStyle,
}

impl Glyph {
    pub const VIEW_BOX: &'static str = "0 0 24 24";
}

macro_rules! icon_names {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// Every icon the kit knows about.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum IconName {
            $($variant,)*
        }

        impl IconName {
            pub const ALL: &'static [IconName] = &[$(IconName::$variant,)*];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(IconName::$variant => $name,)*
                }
            }
        }

        impl FromStr for IconName {
            type Err = TokenError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($name => Ok(IconName::$variant),)*
                    other => Err(TokenError::UnknownIcon(other.to_string())),
                }
            }
        }
    };
}

icon_names! {
    Error => "error",
    Warning => "warning",
    CheckCircle => "check-circle",
    Info => "info",
    Clock => "clock",
    MinusCircle => "minus-circle",
    Close => "close",
    Check => "check",
    Plus => "plus",
    Minus => "minus",
    ChevronLeft => "chevron-left",
    ChevronRight => "chevron-right",
    ChevronUp => "chevron-up",
    ChevronDown => "chevron-down",
    ChevronsLeft => "chevrons-left",
    ChevronsRight => "chevrons-right",
    Search => "search",
    Upload => "upload",
    Download => "download",
    File => "file",
    Folder => "folder",
    Inbox => "inbox",
    Menu => "menu",
    Grip => "grip",
    PanelLeft => "panel-left",
    PanelRight => "panel-right",
    PanelBottom => "panel-bottom",
    TrendUp => "trend-up",
    TrendDown => "trend-down",
    Sparkle => "sparkle",
    CloudOff => "cloud-off",
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for IconName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Available icon libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconLibrary {
    /// Stroked outlines; covers every icon name.
    #[default]
    Outlined,
    /// Solid shapes; covers the common subset.
    Filled,
}

impl IconLibrary {
    pub const ALL: [IconLibrary; 2] = [IconLibrary::Outlined, IconLibrary::Filled];

    pub fn as_str(&self) -> &'static str {
        match self {
            IconLibrary::Outlined => "outlined",
            IconLibrary::Filled => "filled",
        }
    }

    /// Glyph for `name`, or `None` when this library has no such icon.
    pub fn glyph(&self, name: IconName) -> Option<Glyph> {
        let paths = match self {
            IconLibrary::Outlined => Some(outlined(name)),
            IconLibrary::Filled => filled(name),
        }?;
        let style = match self {
            IconLibrary::Outlined => GlyphStyle::Stroke,
            IconLibrary::Filled => GlyphStyle::Fill,
        };
        Some(Glyph { paths, style })
    }

    /// Names this library can draw.
    pub fn names(&self) -> impl Iterator<Item = IconName> + '_ {
        IconName::ALL
            .iter()
            .copied()
            .filter(move |name| self.glyph(*name).is_some())
    }
}

impl fmt::Display for IconLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconLibrary {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "outlined" | "outline" => Ok(IconLibrary::Outlined),
            "filled" | "solid" => Ok(IconLibrary::Filled),
            other => Err(TokenError::UnknownIconLibrary(other.to_string())),
        }
    }
}

/// Look up a glyph by string name.
///
/// Unknown names and icons missing from `library` are not errors: a warning
/// is logged and `None` returned.
pub fn lookup_icon(library: IconLibrary, name: &str) -> Option<Glyph> {
    let icon = match name.parse::<IconName>() {
        Ok(icon) => icon,
        Err(_) => {
            tracing::warn!(icon = name, "unknown icon name, rendering nothing");
            return None;
        }
    };
    let glyph = library.glyph(icon);
    if glyph.is_none() {
        tracing::warn!(icon = name, library = %library, "icon missing from library, rendering nothing");
    }
    glyph
}

const CIRCLE: &str = "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z";
const FRAME: &str = "M3 5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z";
const TRAY: &str = "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4";

fn outlined(name: IconName) -> &'static [&'static str] {
    match name {
        IconName::Error => &[CIRCLE, "M15 9l-6 6", "M9 9l6 6"],
        IconName::Warning => &[
            "M10.3 3.9 1.8 18a2 2 0 0 0 1.7 3h16.9a2 2 0 0 0 1.7-3L13.7 3.9a2 2 0 0 0-3.4 0z",
            "M12 9v4",
            "M12 17h.01",
        ],
        IconName::CheckCircle => &[CIRCLE, "M9 12l2 2 4-4"],
        IconName::Info => &[CIRCLE, "M12 16v-4", "M12 8h.01"],
        IconName::Clock => &[CIRCLE, "M12 6v6l4 2"],
        IconName::MinusCircle => &[CIRCLE, "M8 12h8"],
        IconName::Close => &["M18 6 6 18", "M6 6l12 12"],
        IconName::Check => &["M20 6 9 17l-5-5"],
        IconName::Plus => &["M12 5v14", "M5 12h14"],
        IconName::Minus => &["M5 12h14"],
        IconName::ChevronLeft => &["M15 18l-6-6 6-6"],
        IconName::ChevronRight => &["M9 18l6-6-6-6"],
        IconName::ChevronUp => &["M18 15l-6-6-6 6"],
        IconName::ChevronDown => &["M6 9l6 6 6-6"],
        IconName::ChevronsLeft => &["M11 17l-5-5 5-5", "M18 17l-5-5 5-5"],
        IconName::ChevronsRight => &["M13 17l5-5-5-5", "M6 17l5-5-5-5"],
        IconName::Search => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "M21 21l-4.3-4.3"],
        IconName::Upload => &[TRAY, "M17 8l-5-5-5 5", "M12 3v12"],
        IconName::Download => &[TRAY, "M7 10l5 5 5-5", "M12 15V3"],
        IconName::File => &[
            "M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z",
            "M14 2v6h6",
        ],
        IconName::Folder => &[
            "M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2z",
        ],
        IconName::Inbox => &[
            "M22 12h-6l-2 3h-4l-2-3H2",
            "M5.5 5.1 2 12v6a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-6l-3.5-6.9A2 2 0 0 0 16.8 4H7.2a2 2 0 0 0-1.7 1.1z",
        ],
        IconName::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
        IconName::Grip => &[
            "M9 5h.01", "M9 12h.01", "M9 19h.01", "M15 5h.01", "M15 12h.01", "M15 19h.01",
        ],
        IconName::PanelLeft => &[FRAME, "M9 3v18"],
        IconName::PanelRight => &[FRAME, "M15 3v18"],
        IconName::PanelBottom => &[FRAME, "M3 15h18"],
        IconName::TrendUp => &["M22 7l-8.5 8.5-5-5L2 17", "M16 7h6v6"],
        IconName::TrendDown => &["M22 17l-8.5-8.5-5 5L2 7", "M16 17h6v-6"],
        IconName::Sparkle => &["M12 3l1.9 5.8L20 11l-6.1 2.2L12 19l-1.9-5.8L4 11l6.1-2.2z"],
        IconName::CloudOff => &[
            "M2 2l20 20",
            "M5.8 5.8A7 7 0 0 0 9 19h9a5 5 0 0 0 1.7-.3",
            "M21.5 15.5A5 5 0 0 0 18 10h-1.3A7 7 0 0 0 9.8 5.1",
        ],
    }
}

fn filled(name: IconName) -> Option<&'static [&'static str]> {
    let paths: &'static [&'static str] = match name {
        IconName::Error => &[
            "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm3.7 12.3-1.4 1.4L12 13.4l-2.3 2.3-1.4-1.4 2.3-2.3-2.3-2.3 1.4-1.4 2.3 2.3 2.3-2.3 1.4 1.4-2.3 2.3z",
        ],
        IconName::Warning => &["M1 21h22L12 2 1 21zm12-3h-2v-2h2v2zm0-4h-2v-4h2v4z"],
        IconName::CheckCircle => &[
            "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm-2 15-5-5 1.4-1.4 3.6 3.6 7.6-7.6L19 8l-9 9z",
        ],
        IconName::Info => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm1 15h-2v-6h2v6zm0-8h-2V7h2v2z"],
        IconName::Clock => &[
            "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm4.2 14.2L11 13V7h1.5v5.2l4.5 2.7-.8 1.3z",
        ],
        IconName::MinusCircle => &["M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm5 11H7v-2h10v2z"],
        IconName::Close => &[
            "M19 6.4 17.6 5 12 10.6 6.4 5 5 6.4 10.6 12 5 17.6 6.4 19 12 13.4 17.6 19 19 17.6 13.4 12z",
        ],
        IconName::Check => &["M9 16.2 4.8 12l-1.4 1.4L9 19 21 7l-1.4-1.4z"],
        IconName::Plus => &["M19 13h-6v6h-2v-6H5v-2h6V5h2v6h6v2z"],
        IconName::Minus => &["M19 13H5v-2h14v2z"],
        IconName::ChevronLeft => &["M15.4 7.4 14 6l-6 6 6 6 1.4-1.4-4.6-4.6z"],
        IconName::ChevronRight => &["M10 6 8.6 7.4 13.2 12l-4.6 4.6L10 18l6-6z"],
        IconName::ChevronUp => &["M12 8l-6 6 1.4 1.4 4.6-4.6 4.6 4.6L18 14z"],
        IconName::ChevronDown => &["M16.6 8.6 12 13.2 7.4 8.6 6 10l6 6 6-6z"],
        IconName::Search => &[
            "M15.5 14h-.8l-.3-.3A6.5 6.5 0 1 0 14 15.5l.3.3v.8l5 5 1.5-1.5-5-5zm-6 0a4.5 4.5 0 1 1 0-9 4.5 4.5 0 0 1 0 9z",
        ],
        IconName::Upload => &["M9 16h6v-6h4l-7-7-7 7h4zm-4 2h14v2H5z"],
        IconName::Download => &["M19 9h-4V3H9v6H5l7 7 7-7zM5 18v2h14v-2H5z"],
        IconName::File => &["M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8l-6-6zm-1 7V3.5L18.5 9H13z"],
        IconName::Folder => &["M10 4H4a2 2 0 0 0-2 2v12a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V8a2 2 0 0 0-2-2h-8l-2-2z"],
        IconName::Menu => &["M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z"],
        IconName::TrendUp => &["M16 6l2.3 2.3-4.9 4.9-4-4L2 16.6 3.4 18l6-6 4 4 6.3-6.3L22 12V6z"],
        IconName::TrendDown => &["M16 18l2.3-2.3-4.9-4.9-4 4L2 7.4 3.4 6l6 6 4-4 6.3 6.3L22 12v6z"],
        IconName::Sparkle => &["M12 2l2.4 7.4L22 12l-7.6 2.6L12 22l-2.4-7.4L2 12l7.6-2.6z"],
        IconName::ChevronsLeft
        | IconName::ChevronsRight
        | IconName::Inbox
        | IconName::Grip
        | IconName::PanelLeft
        | IconName::PanelRight
        | IconName::PanelBottom
        | IconName::CloudOff => return None,
    };
    Some(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_strings() {
        for name in IconName::ALL {
            assert_eq!(name.as_str().parse::<IconName>().unwrap(), *name);
        }
    }

    #[test]
    fn unknown_name_is_none_not_panic() {
        assert!(lookup_icon(IconLibrary::Outlined, "definitely-not-an-icon").is_none());
        assert!(lookup_icon(IconLibrary::Filled, "").is_none());
    }

    #[test]
    fn outlined_covers_every_name() {
        assert_eq!(IconLibrary::Outlined.names().count(), IconName::ALL.len());
    }

    #[test]
    fn filled_lacks_panel_icons() {
        assert!(IconLibrary::Filled.glyph(IconName::PanelLeft).is_none());
        assert!(lookup_icon(IconLibrary::Filled, "panel-left").is_none());
        assert!(lookup_icon(IconLibrary::Outlined, "panel-left").is_some());
    }

    #[test]
    fn glyph_style_follows_library() {
        let glyph = IconLibrary::Filled.glyph(IconName::Check).unwrap();
        assert_eq!(glyph.style, GlyphStyle::Fill);
        let glyph = IconLibrary::Outlined.glyph(IconName::Check).unwrap();
        assert_eq!(glyph.style, GlyphStyle::Stroke);
    }

    #[test]
    fn library_parses_aliases() {
        assert_eq!("Solid".parse::<IconLibrary>().unwrap(), IconLibrary::Filled);
        assert!(matches!(
            "emoji".parse::<IconLibrary>(),
            Err(TokenError::UnknownIconLibrary(_))
        ));
    }
}
