//! Icon Components
//!
//! - Icon: a typed [`IconName`] drawn from an [`IconLibrary`]
//! - IconByName: string lookup for data-driven callers
//!
//! A glyph the library lacks, or a name nothing knows, renders an empty
//! node and logs a warning.

use dioxus::prelude::*;
use strata_tokens::base::BASE;
use strata_tokens::{Color, Glyph, GlyphStyle, IconLibrary, IconName, Px};

/// `(fill, stroke)` paint for a glyph style.
pub fn glyph_paint(style: GlyphStyle) -> (&'static str, &'static str) {
    match style {
        GlyphStyle::Stroke => ("none", "currentColor"),
        GlyphStyle::Fill => ("currentColor", "none"),
    }
}

/// CSS color for an optional override, defaulting to the inherited color.
pub fn icon_color(color: Option<Color>) -> String {
    color.map_or_else(|| "currentColor".to_string(), |c| c.to_string())
}

fn render_glyph(glyph: Glyph, size: Px, color: Option<Color>, label: Option<&str>) -> Element {
    let (fill, stroke) = glyph_paint(glyph.style);
    let color = icon_color(color);
    let hidden = label.is_none();
    let label = label.unwrap_or("").to_string();

    rsx! {
        svg {
            class: "strata-icon",
            view_box: Glyph::VIEW_BOX,
            width: "{size}",
            height: "{size}",
            fill: fill,
            stroke: stroke,
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            style: "color: {color}; flex-shrink: 0;",
            role: "img",
            "aria-hidden": if hidden { "true" } else { "false" },
            "aria-label": "{label}",
            for d in glyph.paths.iter() {
                path { d: *d }
            }
        }
    }
}

/// Properties for the Icon component
#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    pub name: IconName,
    #[props(default)]
    pub library: IconLibrary,
    /// Rendered edge length; base `icon_md` when unset
    #[props(default)]
    pub size: Option<Px>,
    /// Explicit color; inherits `currentColor` when unset
    #[props(default)]
    pub color: Option<Color>,
    /// Accessible label; decorative (aria-hidden) when unset
    #[props(default)]
    pub aria_label: Option<String>,
}

/// Draw one icon
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Icon { name: IconName::Search, library: IconLibrary::Filled }
/// }
/// ```
#[component]
pub fn Icon(props: IconProps) -> Element {
    let size = props.size.unwrap_or(BASE.sizing.icon_md);
    match props.library.glyph(props.name) {
        Some(glyph) => render_glyph(glyph, size, props.color, props.aria_label.as_deref()),
        None => {
            tracing::warn!(
                icon = %props.name,
                library = %props.library,
                "icon missing from library, rendering nothing"
            );
            rsx! {}
        }
    }
}

/// Properties for the IconByName component
#[derive(Clone, PartialEq, Props)]
pub struct IconByNameProps {
    /// Kebab-case icon name, e.g. `"chevron-down"`
    pub name: String,
    #[props(default)]
    pub library: IconLibrary,
    #[props(default)]
    pub size: Option<Px>,
    #[props(default)]
    pub color: Option<Color>,
    #[props(default)]
    pub aria_label: Option<String>,
}

/// Draw an icon looked up by string
#[component]
pub fn IconByName(props: IconByNameProps) -> Element {
    let size = props.size.unwrap_or(BASE.sizing.icon_md);
    match strata_tokens::lookup_icon(props.library, &props.name) {
        Some(glyph) => render_glyph(glyph, size, props.color, props.aria_label.as_deref()),
        None => rsx! {},
    }
}
