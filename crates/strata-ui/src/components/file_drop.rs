//! File Drop Component
//!
//! Drop zone that forwards the names of dropped or picked files to a
//! callback. Reading, uploading and retrying are left to the caller.

use std::path::Path;
use std::sync::Arc;

use dioxus::html::HasFileData;
use dioxus::prelude::*;
use strata_tokens::{IconLibrary, IconName, TokenSet};

use crate::components::icon::Icon;
use crate::style::Style;

/// Base names of the given paths, in order. Paths without a final
/// component are passed through unchanged.
pub fn file_names(paths: Vec<String>) -> Vec<String> {
    paths
        .into_iter()
        .map(|path| {
            Path::new(&path)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or(path)
        })
        .collect()
}

pub fn drop_zone_style(tokens: &TokenSet, active: bool) -> String {
    let t = &tokens.component().file_drop;
    Style::new()
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("align-items", "center")
        .set("justify-content", "center")
        .set("gap", t.gap)
        .set("padding", t.padding.css())
        .set("background", if active { t.background_active } else { t.background })
        .set(
            "border",
            format!(
                "{} dashed {}",
                t.border_width,
                if active { t.border_active } else { t.border }
            ),
        )
        .set("border-radius", t.radius)
        .set("color", t.text)
        .set("text-align", "center")
        .set("cursor", "pointer")
        .transition(&["background", "border-color"], &t.transition)
        .into_string()
}

/// Properties for the FileDrop component
#[derive(Clone, PartialEq, Props)]
pub struct FileDropProps {
    pub tokens: Arc<TokenSet>,
    /// Receives the names of dropped or picked files
    pub onfiles: EventHandler<Vec<String>>,
    #[props(default = "Drop files here".to_string())]
    pub prompt: String,
    #[props(default = "or click to browse".to_string())]
    pub hint: String,
    /// Accept filter for the file picker, e.g. `".png,.jpg"`
    #[props(default)]
    pub accept: Option<String>,
    #[props(default = true)]
    pub multiple: bool,
    #[props(default)]
    pub library: IconLibrary,
}

/// Drag-and-drop file target
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FileDrop {
///         tokens: tokens.clone(),
///         onfiles: move |names: Vec<String>| uploaded.set(names),
///     }
/// }
/// ```
#[component]
pub fn FileDrop(props: FileDropProps) -> Element {
    let mut active = use_signal(|| false);
    let onfiles = props.onfiles;
    let t = &props.tokens.component().file_drop;
    let style = drop_zone_style(&props.tokens, active());
    let icon_color = if active() { t.border_active } else { t.icon };
    let icon_size = t.icon_size;
    let hint_style = Style::new()
        .set("color", t.hint)
        .set("font-size", props.tokens.semantic().typography.caption.size)
        .into_string();
    let accept = props.accept.clone().unwrap_or_default();

    rsx! {
        label {
            class: "strata-file-drop",
            style: "{style}",
            "aria-label": "{props.prompt}",
            ondragenter: move |e| {
                e.prevent_default();
                active.set(true);
            },
            ondragover: move |e| e.prevent_default(),
            ondragleave: move |_| active.set(false),
            ondrop: move |e| {
                e.prevent_default();
                active.set(false);
                if let Some(engine) = e.files() {
                    let names = file_names(engine.files());
                    tracing::debug!(count = names.len(), "files dropped");
                    onfiles.call(names);
                }
            },
            Icon { name: IconName::Upload, library: props.library, size: icon_size, color: icon_color }
            span { "{props.prompt}" }
            span { style: "{hint_style}", "{props.hint}" }
            input {
                r#type: "file",
                style: "display: none;",
                accept: "{accept}",
                multiple: props.multiple,
                onchange: move |e| {
                    if let Some(engine) = e.files() {
                        onfiles.call(file_names(engine.files()));
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_tokens::{resolve, Mode};

    #[test]
    fn names_strip_directories() {
        let names = file_names(vec![
            "/tmp/report.pdf".to_string(),
            "photo.png".to_string(),
            "/".to_string(),
        ]);
        assert_eq!(names, vec!["report.pdf", "photo.png", "/"]);
    }

    #[test]
    fn active_zone_switches_colors() {
        let set = resolve(Mode::Light);
        let t = &set.component().file_drop;
        let idle = drop_zone_style(&set, false);
        let active = drop_zone_style(&set, true);
        assert!(idle.contains(&format!("background: {};", t.background)));
        assert!(idle.contains(&format!("dashed {};", t.border)));
        assert!(active.contains(&format!("background: {};", t.background_active)));
        assert!(active.contains(&format!("dashed {};", t.border_active)));
    }
}
