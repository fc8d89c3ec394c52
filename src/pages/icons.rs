//! Icon libraries side by side, filterable by name.

use dioxus::prelude::*;
use strata_tokens::{IconLibrary, IconName};
use strata_ui::{Icon, IconByName, SearchInput, Style};

use crate::components::DemoSection;
use crate::context::{use_theme, use_tokens};

/// Icon names containing `query`, case-insensitively.
pub fn filter_icons(query: &str) -> Vec<IconName> {
    let query = query.trim().to_lowercase();
    IconName::ALL
        .iter()
        .copied()
        .filter(|name| name.as_str().contains(&query))
        .collect()
}

/// Names from `shown` that `library` can draw, in catalog order.
pub fn library_icons(library: IconLibrary, shown: &[IconName]) -> Vec<IconName> {
    library.names().filter(|name| shown.contains(name)).collect()
}

#[component]
pub fn IconsPage() -> Element {
    let tokens = use_tokens();
    let library = use_theme().read().library();
    let mut query = use_signal(String::new);
    let names = filter_icons(&query());

    let sem = tokens.semantic();
    let tile = Style::new()
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("align-items", "center")
        .set("gap", sem.space.stack_xs)
        .set("width", "112px")
        .set("padding", sem.space.inset_sm.css())
        .set("background", sem.background.surface)
        .set("border-radius", sem.shape.container)
        .set("color", sem.text.primary)
        .into_string();
    let size = tokens.component().file_drop.icon_size;
    let libraries: Vec<(IconLibrary, Vec<IconName>)> = IconLibrary::ALL
        .into_iter()
        .map(|lib| (lib, library_icons(lib, &names)))
        .collect();

    rsx! {
        DemoSection {
            tokens: tokens.clone(),
            title: "Icons".to_string(),
            caption: format!("{} icons, {} library selected", IconName::ALL.len(), library),
            SearchInput {
                tokens: tokens.clone(),
                value: query(),
                oninput: move |value| query.set(value),
                placeholder: "Filter icons".to_string(),
                library: library,
            }
        }

        for (lib, drawable) in libraries {
            DemoSection { key: "{lib}", tokens: tokens.clone(), title: format!("{} library", lib),
                div { class: "gallery-row",
                    for name in drawable {
                        div { key: "{name}", style: "{tile}",
                            Icon { name: name, library: lib, size: size }
                            code { class: "gallery-caption", "{name}" }
                        }
                    }
                }
            }
        }

        DemoSection {
            tokens: tokens.clone(),
            title: "Lookup by name".to_string(),
            caption: "Unknown names render nothing and log a warning.".to_string(),
            div { class: "gallery-row",
                IconByName { name: "sparkle".to_string(), library: library, size: size }
                IconByName { name: "not-an-icon".to_string(), library: library, size: size }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_keeps_every_icon() {
        assert_eq!(filter_icons("").len(), IconName::ALL.len());
    }

    #[test]
    fn library_grid_skips_missing_glyphs() {
        let all = filter_icons("");
        assert_eq!(library_icons(IconLibrary::Outlined, &all).len(), IconName::ALL.len());
        let filled = library_icons(IconLibrary::Filled, &all);
        assert!(filled.iter().all(|name| IconLibrary::Filled.glyph(*name).is_some()));
        assert!(library_icons(IconLibrary::Outlined, &filter_icons("zzz")).is_empty());
    }

    #[test]
    fn query_matches_substrings() {
        let chevrons = filter_icons("Chevron");
        assert!(chevrons.contains(&IconName::ChevronDown));
        assert!(chevrons.contains(&IconName::ChevronsRight));
        assert!(!chevrons.contains(&IconName::Search));
        assert!(filter_icons("zzz").is_empty());
    }
}
