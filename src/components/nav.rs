//! Gallery Shell Component
//!
//! Sidebar with one link per widget family plus mode, icon library and
//! motion controls. Pages render into the outlet on the right.

use dioxus::prelude::*;
use strata_tokens::{ButtonVariant, ControlSize, IconLibrary, IconName, Mode, TokenSet};
use strata_ui::{Button, Icon, Style};

use crate::app::Route;
use crate::context::use_theme;

/// Navigation location within the gallery
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavLocation {
    Overview,
    Status,
    Icons,
    Illustrations,
    Transfer,
    Dock,
    Forms,
    Data,
}

impl NavLocation {
    pub const ALL: [NavLocation; 8] = [
        NavLocation::Overview,
        NavLocation::Status,
        NavLocation::Icons,
        NavLocation::Illustrations,
        NavLocation::Transfer,
        NavLocation::Dock,
        NavLocation::Forms,
        NavLocation::Data,
    ];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Overview => "Tokens",
            NavLocation::Status => "Status",
            NavLocation::Icons => "Icons",
            NavLocation::Illustrations => "Illustrations",
            NavLocation::Transfer => "Transfer List",
            NavLocation::Dock => "Dock Layout",
            NavLocation::Forms => "Forms",
            NavLocation::Data => "Data & AI",
        }
    }

    pub fn icon(&self) -> IconName {
        match self {
            NavLocation::Overview => IconName::Menu,
            NavLocation::Status => IconName::CheckCircle,
            NavLocation::Icons => IconName::Sparkle,
            NavLocation::Illustrations => IconName::Inbox,
            NavLocation::Transfer => IconName::ChevronsRight,
            NavLocation::Dock => IconName::PanelLeft,
            NavLocation::Forms => IconName::File,
            NavLocation::Data => IconName::TrendUp,
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Overview => Route::Overview {},
            NavLocation::Status => Route::StatusPage {},
            NavLocation::Icons => Route::IconsPage {},
            NavLocation::Illustrations => Route::IllustrationsPage {},
            NavLocation::Transfer => Route::TransferPage {},
            NavLocation::Dock => Route::DockPage {},
            NavLocation::Forms => Route::FormsPage {},
            NavLocation::Data => Route::DataPage {},
        }
    }
}

pub fn sidebar_style(tokens: &TokenSet) -> String {
    let sem = tokens.semantic();
    Style::new()
        .set("display", "flex")
        .set("flex-direction", "column")
        .set("gap", sem.space.stack_md)
        .set("padding", sem.space.inset_md.css())
        .set("background", sem.background.surface)
        .set("border-right", format!("{} solid {}", sem.border.width, sem.border.default))
        .set("overflow-y", "auto")
        .into_string()
}

pub fn nav_link_style(tokens: &TokenSet, active: bool) -> String {
    let sem = tokens.semantic();
    Style::new()
        .set("display", "flex")
        .set("align-items", "center")
        .set("gap", sem.space.inline_sm)
        .set("padding", sem.space.inset_xs.css())
        .set("border-radius", sem.shape.control)
        .set("color", if active { sem.text.primary } else { sem.text.secondary })
        .set_if(active, "background", sem.background.selected)
        .extend(&sem.typography.label.css())
        .into_string()
}

/// Layout wrapping every gallery page
#[component]
pub fn GalleryShell() -> Element {
    let mut theme = use_theme();
    let route = use_route::<Route>();
    let (tokens, mode, library, reduced_motion) = {
        let current = theme.read();
        (
            current.tokens(),
            current.mode(),
            current.library(),
            current.reduced_motion(),
        )
    };

    let sidebar = sidebar_style(&tokens);
    let sem = tokens.semantic();
    let title_style = Style::new()
        .extend(&sem.typography.title.css())
        .set("color", sem.text.primary)
        .into_string();
    let group_label = Style::new()
        .set("color", sem.text.muted)
        .extend(&sem.typography.caption.css())
        .set("text-transform", "uppercase")
        .into_string();
    let links: Vec<(NavLocation, String)> = NavLocation::ALL
        .into_iter()
        .map(|location| {
            let style = nav_link_style(&tokens, location.route() == route);
            (location, style)
        })
        .collect();
    let icon_size = tokens.component().button.small.icon_size;
    let pick = |selected: bool| {
        if selected {
            ButtonVariant::Primary
        } else {
            ButtonVariant::Outlined
        }
    };
    let modes: Vec<(Mode, ButtonVariant)> = Mode::ALL.into_iter().map(|m| (m, pick(m == mode))).collect();
    let libraries: Vec<(IconLibrary, ButtonVariant)> = IconLibrary::ALL
        .into_iter()
        .map(|l| (l, pick(l == library)))
        .collect();
    let motion_variant = pick(reduced_motion);
    let motion_label = if reduced_motion {
        "Reduced motion on"
    } else {
        "Reduced motion off"
    };

    rsx! {
        div { class: "gallery",
            aside { style: "{sidebar}",
                h1 { style: "{title_style}", "Strata" }

                nav { style: "display: flex; flex-direction: column; gap: 2px;",
                    for (location, link_style) in links {
                        Link { to: location.route(),
                            div { style: "{link_style}",
                                Icon { name: location.icon(), library: library, size: icon_size }
                                span { "{location.display_name()}" }
                            }
                        }
                    }
                }

                span { style: "{group_label}", "Mode" }
                div { class: "gallery-row",
                    for (option, variant) in modes {
                        Button {
                            tokens: tokens.clone(),
                            size: ControlSize::Small,
                            variant: variant,
                            onclick: move |_| theme.write().set_mode(option),
                            "{option}"
                        }
                    }
                }

                span { style: "{group_label}", "Icons" }
                div { class: "gallery-row",
                    for (option, variant) in libraries {
                        Button {
                            tokens: tokens.clone(),
                            size: ControlSize::Small,
                            variant: variant,
                            onclick: move |_| theme.write().set_library(option),
                            "{option}"
                        }
                    }
                }

                span { style: "{group_label}", "Motion" }
                Button {
                    tokens: tokens.clone(),
                    size: ControlSize::Small,
                    variant: motion_variant,
                    onclick: move |_| theme.write().set_reduced_motion(!reduced_motion),
                    "{motion_label}"
                }
            }

            main { class: "gallery-main",
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_tokens::resolve;

    #[test]
    fn every_location_has_an_icon_in_both_libraries() {
        for location in NavLocation::ALL {
            for library in IconLibrary::ALL {
                assert!(
                    library.glyph(location.icon()).is_some(),
                    "{:?} missing from {}",
                    location,
                    library
                );
            }
        }
    }

    #[test]
    fn routes_are_distinct() {
        for (i, a) in NavLocation::ALL.iter().enumerate() {
            for b in &NavLocation::ALL[i + 1..] {
                assert!(a.route() != b.route());
            }
        }
    }

    #[test]
    fn active_link_is_highlighted() {
        let set = resolve(Mode::Light);
        let selected = set.semantic().background.selected;
        assert!(nav_link_style(&set, true).contains(&format!("background: {};", selected)));
        assert!(!nav_link_style(&set, false).contains("background:"));
    }
}
