use dioxus::prelude::*;

use crate::components::GalleryShell;
use crate::context::GalleryTheme;
use crate::pages::{
    DataPage, DockPage, FormsPage, IconsPage, IllustrationsPage, Overview, StatusPage,
    TransferPage,
};
use crate::startup_theme;
use crate::theme::global_styles;

/// Gallery routes, one per widget family.
///
/// - `/` - Token overview and mode switch
/// - `/status` - Every StatusIndicator variant
/// - `/icons` - Both icon libraries
/// - `/illustrations` - Illustrated messages
/// - `/transfer` - Transfer list
/// - `/dock` - Dock layout
/// - `/forms` - Buttons, inputs, combo box, file drop, surfaces
/// - `/data` - Chart palettes, data-table densities, AI surfaces
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(GalleryShell)]
        #[route("/")]
        Overview {},
        #[route("/status")]
        StatusPage {},
        #[route("/icons")]
        IconsPage {},
        #[route("/illustrations")]
        IllustrationsPage {},
        #[route("/transfer")]
        TransferPage {},
        #[route("/dock")]
        DockPage {},
        #[route("/forms")]
        FormsPage {},
        #[route("/data")]
        DataPage {},
}

/// Root application component.
///
/// Provides the theme context, the token-driven stylesheet and routing.
#[component]
pub fn App() -> Element {
    let theme = use_context_provider(|| Signal::new(GalleryTheme::new(startup_theme())));
    let styles = global_styles(&theme.read().tokens());

    rsx! {
        style { {styles} }
        Router::<Route> {}
    }
}
