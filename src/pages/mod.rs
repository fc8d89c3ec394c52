//! Gallery pages, one per widget family.

mod data;
mod dock;
mod forms;
mod icons;
mod illustrations;
mod overview;
mod status;
mod transfer;

pub use data::DataPage;
pub use dock::DockPage;
pub use forms::FormsPage;
pub use icons::IconsPage;
pub use illustrations::IllustrationsPage;
pub use overview::Overview;
pub use status::StatusPage;
pub use transfer::TransferPage;
