//! Presentational components.
//!
//! Each module pairs its components with the pure `*_style` functions that
//! compute their inline styles from a [`TokenSet`](strata_tokens::TokenSet).

pub mod button;
pub mod combo_box;
pub mod dock_layout;
pub mod file_drop;
pub mod icon;
pub mod illustrated_message;
pub mod input;
pub mod status_indicator;
pub mod surfaces;
pub mod transfer_list;

pub use button::{Button, CloseButton, IconButton, PointerState};
pub use combo_box::ComboBox;
pub use dock_layout::DockLayout;
pub use file_drop::FileDrop;
pub use icon::{Icon, IconByName};
pub use illustrated_message::{IllustratedMessage, IllustratedMessageByName};
pub use input::{FieldState, Input, SearchInput, TextArea};
pub use status_indicator::{IndicatorModel, Marker, StatusIndicator, StatusVariant};
pub use surfaces::{Card, Modal, Tooltip};
pub use transfer_list::TransferList;
