//! Strata Design Tokens
//!
//! Tiered design tokens and the pure state behind the Strata widget kit.
//!
//! ## Tiers
//!
//! - **Base**: raw primitives ([`BASE`]); the only place literals appear
//! - **Semantic**: purpose-named picks from base (`text.primary`)
//! - **Component**: per-widget bundles composed from semantic and base
//! - **Contextual**: mode and interaction-state patches over the above
//! - **Domain**: chart palettes, data-table densities, AI surfaces
//!
//! Literal constructors are private to the base module, so a higher tier
//! that tries to invent a value does not compile. [`audit::audit_all`]
//! re-checks traceability at runtime.
//!
//! ## Quick Start
//!
//! ```
//! use strata_tokens::{resolve, Mode, Tokens};
//!
//! let dark = resolve(Mode::Dark);
//! let primary = dark.component().button.primary.background;
//! println!("button: {}", primary);
//!
//! let css = dark.to_css_variables();
//! assert!(css.contains("--semantic-text-primary"));
//! assert!(!dark.theme().leaves().is_empty());
//! ```

pub mod audit;
pub mod base;
pub mod combo;
pub mod component;
pub mod config;
pub mod contextual;
pub mod dock;
pub mod domain;
pub mod error;
pub mod icons;
pub mod illustration;
pub mod resolve;
pub mod semantic;
pub mod status;
pub mod tokens;
pub mod transfer;

// Re-exports
pub use audit::{audit_all, audit_patch, audit_theme, AuditReport, Finding};
pub use base::{BaseTokens, Color, Ms, Opacity, Px, BASE};
pub use combo::ComboState;
pub use component::{ButtonVariant, ComponentTokens, ControlSize};
pub use config::ThemeConfig;
pub use contextual::{InteractionState, Mode};
pub use dock::{DockPanel, DockState, DockZone};
pub use domain::{chart_color, ChartPalette, Confidence, Density, DensityPreset, DomainTokens};
pub use error::{TokenError, TokenResult};
pub use icons::{lookup_icon, Glyph, GlyphStyle, IconLibrary, IconName};
pub use illustration::{lookup_illustration, Illustration, IllustrationContent};
pub use resolve::{resolve, ThemePatch, ThemeTokens, TokenSet};
pub use semantic::{FontSpec, Insets, SemanticTokens};
pub use status::{badge_text, status_config, Differential, IndicatorShape, Severity, Status, StatusConfig, Trend};
pub use tokens::{Leaf, LeafKind, TokenPath, Tokens};
pub use transfer::{Item, Side, TransferItem, TransferState};
