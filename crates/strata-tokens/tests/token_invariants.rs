//! Tier invariants and end-to-end scenarios
//!
//! These tests exercise the public API the way a host application does:
//! resolve a mode, read tokens, and drive the widget state types.

use std::collections::HashMap;

use strata_tokens::base::BASE;
use strata_tokens::{
    audit_all, audit_patch, audit_theme, badge_text, chart_color, lookup_icon, resolve,
    status_config, ChartPalette, Density, Differential, IconLibrary, IconName, IndicatorShape,
    InteractionState, Item, Leaf, LeafKind, Mode, SemanticTokens, Severity, Side, Status,
    ThemeTokens, TokenPath, Tokens, TransferState, Trend,
};

// ============================================================================
// Traceability
// ============================================================================

/// Every semantic leaf is exactly some base leaf, in every mode and state
#[test]
fn test_semantic_leaves_are_base_values() {
    let base: Vec<Leaf> = BASE.leaves().into_iter().map(|(_, leaf)| leaf).collect();
    let assert_exact = |label: &str, semantic: &SemanticTokens| {
        for (path, leaf) in semantic.leaves() {
            assert!(base.contains(&leaf), "{} semantic.{} = {} is not a base value", label, path, leaf);
        }
    };

    assert_exact("baseline", &SemanticTokens::derive(&BASE));
    for mode in Mode::ALL {
        let set = resolve(mode);
        assert_exact(&mode.to_string(), set.semantic());
        for state in InteractionState::ALL {
            assert_exact(&format!("{}/{}", mode, state), set.with_state(state).semantic());
        }
    }
}

/// Every resolved leaf in every mode and state traces to base
#[test]
fn test_every_mode_and_state_traces() {
    let _ = tracing_subscriber::fmt::try_init();
    for mode in Mode::ALL {
        let set = resolve(mode);
        audit_theme(&set).into_result().unwrap();
        for state in InteractionState::ALL {
            audit_theme(&set.with_state(state)).into_result().unwrap();
        }
    }
    assert!(audit_all().is_clean());
}

// ============================================================================
// Shape Compatibility
// ============================================================================

/// Every leaf a contextual patch sets exists in the baseline with the same kind
#[test]
fn test_contextual_patches_match_baseline_kinds() {
    let baseline = ThemeTokens::baseline(&BASE);
    let kinds: HashMap<TokenPath, LeafKind> = baseline
        .leaves()
        .into_iter()
        .map(|(path, leaf)| (path, leaf.kind()))
        .collect();

    for mode in Mode::ALL {
        let patch = mode.patch(&BASE);
        for (path, leaf) in ThemeTokens::patch_leaves_at(&patch, TokenPath::new()) {
            assert_eq!(kinds.get(&path), Some(&leaf.kind()), "{} in {}", path, mode);
        }
        assert!(audit_patch(&baseline, &patch).is_clean());

        for state in InteractionState::ALL {
            let patch = state.patch(&BASE, mode);
            assert!(audit_patch(&baseline, &patch).is_clean(), "{} / {}", mode, state);
        }
    }
}

/// Dark and high-contrast actually override things
#[test]
fn test_non_light_modes_differ() {
    let light = resolve(Mode::Light);
    assert_ne!(light, resolve(Mode::Dark));
    assert_ne!(light, resolve(Mode::HighContrast));
    assert_eq!(light.theme(), &ThemeTokens::baseline(&BASE));
}

/// Resolving the same mode twice gives deep-equal sets
#[test]
fn test_resolution_is_deterministic() {
    for mode in Mode::ALL {
        let a = resolve(mode);
        let b = resolve(mode);
        assert_eq!(a, b);
        assert_eq!(a.to_css_variables(), b.to_css_variables());
    }
}

// ============================================================================
// Domain Tables
// ============================================================================

#[test]
fn test_chart_color_cycles() {
    let len = resolve(Mode::Light).domain().charts.palette(ChartPalette::Categorical).len();
    for i in 0..(len * 3) {
        assert_eq!(chart_color(i), chart_color(i + len));
    }
}

#[test]
fn test_density_lookup_by_name() {
    let resolved = resolve(Mode::Light);
    let table = &resolved.domain().data_table;
    let compact = table.density("compact".parse::<Density>().unwrap());
    let comfortable = table.density("comfortable".parse::<Density>().unwrap());
    assert_eq!(compact.row_height.get(), 36);
    assert_eq!(comfortable.row_height.get(), 64);
    assert_ne!(compact, comfortable);
}

// ============================================================================
// Status Catalog
// ============================================================================

#[test]
fn test_error_status_config() {
    let config = status_config(Status::Error);
    assert_eq!(config.severity, Severity::High);
    assert_eq!(config.shape, IndicatorShape::Circle);
    assert_eq!(config.icon, IconName::Error);
    assert_eq!(config.label, "Error");
}

#[test]
fn test_negative_differential_reads_as_error() {
    let diff = Differential::percent(-8.3);
    assert_eq!(diff.text(), "-8.3%");
    assert_eq!(diff.trend(), Trend::Negative);

    let set = resolve(Mode::Light);
    let tone = set.semantic().status_tone(diff.trend().status());
    assert_eq!(tone.text, BASE.colors.red.s700);
}

#[test]
fn test_badge_overflow() {
    assert_eq!(badge_text(1000, 99), "99+");
}

// ============================================================================
// Icons
// ============================================================================

#[test]
fn test_unknown_icon_is_none() {
    let _ = tracing_subscriber::fmt::try_init();
    for library in IconLibrary::ALL {
        assert!(lookup_icon(library, "not-a-real-icon").is_none());
    }
}

// ============================================================================
// Transfer List
// ============================================================================

#[test]
fn test_transfer_move_all_right() {
    let mut state = TransferState::new(vec![Item::new("a", "a"), Item::new("b", "b")], vec![]);
    state.move_all_right();

    assert!(state.items(Side::Left).is_empty());
    let right: Vec<&str> = state.items(Side::Right).iter().map(|i| i.id.as_str()).collect();
    assert_eq!(right, vec!["a", "b"]);
}

#[test]
fn test_transfer_filter_never_errors() {
    let mut state = TransferState::new(vec![Item::new("a", "Alpha")], vec![]);
    for filter in ["", "(", "\\", "ALPHA", "zzz", "🦀"] {
        state.set_filter(Side::Left, filter);
        let _ = state.visible(Side::Left);
    }
}
