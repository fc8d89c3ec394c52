//! Traceability audit.
//!
//! Every semantic leaf must be exactly a base value. Component and domain
//! leaves may also be a base color carrying a base opacity as its alpha.
//! Patches must additionally name only paths that exist in their baseline
//! with the same leaf kind.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::base::{BaseTokens, Color, Opacity, BASE};
use crate::contextual::{InteractionState, Mode};
use crate::error::{TokenError, TokenResult};
use crate::resolve::{resolve, ThemeTokens, TokenSet};
use crate::tokens::{Leaf, LeafKind, Segment, TokenPath, Tokens};

/// One problem found by an audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// A leaf with no base origin.
    Untraceable { path: TokenPath, value: Leaf },
    /// A patch leaf whose path is missing from the baseline (`expected` is
    /// `None`) or whose kind differs.
    ShapeMismatch {
        path: TokenPath,
        expected: Option<LeafKind>,
        found: LeafKind,
    },
}

impl Finding {
    pub fn path(&self) -> &TokenPath {
        match self {
            Finding::Untraceable { path, .. } | Finding::ShapeMismatch { path, .. } => path,
        }
    }

    pub fn to_error(&self) -> TokenError {
        match self {
            Finding::Untraceable { path, value } => TokenError::Untraceable {
                path: path.to_string(),
                value: value.to_string(),
            },
            Finding::ShapeMismatch {
                path,
                expected,
                found,
            } => TokenError::ShapeMismatch {
                path: path.to_string(),
                expected: expected.map_or_else(|| "nothing".to_string(), |k| k.to_string()),
                found: found.to_string(),
            },
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_error())
    }
}

/// Result of one or more audits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    /// Number of leaves inspected.
    pub checked: usize,
    pub findings: Vec<Finding>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn merge(&mut self, other: AuditReport) {
        self.checked += other.checked;
        self.findings.extend(other.findings);
    }

    /// `Ok` when clean, otherwise the first finding as an error.
    pub fn into_result(self) -> TokenResult<usize> {
        match self.findings.first() {
            None => Ok(self.checked),
            Some(finding) => Err(finding.to_error()),
        }
    }
}

/// Every value the base tier can hand out.
struct BaseIndex {
    leaves: HashSet<Leaf>,
    opacities: HashSet<Opacity>,
}

impl BaseIndex {
    fn new(base: &BaseTokens) -> Self {
        let leaves: HashSet<Leaf> = base.leaves().into_iter().map(|(_, leaf)| leaf).collect();
        let opacities = leaves
            .iter()
            .filter_map(|leaf| match leaf {
                Leaf::Opacity(o) => Some(*o),
                _ => None,
            })
            .collect();
        Self { leaves, opacities }
    }

    fn traces(&self, leaf: &Leaf) -> bool {
        match leaf {
            Leaf::Color(color) => self.traces_color(color),
            other => self.leaves.contains(other),
        }
    }

    fn traces_color(&self, color: &Color) -> bool {
        let rgb_known = self.leaves.contains(&Leaf::Color(color.opaque()));
        let alpha_known = color.is_opaque() || self.opacities.contains(&color.alpha());
        rgb_known && alpha_known
    }

    fn check(&self, leaves: Vec<(TokenPath, Leaf)>, report: &mut AuditReport) {
        for (path, leaf) in leaves {
            report.checked += 1;
            let traced = if is_semantic(&path) {
                self.leaves.contains(&leaf)
            } else {
                self.traces(&leaf)
            };
            if !traced {
                report.findings.push(Finding::Untraceable { path, value: leaf });
            }
        }
    }
}

/// Semantic leaves alias base values one to one; no derivations.
fn is_semantic(path: &TokenPath) -> bool {
    matches!(path.segments().first(), Some(Segment::Key("semantic")))
}

/// Check every semantic, component and domain leaf of a resolved set.
pub fn audit_theme(set: &TokenSet) -> AuditReport {
    let index = BaseIndex::new(&BASE);
    let mut report = AuditReport::default();
    index.check(set.leaves(), &mut report);
    tracing::debug!(
        mode = %set.mode(),
        checked = report.checked,
        findings = report.findings.len(),
        "audited theme"
    );
    report
}

/// Check the leaves a patch sets against `baseline`: each must exist there
/// with the same kind and must trace to base.
pub fn audit_patch<T: Tokens>(baseline: &T, patch: &T::Patch) -> AuditReport {
    let index = BaseIndex::new(&BASE);
    let kinds: HashMap<TokenPath, LeafKind> = baseline
        .leaves()
        .into_iter()
        .map(|(path, leaf)| (path, leaf.kind()))
        .collect();

    let mut report = AuditReport::default();
    let leaves = T::patch_leaves_at(patch, TokenPath::new());
    for (path, leaf) in &leaves {
        let expected = kinds.get(path).copied();
        if expected != Some(leaf.kind()) {
            report.findings.push(Finding::ShapeMismatch {
                path: path.clone(),
                expected,
                found: leaf.kind(),
            });
        }
    }
    index.check(leaves, &mut report);
    report
}

/// Audit every mode, every mode patch and every interaction-state patch.
pub fn audit_all() -> AuditReport {
    let baseline = ThemeTokens::baseline(&BASE);
    let mut report = AuditReport::default();

    for mode in Mode::ALL {
        let set = resolve(mode);
        report.merge(audit_theme(&set));
        report.merge(audit_patch(&baseline, &mode.patch(&BASE)));
        for state in InteractionState::ALL {
            report.merge(audit_patch(set.theme(), &state.patch(&BASE, mode)));
        }
    }

    tracing::debug!(
        checked = report.checked,
        findings = report.findings.len(),
        "audit complete"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::ThemePatch;

    #[test]
    fn all_modes_trace_to_base() {
        let report = audit_all();
        assert!(report.is_clean(), "{:?}", report.findings);
        assert!(report.checked > 1000);
    }

    #[test]
    fn translucent_base_color_traces_in_component_tier() {
        let baseline = ThemeTokens::baseline(&BASE);
        let mut patch = ThemePatch::default();
        patch.component.input.background = Some(BASE.colors.gray.s900.with_alpha(BASE.opacity.o50));
        let report = audit_patch(&baseline, &patch);
        assert!(report.is_clean());
        assert_eq!(report.checked, 1);
    }

    #[test]
    fn semantic_tier_rejects_derived_colors() {
        let baseline = ThemeTokens::baseline(&BASE);
        let mut patch = ThemePatch::default();
        patch.semantic.text.primary = Some(BASE.colors.gray.s900.with_alpha(BASE.opacity.o50));
        let report = audit_patch(&baseline, &patch);
        assert_eq!(report.findings.len(), 1);
        assert!(matches!(
            report.into_result(),
            Err(TokenError::Untraceable { path, .. }) if path == "semantic.text.primary"
        ));
    }

    #[test]
    fn semantic_overlay_is_a_base_scrim_in_every_mode() {
        let expected = [
            (Mode::Light, BASE.colors.scrim.light),
            (Mode::Dark, BASE.colors.scrim.dark),
            (Mode::HighContrast, BASE.colors.scrim.strong),
        ];
        for (mode, scrim) in expected {
            assert_eq!(resolve(mode).semantic().background.overlay, scrim);
        }
    }

    #[test]
    fn index_rejects_alpha_outside_scale() {
        let index = BaseIndex::new(&BASE);
        let mut only_rgb = BaseIndex {
            leaves: index.leaves.clone(),
            opacities: HashSet::new(),
        };
        let translucent = BASE.colors.blue.s500.with_alpha(BASE.opacity.o24);
        assert!(index.traces(&Leaf::Color(translucent)));
        only_rgb.opacities.insert(BASE.opacity.o50);
        assert!(!only_rgb.traces(&Leaf::Color(translucent)));
    }

    #[test]
    fn out_of_range_index_is_a_shape_mismatch() {
        let baseline = ThemeTokens::baseline(&BASE);
        let mut patch = ThemePatch::default();
        patch.domain.charts.categorical.insert(10, Some(BASE.colors.red.s500));

        let report = audit_patch(&baseline, &patch);
        assert_eq!(report.findings.len(), 1);
        assert!(matches!(
            &report.findings[0],
            Finding::ShapeMismatch { expected: None, found: LeafKind::Color, .. }
        ));
        assert!(matches!(
            report.into_result(),
            Err(TokenError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn clean_report_counts_leaves() {
        let set = resolve(Mode::Light);
        let checked = audit_theme(&set).into_result().unwrap();
        assert_eq!(checked, set.leaves().len());
    }
}
