//! Statically shaped token records.
//!
//! Every tier is a tree of records declared with [`token_record!`]. The macro
//! also declares a patch type of identical shape whose leaves are optional,
//! so an override table can only name keys the baseline actually has.
//! [`Tokens::visit`] enumerates every leaf with its dotted path.

use std::collections::BTreeMap;
use std::fmt;

use crate::base::{Color, Easing, FontFamily, FontWeight, LineHeight, Ms, Opacity, Px, Shadow, ZIndex};

/// One step in a token path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    Key(&'static str),
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(i) => write!(f, "{}", i),
        }
    }
}

/// Location of a leaf inside a token tree, e.g. `semantic.text.primary`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenPath {
    segments: Vec<Segment>,
}

impl TokenPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(key: &'static str) -> Self {
        Self {
            segments: vec![Segment::Key(key)],
        }
    }

    pub fn push_key(&mut self, key: &'static str) {
        self.segments.push(Segment::Key(key));
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    pub fn pop(&mut self) {
        self.segments.pop();
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// First segment, which names the tier for theme-level paths.
    pub fn tier(&self) -> Option<&'static str> {
        match self.segments.first() {
            Some(Segment::Key(key)) => Some(key),
            _ => None,
        }
    }

    /// CSS custom property name: `--semantic-text-primary`.
    pub fn css_variable(&self) -> String {
        let mut name = String::from("-");
        for segment in &self.segments {
            name.push('-');
            name.push_str(&segment.to_string().replace('_', "-"));
        }
        name
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// A single typed token value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Leaf {
    Color(Color),
    Length(Px),
    Duration(Ms),
    Opacity(Opacity),
    FontWeight(FontWeight),
    LineHeight(LineHeight),
    Easing(Easing),
    Shadow(Shadow),
    FontFamily(FontFamily),
    ZIndex(ZIndex),
}

/// The value type of a [`Leaf`], used for shape checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    Color,
    Length,
    Duration,
    Opacity,
    FontWeight,
    LineHeight,
    Easing,
    Shadow,
    FontFamily,
    ZIndex,
}

impl Leaf {
    pub fn kind(&self) -> LeafKind {
        match self {
            Leaf::Color(_) => LeafKind::Color,
            Leaf::Length(_) => LeafKind::Length,
            Leaf::Duration(_) => LeafKind::Duration,
            Leaf::Opacity(_) => LeafKind::Opacity,
            Leaf::FontWeight(_) => LeafKind::FontWeight,
            Leaf::LineHeight(_) => LeafKind::LineHeight,
            Leaf::Easing(_) => LeafKind::Easing,
            Leaf::Shadow(_) => LeafKind::Shadow,
            Leaf::FontFamily(_) => LeafKind::FontFamily,
            Leaf::ZIndex(_) => LeafKind::ZIndex,
        }
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Leaf::Color(v) => v.fmt(f),
            Leaf::Length(v) => v.fmt(f),
            Leaf::Duration(v) => v.fmt(f),
            Leaf::Opacity(v) => v.fmt(f),
            Leaf::FontWeight(v) => v.fmt(f),
            Leaf::LineHeight(v) => v.fmt(f),
            Leaf::Easing(v) => v.fmt(f),
            Leaf::Shadow(v) => v.fmt(f),
            Leaf::FontFamily(v) => v.fmt(f),
            Leaf::ZIndex(v) => v.fmt(f),
        }
    }
}

impl fmt::Display for LeafKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LeafKind::Color => "color",
            LeafKind::Length => "length",
            LeafKind::Duration => "duration",
            LeafKind::Opacity => "opacity",
            LeafKind::FontWeight => "font-weight",
            LeafKind::LineHeight => "line-height",
            LeafKind::Easing => "easing",
            LeafKind::Shadow => "shadow",
            LeafKind::FontFamily => "font-family",
            LeafKind::ZIndex => "z-index",
        };
        f.write_str(name)
    }
}

/// Callback receiving each leaf during a visit.
pub type Visitor<'a> = dyn FnMut(&TokenPath, Leaf) + 'a;

/// Callback rewriting leaves in place. Returning a leaf of another kind
/// leaves the original untouched.
pub type LeafMap<'a> = dyn FnMut(Leaf) -> Leaf + 'a;

/// A token tree (or a single leaf) with a same-shaped patch type.
pub trait Tokens {
    /// Optional overrides with the same shape as `Self`.
    type Patch: Default + Clone + PartialEq + fmt::Debug;

    /// Merge: every leaf set in `patch` replaces the value in `self`.
    fn apply(&mut self, patch: &Self::Patch);

    /// Visit every leaf in declaration order.
    fn visit(&self, path: &mut TokenPath, visitor: &mut Visitor<'_>);

    /// Visit only the leaves a patch sets.
    fn visit_patch(patch: &Self::Patch, path: &mut TokenPath, visitor: &mut Visitor<'_>);

    /// Rewrite every leaf through `map`.
    fn map_leaves(&mut self, map: &mut LeafMap<'_>);

    /// All leaves under `root`.
    fn leaves_at(&self, root: TokenPath) -> Vec<(TokenPath, Leaf)> {
        let mut path = root;
        let mut out = Vec::new();
        self.visit(&mut path, &mut |p: &TokenPath, leaf: Leaf| {
            out.push((p.clone(), leaf))
        });
        out
    }

    fn leaves(&self) -> Vec<(TokenPath, Leaf)> {
        self.leaves_at(TokenPath::new())
    }

    /// All leaves a patch sets, under `root`.
    fn patch_leaves_at(patch: &Self::Patch, root: TokenPath) -> Vec<(TokenPath, Leaf)> {
        let mut path = root;
        let mut out = Vec::new();
        Self::visit_patch(patch, &mut path, &mut |p: &TokenPath, leaf: Leaf| {
            out.push((p.clone(), leaf))
        });
        out
    }
}

macro_rules! leaf_tokens {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl Tokens for $ty {
            type Patch = Option<$ty>;

            fn apply(&mut self, patch: &Self::Patch) {
                if let Some(value) = patch {
                    *self = *value;
                }
            }

            fn visit(&self, path: &mut TokenPath, visitor: &mut Visitor<'_>) {
                visitor(path, Leaf::$kind(*self));
            }

            fn visit_patch(patch: &Self::Patch, path: &mut TokenPath, visitor: &mut Visitor<'_>) {
                if let Some(value) = patch {
                    visitor(path, Leaf::$kind(*value));
                }
            }

            fn map_leaves(&mut self, map: &mut LeafMap<'_>) {
                if let Leaf::$kind(value) = map(Leaf::$kind(*self)) {
                    *self = value;
                }
            }
        }
    )*};
}

leaf_tokens! {
    Color => Color,
    Px => Length,
    Ms => Duration,
    Opacity => Opacity,
    FontWeight => FontWeight,
    LineHeight => LineHeight,
    Easing => Easing,
    Shadow => Shadow,
    FontFamily => FontFamily,
    ZIndex => ZIndex,
}

/// Fixed-length palettes. Patches address entries by index; indices past
/// the end are ignored by `apply` and reported by the patch audit.
impl<T: Tokens, const N: usize> Tokens for [T; N] {
    type Patch = BTreeMap<usize, T::Patch>;

    fn apply(&mut self, patch: &Self::Patch) {
        for (index, entry) in patch {
            if let Some(slot) = self.get_mut(*index) {
                slot.apply(entry);
            }
        }
    }

    fn visit(&self, path: &mut TokenPath, visitor: &mut Visitor<'_>) {
        for (index, entry) in self.iter().enumerate() {
            path.push_index(index);
            entry.visit(path, visitor);
            path.pop();
        }
    }

    fn visit_patch(patch: &Self::Patch, path: &mut TokenPath, visitor: &mut Visitor<'_>) {
        for (index, entry) in patch {
            path.push_index(*index);
            T::visit_patch(entry, path, visitor);
            path.pop();
        }
    }

    fn map_leaves(&mut self, map: &mut LeafMap<'_>) {
        for entry in self.iter_mut() {
            entry.map_leaves(map);
        }
    }
}

/// Declares a token record, its patch type and the [`Tokens`] impl tying
/// them together.
///
/// ```ignore
/// token_record! {
///     pub struct TextTokens / TextPatch {
///         primary: Color,
///         secondary: Color,
///     }
/// }
/// ```
macro_rules! token_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $patch:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, ::serde::Serialize)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        #[doc = concat!("Same-shape optional overrides for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $patch {
            $(
                pub $field: <$ty as $crate::tokens::Tokens>::Patch,
            )*
        }

        impl $crate::tokens::Tokens for $name {
            type Patch = $patch;

            fn apply(&mut self, patch: &Self::Patch) {
                $(
                    $crate::tokens::Tokens::apply(&mut self.$field, &patch.$field);
                )*
            }

            fn visit(
                &self,
                path: &mut $crate::tokens::TokenPath,
                visitor: &mut $crate::tokens::Visitor<'_>,
            ) {
                $(
                    path.push_key(stringify!($field));
                    $crate::tokens::Tokens::visit(&self.$field, path, visitor);
                    path.pop();
                )*
            }

            fn visit_patch(
                patch: &Self::Patch,
                path: &mut $crate::tokens::TokenPath,
                visitor: &mut $crate::tokens::Visitor<'_>,
            ) {
                $(
                    path.push_key(stringify!($field));
                    <$ty as $crate::tokens::Tokens>::visit_patch(&patch.$field, path, visitor);
                    path.pop();
                )*
            }

            fn map_leaves(&mut self, map: &mut $crate::tokens::LeafMap<'_>) {
                $(
                    $crate::tokens::Tokens::map_leaves(&mut self.$field, map);
                )*
            }
        }
    };
}

pub(crate) use token_record;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::BASE;

    token_record! {
        pub struct Pair / PairPatch {
            fg: Color,
            gap: Px,
        }
    }

    token_record! {
        pub struct Nested / NestedPatch {
            pair: Pair,
            swatches: [Color; 3],
        }
    }

    fn sample() -> Nested {
        Nested {
            pair: Pair {
                fg: BASE.colors.gray.s900,
                gap: BASE.spacing.s2,
            },
            swatches: [BASE.colors.red.s500, BASE.colors.green.s500, BASE.colors.blue.s500],
        }
    }

    #[test]
    fn visit_yields_dotted_paths_in_order() {
        let paths: Vec<String> = sample()
            .leaves()
            .iter()
            .map(|(p, _)| p.to_string())
            .collect();
        assert_eq!(
            paths,
            vec!["pair.fg", "pair.gap", "swatches.0", "swatches.1", "swatches.2"]
        );
    }

    #[test]
    fn apply_replaces_only_patched_leaves() {
        let mut tokens = sample();
        let mut patch = NestedPatch::default();
        patch.pair.fg = Some(BASE.colors.white);
        patch.swatches.insert(1, Some(BASE.colors.black));

        tokens.apply(&patch);

        assert_eq!(tokens.pair.fg, BASE.colors.white);
        assert_eq!(tokens.pair.gap, BASE.spacing.s2);
        assert_eq!(tokens.swatches[1], BASE.colors.black);
        assert_eq!(tokens.swatches[0], BASE.colors.red.s500);
    }

    #[test]
    fn empty_patch_is_identity() {
        let mut tokens = sample();
        tokens.apply(&NestedPatch::default());
        assert_eq!(tokens, sample());
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut tokens = sample();
        let mut patch = NestedPatch::default();
        patch.swatches.insert(7, Some(BASE.colors.black));
        tokens.apply(&patch);
        assert_eq!(tokens, sample());
    }

    #[test]
    fn patch_leaves_lists_set_entries() {
        let mut patch = NestedPatch::default();
        patch.pair.gap = Some(BASE.spacing.s4);
        let leaves = Nested::patch_leaves_at(&patch, TokenPath::root("theme"));
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].0.to_string(), "theme.pair.gap");
        assert_eq!(leaves[0].1, Leaf::Length(BASE.spacing.s4));
    }

    #[test]
    fn map_leaves_rewrites_matching_kind() {
        let mut tokens = sample();
        tokens.map_leaves(&mut |leaf: Leaf| match leaf {
            Leaf::Length(_) => Leaf::Length(BASE.spacing.s0),
            Leaf::Color(_) => Leaf::Length(BASE.spacing.s4),
            other => other,
        });
        assert_eq!(tokens.pair.gap, BASE.spacing.s0);
        assert_eq!(tokens.pair.fg, BASE.colors.gray.s900);
    }

    #[test]
    fn css_variable_name() {
        let mut path = TokenPath::root("semantic");
        path.push_key("text");
        path.push_key("on_action");
        assert_eq!(path.css_variable(), "--semantic-text-on-action");
    }
}
