//! Selector fragments and the per-kind construction policy.
//!
//! A fragment is one typed component of a compound selector (a type name,
//! an id, a class, an attribute test, a pseudo-class, or a pseudo-element).
//! This module defines the fragment kinds, the canonical order they must
//! appear in, how often each kind may repeat within one compound, and the
//! punctuation each kind carries when serialized per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/).

use std::fmt;

use serde::Serialize;
use strum_macros::Display;

/// The kind of a selector fragment.
///
/// Variants are declared in canonical order, the order fragments must appear
/// in within a single compound selector:
///
/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
/// "If it contains a type selector or universal selector, that selector
/// must come first in the sequence."
///
/// [§ 7 Pseudo-elements](https://www.w3.org/TR/selectors-3/#pseudo-elements)
/// "Only one pseudo-element may appear per selector, and if present it must
/// appear after the sequence of simple selectors that represents the
/// subjects of the selector."
///
/// The remaining ordering (id before class before attribute before
/// pseudo-class) is this library's canonical form, chosen so every selector
/// structure serializes to exactly one string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FragmentKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type,
    /// and represents an instance of that element type in the document tree."
    ///
    /// Examples: `div`, `p`, `table`
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    ///
    /// Examples: `#main`, `#data`
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Examples: `.container`, `.draggable`
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// An attribute test, written between square brackets. The bracketed
    /// text is taken verbatim from the caller.
    ///
    /// Examples: `[href]`, `[href$=".png"]`, `[type="text"]`
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// A pseudo-class, written after a single colon. Functional arguments
    /// are part of the caller's text and are not interpreted.
    ///
    /// Examples: `:focus`, `:hover`, `:nth-of-type(even)`
    PseudoClass,

    /// [Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// A pseudo-element, written after a double colon.
    ///
    /// Examples: `::before`, `::first-line`
    PseudoElement,
}

/// How many fragments of one kind a single compound selector may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cardinality {
    /// At most one fragment of the kind per compound.
    Single,
    /// Any number of fragments of the kind per compound.
    Repeatable,
}

/// Construction and rendering policy for one fragment kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindPolicy {
    /// How often the kind may appear within one compound.
    pub cardinality: Cardinality,
    /// Punctuation written immediately before the fragment text.
    pub prefix: &'static str,
    /// Punctuation written immediately after the fragment text.
    pub suffix: &'static str,
}

/// Policy for every fragment kind, indexed by canonical order.
///
/// An element type name carries no punctuation of its own; the other kinds
/// carry the punctuation Selectors Level 4 assigns them (`#`, `.`, `[`…`]`,
/// `:`, `::`).
const KIND_POLICIES: [KindPolicy; 6] = [
    // Element
    KindPolicy {
        cardinality: Cardinality::Single,
        prefix: "",
        suffix: "",
    },
    // Id
    KindPolicy {
        cardinality: Cardinality::Single,
        prefix: "#",
        suffix: "",
    },
    // Class
    KindPolicy {
        cardinality: Cardinality::Repeatable,
        prefix: ".",
        suffix: "",
    },
    // Attribute
    KindPolicy {
        cardinality: Cardinality::Repeatable,
        prefix: "[",
        suffix: "]",
    },
    // PseudoClass
    KindPolicy {
        cardinality: Cardinality::Repeatable,
        prefix: ":",
        suffix: "",
    },
    // PseudoElement
    KindPolicy {
        cardinality: Cardinality::Single,
        prefix: "::",
        suffix: "",
    },
];

impl FragmentKind {
    /// All kinds in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// Position of this kind in the canonical fragment order.
    ///
    /// Within one compound selector, fragments must appear with
    /// non-decreasing canonical indexes.
    #[must_use]
    pub const fn canonical_index(self) -> usize {
        self as usize
    }

    /// The construction and rendering policy for this kind.
    #[must_use]
    pub const fn policy(self) -> KindPolicy {
        KIND_POLICIES[self.canonical_index()]
    }

    /// How often this kind may appear within one compound.
    #[must_use]
    pub const fn cardinality(self) -> Cardinality {
        self.policy().cardinality
    }

    /// Whether a compound may hold at most one fragment of this kind.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self.policy().cardinality, Cardinality::Single)
    }
}

/// One typed component of a compound selector: a kind plus the raw text the
/// caller supplied for it.
///
/// The text is opaque. Attribute tests and functional pseudo-class
/// arguments are carried verbatim and never validated, so
/// `Fragment::new(FragmentKind::Attribute, r#"href$=".png""#)` renders as
/// `[href$=".png"]` exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Fragment {
    kind: FragmentKind,
    text: String,
}

impl Fragment {
    /// Create a fragment of the given kind from raw text.
    #[must_use]
    pub fn new(kind: FragmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The kind of this fragment.
    #[must_use]
    pub const fn kind(&self) -> FragmentKind {
        self.kind
    }

    /// The raw text of this fragment, without kind punctuation.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let policy = self.kind.policy();
        write!(f, "{}{}{}", policy.prefix, self.text, policy.suffix)
    }
}
