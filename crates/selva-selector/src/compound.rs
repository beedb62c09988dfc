//! Compound selector construction.
//!
//! Builds single-element selectors fragment by fragment, enforcing the
//! canonical fragment order and per-kind cardinality as each fragment is
//! appended per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).

use std::fmt;

use serde::Serialize;

use crate::error::SelectorError;
use crate::fragment::{Fragment, FragmentKind};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// An immutable sequence of [`Fragment`]s in canonical order. Values are
/// built by appending one fragment at a time; every append validates the
/// new fragment against the rules below and returns a fresh
/// `CompoundSelector`, leaving the receiver untouched. A rejected append
/// therefore has no effect: the receiver is still valid and can keep
/// accepting fragments.
///
/// Construction rules:
/// - fragments must arrive in canonical order (element, id, class,
///   attribute, pseudo-class, pseudo-element); repeating the most recent
///   kind is allowed,
/// - `element`, `id`, and `pseudo-element` fragments may appear at most
///   once per compound.
///
/// Example: `div#main.container.draggable` is three appends on top of
/// `element("div")`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CompoundSelector {
    /// Fragments in append order, which is always canonical order.
    fragments: Vec<Fragment>,
    /// Fragment count per kind, indexed by canonical index.
    #[serde(skip)]
    kind_counts: [usize; 6],
    /// Kind of the most recently appended fragment.
    #[serde(skip)]
    last_kind: Option<FragmentKind>,
}

impl CompoundSelector {
    /// Create an empty compound selector.
    ///
    /// An empty compound renders as the empty string. It exists as the
    /// seed for appending fragments in a loop; the crate-level
    /// constructors ([`crate::element`], [`crate::id`], ...) are the
    /// usual entry points.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a compound holding a single fragment.
    ///
    /// The first fragment of a compound satisfies both construction rules
    /// trivially, so no validation is needed.
    pub(crate) fn with_first(kind: FragmentKind, text: impl Into<String>) -> Self {
        let mut kind_counts = [0_usize; 6];
        kind_counts[kind.canonical_index()] = 1;
        Self {
            fragments: vec![Fragment::new(kind, text)],
            kind_counts,
            last_kind: Some(kind),
        }
    }

    /// Append one fragment of `kind` built from `text`, returning the
    /// extended compound.
    ///
    /// The text is opaque: attribute tests and functional pseudo-class
    /// arguments are carried verbatim. Kind punctuation (`#`, `.`,
    /// `[`…`]`, `:`, `::`) is supplied at serialization time from the
    /// kind's policy, never by the caller.
    ///
    /// Cardinality is checked before order, so appending a second `id`
    /// reports a duplicate even when the ordering is also wrong.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateFragment`] if `kind` is a singleton kind
    /// already present in this compound.
    /// [`SelectorError::OrderViolation`] if `kind` comes before the most
    /// recently appended kind in canonical order.
    pub fn append(
        &self,
        kind: FragmentKind,
        text: impl Into<String>,
    ) -> Result<Self, SelectorError> {
        let index = kind.canonical_index();

        if kind.is_singleton() && self.kind_counts[index] > 0 {
            return Err(SelectorError::DuplicateFragment(kind));
        }

        if let Some(previous) = self.last_kind
            && index < previous.canonical_index()
        {
            return Err(SelectorError::OrderViolation {
                attempted: kind,
                previous,
            });
        }

        let mut next = self.clone();
        next.fragments.push(Fragment::new(kind, text));
        next.kind_counts[index] += 1;
        next.last_kind = Some(kind);
        Ok(next)
    }

    /// Append a type selector fragment, rendered as the bare element name.
    ///
    /// # Errors
    ///
    /// A compound holds at most one element fragment, and it must come
    /// first: any fragment already present makes this append fail.
    pub fn element(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Element, name)
    }

    /// Append an ID fragment, rendered as `#` followed by the id value.
    ///
    /// # Errors
    ///
    /// A second id is a duplicate, and an id cannot follow class,
    /// attribute, or pseudo fragments.
    pub fn id(&self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Id, value)
    }

    /// Append a class fragment, rendered as `.` followed by the class name.
    ///
    /// Classes repeat freely: `.container.draggable` is two appends.
    ///
    /// # Errors
    ///
    /// A class cannot follow attribute or pseudo fragments.
    pub fn class(&self, name: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Class, name)
    }

    /// Append an attribute fragment, rendered as the raw test between
    /// square brackets (`attr("href")` renders as `[href]`).
    ///
    /// # Errors
    ///
    /// An attribute test cannot follow pseudo fragments.
    pub fn attr(&self, test: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::Attribute, test)
    }

    /// Append a pseudo-class fragment, rendered as `:` followed by the raw
    /// text (`pseudo_class("nth-of-type(even)")` renders as
    /// `:nth-of-type(even)`).
    ///
    /// # Errors
    ///
    /// A pseudo-class cannot follow a pseudo-element fragment.
    pub fn pseudo_class(&self, text: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoClass, text)
    }

    /// Append a pseudo-element fragment, rendered as `::` followed by the
    /// raw text.
    ///
    /// # Errors
    ///
    /// A second pseudo-element is a duplicate; as the last kind in
    /// canonical order it can otherwise always be appended.
    pub fn pseudo_element(&self, text: impl Into<String>) -> Result<Self, SelectorError> {
        self.append(FragmentKind::PseudoElement, text)
    }

    /// Fragments in append order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Number of fragments in this compound.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether this compound holds no fragments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Kind of the most recently appended fragment, if any.
    #[must_use]
    pub const fn last_kind(&self) -> Option<FragmentKind> {
        self.last_kind
    }

    /// Number of fragments of `kind` in this compound.
    #[must_use]
    pub const fn count_of(&self, kind: FragmentKind) -> usize {
        self.kind_counts[kind.canonical_index()]
    }

    /// Whether this compound holds at least one fragment of `kind`.
    #[must_use]
    pub const fn contains_kind(&self, kind: FragmentKind) -> bool {
        self.count_of(kind) > 0
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            write!(f, "{fragment}")?;
        }
        Ok(())
    }
}
