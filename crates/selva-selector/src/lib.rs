//! Typed CSS selector construction and serialization.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selector construction** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Typed fragments: element, id, class, attribute, pseudo-class, pseudo-element
//!   - Canonical fragment ordering, validated at every append
//!   - Per-kind cardinality (element, id, and pseudo-element at most once per compound)
//!
//! - **Combinator composition** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child, next-sibling, and subsequent-sibling combinators
//!   - Binary selector trees; either operand may itself be a combined tree
//!
//! - **Serialization**
//!   - Deterministic rendering of any selector structure to its CSS string
//!   - Descendant renders as a single space; the other combinators render
//!     as their symbol with one space on each side
//!
//! # Out of Scope
//!
//! - CSS selector parsing (string to structure)
//! - Validation of attribute tests and pseudo arguments (fragment text is opaque)
//! - Specificity calculation
//! - Matching against a document tree

/// Combinators and selector trees per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Compound selector construction per [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound).
pub mod compound;
/// Errors raised while building compound selectors.
pub mod error;
/// Selector fragments and the per-kind construction policy.
pub mod fragment;

// Re-exports for convenience
pub use combinator::{Combinator, CombinatorNode, Selector};
pub use compound::CompoundSelector;
pub use error::SelectorError;
pub use fragment::{Cardinality, Fragment, FragmentKind, KindPolicy};

/// Start a compound selector with a type selector fragment.
///
/// The first fragment of a compound can never be rejected, so the
/// crate-level constructors are infallible; later fragments chain through
/// the fallible append methods on [`CompoundSelector`].
///
/// Example: `element("a")` renders as `a`.
#[must_use]
pub fn element(name: impl Into<String>) -> CompoundSelector {
    CompoundSelector::with_first(FragmentKind::Element, name)
}

/// Start a compound selector with an ID fragment.
///
/// Example: `id("main")` renders as `#main`.
#[must_use]
pub fn id(value: impl Into<String>) -> CompoundSelector {
    CompoundSelector::with_first(FragmentKind::Id, value)
}

/// Start a compound selector with a class fragment.
///
/// Example: `class("container")` renders as `.container`.
#[must_use]
pub fn class(name: impl Into<String>) -> CompoundSelector {
    CompoundSelector::with_first(FragmentKind::Class, name)
}

/// Start a compound selector with an attribute fragment. The test text is
/// carried verbatim between the brackets.
///
/// Example: `attr(r#"href$=".png""#)` renders as `[href$=".png"]`.
#[must_use]
pub fn attr(test: impl Into<String>) -> CompoundSelector {
    CompoundSelector::with_first(FragmentKind::Attribute, test)
}

/// Start a compound selector with a pseudo-class fragment. Functional
/// arguments are part of the text and are not interpreted.
///
/// Example: `pseudo_class("nth-of-type(even)")` renders as
/// `:nth-of-type(even)`.
#[must_use]
pub fn pseudo_class(text: impl Into<String>) -> CompoundSelector {
    CompoundSelector::with_first(FragmentKind::PseudoClass, text)
}

/// Start a compound selector with a pseudo-element fragment.
///
/// Example: `pseudo_element("before")` renders as `::before`.
#[must_use]
pub fn pseudo_element(text: impl Into<String>) -> CompoundSelector {
    CompoundSelector::with_first(FragmentKind::PseudoElement, text)
}

/// Join two selector expressions with a combinator.
///
/// Operands may be compound selectors or already-combined trees, owned or
/// borrowed. Combining never rewrites an operand; the result is a new node
/// holding both sides.
///
/// Example: `combine(&table, Combinator::SubsequentSibling, &row)` renders
/// as `table ~ tr` when serialized.
#[must_use]
pub fn combine(
    left: impl Into<Selector>,
    operator: Combinator,
    right: impl Into<Selector>,
) -> CombinatorNode {
    CombinatorNode::new(left, operator, right)
}

/// Serialize a selector expression to its CSS string.
///
/// Rendering is deterministic and free of side effects: the same structure
/// always yields the same string, and repeated calls keep yielding it.
/// Accepts compounds, combinator nodes, and [`Selector`] values, owned or
/// borrowed; equivalent to `to_string()` on the value.
#[must_use]
pub fn stringify(selector: impl Into<Selector>) -> String {
    selector.into().to_string()
}
