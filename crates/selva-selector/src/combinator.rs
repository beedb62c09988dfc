//! Combinators and selector trees.
//!
//! Joins compound selectors into binary trees per
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators) and
//! serializes those trees back to selector strings. The tree is the
//! structural record of how a selector was built; serialization walks it
//! depth-first, left to right, so the output string lists the compounds in
//! composition order.

use std::fmt;

use serde::Serialize;

use crate::compound::CompoundSelector;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// Stored as a tag, never as raw punctuation. `Display` renders the exact
/// separator text written between two serialized compounds (a single space
/// for [`Combinator::Descendant`], the symbol with one space on each side
/// for the rest); [`Combinator::token`] exposes the bare symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound selectors.
    /// A selector of the form 'A B' represents an element B that is an arbitrary
    /// descendant of some ancestor element A."
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two compound
    /// selectors. A selector of the form 'A > B' represents an element B that is
    /// a direct child of element A."
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two compound
    /// selectors. A selector of the form 'A + B' represents an element B that
    /// immediately follows element A, where A and B share the same parent."
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two compound
    /// selectors. A selector of the form 'A ~ B' represents an element B that
    /// follows element A (not necessarily immediately), where A and B share the
    /// same parent."
    SubsequentSibling,
}

impl Combinator {
    /// The combinator's symbol, without surrounding whitespace.
    ///
    /// The descendant combinator has no symbol of its own; it is the
    /// whitespace between two compounds, so its token is empty.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Descendant => "",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }

    /// The exact text written between two serialized compounds.
    #[must_use]
    pub const fn separator(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => " > ",
            Self::NextSibling => " + ",
            Self::SubsequentSibling => " ~ ",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.separator())
    }
}

/// One combinator application: two selector expressions joined by a
/// combinator.
///
/// Either side may itself be a combined tree, so
/// `A + (B ~ (C D))` is three nested nodes. Nodes are immutable once
/// constructed; combining never rewrites an operand, it wraps it.
/// Combinators have no precedence, so the tree shape only fixes the order
/// in which compounds and separators appear in the serialized string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinatorNode {
    left: Selector,
    operator: Combinator,
    right: Selector,
}

impl CombinatorNode {
    /// Join two selector expressions with `operator`.
    #[must_use]
    pub fn new(
        left: impl Into<Selector>,
        operator: Combinator,
        right: impl Into<Selector>,
    ) -> Self {
        Self {
            left: left.into(),
            operator,
            right: right.into(),
        }
    }

    /// The left-hand selector expression.
    #[must_use]
    pub const fn left(&self) -> &Selector {
        &self.left
    }

    /// The combinator joining the two sides.
    #[must_use]
    pub const fn operator(&self) -> Combinator {
        self.operator
    }

    /// The right-hand selector expression.
    #[must_use]
    pub const fn right(&self) -> &Selector {
        &self.right
    }
}

impl fmt::Display for CombinatorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.left, self.operator, self.right)
    }
}

/// A selector expression: one compound selector or a combined tree.
///
/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
/// "A complex selector is a chain of one or more compound selectors
/// separated by combinators."
///
/// Every API that consumes a selector takes `impl Into<Selector>`, and
/// conversions exist from owned and borrowed [`CompoundSelector`]s and
/// [`CombinatorNode`]s, so compounds and trees mix freely as combinator
/// operands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Selector {
    /// A single compound selector with no combinator.
    Compound(CompoundSelector),
    /// A combinator tree.
    Combined(Box<CombinatorNode>),
}

impl From<CompoundSelector> for Selector {
    fn from(compound: CompoundSelector) -> Self {
        Self::Compound(compound)
    }
}

impl From<&CompoundSelector> for Selector {
    fn from(compound: &CompoundSelector) -> Self {
        Self::Compound(compound.clone())
    }
}

impl From<CombinatorNode> for Selector {
    fn from(node: CombinatorNode) -> Self {
        Self::Combined(Box::new(node))
    }
}

impl From<&CombinatorNode> for Selector {
    fn from(node: &CombinatorNode) -> Self {
        Self::Combined(Box::new(node.clone()))
    }
}

impl From<&Selector> for Selector {
    fn from(selector: &Selector) -> Self {
        selector.clone()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compound(compound) => write!(f, "{compound}"),
            Self::Combined(node) => write!(f, "{node}"),
        }
    }
}
