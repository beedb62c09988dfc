//! Errors raised while building compound selectors.

use thiserror::Error;

use crate::fragment::FragmentKind;

/// An append was rejected by the compound selector's construction rules.
///
/// A rejected append never modifies the receiving selector. The value the
/// caller appended to remains valid and can keep accepting fragments.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// A singleton kind was appended to a compound that already holds one.
    ///
    /// `element`, `id`, and `pseudo-element` fragments may appear at most
    /// once per compound, no matter where in the compound they sit.
    #[error("duplicate {0} fragment in compound selector")]
    DuplicateFragment(FragmentKind),

    /// An appended kind must come before the most recent fragment's kind.
    ///
    /// Fragments must arrive in canonical order (element, id, class,
    /// attribute, pseudo-class, pseudo-element); repeating the most recent
    /// kind is allowed.
    #[error("{attempted} fragment cannot follow {previous} in compound selector")]
    OrderViolation {
        /// The kind the caller tried to append.
        attempted: FragmentKind,
        /// The kind of the most recently appended fragment.
        previous: FragmentKind,
    },
}
