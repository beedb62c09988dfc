//! Integration tests for compound selector construction and validation.

use selva_selector::{
    CompoundSelector, FragmentKind, SelectorError, attr, class, element, id, pseudo_class,
    pseudo_element,
};

// Single-fragment construction
// [§ 4.1 Structure of a selector](https://www.w3.org/TR/selectors-4/#structure)

#[test]
fn test_single_fragment_rendering() {
    assert_eq!(element("div").to_string(), "div");
    assert_eq!(id("main").to_string(), "#main");
    assert_eq!(class("container").to_string(), ".container");
    assert_eq!(attr("href").to_string(), "[href]");
    assert_eq!(pseudo_class("focus").to_string(), ":focus");
    assert_eq!(pseudo_element("before").to_string(), "::before");
}

#[test]
fn test_empty_compound_renders_empty_string() {
    let compound = CompoundSelector::new();
    assert!(compound.is_empty());
    assert_eq!(compound.len(), 0);
    assert_eq!(compound.to_string(), "");
    assert_eq!(compound.last_kind(), None);
}

#[test]
fn test_fragment_text_is_opaque() {
    // [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    // The bracketed test is carried verbatim, operators and quotes included.
    assert_eq!(attr(r#"href$=".png""#).to_string(), r#"[href$=".png"]"#);
    // Functional pseudo-class arguments are not interpreted.
    assert_eq!(
        pseudo_class("nth-of-type(even)").to_string(),
        ":nth-of-type(even)"
    );
}

// Appending in canonical order
// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)

#[test]
fn test_append_in_canonical_order() {
    let compound = element("a")
        .attr(r#"href$=".png""#)
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(compound.to_string(), r#"a[href$=".png"]:focus"#);
    assert_eq!(compound.len(), 3);
    assert_eq!(compound.last_kind(), Some(FragmentKind::PseudoClass));
}

#[test]
fn test_append_repeatable_kinds() {
    let compound = id("main")
        .class("container")
        .unwrap()
        .class("editable")
        .unwrap();
    assert_eq!(compound.to_string(), "#main.container.editable");
    assert_eq!(compound.count_of(FragmentKind::Class), 2);
}

#[test]
fn test_append_every_kind_once() {
    let compound = element("input")
        .id("search")
        .unwrap()
        .class("wide")
        .unwrap()
        .attr("type=\"text\"")
        .unwrap()
        .pseudo_class("focus")
        .unwrap()
        .pseudo_element("placeholder")
        .unwrap();
    assert_eq!(
        compound.to_string(),
        "input#search.wide[type=\"text\"]:focus::placeholder"
    );
    for kind in FragmentKind::ALL {
        assert!(compound.contains_kind(kind));
        assert_eq!(compound.count_of(kind), 1);
    }
}

#[test]
fn test_append_generic_entry_point() {
    let compound = CompoundSelector::new()
        .append(FragmentKind::Element, "td")
        .unwrap()
        .append(FragmentKind::PseudoClass, "nth-of-type(even)")
        .unwrap();
    assert_eq!(compound.to_string(), "td:nth-of-type(even)");
}

#[test]
fn test_fragment_accessors() {
    let compound = element("div").id("main").unwrap();
    let fragments = compound.fragments();
    assert_eq!(fragments.len(), 2);
    assert_eq!(fragments[0].kind(), FragmentKind::Element);
    assert_eq!(fragments[0].text(), "div");
    assert_eq!(fragments[1].kind(), FragmentKind::Id);
    assert_eq!(fragments[1].text(), "main");
}

// Cardinality violations

#[test]
fn test_duplicate_id_rejected() {
    let err = id("main").id("other").unwrap_err();
    assert_eq!(err, SelectorError::DuplicateFragment(FragmentKind::Id));
}

#[test]
fn test_duplicate_element_rejected() {
    let err = element("div").element("span").unwrap_err();
    assert_eq!(err, SelectorError::DuplicateFragment(FragmentKind::Element));
}

#[test]
fn test_duplicate_pseudo_element_rejected() {
    let err = pseudo_element("before").pseudo_element("after").unwrap_err();
    assert_eq!(
        err,
        SelectorError::DuplicateFragment(FragmentKind::PseudoElement)
    );
}

#[test]
fn test_duplicate_reported_regardless_of_position() {
    // The duplicate check runs before the order check, so a second id
    // appended after classes is a duplicate, not an order violation.
    let compound = id("main").class("container").unwrap();
    let err = compound.id("other").unwrap_err();
    assert_eq!(err, SelectorError::DuplicateFragment(FragmentKind::Id));
}

#[test]
fn test_repeatable_kinds_never_duplicate() {
    let compound = class("a")
        .class("a")
        .unwrap()
        .attr("href")
        .unwrap()
        .attr("href")
        .unwrap()
        .pseudo_class("hover")
        .unwrap()
        .pseudo_class("hover")
        .unwrap();
    assert_eq!(compound.to_string(), ".a.a[href][href]:hover:hover");
}

// Ordering violations

#[test]
fn test_element_cannot_follow_class() {
    let err = class("a").element("b").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OrderViolation {
            attempted: FragmentKind::Element,
            previous: FragmentKind::Class,
        }
    );
}

#[test]
fn test_id_cannot_follow_attribute() {
    let err = attr("href").id("main").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OrderViolation {
            attempted: FragmentKind::Id,
            previous: FragmentKind::Attribute,
        }
    );
}

#[test]
fn test_class_cannot_follow_pseudo_class() {
    let err = pseudo_class("hover").class("late").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OrderViolation {
            attempted: FragmentKind::Class,
            previous: FragmentKind::PseudoClass,
        }
    );
}

#[test]
fn test_pseudo_class_cannot_follow_pseudo_element() {
    let err = pseudo_element("before").pseudo_class("hover").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OrderViolation {
            attempted: FragmentKind::PseudoClass,
            previous: FragmentKind::PseudoElement,
        }
    );
}

#[test]
fn test_order_check_uses_most_recent_fragment() {
    // After a class, an element is out of order even though the compound
    // started with an id.
    let compound = id("main").class("container").unwrap();
    let err = compound.element("div").unwrap_err();
    assert!(matches!(
        err,
        SelectorError::OrderViolation {
            attempted: FragmentKind::Element,
            previous: FragmentKind::Class,
        }
    ));
}

// Failed appends leave the receiver untouched

#[test]
fn test_rejected_append_has_no_effect() {
    let compound = element("div").id("main").unwrap();
    let before = compound.to_string();

    assert!(compound.element("span").is_err());
    assert!(compound.id("other").is_err());

    assert_eq!(compound.to_string(), before);
    assert_eq!(compound.len(), 2);

    // The same value keeps accepting valid fragments afterwards.
    let extended = compound.class("container").unwrap();
    assert_eq!(extended.to_string(), "div#main.container");
}

#[test]
fn test_append_returns_new_value() {
    let base = element("div");
    let extended = base.class("a").unwrap();
    // The base is unchanged; the extension is a separate value.
    assert_eq!(base.to_string(), "div");
    assert_eq!(extended.to_string(), "div.a");
    assert_eq!(base.len(), 1);
    assert_eq!(extended.len(), 2);
}

// Error display

#[test]
fn test_error_messages_use_css_kind_names() {
    let duplicate = id("a").id("b").unwrap_err();
    assert_eq!(
        duplicate.to_string(),
        "duplicate id fragment in compound selector"
    );

    let order = pseudo_element("before").pseudo_class("hover").unwrap_err();
    assert_eq!(
        order.to_string(),
        "pseudo-class fragment cannot follow pseudo-element in compound selector"
    );
}
