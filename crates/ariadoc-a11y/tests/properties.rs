//! Property tests for the accessible text computation

use ariadoc_a11y::{compute_accessible_name, compute_accessible_text};
use ariadoc_dom::{Document, ElementBuilder};
use proptest::prelude::*;

fn tag() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "button", "input", "a", "nav", "main", "aside", "div", "fieldset", "select", "textarea", "p",
    ])
}

fn optional_attrs() -> impl Strategy<Value = Vec<(&'static str, &'static str)>> {
    prop::collection::vec(
        prop::sample::select(vec![
            ("role", "button"),
            ("role", "alert"),
            ("type", "checkbox"),
            ("type", "password"),
            ("aria-expanded", "false"),
            ("aria-pressed", "true"),
            ("aria-invalid", "true"),
            ("aria-describedby", "desc"),
            ("aria-labelledby", "lbl"),
            ("placeholder", "入力"),
            ("disabled", ""),
            ("checked", ""),
        ]),
        0..6,
    )
}

fn build(tag: &str, attrs: &[(&str, &str)], content: &str) -> (Document, ariadoc_dom::NodeId) {
    let mut doc = Document::new();
    doc.append_to_body(ElementBuilder::new("span").id("desc").text("説明")).unwrap();
    doc.append_to_body(ElementBuilder::new("span").id("lbl").text("ラベル")).unwrap();

    let mut builder = ElementBuilder::new(tag).child(ElementBuilder::new("span").text(content));
    for (name, value) in attrs {
        builder = builder.attr(name, value);
    }
    let node = doc.append_to_body(builder).unwrap();
    (doc, node)
}

proptest! {
    #[test]
    fn hidden_elements_are_silent(
        tag in tag(),
        attrs in optional_attrs(),
        content in "[a-zあ-ん ]{0,12}",
    ) {
        let mut attrs = attrs;
        attrs.push(("aria-hidden", "true"));
        let (doc, node) = build(tag, &attrs, &content);
        prop_assert_eq!(compute_accessible_text(&doc, node), "");
    }

    #[test]
    fn aria_label_beats_content(
        tag in tag(),
        attrs in optional_attrs(),
        label in "[A-Za-z]{1,8}",
        content in "[a-z]{1,12}",
    ) {
        let mut attrs: Vec<(&str, &str)> = attrs;
        attrs.push(("aria-label", label.as_str()));
        let (doc, node) = build(tag, &attrs, &content);

        prop_assert_eq!(compute_accessible_name(&doc, node), label.clone());
        prop_assert!(compute_accessible_text(&doc, node).starts_with(label.as_str()));
    }

    #[test]
    fn computation_is_idempotent(
        tag in tag(),
        attrs in optional_attrs(),
        content in "[a-z ]{0,12}",
    ) {
        let (doc, node) = build(tag, &attrs, &content);
        prop_assert_eq!(compute_accessible_text(&doc, node), compute_accessible_text(&doc, node));
    }
}
