//! Edge case tests for ariadoc-dom

use ariadoc_dom::{Document, DomError, DomTree, ElementBuilder, NodeId};

#[test]
fn test_empty_tree() {
    let tree = DomTree::new();
    assert_eq!(tree.len(), 1);
    assert!(!tree.is_empty());
    assert_eq!(tree.descendants(tree.root()).count(), 0);
    assert_eq!(tree.text_content(tree.root()), "");
}

#[test]
fn test_invalid_node_ids() {
    let mut tree = DomTree::new();
    assert!(tree.get(NodeId::NONE).is_none());
    assert_eq!(tree.children(NodeId::NONE).count(), 0);
    assert_eq!(tree.descendants(NodeId::NONE).count(), 0);
    assert_eq!(tree.text_content(NodeId::NONE), "");

    let div = tree.create_element("div");
    assert_eq!(
        tree.append_child(NodeId::NONE, div),
        Err(DomError::UnknownNode(NodeId::NONE))
    );
}

#[test]
fn test_cycles_are_rejected() {
    let mut tree = DomTree::new();
    let outer = tree.create_element("div");
    let inner = tree.create_element("div");
    tree.append_child(tree.root(), outer).unwrap();
    tree.append_child(outer, inner).unwrap();

    assert_eq!(
        tree.append_child(inner, outer),
        Err(DomError::HierarchyRequest { parent: inner, child: outer })
    );
    assert_eq!(
        tree.append_child(outer, outer),
        Err(DomError::HierarchyRequest { parent: outer, child: outer })
    );
    // Unchanged after the failed inserts
    assert_eq!(tree.get(inner).unwrap().parent, outer);
}

#[test]
fn test_text_and_document_nodes() {
    let mut tree = DomTree::new();
    let text = tree.create_text("leaf");
    let comment = tree.create_comment("note");
    let div = tree.create_element("div");
    tree.append_child(tree.root(), text).unwrap();

    assert!(matches!(tree.append_child(text, div), Err(DomError::HierarchyRequest { .. })));
    assert!(matches!(tree.append_child(comment, div), Err(DomError::HierarchyRequest { .. })));
    assert!(matches!(
        tree.append_child(div, NodeId::ROOT),
        Err(DomError::HierarchyRequest { .. })
    ));
}

#[test]
fn test_move_between_parents() {
    let mut tree = DomTree::new();
    let a = tree.create_element("a");
    let b = tree.create_element("b");
    let child = tree.create_element("span");
    tree.append_child(tree.root(), a).unwrap();
    tree.append_child(tree.root(), b).unwrap();
    tree.append_child(a, child).unwrap();

    tree.append_child(b, child).unwrap();
    assert_eq!(tree.children(a).count(), 0);
    assert_eq!(tree.get(a).unwrap().first_child, NodeId::NONE);
    assert_eq!(tree.children(b).map(|(id, _)| id).collect::<Vec<_>>(), vec![child]);
}

#[test]
fn test_comments_are_not_text() {
    let mut tree = DomTree::new();
    let p = tree.create_element("p");
    let comment = tree.create_comment("hidden");
    let text = tree.create_text("shown");
    tree.append_child(tree.root(), p).unwrap();
    tree.append_child(p, comment).unwrap();
    tree.append_child(p, text).unwrap();

    assert_eq!(tree.text_content(p), "shown");
}

#[test]
fn test_empty_id_never_matches() {
    let mut doc = Document::new();
    doc.append_to_body(ElementBuilder::new("div").attr("id", "")).unwrap();
    assert_eq!(doc.get_element_by_id(""), None);
    assert_eq!(doc.find_label_for(""), None);
}

#[test]
fn test_document_without_body() {
    let mut doc = Document::empty();
    assert!(doc.body().is_none());
    assert!(doc.document_element().is_none());

    // Falls back to the document node
    let div = doc.append_to_body(ElementBuilder::new("div").id("x")).unwrap();
    assert_eq!(doc.tree().get(div).unwrap().parent, NodeId::ROOT);
    assert_eq!(doc.get_element_by_id("x"), Some(div));
}

#[test]
fn test_finalize_finds_parsed_skeleton() {
    let mut doc = Document::empty();
    doc.append(
        NodeId::ROOT,
        ElementBuilder::new("html")
            .child(ElementBuilder::new("head").child(ElementBuilder::new("title").text("題名")))
            .child(ElementBuilder::new("body").text("本文")),
    )
    .unwrap();
    doc.finalize();

    let body = doc.body().unwrap();
    assert_eq!(doc.tree().text_content(body), "本文");
    assert!(doc.document_element().is_some());
}
