#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use dom_elements::dom::{
    element_children, get_all_attributes, get_attribute, outer_html, parse, tag_name,
    text_content, HtmlTree,
};
use dom_elements::{
    apply_attributes, attributes, create_container, create_element, create_text_node, Content,
    DocumentTree, Elements,
};
use pretty_assertions::assert_eq;

#[test]
fn create_text_node_keeps_text() {
    let doc = parse("");
    let tree = HtmlTree::new(&doc);

    for text in ["", "hello", "  spaced  ", "<not markup>", "ünïcødé"] {
        let node = create_text_node(&tree, text);
        assert!(node.is_text());
        assert_eq!(text_content(&node).to_string(), text);
    }
}

#[test]
fn create_element_applies_exactly_the_given_attributes() {
    let doc = parse("");
    let tree = HtmlTree::new(&doc);
    let attrs = attributes([("id", "main"), ("class", "box wide"), ("data-x", "1")]);

    let el = create_element(&tree, "div", Some(&attrs), None);

    let mut found = get_all_attributes(&el);
    found.sort();
    let mut expected: Vec<(String, String)> = attrs.into_iter().collect();
    expected.sort();
    assert_eq!(found, expected);
    assert!(el.children().is_empty());
    assert!(tree.parent_element(&el).is_none());
}

#[test]
fn apply_attributes_overwrites_existing_values() {
    let doc = parse(r#"<a id="link" href="/old" title="keep">x</a>"#);
    let tree = HtmlTree::new(&doc);
    let link = tree.select("#link").expect("link");

    apply_attributes(&tree, &link, &attributes([("href", "/new")]));

    assert_eq!(get_attribute(&link, "href"), Some("/new".to_string()));
    assert_eq!(get_attribute(&link, "title"), Some("keep".to_string()));
}

#[test]
fn create_element_with_text_content_has_one_text_child() {
    let doc = parse("");
    let tree = HtmlTree::new(&doc);

    let el = create_element(&tree, "p", None, Some(Content::from("hello")));

    let children = el.children();
    assert_eq!(children.len(), 1);
    assert!(children[0].is_text());
    assert_eq!(text_content(&children[0]).to_string(), "hello");
    assert_eq!(outer_html(&el).to_string(), "<p>hello</p>");
}

#[test]
fn create_element_with_empty_text_appends_nothing() {
    let doc = parse("");
    let tree = HtmlTree::new(&doc);

    let el = create_element(&tree, "p", None, Some(Content::from("")));

    assert!(el.children().is_empty());
}

#[test]
fn create_element_with_node_content_moves_the_node() {
    let doc = parse(r#"<div id="old"><span id="s">moved</span></div>"#);
    let tree = HtmlTree::new(&doc);
    let old = tree.select("#old").expect("old parent");
    let span = tree.select("#s").expect("span");

    let el = create_element(&tree, "section", None, Some(Content::Node(span.clone())));

    let children = el.children();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].id, span.id);
    assert!(old.children().is_empty());
    assert_eq!(tree.parent_element(&span).map(|p| p.id), Some(el.id));
}

#[test]
fn create_container_appends_children_in_order() {
    let doc = parse("");
    let tree = HtmlTree::new(&doc);

    let ul = create_container(
        &tree,
        "ul",
        None,
        [Content::from("a"), Content::from("b"), Content::from("c")],
        None,
    );

    let texts: Vec<String> = ul
        .children()
        .iter()
        .inspect(|child| assert!(child.is_text()))
        .map(|child| text_content(child).to_string())
        .collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
    assert_eq!(tag_name(&ul), Some("ul".to_string()));
}

#[test]
fn create_container_mixes_text_and_nodes() {
    let doc = parse("");
    let tree = HtmlTree::new(&doc);
    let bold = create_element(&tree, "b", None, Some(Content::from("world")));

    let p = create_container(
        &tree,
        "p",
        Some(&attributes([("class", "greeting")])),
        [Content::from("hello "), Content::Node(bold), Content::from("!")],
        None,
    );

    assert_eq!(
        outer_html(&p).to_string(),
        r#"<p class="greeting">hello <b>world</b>!</p>"#
    );
}

#[test]
fn create_container_attaches_as_last_child_of_parent() {
    let doc = parse(r#"<ul id="list"><li id="first">1</li></ul>"#);
    let tree = HtmlTree::new(&doc);
    let list = tree.select("#list").expect("list");

    let li = create_container(&tree, "li", None, [], Some(&list));

    let items = element_children(&list);
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].id, li.id);
    assert_eq!(tree.parent_element(&li).map(|p| p.id), Some(list.id));
}

#[test]
fn create_container_without_parent_stays_detached() {
    let doc = parse(r#"<ul id="list"></ul>"#);
    let tree = HtmlTree::new(&doc);

    let li = create_container(&tree, "li", None, [Content::from("x")], None);

    assert!(tree.parent_element(&li).is_none());
    assert!(element_children(&tree.select("#list").expect("list")).is_empty());
}

#[test]
fn create_element_lowercases_tag_names() {
    let doc = parse("<body></body>");
    let tree = HtmlTree::new(&doc);
    let body = tree.body().expect("body");

    let el = create_container(&tree, "DIV", None, [Content::from("x")], Some(&body));

    assert_eq!(tag_name(&el), Some("div".to_string()));
    assert_eq!(tree.select("div").map(|n| n.id), Some(el.id));
    assert_eq!(outer_html(&el).to_string(), "<div>x</div>");
}

#[test]
fn elements_namespace_builds() {
    let doc = parse("");
    let tree = HtmlTree::new(&doc);
    let els = Elements::new(&tree);

    let text = els.create_text_node("label");
    let el = els.create_element(
        "label",
        Some(&attributes([("for", "name")])),
        Some(Content::Node(text.clone())),
    );
    els.apply_attributes(&el, &attributes([("for", "email"), ("class", "field")]));

    assert!(text.is_text());
    assert_eq!(tree.parent_element(&text).map(|p| p.id), Some(el.id));
    assert_eq!(get_attribute(&el, "for"), Some("email".to_string()));
    assert_eq!(
        outer_html(&el).to_string(),
        r#"<label for="email" class="field">label</label>"#
    );

    let empty = els.create_element("span", None, Some(Content::from("")));
    assert!(empty.children().is_empty());
}
