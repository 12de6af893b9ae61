//! Integration tests for the tree builder.

use parchment_dom::{DomTree, NodeId, NodeType};
use parchment_markup::{ParseIssue, TreeBuilder, build, tokenize, write_tree};

/// Helper to tokenize and build markup, returning the tree.
fn parse(markup: &str) -> DomTree {
    build(tokenize(markup).unwrap())
}

fn parse_with_issues(markup: &str) -> (DomTree, Vec<ParseIssue>) {
    TreeBuilder::new(tokenize(markup).unwrap()).run_with_issues()
}

/// Tag names of the element children of `id`, in order.
fn child_tags(tree: &DomTree, id: NodeId) -> Vec<String> {
    tree.children(id)
        .iter()
        .filter_map(|&c| tree.as_element(c).map(|d| d.tag_name.clone()))
        .collect()
}

fn find_element(tree: &DomTree, from: NodeId, tag: &str) -> Option<NodeId> {
    if let Some(data) = tree.as_element(from)
        && data.tag_name == tag
    {
        return Some(from);
    }
    tree.children(from)
        .iter()
        .find_map(|&child| find_element(tree, child, tag))
}

fn dump(tree: &DomTree) -> String {
    let mut out = String::new();
    write_tree(tree, NodeId::ROOT, 0, &mut out).unwrap();
    out
}

#[test]
fn test_root_is_synthesized() {
    let tree = parse("<doc></doc>");
    assert_eq!(tree.as_element(NodeId::ROOT).unwrap().tag_name, "root");
    assert_eq!(child_tags(&tree, NodeId::ROOT), vec!["doc"]);
}

#[test]
fn test_empty_token_stream_gives_bare_root() {
    let tree = build(Vec::new());
    assert_eq!(tree.node_count(), 1);
    assert!(tree.children(NodeId::ROOT).is_empty());
}

#[test]
fn test_nesting_and_text() {
    let tree = parse("<doc><h1>Welcome My Son</h1><p>Welcome to the machine!</p></doc>");
    let doc = find_element(&tree, NodeId::ROOT, "doc").unwrap();
    assert_eq!(child_tags(&tree, doc), vec!["h1", "p"]);
    let h1 = find_element(&tree, doc, "h1").unwrap();
    assert_eq!(tree.text_content(h1), "Welcome My Son");
}

#[test]
fn test_text_is_not_trimmed() {
    let tree = parse("<p>  spaced  </p>");
    let p = find_element(&tree, NodeId::ROOT, "p").unwrap();
    let text = tree.children(p)[0];
    assert_eq!(tree.as_text(text), Some("  spaced  "));
}

#[test]
fn test_attributes_are_copied_to_element() {
    let tree = parse("<a href='x.html'>link</a>");
    let a = find_element(&tree, NodeId::ROOT, "a").unwrap();
    let data = tree.as_element(a).unwrap();
    assert_eq!(data.attrs.get("href").map(String::as_str), Some("x.html"));
}

#[test]
fn test_empty_tag_opens_and_closes() {
    let (tree, issues) = parse_with_issues("<doc><p>a<br/>b</p><p>c</p></doc>");
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    let doc = find_element(&tree, NodeId::ROOT, "doc").unwrap();
    assert_eq!(child_tags(&tree, doc), vec!["p", "p"]);
    let br = find_element(&tree, doc, "br").unwrap();
    assert!(tree.children(br).is_empty());
    let first_p = tree.children(doc)[0];
    assert_eq!(tree.text_content(first_p), "ab");
}

#[test]
fn test_mismatched_close_keeps_following_siblings() {
    // <b> is closed implicitly by </a>; <c> stays a sibling of <a>.
    let (tree, issues) = parse_with_issues("<doc><a><b></a><c></c></doc>");
    let doc = find_element(&tree, NodeId::ROOT, "doc").unwrap();
    assert_eq!(child_tags(&tree, doc), vec!["a", "c"]);
    let a = find_element(&tree, doc, "a").unwrap();
    assert_eq!(child_tags(&tree, a), vec!["b"]);

    assert_eq!(issues.len(), 1);
    assert!(issues[0].is_error);
    assert!(issues[0].message.contains("<b>"));
    assert_eq!(issues[0].token_index, 3);
}

#[test]
fn test_bare_mismatched_close() {
    let (tree, issues) = parse_with_issues("<a><b></a>");
    assert_eq!(child_tags(&tree, NodeId::ROOT), vec!["a"]);
    let a = find_element(&tree, NodeId::ROOT, "a").unwrap();
    assert_eq!(child_tags(&tree, a), vec!["b"]);
    assert_eq!(issues.len(), 1);
}

#[test]
fn test_stray_close_is_ignored() {
    let (tree, issues) = parse_with_issues("<doc></p><p>x</p></doc>");
    let doc = find_element(&tree, NodeId::ROOT, "doc").unwrap();
    assert_eq!(child_tags(&tree, doc), vec!["p"]);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].message.contains("stray"));
}

#[test]
fn test_close_never_pops_root() {
    let (tree, issues) = parse_with_issues("</root>text");
    assert_eq!(issues.len(), 1);
    let only = tree.children(NodeId::ROOT)[0];
    assert!(matches!(
        tree.get(only).map(|n| &n.node_type),
        Some(NodeType::Text(t)) if t == "text"
    ));
}

#[test]
fn test_close_matches_case_insensitively() {
    let (tree, issues) = parse_with_issues("<P>x</p><q></q>");
    assert!(issues.is_empty());
    assert_eq!(child_tags(&tree, NodeId::ROOT), vec!["P", "q"]);
}

#[test]
fn test_unclosed_elements_are_reported_as_warnings() {
    let (tree, issues) = parse_with_issues("<doc><p>open");
    assert_eq!(tree.text_content(NodeId::ROOT), "open");
    assert_eq!(issues.len(), 2);
    assert!(issues.iter().all(|issue| !issue.is_error));
}

#[test]
fn test_write_tree_dump() {
    let tree = parse("<doc><a href='x'>hi there</a></doc>");
    assert_eq!(
        dump(&tree),
        "<root>\n  <doc>\n    <a href=\"x\">\n      \"hi\u{00B7}there\"\n"
    );
}
