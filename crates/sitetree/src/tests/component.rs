use super::{asset, page};
use crate::{Error, Site};

#[test]
fn test_component_names_must_be_identifier_like() {
    assert_eq!(
        Site::new("my-site").unwrap_err(),
        Error::malformed_name("my-site")
    );

    let mut site = Site::new("root").unwrap();
    assert_eq!(
        site.add_component("2fast").unwrap_err(),
        Error::malformed_name("2fast")
    );
    assert_eq!(site.add_component("").unwrap_err(), Error::malformed_name(""));
    assert!(site.add_component("blog_2024").is_ok());
}

#[test]
fn test_duplicate_slugs_fold_case() {
    let mut site = Site::new("root").unwrap();
    let root = site.root_id();

    let first = site.add_file(page("a"));
    site.add(root, "About.html", first).unwrap();

    let second = site.add_file(page("b"));
    assert_eq!(
        site.add(root, "about.html", second),
        Err(Error::duplicate_slug("about.html", "root"))
    );

    // failure leaves both sides untouched
    assert_eq!(site.root().children().len(), 1);
    assert!(site.node(second).parent().is_none());
}

#[test]
fn test_slug_namespace_spans_files_and_subcomponents() {
    let mut site = Site::new("root").unwrap();
    let root = site.root_id();

    let file = site.add_file(page(""));
    site.add(root, "blog", file).unwrap();

    let sub = site.add_component("blog").unwrap();
    assert_eq!(
        site.attach_component(root, "blog", sub),
        Err(Error::duplicate_slug("blog", "root"))
    );
}

#[test]
fn test_at_most_one_index() {
    let mut site = Site::new("root").unwrap();
    let root = site.root_id();

    let first = site.add_file(page("first"));
    site.add_index(root, "index.html", first).unwrap();

    let second = site.add_file(page("second"));
    assert_eq!(
        site.add_index(root, "welcome.html", second),
        Err(Error::duplicate_index("root"))
    );

    assert_eq!(site.root().index().unwrap().id(), first);
    assert!(site.node(second).parent().is_none());
}

#[test]
fn test_child_views() {
    let mut site = Site::new("root").unwrap();
    let root = site.root_id();

    let index = site.add_file(page("home"));
    site.add_index(root, "index.html", index).unwrap();
    let post = site.add_file(page("post"));
    site.add(root, "post.html", post).unwrap();
    let css = site.add_file(asset("styles/site.css"));
    site.add(root, "site.css", css).unwrap();
    let sub = site.add_component("blog").unwrap();
    site.attach_component(root, "blog", sub).unwrap();

    let node = site.root();
    assert_eq!(node.children().len(), 4);
    assert_eq!(node.files().len(), 3);
    assert_eq!(node.renderable().len(), 2);
    assert_eq!(node.static_files().len(), 1);
    assert_eq!(node.subcomponents().len(), 1);
    assert_eq!(node.index().unwrap().id(), index);

    assert!(node.contains_slug("post.html"));
    assert!(node.contains(post));
    assert!(!node.contains_slug("missing.html"));

    // lookups fold case like the uniqueness rule
    assert_eq!(node.get("POST.HTML").unwrap().id(), post);
    assert_eq!(node.get("blog").unwrap().id(), sub.id());
    assert!(node.get("nope").is_none());
}

#[test]
fn test_views_on_file_nodes_are_empty() {
    let mut site = Site::new("root").unwrap();
    let root = site.root_id();
    let file = site.add_file(page(""));
    site.add(root, "page.html", file).unwrap();

    let node = site.node(file);
    assert!(node.children().is_empty());
    assert!(node.index().is_none());
    assert!(node.get("anything").is_none());
    assert!(!node.is_component());
    assert_eq!(site.root().name(), Some("root"));
    assert!(node.name().is_none());
}
