use super::{asset, page};
use crate::{Error, NodeId, Site, TreeIndex};

/// The layout used across the lookup tests:
///
/// ```text
/// /
/// ├── blog
/// │   ├── articles
/// │   │   └── a1.html
/// │   ├── posts
/// │   │   ├── post1.html
/// │   │   └── post2.html
/// │   └── index.html   (index of blog/)
/// └── about.html
/// ```
fn sample() -> (Site, TreeIndex, Vec<NodeId>) {
    let mut site = Site::new("root").unwrap();
    let mut tree = TreeIndex::new();
    let root = site.root_id();

    let blog = site.add_component("blog").unwrap();
    site.attach_component(root, "blog", blog).unwrap();
    let posts = site.add_component("posts").unwrap();
    site.attach_component(blog, "posts", posts).unwrap();
    let articles = site.add_component("articles").unwrap();
    site.attach_component(blog, "articles", articles).unwrap();

    let mut ids = Vec::new();
    for (component, slug, as_index) in [
        (posts, "post1.html", false),
        (posts, "post2.html", false),
        (articles, "a1.html", false),
        (blog, "index.html", true),
        (root, "about.html", false),
    ] {
        let file = site.add_file(page(slug));
        if as_index {
            site.add_index(component, slug, file).unwrap();
        } else {
            site.add(component, slug, file).unwrap();
        }
        tree.add(&site, file, as_index).unwrap();
        ids.push(file);
    }

    (site, tree, ids)
}

fn sorted(mut ids: Vec<NodeId>) -> Vec<NodeId> {
    ids.sort();
    ids
}

#[test]
fn test_get_exact() {
    let (_site, tree, ids) = sample();
    assert_eq!(tree.get("blog/posts/post1.html").unwrap(), ids[0]);
    assert_eq!(tree.get("about.html").unwrap(), ids[4]);
    // leading slash anchors at the same root
    assert_eq!(tree.get("/blog/posts/post2.html").unwrap(), ids[1]);
}

#[test]
fn test_get_falls_back_to_directory_index() {
    let (_site, tree, ids) = sample();
    assert_eq!(tree.get("blog").unwrap(), ids[3]);
    assert_eq!(tree.get("blog/").unwrap(), ids[3]);
    // a directory without an index is not addressable
    assert_eq!(
        tree.get("blog/posts"),
        Err(Error::not_found("blog/posts"))
    );
}

#[test]
fn test_get_missing_paths() {
    let (_site, tree, _ids) = sample();
    assert_eq!(tree.get("nope.html"), Err(Error::not_found("nope.html")));
    assert_eq!(
        tree.get("blog/nope/deep.html"),
        Err(Error::not_found("blog/nope/deep.html"))
    );
    // matching is case-sensitive here, unlike component slugs
    assert_eq!(
        tree.get("blog/posts/POST1.html"),
        Err(Error::not_found("blog/posts/POST1.html"))
    );
    // no root index was registered
    assert_eq!(tree.get(""), Err(Error::not_found("")));
    assert_eq!(tree.get("/"), Err(Error::not_found("/")));
}

#[test]
fn test_get_root_index() {
    let mut site = Site::new("root").unwrap();
    let mut tree = TreeIndex::new();
    let home = site.add_file(page("home"));
    site.add_index(site.root_id(), "index.html", home).unwrap();
    tree.add(&site, home, true).unwrap();

    assert_eq!(tree.get("").unwrap(), home);
    assert_eq!(tree.get("/").unwrap(), home);
    assert_eq!(tree.get("index.html").unwrap(), home);
}

#[test]
fn test_add_rejects_double_registration() {
    let (site, mut tree, ids) = sample();
    assert_eq!(
        tree.add(&site, ids[0], false),
        Err(Error::duplicate_name("post1.html", "blog/posts"))
    );
}

#[test]
fn test_add_rejects_second_index() {
    let mut site = Site::new("root").unwrap();
    let mut tree = TreeIndex::new();
    let root = site.root_id();

    let first = site.add_file(page("a"));
    site.add_index(root, "index.html", first).unwrap();
    tree.add(&site, first, true).unwrap();

    // attached as a plain child, but registered as a second index
    let second = site.add_file(page("b"));
    site.add(root, "home.html", second).unwrap();
    assert_eq!(
        tree.add(&site, second, true),
        Err(Error::duplicate_index("/"))
    );
    // the failed call left nothing behind
    assert_eq!(tree.get("home.html"), Err(Error::not_found("home.html")));
}

#[test]
fn test_add_rejects_non_indexable_and_orphans() {
    let mut site = Site::new("root").unwrap();
    let mut tree = TreeIndex::new();
    let root = site.root_id();

    let css = site.add_file(asset("site.css"));
    site.add(root, "site.css", css).unwrap();
    assert_eq!(
        tree.add(&site, css, true),
        Err(Error::not_indexable("site.css"))
    );

    let orphan = site.add_file(page(""));
    assert!(matches!(
        tree.add(&site, orphan, false),
        Err(Error::InvalidUri(_))
    ));
}

#[test]
fn test_glob_recursive_and_segment_wildcards() {
    let (_site, tree, ids) = sample();
    let all_html = sorted(vec![ids[0], ids[1], ids[2], ids[3]]);

    // ** spans any depth, including zero directories
    assert_eq!(sorted(tree.glob("**/*.html").unwrap()), sorted(ids.clone()));
    // one wildcard per level reaches exactly depth three
    assert_eq!(
        sorted(tree.glob("*/*/*.html").unwrap()),
        sorted(vec![ids[0], ids[1], ids[2]])
    );
    // blog/ has a single direct html file
    assert_eq!(tree.glob("blog/*.html").unwrap(), vec![ids[3]]);
    assert_eq!(
        sorted(tree.glob("blog/**").unwrap()),
        all_html
    );
    assert_eq!(
        sorted(tree.glob("blog/*/*.html").unwrap()),
        sorted(vec![ids[0], ids[1], ids[2]])
    );
}

#[test]
fn test_glob_character_patterns() {
    let (_site, tree, ids) = sample();
    assert_eq!(
        sorted(tree.glob("blog/posts/post?.html").unwrap()),
        sorted(vec![ids[0], ids[1]])
    );
    assert_eq!(
        tree.glob("blog/posts/post[2-9].html").unwrap(),
        vec![ids[1]]
    );
    assert_eq!(
        tree.glob("blog/[ab]*/a?.html").unwrap(),
        vec![ids[2]]
    );
}

#[test]
fn test_glob_trailing_slash_selects_indexes() {
    let (_site, tree, ids) = sample();
    // only blog/ has an index
    assert_eq!(tree.glob("*/").unwrap(), vec![ids[3]]);
    assert_eq!(tree.glob("blog/*/").unwrap(), Vec::new());
    assert_eq!(tree.glob("**/").unwrap(), vec![ids[3]]);
}

#[test]
fn test_glob_never_errors_on_zero_matches() {
    let (_site, tree, _ids) = sample();
    assert_eq!(tree.glob("nothing/*.rs").unwrap(), Vec::new());
    assert_eq!(tree.glob("blog/posts/missing.html").unwrap(), Vec::new());
    assert_eq!(tree.glob("deeper/than/the/tree/*").unwrap(), Vec::new());

    // malformed patterns are the one failure mode
    assert!(matches!(tree.glob("a/../b"), Err(Error::InvalidUri(_))));
}

#[test]
fn test_glob_results_are_deduplicated() {
    let (_site, tree, ids) = sample();
    let matches = tree.glob("**/post*.html").unwrap();
    assert_eq!(sorted(matches), sorted(vec![ids[0], ids[1]]));
}
