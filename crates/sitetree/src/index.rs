//! Lookup-optimised mirror of the directory shape.
//!
//! The `TreeIndex` answers path queries without touching the attach-point
//! graph: directory nodes live in their own arena, files hang off them by
//! exact name, and each directory may carry one index node. The structure
//! is a tree by construction (directories are only ever created as a
//! fresh child of an existing directory), so traversal always terminates.

use std::collections::{BTreeMap, HashSet};

use diagnostics::log_debug;

use crate::error::{Error, Result};
use crate::glob::{parse_glob, WildcardComponent};
use crate::node::NodeId;
use crate::site::Site;
use crate::uri::Uri;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct DirId(usize);

const ROOT_DIR: DirId = DirId(0);

/// One directory: named files, named subdirectories, optional index.
#[derive(Debug, Default)]
pub(crate) struct DirNode {
    pub(crate) name: String,
    pub(crate) files: BTreeMap<String, NodeId>,
    pub(crate) subdirs: BTreeMap<String, DirId>,
    pub(crate) index: Option<NodeId>,
}

/// Path-addressed view of the site's files.
///
/// Built alongside the component tree during assembly, then queried
/// through `&self` only. Matching is case-sensitive throughout, like a
/// conventional filesystem.
#[derive(Debug)]
pub struct TreeIndex {
    dirs: Vec<DirNode>,
}

impl Default for TreeIndex {
    fn default() -> Self {
        TreeIndex::new()
    }
}

impl TreeIndex {
    pub fn new() -> TreeIndex {
        TreeIndex {
            dirs: vec![DirNode::default()],
        }
    }

    /// Register an attached node under its root-relative path, creating
    /// intermediate directories as needed.
    ///
    /// Collisions are checked before any directory is created, so a
    /// failed call leaves the index exactly as it was.
    pub fn add(&mut self, site: &Site, file: NodeId, as_index: bool) -> Result<()> {
        let node = site.node(file);
        let path = node.path();
        if path.is_empty() {
            return Err(Error::invalid_uri(
                "node has no path; attach it before indexing",
            ));
        }
        let filename = path.filename().to_string();
        if as_index && !node.is_indexable() {
            return Err(Error::not_indexable(&filename));
        }

        let dir_path = path.dirname();
        let owner = |prefix: &Uri| {
            if prefix.is_empty() {
                "/".to_string()
            } else {
                prefix.to_string()
            }
        };

        // Collision scan. If the directory chain breaks early the rest of
        // the walk creates fresh directories and nothing can collide.
        let mut cur = ROOT_DIR;
        let mut chain_complete = true;
        for (depth, seg) in dir_path.iter().enumerate() {
            if self.dir(cur).files.contains_key(seg) {
                return Err(Error::duplicate_name(seg, owner(&dir_path.slice(0..depth))));
            }
            match self.dir(cur).subdirs.get(seg) {
                Some(&next) => cur = next,
                None => {
                    chain_complete = false;
                    break;
                }
            }
        }
        if chain_complete {
            let dir = self.dir(cur);
            if dir.files.contains_key(&filename) || dir.subdirs.contains_key(&filename) {
                return Err(Error::duplicate_name(&filename, owner(&dir_path)));
            }
            if as_index && dir.index.is_some() {
                return Err(Error::duplicate_index(owner(&dir_path)));
            }
        }

        let mut cur = ROOT_DIR;
        for seg in dir_path.iter() {
            let existing = self.dir(cur).subdirs.get(seg).copied();
            cur = match existing {
                Some(next) => next,
                None => {
                    let id = DirId(self.dirs.len());
                    self.dirs.push(DirNode {
                        name: seg.to_string(),
                        ..DirNode::default()
                    });
                    self.dir_mut(cur).subdirs.insert(seg.to_string(), id);
                    id
                }
            };
        }
        self.dir_mut(cur).files.insert(filename, file);
        if as_index {
            self.dir_mut(cur).index = Some(file);
        }
        Ok(())
    }

    /// Exact lookup. The final segment resolves to a file by name, or to
    /// a subdirectory's index node when the name is a directory with one.
    /// An empty or `/` path resolves to the root directory's index.
    pub fn get(&self, path: &str) -> Result<NodeId> {
        let uri = Uri::parse(path)?;

        let mut cur = ROOT_DIR;
        for depth in 0..uri.len().saturating_sub(1) {
            let seg = &uri[depth];
            match self.dir(cur).subdirs.get(seg) {
                Some(&next) => cur = next,
                None => return Err(Error::not_found(path)),
            }
        }

        if uri.is_empty() {
            return self.dir(cur).index.ok_or_else(|| Error::not_found(path));
        }

        let last = uri.filename();
        let dir = self.dir(cur);
        if let Some(&file) = dir.files.get(last) {
            return Ok(file);
        }
        if let Some(&sub) = dir.subdirs.get(last) {
            if let Some(index) = self.dir(sub).index {
                return Ok(index);
            }
        }
        Err(Error::not_found(path))
    }

    /// Shell-glob search over the whole index.
    ///
    /// Zero matches are an empty vec, never an error; the only failure
    /// mode is a malformed pattern. A trailing separator switches the
    /// final segment to matching directory names and yielding their index
    /// nodes. Results are deduplicated; order is unspecified.
    pub fn glob(&self, pattern: &str) -> Result<Vec<NodeId>> {
        let glob = parse_glob(pattern)?;
        let Some((last, inner)) = glob.components.split_last() else {
            return Ok(Vec::new());
        };

        let mut frontier: Vec<DirId> = vec![ROOT_DIR];
        for comp in inner {
            frontier = match comp {
                WildcardComponent::DoubleWildcard => self.expand(frontier),
                comp => {
                    let mut next = Vec::new();
                    for &d in &frontier {
                        for (name, &sub) in &self.dir(d).subdirs {
                            if comp.match_component(name) {
                                next.push(sub);
                            }
                        }
                    }
                    next
                }
            };
            if frontier.is_empty() {
                break;
            }
        }

        let mut seen: HashSet<NodeId> = HashSet::new();
        let mut matches: Vec<NodeId> = Vec::new();
        let mut push = |id: NodeId| {
            if seen.insert(id) {
                matches.push(id);
            }
        };

        match (last, glob.index_only) {
            // terminal ** covers every file under the expanded frontier
            (WildcardComponent::DoubleWildcard, false) => {
                for d in self.expand(frontier) {
                    for &file in self.dir(d).files.values() {
                        push(file);
                    }
                }
            }
            (WildcardComponent::DoubleWildcard, true) => {
                for d in self.expand(frontier) {
                    if let Some(index) = self.dir(d).index {
                        push(index);
                    }
                }
            }
            (comp, true) => {
                for d in frontier {
                    for (name, &sub) in &self.dir(d).subdirs {
                        if comp.match_component(name) {
                            if let Some(index) = self.dir(sub).index {
                                push(index);
                            }
                        }
                    }
                }
            }
            (comp, false) => {
                for d in frontier {
                    for (name, &file) in &self.dir(d).files {
                        if comp.match_component(name) {
                            push(file);
                        }
                    }
                }
            }
        }

        let count = matches.len();
        log_debug!(
            "glob {pattern} matched {count} nodes",
            pattern: pattern,
            count: count
        );
        Ok(matches)
    }

    /// Every directory in `frontier` plus all descendants, each once.
    fn expand(&self, frontier: Vec<DirId>) -> Vec<DirId> {
        let mut seen: HashSet<DirId> = HashSet::new();
        let mut expanded = Vec::new();
        let mut work = frontier;
        while let Some(d) = work.pop() {
            if !seen.insert(d) {
                continue;
            }
            expanded.push(d);
            work.extend(self.dir(d).subdirs.values().copied());
        }
        expanded
    }

    pub(crate) fn root_dir(&self) -> &DirNode {
        self.dir(ROOT_DIR)
    }

    pub(crate) fn dir(&self, id: DirId) -> &DirNode {
        &self.dirs[id.0]
    }

    fn dir_mut(&mut self, id: DirId) -> &mut DirNode {
        &mut self.dirs[id.0]
    }
}
