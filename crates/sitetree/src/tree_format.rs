//! Box-drawing rendering of a [`TreeIndex`], for debugging and tests.
//!
//! Directories sort before files, both in name order; index entries carry
//! a trailing `*` marker. Pure string output, no I/O.

use crate::index::{DirNode, TreeIndex};

pub fn format_tree(index: &TreeIndex) -> String {
    let mut out = String::from("/\n");
    format_dir(index, index.root_dir(), "", &mut out);
    out
}

fn format_dir(index: &TreeIndex, dir: &DirNode, prefix: &str, out: &mut String) {
    let total = dir.subdirs.len() + dir.files.len();
    let mut pos = 0;

    for (name, &sub) in &dir.subdirs {
        pos += 1;
        let last = pos == total;
        let (connector, continuation) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(name);
        out.push('\n');
        let child_prefix = format!("{prefix}{continuation}");
        format_dir(index, index.dir(sub), &child_prefix, out);
    }

    for (name, &file) in &dir.files {
        pos += 1;
        let connector = if pos == total { "└── " } else { "├── " };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(name);
        if dir.index == Some(file) {
            out.push_str(" *");
        }
        out.push('\n');
    }
}
