use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, Range};
use std::str::FromStr;

use crate::error::{Error, Result};

pub const PATH_SEP: char = '/';
pub const EXT_SEP: char = '.';

/// Canonical path value: an ordered sequence of segments plus
/// absolute/directory markers.
///
/// Accepts both forward- and back-slash separators on input and always
/// renders with forward slashes. `..` segments are rejected wholesale at
/// construction, so a `Uri` can never escape the tree it addresses.
///
/// Equality and hashing cover the segment sequence and absoluteness only;
/// directory-ness is cosmetic (`/a/b` equals `/a/b/`).
#[derive(Debug, Clone, Default)]
pub struct Uri {
    segments: Vec<String>,
    absolute: bool,
    directory: bool,
}

fn is_sep(c: char) -> bool {
    c == '/' || c == '\\'
}

fn validate_segment(seg: &str) -> Result<()> {
    if seg.contains('\0') {
        return Err(Error::invalid_uri("segment contains a NUL byte"));
    }
    Ok(())
}

impl Uri {
    /// Parse a single path-like string.
    pub fn parse<S: AsRef<str>>(s: S) -> Result<Uri> {
        Uri::from_parts([s])
    }

    /// Merge one or more path-like fragments into a single Uri.
    ///
    /// If multiple fragments are absolute, only the last absolute fragment
    /// and what follows it survive.
    pub fn from_parts<I, S>(parts: I) -> Result<Uri>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut segments: Vec<String> = Vec::new();
        let mut absolute = false;
        let mut directory = false;

        for part in parts {
            let part = part.as_ref();
            if part.is_empty() {
                continue;
            }
            if part.starts_with(is_sep) {
                // A later absolute fragment restarts the path.
                segments.clear();
                absolute = true;
            }
            directory = part.ends_with(is_sep);
            for raw in part.split(is_sep) {
                match raw {
                    "" | "." => continue,
                    ".." => {
                        return Err(Error::invalid_uri(
                            "path must not contain parent directory references",
                        ));
                    }
                    seg => {
                        validate_segment(seg)?;
                        segments.push(seg.to_string());
                    }
                }
            }
        }

        Ok(Uri {
            segments,
            absolute,
            directory,
        })
    }

    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    pub fn is_dir(&self) -> bool {
        self.directory
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    pub fn segment(&self, i: usize) -> Option<&str> {
        self.segments.get(i).map(String::as_str)
    }

    /// The final segment, or `""` when empty.
    pub fn filename(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    /// The filename stripped of extensions.
    ///
    /// A leading dot (hidden name) is never an extension boundary:
    /// `.hidden` has no extension, `.hidden.txt` has extension `.txt`.
    pub fn basename(&self) -> &str {
        let name = self.filename();
        &name[..ext_boundary(name)]
    }

    /// Everything from the first non-leading dot of the filename onward.
    ///
    /// `archive.tar.gz` yields `.tar.gz`; no extension yields `""`.
    pub fn ext(&self) -> &str {
        let name = self.filename();
        &name[ext_boundary(name)..]
    }

    /// The extensions as separate parts, excluding dots.
    ///
    /// `archive.tar.gz` yields `["tar", "gz"]`.
    pub fn exts(&self) -> Vec<&str> {
        let ext = self.ext();
        if ext.is_empty() {
            return Vec::new();
        }
        ext[1..].split(EXT_SEP).collect()
    }

    /// This Uri one level up, marked as a directory.
    pub fn dirname(&self) -> Uri {
        self.slice(0..self.segments.len().saturating_sub(1))
    }

    /// A sub-range of segments as a new Uri.
    ///
    /// The result keeps absoluteness only when the slice starts at the
    /// root; a slice that drops trailing segments is a directory.
    pub fn slice(&self, range: Range<usize>) -> Uri {
        let start = range.start.min(self.segments.len());
        let end = range.end.clamp(start, self.segments.len());
        Uri {
            segments: self.segments[start..end].to_vec(),
            absolute: self.absolute && start == 0,
            directory: if end < self.segments.len() {
                true
            } else {
                self.directory
            },
        }
    }

    /// Append a relative Uri; joining an absolute Uri replaces self.
    pub fn join(&self, other: &Uri) -> Uri {
        if other.absolute {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Uri {
            segments,
            absolute: self.absolute,
            directory: other.directory,
        }
    }

    /// The same path re-anchored at the root.
    pub fn to_absolute(&self) -> Uri {
        Uri {
            segments: self.segments.clone(),
            absolute: true,
            directory: self.directory,
        }
    }

    /// Fails when the value is absolute; slugs must be relative.
    pub fn require_relative(&self) -> Result<&Uri> {
        if self.absolute {
            return Err(Error::invalid_uri(format!(
                "'{self}' must be relative, not absolute"
            )));
        }
        Ok(self)
    }
}

/// Byte offset of the first non-leading extension separator, or the end
/// of the name when there is none.
fn ext_boundary(name: &str) -> usize {
    // skip the first character, not the first byte
    let first = match name.chars().next() {
        Some(c) => c.len_utf8(),
        None => return 0,
    };
    if first >= name.len() {
        return name.len();
    }
    match name[first..].find(EXT_SEP) {
        Some(i) => i + first,
        None => name.len(),
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.absolute {
            write!(f, "/{}", self.segments.join("/"))
        } else {
            f.write_str(&self.segments.join("/"))
        }
    }
}

impl FromStr for Uri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Uri> {
        Uri::parse(s)
    }
}

impl PartialEq for Uri {
    fn eq(&self, other: &Uri) -> bool {
        self.segments == other.segments && self.absolute == other.absolute
    }
}

impl Eq for Uri {}

impl Hash for Uri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments.hash(state);
        self.absolute.hash(state);
    }
}

impl PartialEq<&str> for Uri {
    fn eq(&self, other: &&str) -> bool {
        match Uri::parse(other) {
            Ok(uri) => *self == uri,
            Err(_) => false,
        }
    }
}

impl Index<usize> for Uri {
    type Output = str;

    fn index(&self, i: usize) -> &str {
        &self.segments[i]
    }
}
