use crate::error::{Error, Result};

/// Represents a pattern segment that may contain wildcards
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum WildcardComponent {
    /// A double wildcard ("**") that matches zero or more path segments
    DoubleWildcard,
    /// A segment containing shell-glob wildcards (`*`, `?`, `[...]`)
    Wildcard(String),
    /// A literal segment with no wildcards
    Normal(String),
}

/// A parsed glob pattern: its segments plus whether a trailing separator
/// restricted the final segment to directory-index matches.
#[derive(Debug, PartialEq)]
pub(crate) struct GlobPattern {
    pub(crate) components: Vec<WildcardComponent>,
    pub(crate) index_only: bool,
}

impl WildcardComponent {
    /// Check if this component matches the given name.
    ///
    /// Matching is case-sensitive, like common filesystem glob semantics.
    pub(crate) fn match_component(&self, name: &str) -> bool {
        match self {
            WildcardComponent::DoubleWildcard => true,
            WildcardComponent::Wildcard(pattern) => glob_match(pattern, name),
            WildcardComponent::Normal(literal) => name == literal,
        }
    }
}

/// Parse a path-shaped pattern into WildcardComponents.
///
/// `.` segments are dropped, consecutive `**` segments collapse into one,
/// and `..` segments are rejected outright.
pub(crate) fn parse_glob(pattern: &str) -> Result<GlobPattern> {
    let trimmed = pattern.trim_end_matches(['/', '\\']);
    let index_only = trimmed.len() < pattern.len() && !trimmed.is_empty();

    let mut components = Vec::new();
    for segment in trimmed.split(['/', '\\']) {
        match segment {
            "" | "." => continue,
            ".." => {
                return Err(Error::invalid_uri(
                    "glob pattern must not contain parent directory references",
                ));
            }
            "**" => {
                // A repeated ** is equivalent to a single **
                if components.last() != Some(&WildcardComponent::DoubleWildcard) {
                    components.push(WildcardComponent::DoubleWildcard);
                }
            }
            seg if seg.contains(['*', '?', '[']) => {
                components.push(WildcardComponent::Wildcard(seg.to_string()));
            }
            seg => components.push(WildcardComponent::Normal(seg.to_string())),
        }
    }

    Ok(GlobPattern {
        components,
        index_only,
    })
}

/// Match a single name against a shell-glob segment pattern.
///
/// Supports `*` (any run), `?` (any one char), and `[...]` character
/// classes with ranges and `!`/`^` negation. An unterminated class matches
/// a literal `[`. Iterative with single-star backtracking, so pathological
/// patterns cannot blow the stack.
fn glob_match(pattern: &str, name: &str) -> bool {
    let p: Vec<char> = pattern.chars().collect();
    let n: Vec<char> = name.chars().collect();
    let (mut pi, mut ni) = (0usize, 0usize);
    let mut star: Option<(usize, usize)> = None;

    while ni < n.len() {
        let stepped = if pi < p.len() {
            match p[pi] {
                '*' => {
                    star = Some((pi, ni));
                    pi += 1;
                    continue;
                }
                '?' => {
                    pi += 1;
                    ni += 1;
                    true
                }
                '[' => match match_class(&p, pi, n[ni]) {
                    Some((matched, next_pi)) => {
                        if matched {
                            pi = next_pi;
                            ni += 1;
                        }
                        matched
                    }
                    None => {
                        // unterminated class: treat '[' as a literal
                        if n[ni] == '[' {
                            pi += 1;
                            ni += 1;
                            true
                        } else {
                            false
                        }
                    }
                },
                c => {
                    if c == n[ni] {
                        pi += 1;
                        ni += 1;
                        true
                    } else {
                        false
                    }
                }
            }
        } else {
            false
        };

        if stepped {
            continue;
        }

        // Mismatch: retry from the most recent star, consuming one more char
        match star {
            Some((star_pi, star_ni)) => {
                pi = star_pi + 1;
                ni = star_ni + 1;
                star = Some((star_pi, star_ni + 1));
            }
            None => return false,
        }
    }

    while pi < p.len() && p[pi] == '*' {
        pi += 1;
    }
    pi == p.len()
}

/// Match one char against the class starting at `p[start]` (which is `[`).
///
/// Returns `(matched, index past the closing bracket)`, or None if the
/// class is unterminated.
fn match_class(p: &[char], start: usize, c: char) -> Option<(bool, usize)> {
    let mut i = start + 1;
    let negated = matches!(p.get(i), Some('!') | Some('^'));
    if negated {
        i += 1;
    }

    let mut matched = false;
    let mut first = true;
    loop {
        let cur = *p.get(i)?;
        if cur == ']' && !first {
            let result = matched != negated;
            return Some((result, i + 1));
        }
        first = false;
        // range like a-z (a trailing '-' is a literal)
        if p.get(i + 1) == Some(&'-') && p.get(i + 2).is_some_and(|&e| e != ']') {
            let end = p[i + 2];
            if cur <= c && c <= end {
                matched = true;
            }
            i += 3;
        } else {
            if cur == c {
                matched = true;
            }
            i += 1;
        }
    }
}
