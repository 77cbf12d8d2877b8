pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur while assembling or querying the
/// content tree.
///
/// All variants are structural: they describe bad input shape and are
/// raised synchronously with no partial state change. Surfacing them to
/// an end user is a collaborator responsibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Malformed, wrongly-absolute, or parent-reference-bearing path input
    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    /// Component name is not identifier-like
    #[error("Malformed component name: '{0}'")]
    MalformedName(String),

    /// Attempt to attach a node that already has an attach point
    #[error("Not an orphan: '{0}' is already attached")]
    NotAnOrphan(String),

    /// A node without index capability was registered as a directory index
    #[error("Not indexable: '{0}' cannot serve as a directory index")]
    NotIndexable(String),

    /// A child with the same case-folded slug already exists
    #[error("Duplicate slug: '{0}' already exists in component '{1}'")]
    DuplicateSlug(String, String),

    /// The directory already has an index entry
    #[error("Duplicate index: '{0}' already has a directory index")]
    DuplicateIndex(String),

    /// A tree-index entry collides with an existing file or directory name
    #[error("Duplicate name: '{0}' already exists under '{1}'")]
    DuplicateName(String, String),

    /// Exact lookup failed; raised by `get()` only, never by `glob()`
    #[error("File not found: {0}")]
    NotFound(String),
}

impl Error {
    pub fn invalid_uri<S: AsRef<str>>(msg: S) -> Self {
        Error::InvalidUri(msg.as_ref().to_string())
    }

    pub fn malformed_name<S: AsRef<str>>(name: S) -> Self {
        Error::MalformedName(name.as_ref().to_string())
    }

    pub fn not_an_orphan<S: AsRef<str>>(node: S) -> Self {
        Error::NotAnOrphan(node.as_ref().to_string())
    }

    pub fn not_indexable<S: AsRef<str>>(node: S) -> Self {
        Error::NotIndexable(node.as_ref().to_string())
    }

    pub fn duplicate_slug<S: AsRef<str>, T: AsRef<str>>(slug: S, component: T) -> Self {
        Error::DuplicateSlug(slug.as_ref().to_string(), component.as_ref().to_string())
    }

    pub fn duplicate_index<S: AsRef<str>>(owner: S) -> Self {
        Error::DuplicateIndex(owner.as_ref().to_string())
    }

    pub fn duplicate_name<S: AsRef<str>, T: AsRef<str>>(name: S, dir: T) -> Self {
        Error::DuplicateName(name.as_ref().to_string(), dir.as_ref().to_string())
    }

    pub fn not_found<S: AsRef<str>>(path: S) -> Self {
        Error::NotFound(path.as_ref().to_string())
    }
}
