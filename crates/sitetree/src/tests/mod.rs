mod component;
mod index;

use crate::{FileKind, Uri};

pub(crate) fn page(content: &str) -> FileKind {
    FileKind::Plain {
        content: content.to_string(),
    }
}

pub(crate) fn asset(source: &str) -> FileKind {
    FileKind::Static {
        source: Uri::parse(source).unwrap(),
    }
}

// The read phase fans out across threads; both structures must stay
// plain owned data.
#[test]
fn test_read_phase_types_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<crate::Site>();
    assert_send_sync::<crate::TreeIndex>();
}
